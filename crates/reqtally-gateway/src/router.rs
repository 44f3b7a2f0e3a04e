//! Axum router wiring.
//!
//! The gateway itself serves only the metrics read endpoint. Applications
//! mount their own routes through [`with_metrics`] so those requests are
//! recorded as well.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    with_metrics(Router::new(), state)
}

/// Add the metrics endpoint to `routes` and wrap everything (the endpoint
/// itself and unmatched requests included) with the recording middleware.
pub fn with_metrics(routes: Router<AppState>, state: AppState) -> Router {
    let path = state.cfg().metrics.path.clone();

    routes
        .route(&path, get(ops::metrics))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::track::track_requests,
        ))
        .with_state(state)
}
