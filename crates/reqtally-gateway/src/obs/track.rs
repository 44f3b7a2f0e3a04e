//! Recording middleware (runs around every routed request).

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

/// Count the request once its response is known.
///
/// The endpoint key is the raw URI path without the query string; path
/// parameters are not templated out. Outcome comes from the configured
/// success status range, so handler errors and unmatched routes count as
/// errors by default.
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let endpoint = req.uri().path().to_owned();

    let res = next.run(req).await;

    let status = res.status().as_u16();
    let outcome = state.classifier().classify(status);
    state.metrics().record_outcome(&endpoint, outcome);
    tracing::debug!(%endpoint, status, outcome = outcome.as_str(), "request recorded");

    res
}
