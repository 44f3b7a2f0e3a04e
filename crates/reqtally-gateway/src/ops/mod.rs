//! Operational HTTP endpoints.
//!
//! - `<metrics.path>`                   : JSON snapshot (default)
//! - `<metrics.path>?format=prometheus` : same snapshot, Prometheus text format

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::app_state::AppState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Prometheus,
}

#[derive(Debug, Deserialize)]
pub struct MetricsQuery {
    #[serde(default)]
    pub format: ReportFormat,
}

pub async fn metrics(State(state): State<AppState>, Query(q): Query<MetricsQuery>) -> Response {
    let snapshot = state.metrics().snapshot();

    match q.format {
        ReportFormat::Json => Json(snapshot).into_response(),
        ReportFormat::Prometheus => {
            let body = snapshot.render_prometheus(&state.cfg().metrics.prometheus_prefix);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
                body,
            )
                .into_response()
        }
    }
}
