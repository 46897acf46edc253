use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use advisory_core::financials::{FinancialRecord, FinancialReport, MetricsAnalysis};
use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Recomputes metrics and advisories from the client's stored record.
async fn compute_client_metrics(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MetricsAnalysis>> {
    let analysis = state.report_service.get_client_metrics(&id)?;
    tracing::debug!(
        "Computed metrics for client {} with {} advisories",
        id,
        analysis.advisories.len()
    );
    Ok(Json(analysis))
}

async fn get_client_report(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<FinancialReport>> {
    let report = state.report_service.get_client_report(&id)?;
    Ok(Json(report))
}

async fn export_client_report_csv(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Response> {
    let csv = state.report_service.export_client_report_csv(&id)?;
    let disposition = format!("attachment; filename=\"{}\"", report_file_name(&id));
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response())
}

/// Download name for a client report; anything outside `[A-Za-z0-9_-]` becomes `_`.
fn report_file_name(client_id: &str) -> String {
    let safe: String = client_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("report-{}.csv", safe)
}

/// Metrics for an unsaved record.
async fn preview_metrics(
    State(state): State<Arc<AppState>>,
    Json(record): Json<FinancialRecord>,
) -> Json<MetricsAnalysis> {
    Json(state.report_service.preview_metrics(&record))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/clients/{id}/metrics", post(compute_client_metrics))
        .route("/clients/{id}/report", get(get_client_report))
        .route("/clients/{id}/report.csv", get(export_client_report_csv))
        .route("/metrics/preview", post(preview_metrics))
}
