use axum::http::StatusCode;
use axum::Json;
use contracts::shared::logger::{CreateLogRequest, LogEntry};

use crate::shared::logger;

/// GET /api/logs
pub async fn list_all() -> Json<Vec<LogEntry>> {
    Json(logger::repository::get_all_logs())
}

/// POST /api/logs
pub async fn create(Json(req): Json<CreateLogRequest>) -> Result<Json<LogEntry>, StatusCode> {
    if req.category.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let entry = logger::repository::log_event(req.source, &req.category, &req.message);
    Ok(Json(entry))
}

/// DELETE /api/logs
pub async fn clear_all() -> StatusCode {
    let removed = logger::repository::clear_all_logs();
    tracing::info!(removed, "Log cleared");
    StatusCode::OK
}
