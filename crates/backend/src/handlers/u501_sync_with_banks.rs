use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use contracts::usecases::u501_sync_with_banks::request::SyncRequest;
use contracts::usecases::u501_sync_with_banks::response::SyncResponse;

use crate::routes::AppState;
use crate::shared::logger;

/// POST /api/banking/sync
pub async fn sync(
    State(state): State<AppState>,
    Json(request): Json<SyncRequest>,
) -> Result<Json<SyncResponse>, StatusCode> {
    if request.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let today = Utc::now().date_naive();
    let response = state.sync_executor.execute(&request, today).await;

    logger::log(
        "banking",
        &format!(
            "Синхронизация: счетов {}, операций {}, ошибок {}",
            request.accounts.len(),
            response.transaction_count(),
            response.failures.len()
        ),
    );

    Ok(Json(response))
}
