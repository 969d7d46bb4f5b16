use crate::shared::api_utils::post_json;
use contracts::usecases::u501_sync_with_banks::request::SyncRequest;
use contracts::usecases::u501_sync_with_banks::response::SyncResponse;

/// Запросить выписки по счетам (`POST /api/banking/sync`)
pub async fn sync_with_banks(request: &SyncRequest) -> Result<SyncResponse, String> {
    post_json("/api/banking/sync", request).await
}
