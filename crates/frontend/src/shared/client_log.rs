use super::api_utils::post_json;
use contracts::shared::logger::{CreateLogRequest, LogEntry, LogSource};

/// Отправить событие в серверный журнал (`POST /api/logs`)
///
/// Не блокирует UI; если сервер недоступен, пишем только в консоль.
pub fn log_to_server(category: &str, message: &str) {
    log::info!("[{}] {}", category, message);

    let request = CreateLogRequest {
        source: LogSource::Client,
        category: category.to_string(),
        message: message.to_string(),
    };
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = post_json::<_, LogEntry>("/api/logs", &request).await {
            log::warn!("client log not delivered: {}", e);
        }
    });
}
