pub mod repository;

use contracts::shared::logger::LogSource;
use repository::log_event;

/// Логирование события на сервере
///
/// Пишет и в tracing, и в журнал, доступный через `/api/logs`.
///
/// # Примеры
/// ```ignore
/// logger::log("startup", "Сервер запущен");
/// ```
pub fn log(category: &str, message: &str) {
    tracing::info!(category, "{}", message);
    log_event(LogSource::Server, category, message);
}
