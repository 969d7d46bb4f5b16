//! Журнал событий в памяти (клиентские и серверные записи)

use chrono::Utc;
use contracts::shared::logger::{LogEntry, LogSource};
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

/// Сколько последних записей хранить
const MAX_ENTRIES: usize = 1_000;

static LOG: Lazy<RwLock<VecDeque<LogEntry>>> = Lazy::new(|| RwLock::new(VecDeque::new()));
static NEXT_ID: AtomicI64 = AtomicI64::new(1);

/// Добавить запись в журнал
pub fn log_event(source: LogSource, category: &str, message: &str) -> LogEntry {
    let entry = LogEntry {
        id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
        timestamp: Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
        source,
        category: category.to_string(),
        message: message.to_string(),
    };

    // отравленный лок не должен ронять запрос: журнал не критичен
    let mut log = LOG.write().unwrap_or_else(|e| e.into_inner());
    if log.len() >= MAX_ENTRIES {
        log.pop_front();
    }
    log.push_back(entry.clone());
    entry
}

/// Все записи, новые первыми
pub fn get_all_logs() -> Vec<LogEntry> {
    let log = LOG.read().unwrap_or_else(|e| e.into_inner());
    log.iter().rev().cloned().collect()
}

/// Очистить журнал; возвращает количество удалённых записей
pub fn clear_all_logs() -> usize {
    let mut log = LOG.write().unwrap_or_else(|e| e.into_inner());
    let count = log.len();
    log.clear();
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_newest_first_and_capped() {
        let marker = format!("cap-test-{}", NEXT_ID.load(Ordering::Relaxed));
        for i in 0..(MAX_ENTRIES + 5) {
            log_event(LogSource::Client, &marker, &i.to_string());
        }
        let logs = get_all_logs();
        assert!(logs.len() <= MAX_ENTRIES);
        let first = logs.iter().find(|e| e.category == marker).unwrap();
        assert_eq!(first.message, (MAX_ENTRIES + 4).to_string());
    }
}
