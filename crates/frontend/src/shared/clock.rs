use chrono::{NaiveDate, Utc};

/// Текущее время, мс: основа клиентских ID
pub fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
