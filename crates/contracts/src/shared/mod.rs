pub mod form_input;
pub mod i18n;
pub mod line_totals;
pub mod logger;
pub mod money;
pub mod notification;
pub mod record_list;
