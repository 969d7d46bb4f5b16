//! Вкладки разделов
//!
//! - `tab_bar` — заголовки открытых вкладок
//! - `page` — обёртка содержимого вкладки
//! - `registry` — маппинг tab.key → View

pub mod page;
pub mod registry;
pub mod tab_bar;

pub use page::TabPage;
pub use tab_bar::TabBar;
