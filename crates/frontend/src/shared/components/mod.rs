pub mod page_header;
pub mod stat_card;
pub mod table;
pub mod table_totals_row;
pub mod totals_panel;
pub mod ui;
