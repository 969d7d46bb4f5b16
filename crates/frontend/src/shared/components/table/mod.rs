pub mod table_cell_money;

pub use table_cell_money::TableCellMoney;
