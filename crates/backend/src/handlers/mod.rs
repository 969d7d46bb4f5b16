pub mod logs;
pub mod u501_sync_with_banks;
