pub mod u501_sync_with_banks;
