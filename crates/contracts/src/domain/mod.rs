pub mod common;

pub mod a001_account;
pub mod a002_invoice;
pub mod a003_project;
pub mod a004_time_entry;
pub mod a005_bank_account;
pub mod a006_bank_transaction;
pub mod a007_purchase_order;
pub mod a008_sales_order;
