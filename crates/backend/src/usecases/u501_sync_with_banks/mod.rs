pub mod bank_feed;
pub mod executor;

pub use bank_feed::{BankFeed, BankFeedError, SimulatedBankFeed};
pub use executor::SyncExecutor;
