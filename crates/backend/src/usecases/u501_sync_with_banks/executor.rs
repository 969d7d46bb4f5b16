use super::bank_feed::BankFeed;
use crate::shared::logger;
use chrono::{NaiveDate, Utc};
use contracts::usecases::u501_sync_with_banks::request::SyncRequest;
use contracts::usecases::u501_sync_with_banks::response::{
    AccountSyncResult, SyncFailure, SyncResponse,
};
use std::sync::Arc;

/// Executor для UseCase синхронизации с банками
///
/// Счета обрабатываются по очереди; ошибка по одному счёту не прерывает
/// остальные и попадает в `failures`. Повторов нет.
#[derive(Clone)]
pub struct SyncExecutor {
    feed: Arc<dyn BankFeed>,
}

impl SyncExecutor {
    pub fn new(feed: Arc<dyn BankFeed>) -> Self {
        Self { feed }
    }

    pub async fn execute(&self, request: &SyncRequest, today: NaiveDate) -> SyncResponse {
        let mut results = Vec::with_capacity(request.accounts.len());
        let mut failures = Vec::new();

        for account in &request.accounts {
            match self.feed.fetch_statement(account, today).await {
                Ok(transactions) => {
                    tracing::info!(
                        account = %account.bank_account_id,
                        bank = %account.bank_name,
                        count = transactions.len(),
                        "Statement fetched"
                    );
                    results.push(AccountSyncResult {
                        bank_account_id: account.bank_account_id,
                        transactions,
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        account = %account.bank_account_id,
                        bank = %account.bank_name,
                        "Statement failed: {}",
                        e
                    );
                    logger::log(
                        "banking",
                        &format!("Счёт {}: {}", account.account_number, e),
                    );
                    failures.push(SyncFailure {
                        bank_account_id: account.bank_account_id,
                        message: e.to_string(),
                    });
                }
            }
        }

        SyncResponse {
            synced_at: Utc::now(),
            results,
            failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::BankFeedConfig;
    use crate::usecases::u501_sync_with_banks::SimulatedBankFeed;
    use contracts::domain::a005_bank_account::aggregate::BankAccountId;
    use contracts::usecases::u501_sync_with_banks::request::SyncAccount;

    fn account(id: i64, bank: &str) -> SyncAccount {
        SyncAccount {
            bank_account_id: BankAccountId(id),
            bank_name: bank.to_string(),
            account_number: format!("ACC-{}", id),
            currency: "USD".to_string(),
            since: None,
        }
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_other_accounts() {
        let feed = SimulatedBankFeed::new(BankFeedConfig {
            seed: 1,
            max_transactions_per_day: 2,
            lookback_days: 5,
            unavailable_banks: vec!["Down Bank".to_string()],
        });
        let executor = SyncExecutor::new(Arc::new(feed));
        let request = SyncRequest {
            accounts: vec![account(1, "Up Bank"), account(2, "Down Bank"), account(3, "Up Bank")],
        };

        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let response = executor.execute(&request, today).await;

        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].bank_account_id, BankAccountId(1));
        assert_eq!(response.results[1].bank_account_id, BankAccountId(3));
        assert_eq!(response.failures.len(), 1);
        assert_eq!(response.failures[0].bank_account_id, BankAccountId(2));
        assert!(response.failures[0].message.contains("Down Bank"));
    }
}
