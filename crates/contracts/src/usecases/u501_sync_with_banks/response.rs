use crate::domain::a005_bank_account::aggregate::BankAccountId;
use crate::domain::a006_bank_transaction::aggregate::Direction;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Операция из банковской выписки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncedTransaction {
    /// Стабильный идентификатор операции в банке
    pub external_ref: String,
    pub date: NaiveDate,
    pub description: String,
    /// Сумма, всегда положительная
    pub amount: Decimal,
    pub direction: Direction,
}

/// Результат по одному счёту
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSyncResult {
    pub bank_account_id: BankAccountId,
    pub transactions: Vec<SyncedTransaction>,
}

/// Ошибка синхронизации одного счёта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncFailure {
    pub bank_account_id: BankAccountId,
    pub message: String,
}

/// Ответ на запрос синхронизации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncResponse {
    pub synced_at: DateTime<Utc>,
    pub results: Vec<AccountSyncResult>,
    pub failures: Vec<SyncFailure>,
}

impl SyncResponse {
    pub fn transaction_count(&self) -> usize {
        self.results.iter().map(|r| r.transactions.len()).sum()
    }
}
