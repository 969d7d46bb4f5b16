use crate::domain::a005_bank_account::aggregate::{BankAccount, BankAccountId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Счёт для синхронизации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncAccount {
    pub bank_account_id: BankAccountId,
    pub bank_name: String,
    pub account_number: String,
    pub currency: String,
    /// Загружать операции начиная с даты (включительно); `None` — вся доступная выписка
    pub since: Option<NaiveDate>,
}

impl From<&BankAccount> for SyncAccount {
    fn from(account: &BankAccount) -> Self {
        Self {
            bank_account_id: account.base.id,
            bank_name: account.bank_name.clone(),
            account_number: account.base.code.clone(),
            currency: account.currency.clone(),
            since: account.last_synced_at.map(|at| at.date_naive()),
        }
    }
}

/// Запрос на синхронизацию
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncRequest {
    pub accounts: Vec<SyncAccount>,
}

impl SyncRequest {
    /// Запрос по активным счетам
    pub fn for_active<'a, I>(accounts: I) -> Self
    where
        I: IntoIterator<Item = &'a BankAccount>,
    {
        Self {
            accounts: accounts
                .into_iter()
                .filter(|a| a.is_active)
                .map(SyncAccount::from)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
