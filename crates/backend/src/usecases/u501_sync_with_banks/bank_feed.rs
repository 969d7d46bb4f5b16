//! Источник банковских выписок

use crate::shared::config::BankFeedConfig;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use contracts::domain::a006_bank_transaction::aggregate::Direction;
use contracts::usecases::u501_sync_with_banks::request::SyncAccount;
use contracts::usecases::u501_sync_with_banks::response::SyncedTransaction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Выписка не может быть длиннее (дней)
const MAX_PERIOD_DAYS: i64 = 92;

const CREDIT_DESCRIPTIONS: &[&str] = &[
    "Оплата от покупателя",
    "Возврат аванса",
    "Проценты на остаток",
];

const DEBIT_DESCRIPTIONS: &[&str] = &[
    "Оплата поставщику",
    "Комиссия банка",
    "Заработная плата",
    "Аренда офиса",
];

#[derive(Debug, Error)]
pub enum BankFeedError {
    #[error("Банк «{0}» недоступен")]
    Unavailable(String),
    #[error("Неверный период выписки: {from} > {until}")]
    InvalidPeriod { from: NaiveDate, until: NaiveDate },
}

/// Источник выписок по счетам
#[async_trait]
pub trait BankFeed: Send + Sync {
    /// Операции по счёту за период `[since, until]`
    async fn fetch_statement(
        &self,
        account: &SyncAccount,
        until: NaiveDate,
    ) -> Result<Vec<SyncedTransaction>, BankFeedError>;
}

/// Имитация банка: детерминированная выписка по зерну из конфигурации
///
/// Для одного и того же счёта и дня всегда выдаются одни и те же операции
/// с одинаковыми `external_ref`.
pub struct SimulatedBankFeed {
    config: BankFeedConfig,
}

impl SimulatedBankFeed {
    pub fn new(config: BankFeedConfig) -> Self {
        Self { config }
    }

    fn is_unavailable(&self, bank_name: &str) -> bool {
        self.config
            .unavailable_banks
            .iter()
            .any(|b| b.trim().eq_ignore_ascii_case(bank_name.trim()))
    }

    fn period(
        &self,
        account: &SyncAccount,
        until: NaiveDate,
    ) -> Result<(NaiveDate, NaiveDate), BankFeedError> {
        let lookback = i64::from(self.config.lookback_days.max(1));
        let from = account
            .since
            .unwrap_or(until - Duration::days(lookback - 1));
        if from > until {
            return Err(BankFeedError::InvalidPeriod { from, until });
        }
        let earliest = until - Duration::days(MAX_PERIOD_DAYS - 1);
        Ok((from.max(earliest), until))
    }

    fn day_rng(&self, account_number: &str, day: NaiveDate) -> StdRng {
        StdRng::seed_from_u64(day_seed(self.config.seed, account_number, day))
    }

    /// Сформировать выписку
    pub fn statement(
        &self,
        account: &SyncAccount,
        until: NaiveDate,
    ) -> Result<Vec<SyncedTransaction>, BankFeedError> {
        if self.is_unavailable(&account.bank_name) {
            return Err(BankFeedError::Unavailable(account.bank_name.clone()));
        }
        let (from, until) = self.period(account, until)?;
        let prefix = bank_prefix(&account.bank_name);

        let mut transactions = Vec::new();
        for day in from.iter_days().take_while(|d| *d <= until) {
            let mut rng = self.day_rng(&account.account_number, day);
            let count = rng.gen_range(0..=self.config.max_transactions_per_day);
            for n in 1..=count {
                let direction = if rng.gen_bool(0.45) {
                    Direction::Credit
                } else {
                    Direction::Debit
                };
                let descriptions = match direction {
                    Direction::Credit => CREDIT_DESCRIPTIONS,
                    Direction::Debit => DEBIT_DESCRIPTIONS,
                };
                let description = descriptions[rng.gen_range(0..descriptions.len())];
                let cents: i64 = rng.gen_range(500..=250_000);
                transactions.push(SyncedTransaction {
                    external_ref: format!(
                        "{}-{}-{}-{}",
                        prefix,
                        account.account_number,
                        day.format("%Y%m%d"),
                        n
                    ),
                    date: day,
                    description: description.to_string(),
                    amount: Decimal::new(cents, 2),
                    direction,
                });
            }
        }
        Ok(transactions)
    }
}

#[async_trait]
impl BankFeed for SimulatedBankFeed {
    async fn fetch_statement(
        &self,
        account: &SyncAccount,
        until: NaiveDate,
    ) -> Result<Vec<SyncedTransaction>, BankFeedError> {
        self.statement(account, until)
    }
}

/// Зерно дня по счёту: первые 8 байт SHA-256 от (seed, номер счёта, дата)
///
/// Не зависит от версии компилятора и платформы.
fn day_seed(seed: u64, account_number: &str, day: NaiveDate) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.update(account_number.as_bytes());
    hasher.update([0u8]);
    hasher.update(day.format("%Y-%m-%d").to_string().as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

/// Короткий код банка для ссылок: первые буквы слов названия
fn bank_prefix(bank_name: &str) -> String {
    let prefix: String = bank_name
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .flat_map(char::to_uppercase)
        .take(4)
        .collect();
    if prefix.is_empty() {
        "BANK".to_string()
    } else {
        prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_bank_account::aggregate::BankAccountId;
    use std::collections::HashSet;

    fn config() -> BankFeedConfig {
        BankFeedConfig {
            seed: 7,
            max_transactions_per_day: 3,
            lookback_days: 10,
            unavailable_banks: vec!["Closed Bank".to_string()],
        }
    }

    fn account(bank: &str, since: Option<NaiveDate>) -> SyncAccount {
        SyncAccount {
            bank_account_id: BankAccountId(1),
            bank_name: bank.to_string(),
            account_number: "40702-001".to_string(),
            currency: "USD".to_string(),
            since,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_statement_is_deterministic() {
        let feed = SimulatedBankFeed::new(config());
        let a = feed.statement(&account("First Bank", None), date(2024, 3, 10)).unwrap();
        let b = feed.statement(&account("First Bank", None), date(2024, 3, 10)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_day_seed_is_pinned() {
        assert_eq!(day_seed(7, "40702-001", date(2024, 3, 10)), 10451009218292694007);
        assert_eq!(day_seed(7, "40702-001", date(2024, 3, 11)), 5691069458188610734);
        assert_ne!(
            day_seed(8, "40702-001", date(2024, 3, 10)),
            day_seed(7, "40702-001", date(2024, 3, 10))
        );
    }

    #[test]
    fn test_statement_respects_period_and_refs_unique() {
        let feed = SimulatedBankFeed::new(config());
        let until = date(2024, 3, 10);
        let txs = feed.statement(&account("First Bank", None), until).unwrap();

        let from = date(2024, 3, 1);
        assert!(txs.iter().all(|t| t.date >= from && t.date <= until));
        assert!(txs.len() <= 10 * 3);
        assert!(txs.iter().all(|t| t.amount > Decimal::ZERO));
        assert!(txs.iter().all(|t| t.external_ref.starts_with("FB-40702-001-")));

        let refs: HashSet<&str> = txs.iter().map(|t| t.external_ref.as_str()).collect();
        assert_eq!(refs.len(), txs.len());
    }

    #[test]
    fn test_since_narrows_overlapping_statement() {
        let feed = SimulatedBankFeed::new(config());
        let until = date(2024, 3, 10);
        let full = feed.statement(&account("First Bank", None), until).unwrap();
        let tail = feed
            .statement(&account("First Bank", Some(date(2024, 3, 8))), until)
            .unwrap();
        let expected: Vec<_> = full
            .into_iter()
            .filter(|t| t.date >= date(2024, 3, 8))
            .collect();
        assert_eq!(tail, expected);
    }

    #[test]
    fn test_unavailable_bank() {
        let feed = SimulatedBankFeed::new(config());
        let err = feed
            .statement(&account("closed bank", None), date(2024, 3, 10))
            .unwrap_err();
        assert!(matches!(err, BankFeedError::Unavailable(_)));
    }

    #[test]
    fn test_since_in_future() {
        let feed = SimulatedBankFeed::new(config());
        let err = feed
            .statement(&account("First Bank", Some(date(2024, 4, 1))), date(2024, 3, 10))
            .unwrap_err();
        assert!(matches!(err, BankFeedError::InvalidPeriod { .. }));
    }

    #[test]
    fn test_bank_prefix() {
        assert_eq!(bank_prefix("First Bank"), "FB");
        assert_eq!(bank_prefix("banco nacional de méxico"), "BNDM");
        assert_eq!(bank_prefix("  "), "BANK");
    }
}
