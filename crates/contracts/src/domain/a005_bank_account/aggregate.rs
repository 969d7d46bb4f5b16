use crate::domain::common::{BaseAggregate, FormRecord};
use crate::shared::form_input::require;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

crate::aggregate_id!(
    /// Уникальный идентификатор банковского счёта
    BankAccountId
);

/// Банковский счёт организации
///
/// `base.code` — номер счёта, `base.description` — название счёта.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    #[serde(flatten)]
    pub base: BaseAggregate<BankAccountId>,

    pub bank_name: String,
    /// Код валюты ISO 4217
    pub currency: String,
    pub balance: Decimal,
    pub is_active: bool,
    /// Время последней успешной синхронизации с банком
    pub last_synced_at: Option<DateTime<Utc>>,
    /// `external_ref` всех операций, когда-либо загруженных из банка.
    /// Удаление операции из списка отсюда ничего не убирает.
    #[serde(default)]
    pub imported_refs: BTreeSet<String>,
}

impl BankAccount {
    pub fn account_number(&self) -> &str {
        &self.base.code
    }
}

/// Остаток по активным счетам в валюте
pub fn total_balance<'a, I>(accounts: I, currency: &str) -> Decimal
where
    I: IntoIterator<Item = &'a BankAccount>,
{
    accounts
        .into_iter()
        .filter(|a| a.is_active && a.currency.eq_ignore_ascii_case(currency))
        .map(|a| a.balance)
        .sum()
}

crate::impl_aggregate_root!(
    BankAccount,
    BankAccountId,
    "a005",
    "bank_account",
    "Банковский счёт",
    "Банковские счета"
);

impl FormRecord for BankAccount {
    type Dto = BankAccountDto;

    fn from_dto(id: BankAccountId, dto: &BankAccountDto) -> Result<Self, String> {
        let mut account = Self {
            base: BaseAggregate::new(id, String::new(), String::new()),
            bank_name: String::new(),
            currency: String::new(),
            balance: Decimal::ZERO,
            is_active: dto.is_active,
            last_synced_at: None,
            imported_refs: BTreeSet::new(),
        };
        account.apply_dto(dto)?;
        Ok(account)
    }

    fn apply_dto(&mut self, dto: &BankAccountDto) -> Result<(), String> {
        self.base.apply(&dto.code, &dto.description, &dto.comment);
        self.bank_name = dto.bank_name.trim().to_string();
        self.currency = dto.currency.trim().to_ascii_uppercase();
        self.balance = dto.balance;
        self.is_active = dto.is_active;
        self.base.before_write();
        Ok(())
    }

    fn to_dto(&self) -> BankAccountDto {
        BankAccountDto {
            code: self.base.code.clone(),
            description: self.base.description.clone(),
            bank_name: self.bank_name.clone(),
            currency: self.currency.clone(),
            balance: self.balance,
            is_active: self.is_active,
            comment: self.base.comment.clone(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        self.base.validate("Номер счёта", "Название")?;
        require("Банк", &self.bank_name)?;
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err("Валюта: укажите трёхбуквенный код (например, USD)".into());
        }
        Ok(())
    }
}

/// Форма банковского счёта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccountDto {
    pub code: String,
    pub description: String,
    pub bank_name: String,
    pub currency: String,
    pub balance: Decimal,
    pub is_active: bool,
    pub comment: Option<String>,
}

impl Default for BankAccountDto {
    fn default() -> Self {
        Self {
            code: String::new(),
            description: String::new(),
            bank_name: String::new(),
            currency: "USD".to_string(),
            balance: Decimal::ZERO,
            is_active: true,
            comment: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn account(id: i64, currency: &str, balance: Decimal, active: bool) -> BankAccount {
        let dto = BankAccountDto {
            code: format!("0012-{}", id),
            description: "Расчётный".into(),
            bank_name: "First Bank".into(),
            currency: currency.into(),
            balance,
            is_active: active,
            comment: None,
        };
        BankAccount::from_dto(BankAccountId(id), &dto).unwrap()
    }

    #[test]
    fn test_currency_normalized() {
        let a = account(1, " usd ", dec!(10), true);
        assert_eq!(a.currency, "USD");
        assert!(a.validate().is_ok());
        assert_eq!(a.account_number(), "0012-1");
    }

    #[test]
    fn test_invalid_currency() {
        assert!(account(1, "US", dec!(0), true).validate().is_err());
        assert!(account(1, "U5D", dec!(0), true).validate().is_err());
    }

    #[test]
    fn test_total_balance_skips_inactive_and_other_currency() {
        let accounts = vec![
            account(1, "USD", dec!(100.50), true),
            account(2, "USD", dec!(900), false),
            account(3, "EUR", dec!(40), true),
            account(4, "usd", dec!(-0.50), true),
        ];
        assert_eq!(total_balance(&accounts, "USD"), dec!(100));
        assert_eq!(total_balance(&accounts, "EUR"), dec!(40));
    }
}
