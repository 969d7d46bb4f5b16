use crate::domain::a005_bank_account::aggregate::BankAccountId;
use crate::domain::common::{BaseAggregate, FormRecord};
use crate::shared::form_input::{format_date, parse_date};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Уникальный идентификатор банковской операции
    BankTransactionId
);

/// Направление операции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Поступление
    #[default]
    Credit,
    /// Списание
    Debit,
}

impl Direction {
    pub fn all() -> &'static [Direction] {
        &[Direction::Credit, Direction::Debit]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Credit => "credit",
            Direction::Debit => "debit",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Credit => "Поступление",
            Direction::Debit => "Списание",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == s)
    }
}

/// Банковская операция
///
/// `base.code` — номер документа, `base.description` — назначение платежа.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankTransaction {
    #[serde(flatten)]
    pub base: BaseAggregate<BankTransactionId>,

    pub bank_account_id: BankAccountId,
    pub date: NaiveDate,
    /// Сумма, всегда положительная; знак задаёт `direction`
    pub amount: Decimal,
    pub direction: Direction,
    pub reconciled: bool,
    /// Идентификатор операции в банке (для загруженных при синхронизации)
    pub external_ref: Option<String>,
}

impl BankTransaction {
    /// Сумма со знаком: поступление +, списание −
    pub fn signed_amount(&self) -> Decimal {
        match self.direction {
            Direction::Credit => self.amount,
            Direction::Debit => -self.amount,
        }
    }
}

/// Оборот по счёту (сумма со знаком)
pub fn net_flow<'a, I>(transactions: I, bank_account_id: BankAccountId) -> Decimal
where
    I: IntoIterator<Item = &'a BankTransaction>,
{
    transactions
        .into_iter()
        .filter(|t| t.bank_account_id == bank_account_id)
        .map(BankTransaction::signed_amount)
        .sum()
}

crate::impl_aggregate_root!(
    BankTransaction,
    BankTransactionId,
    "a006",
    "bank_transaction",
    "Банковская операция",
    "Банковские операции"
);

impl FormRecord for BankTransaction {
    type Dto = BankTransactionDto;

    fn from_dto(id: BankTransactionId, dto: &BankTransactionDto) -> Result<Self, String> {
        let bank_account_id = dto
            .bank_account_id
            .ok_or_else(|| "Счёт: поле обязательно для заполнения".to_string())?;
        let mut tx = Self {
            base: BaseAggregate::new(id, format!("TX-{}", id.0), String::new()),
            bank_account_id,
            date: parse_date("Дата", &dto.date)?,
            amount: dto.amount,
            direction: dto.direction,
            reconciled: dto.reconciled,
            external_ref: None,
        };
        tx.apply_dto(dto)?;
        Ok(tx)
    }

    fn apply_dto(&mut self, dto: &BankTransactionDto) -> Result<(), String> {
        self.bank_account_id = dto
            .bank_account_id
            .ok_or_else(|| "Счёт: поле обязательно для заполнения".to_string())?;
        self.date = parse_date("Дата", &dto.date)?;
        // пустой номер документа — оставляем сгенерированный
        let code = if dto.code.trim().is_empty() {
            self.base.code.clone()
        } else {
            dto.code.clone()
        };
        self.base.apply(&code, &dto.description, &dto.comment);
        self.amount = dto.amount;
        self.direction = dto.direction;
        self.reconciled = dto.reconciled;
        self.base.before_write();
        Ok(())
    }

    fn to_dto(&self) -> BankTransactionDto {
        BankTransactionDto {
            code: self.base.code.clone(),
            description: self.base.description.clone(),
            bank_account_id: Some(self.bank_account_id),
            date: format_date(self.date),
            amount: self.amount,
            direction: self.direction,
            reconciled: self.reconciled,
            comment: self.base.comment.clone(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        self.base.validate("Номер документа", "Назначение платежа")?;
        if self.amount <= Decimal::ZERO {
            return Err("Сумма должна быть больше 0".into());
        }
        Ok(())
    }
}

/// Форма банковской операции
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankTransactionDto {
    pub code: String,
    pub description: String,
    pub bank_account_id: Option<BankAccountId>,
    pub date: String,
    pub amount: Decimal,
    pub direction: Direction,
    pub reconciled: bool,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tx(id: i64, account: i64, amount: Decimal, direction: Direction) -> BankTransaction {
        let dto = BankTransactionDto {
            description: "Оплата".into(),
            bank_account_id: Some(BankAccountId(account)),
            date: "2024-03-01".into(),
            amount,
            direction,
            ..Default::default()
        };
        BankTransaction::from_dto(BankTransactionId(id), &dto).unwrap()
    }

    #[test]
    fn test_generated_code_kept_when_blank() {
        let t = tx(42, 1, dec!(10), Direction::Credit);
        assert_eq!(t.base.code, "TX-42");
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_signed_amount_and_net_flow() {
        let list = vec![
            tx(1, 1, dec!(100), Direction::Credit),
            tx(2, 1, dec!(30.25), Direction::Debit),
            tx(3, 2, dec!(5), Direction::Debit),
        ];
        assert_eq!(list[1].signed_amount(), dec!(-30.25));
        assert_eq!(net_flow(&list, BankAccountId(1)), dec!(69.75));
        assert_eq!(net_flow(&list, BankAccountId(2)), dec!(-5));
    }

    #[test]
    fn test_amount_must_be_positive() {
        assert!(tx(1, 1, dec!(0), Direction::Debit).validate().is_err());
    }
}
