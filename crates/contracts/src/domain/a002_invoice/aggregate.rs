use crate::domain::a001_account::aggregate::AccountId;
use crate::domain::common::{BaseAggregate, FormRecord};
use crate::shared::form_input::{format_date, parse_date};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Уникальный идентификатор счёта
    InvoiceId
);

/// Статус счёта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub fn all() -> &'static [InvoiceStatus] {
        &[
            InvoiceStatus::Draft,
            InvoiceStatus::Sent,
            InvoiceStatus::Paid,
            InvoiceStatus::Overdue,
            InvoiceStatus::Cancelled,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "Черновик",
            InvoiceStatus::Sent => "Выставлен",
            InvoiceStatus::Paid => "Оплачен",
            InvoiceStatus::Overdue => "Просрочен",
            InvoiceStatus::Cancelled => "Отменён",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == s)
    }
}

/// Счёт покупателю
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(flatten)]
    pub base: BaseAggregate<InvoiceId>,

    /// Покупатель (a001_account)
    pub account_id: AccountId,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub amount: Decimal,
    pub status: InvoiceStatus,
}

impl Invoice {
    /// Счёт ожидает оплаты
    pub fn is_open(&self) -> bool {
        matches!(self.status, InvoiceStatus::Sent | InvoiceStatus::Overdue)
    }

    /// Статус с учётом срока оплаты: выставленный счёт после срока — просрочен
    pub fn effective_status(&self, today: NaiveDate) -> InvoiceStatus {
        if self.status == InvoiceStatus::Sent && self.due_date < today {
            InvoiceStatus::Overdue
        } else {
            self.status
        }
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.effective_status(today) == InvoiceStatus::Overdue
    }
}

/// Неоплаченная сумма по покупателю
pub fn outstanding_for_account<'a, I>(invoices: I, account_id: AccountId) -> Decimal
where
    I: IntoIterator<Item = &'a Invoice>,
{
    invoices
        .into_iter()
        .filter(|i| i.account_id == account_id && i.is_open())
        .map(|i| i.amount)
        .sum()
}

crate::impl_aggregate_root!(Invoice, InvoiceId, "a002", "invoice", "Счёт", "Счета");

impl FormRecord for Invoice {
    type Dto = InvoiceDto;

    fn from_dto(id: InvoiceId, dto: &InvoiceDto) -> Result<Self, String> {
        let account_id = dto
            .account_id
            .ok_or_else(|| "Покупатель: поле обязательно для заполнения".to_string())?;
        let mut invoice = Self {
            base: BaseAggregate::new(id, String::new(), String::new()),
            account_id,
            issue_date: parse_date("Дата счёта", &dto.issue_date)?,
            due_date: parse_date("Срок оплаты", &dto.due_date)?,
            amount: dto.amount,
            status: dto.status,
        };
        invoice.apply_dto(dto)?;
        Ok(invoice)
    }

    fn apply_dto(&mut self, dto: &InvoiceDto) -> Result<(), String> {
        self.account_id = dto
            .account_id
            .ok_or_else(|| "Покупатель: поле обязательно для заполнения".to_string())?;
        self.issue_date = parse_date("Дата счёта", &dto.issue_date)?;
        self.due_date = parse_date("Срок оплаты", &dto.due_date)?;
        self.base.apply(&dto.code, &dto.description, &dto.comment);
        self.amount = dto.amount;
        self.status = dto.status;
        self.base.before_write();
        Ok(())
    }

    fn to_dto(&self) -> InvoiceDto {
        InvoiceDto {
            code: self.base.code.clone(),
            description: self.base.description.clone(),
            account_id: Some(self.account_id),
            issue_date: format_date(self.issue_date),
            due_date: format_date(self.due_date),
            amount: self.amount,
            status: self.status,
            comment: self.base.comment.clone(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        self.base.validate("Номер", "Описание")?;
        if self.amount <= Decimal::ZERO {
            return Err("Сумма должна быть больше 0".into());
        }
        if self.due_date < self.issue_date {
            return Err("Срок оплаты не может быть раньше даты счёта".into());
        }
        Ok(())
    }
}

/// Форма счёта
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDto {
    pub code: String,
    pub description: String,
    pub account_id: Option<AccountId>,
    pub issue_date: String,
    pub due_date: String,
    pub amount: Decimal,
    pub status: InvoiceStatus,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn dto() -> InvoiceDto {
        InvoiceDto {
            code: "INV-0001".into(),
            description: "Консультационные услуги".into(),
            account_id: Some(AccountId(10)),
            issue_date: "2024-05-01".into(),
            due_date: "2024-05-31".into(),
            amount: dec!(1500),
            status: InvoiceStatus::Sent,
            comment: None,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_from_dto_requires_customer() {
        let mut form = dto();
        form.account_id = None;
        assert!(Invoice::from_dto(InvoiceId(1), &form).is_err());
    }

    #[test]
    fn test_validate_dates_and_amount() {
        let mut form = dto();
        form.due_date = "2024-04-01".into();
        let invoice = Invoice::from_dto(InvoiceId(1), &form).unwrap();
        assert!(invoice.validate().is_err());

        let mut form = dto();
        form.amount = dec!(0);
        let invoice = Invoice::from_dto(InvoiceId(1), &form).unwrap();
        assert_eq!(invoice.validate().unwrap_err(), "Сумма должна быть больше 0");
    }

    #[test]
    fn test_effective_status() {
        let invoice = Invoice::from_dto(InvoiceId(1), &dto()).unwrap();
        assert_eq!(invoice.effective_status(date("2024-05-31")), InvoiceStatus::Sent);
        assert!(invoice.is_overdue(date("2024-06-01")));

        let mut paid = invoice.clone();
        paid.status = InvoiceStatus::Paid;
        assert!(!paid.is_overdue(date("2024-07-01")));
    }

    #[test]
    fn test_outstanding_for_account() {
        let open = Invoice::from_dto(InvoiceId(1), &dto()).unwrap();
        let mut paid = Invoice::from_dto(InvoiceId(2), &dto()).unwrap();
        paid.status = InvoiceStatus::Paid;
        let mut other = Invoice::from_dto(InvoiceId(3), &dto()).unwrap();
        other.account_id = AccountId(11);

        let invoices = vec![open, paid, other];
        assert_eq!(outstanding_for_account(&invoices, AccountId(10)), dec!(1500));
        assert_eq!(outstanding_for_account(&invoices, AccountId(99)), dec!(0));
    }

    #[test]
    fn test_dto_roundtrip_keeps_dates() {
        let invoice = Invoice::from_dto(InvoiceId(1), &dto()).unwrap();
        assert_eq!(invoice.to_dto(), dto());
    }
}
