use crate::domain::common::{BaseAggregate, FormRecord};
use crate::shared::form_input::non_empty;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Уникальный идентификатор контрагента
    AccountId
);

/// Вид контрагента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    #[default]
    Customer,
    Supplier,
}

impl AccountKind {
    pub fn all() -> &'static [AccountKind] {
        &[AccountKind::Customer, AccountKind::Supplier]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Customer => "customer",
            AccountKind::Supplier => "supplier",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Customer => "Покупатель",
            AccountKind::Supplier => "Поставщик",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.as_str() == s)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Контрагент (покупатель или поставщик)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(flatten)]
    pub base: BaseAggregate<AccountId>,

    pub kind: AccountKind,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// ИНН / налоговый номер
    pub tax_id: Option<String>,
}

impl Account {
    pub fn is_supplier(&self) -> bool {
        self.kind == AccountKind::Supplier
    }

    pub fn is_customer(&self) -> bool {
        self.kind == AccountKind::Customer
    }
}

crate::impl_aggregate_root!(
    Account,
    AccountId,
    "a001",
    "account",
    "Контрагент",
    "Контрагенты"
);

impl FormRecord for Account {
    type Dto = AccountDto;

    fn from_dto(id: AccountId, dto: &AccountDto) -> Result<Self, String> {
        let mut account = Self {
            base: BaseAggregate::new(id, String::new(), String::new()),
            kind: dto.kind,
            email: None,
            phone: None,
            tax_id: None,
        };
        account.apply_dto(dto)?;
        Ok(account)
    }

    fn apply_dto(&mut self, dto: &AccountDto) -> Result<(), String> {
        self.base.apply(&dto.code, &dto.description, &dto.comment);
        self.kind = dto.kind;
        self.email = non_empty(&dto.email);
        self.phone = non_empty(&dto.phone);
        self.tax_id = non_empty(&dto.tax_id);
        self.base.before_write();
        Ok(())
    }

    fn to_dto(&self) -> AccountDto {
        AccountDto {
            code: self.base.code.clone(),
            description: self.base.description.clone(),
            kind: self.kind,
            email: self.email.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            tax_id: self.tax_id.clone().unwrap_or_default(),
            comment: self.base.comment.clone(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        self.base.validate("Код", "Наименование")?;
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(format!("Email: неверный адрес '{}'", email));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Форма контрагента
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountDto {
    pub code: String,
    pub description: String,
    pub kind: AccountKind,
    pub email: String,
    pub phone: String,
    pub tax_id: String,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> AccountDto {
        AccountDto {
            code: "CUST-001".into(),
            description: "Acme Corp".into(),
            kind: AccountKind::Customer,
            email: "billing@acme.test".into(),
            phone: " ".into(),
            tax_id: "ACM010101ABC".into(),
            comment: Some("  ".into()),
        }
    }

    #[test]
    fn test_from_dto() {
        let account = Account::from_dto(AccountId(1), &dto()).unwrap();
        assert!(account.validate().is_ok());
        assert!(account.is_customer());
        assert_eq!(account.phone, None);
        assert_eq!(account.base.comment, None);
        assert_eq!(account.to_dto().email, "billing@acme.test");
    }

    #[test]
    fn test_validate_email() {
        let mut form = dto();
        form.email = "not-an-email".into();
        let account = Account::from_dto(AccountId(1), &form).unwrap();
        assert!(account.validate().is_err());
    }

    #[test]
    fn test_validate_required() {
        let mut form = dto();
        form.description = "".into();
        let account = Account::from_dto(AccountId(1), &form).unwrap();
        assert_eq!(
            account.validate().unwrap_err(),
            "Наименование: поле обязательно для заполнения"
        );
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(AccountKind::parse("supplier"), Some(AccountKind::Supplier));
        assert_eq!(AccountKind::parse("x"), None);
    }
}
