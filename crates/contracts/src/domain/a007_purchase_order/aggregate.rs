use crate::domain::a001_account::aggregate::AccountId;
use crate::domain::common::{BaseAggregate, FormRecord};
use crate::shared::form_input::{format_date, parse_date, parse_optional_date, require};
use crate::shared::line_totals::{
    order_totals, validate_line, OrderTotals, PricedLine, TOTALS_OVERFLOW,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Уникальный идентификатор заказа поставщику
    PurchaseOrderId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseOrderStatus {
    #[default]
    Draft,
    Sent,
    Received,
    Cancelled,
}

impl PurchaseOrderStatus {
    pub fn all() -> &'static [PurchaseOrderStatus] {
        &[
            PurchaseOrderStatus::Draft,
            PurchaseOrderStatus::Sent,
            PurchaseOrderStatus::Received,
            PurchaseOrderStatus::Cancelled,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseOrderStatus::Draft => "draft",
            PurchaseOrderStatus::Sent => "sent",
            PurchaseOrderStatus::Received => "received",
            PurchaseOrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PurchaseOrderStatus::Draft => "Черновик",
            PurchaseOrderStatus::Sent => "Отправлен",
            PurchaseOrderStatus::Received => "Получен",
            PurchaseOrderStatus::Cancelled => "Отменён",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == s)
    }
}

/// Строка табличной части «Товары» заказа поставщику
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderLine {
    pub product: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    /// Ставка налога, %
    pub tax_rate: Decimal,
}

impl PricedLine for PurchaseOrderLine {
    fn quantity(&self) -> Decimal {
        self.quantity
    }

    fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }
}

/// Заказ поставщику
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    #[serde(flatten)]
    pub base: BaseAggregate<PurchaseOrderId>,

    /// Поставщик (a001_account)
    pub supplier_id: AccountId,
    pub order_date: NaiveDate,
    pub expected_date: Option<NaiveDate>,
    pub status: PurchaseOrderStatus,
    pub lines: Vec<PurchaseOrderLine>,
    /// Итоги, округлённые при сохранении формы
    pub totals: OrderTotals,
}

crate::impl_aggregate_root!(
    PurchaseOrder,
    PurchaseOrderId,
    "a007",
    "purchase_order",
    "Заказ поставщику",
    "Заказы поставщикам"
);

impl FormRecord for PurchaseOrder {
    type Dto = PurchaseOrderDto;

    fn from_dto(id: PurchaseOrderId, dto: &PurchaseOrderDto) -> Result<Self, String> {
        let supplier_id = dto
            .supplier_id
            .ok_or_else(|| "Поставщик: поле обязательно для заполнения".to_string())?;
        let mut order = Self {
            base: BaseAggregate::new(id, String::new(), String::new()),
            supplier_id,
            order_date: parse_date("Дата заказа", &dto.order_date)?,
            expected_date: None,
            status: dto.status,
            lines: Vec::new(),
            totals: OrderTotals::default(),
        };
        order.apply_dto(dto)?;
        Ok(order)
    }

    fn apply_dto(&mut self, dto: &PurchaseOrderDto) -> Result<(), String> {
        let totals = dto
            .totals()
            .map(|t| t.rounded())
            .ok_or_else(|| TOTALS_OVERFLOW.to_string())?;
        self.supplier_id = dto
            .supplier_id
            .ok_or_else(|| "Поставщик: поле обязательно для заполнения".to_string())?;
        self.order_date = parse_date("Дата заказа", &dto.order_date)?;
        self.expected_date = parse_optional_date("Ожидаемая дата", &dto.expected_date)?;
        self.base.apply(&dto.code, &dto.description, &dto.comment);
        self.status = dto.status;
        self.lines = dto.lines.clone();
        self.totals = totals;
        self.base.before_write();
        Ok(())
    }

    fn to_dto(&self) -> PurchaseOrderDto {
        PurchaseOrderDto {
            code: self.base.code.clone(),
            description: self.base.description.clone(),
            supplier_id: Some(self.supplier_id),
            order_date: format_date(self.order_date),
            expected_date: self.expected_date.map(format_date).unwrap_or_default(),
            status: self.status,
            lines: self.lines.clone(),
            comment: self.base.comment.clone(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        self.base.validate("Номер", "Описание")?;
        if self.lines.is_empty() {
            return Err("Добавьте хотя бы одну строку".into());
        }
        for (i, line) in self.lines.iter().enumerate() {
            require(&format!("Строка {}: товар", i + 1), &line.product)?;
            validate_line(line, i + 1)?;
        }
        if let Some(expected) = self.expected_date {
            if expected < self.order_date {
                return Err("Ожидаемая дата не может быть раньше даты заказа".into());
            }
        }
        Ok(())
    }
}

/// Форма заказа поставщику
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderDto {
    pub code: String,
    pub description: String,
    pub supplier_id: Option<AccountId>,
    pub order_date: String,
    pub expected_date: String,
    pub status: PurchaseOrderStatus,
    pub lines: Vec<PurchaseOrderLine>,
    pub comment: Option<String>,
}

impl PurchaseOrderDto {
    /// Итоги по текущим строкам формы (без округления); `None` при переполнении
    pub fn totals(&self) -> Option<OrderTotals> {
        order_totals(&self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn line(product: &str, quantity: Decimal, unit_price: Decimal, tax_rate: Decimal) -> PurchaseOrderLine {
        PurchaseOrderLine {
            product: product.into(),
            quantity,
            unit_price,
            tax_rate,
        }
    }

    fn dto() -> PurchaseOrderDto {
        PurchaseOrderDto {
            code: "PO-0001".into(),
            description: "Канцтовары".into(),
            supplier_id: Some(AccountId(3)),
            order_date: "2024-06-01".into(),
            expected_date: "2024-06-10".into(),
            status: PurchaseOrderStatus::Draft,
            lines: vec![line("Бумага A4", dec!(2), dec!(10), dec!(16))],
            comment: None,
        }
    }

    #[test]
    fn test_totals_on_submit() {
        let order = PurchaseOrder::from_dto(PurchaseOrderId(1), &dto()).unwrap();
        assert!(order.validate().is_ok());
        assert_eq!(order.totals.subtotal, dec!(20));
        assert_eq!(order.totals.discount, dec!(0));
        assert_eq!(order.totals.tax, dec!(3.2));
        assert_eq!(order.totals.total, dec!(23.2));
    }

    #[test]
    fn test_totals_follow_lines_on_update() {
        let mut order = PurchaseOrder::from_dto(PurchaseOrderId(1), &dto()).unwrap();
        let mut form = order.to_dto();
        form.lines.push(line("Ручки", dec!(10), dec!(1.5), dec!(0)));
        order.apply_dto(&form).unwrap();
        assert_eq!(order.totals.subtotal, dec!(35));
        assert_eq!(order.totals.total, dec!(38.2));
    }

    #[test]
    fn test_validate_lines() {
        let mut form = dto();
        form.lines.clear();
        let order = PurchaseOrder::from_dto(PurchaseOrderId(1), &form).unwrap();
        assert_eq!(order.validate().unwrap_err(), "Добавьте хотя бы одну строку");

        let mut form = dto();
        form.lines.push(line("", dec!(1), dec!(1), dec!(0)));
        let order = PurchaseOrder::from_dto(PurchaseOrderId(1), &form).unwrap();
        assert!(order.validate().unwrap_err().starts_with("Строка 2"));

        let mut form = dto();
        form.lines[0].quantity = dec!(-1);
        let order = PurchaseOrder::from_dto(PurchaseOrderId(1), &form).unwrap();
        assert!(order.validate().is_err());
    }

    #[test]
    fn test_overflowing_order_is_rejected_on_save() {
        let mut order = PurchaseOrder::from_dto(PurchaseOrderId(1), &dto()).unwrap();
        let mut form = dto();
        let huge = dec!(100000000000000);
        form.lines[0].quantity = huge;
        form.lines[0].unit_price = huge;
        assert_eq!(form.totals(), None);
        assert_eq!(order.apply_dto(&form).unwrap_err(), TOTALS_OVERFLOW);
        // прежние итоги не испорчены
        assert_eq!(order.totals.total, dec!(23.2));
    }

    #[test]
    fn test_aggregate_names() {
        use crate::domain::common::AggregateRoot;

        let order = PurchaseOrder::from_dto(PurchaseOrderId(1), &dto()).unwrap();
        assert_eq!(order.code(), "PO-0001");
        assert_eq!(PurchaseOrder::full_name(), "a007_purchase_order");
        assert_eq!(PurchaseOrder::list_name(), "Заказы поставщикам");
    }

    #[test]
    fn test_requires_supplier() {
        let mut form = dto();
        form.supplier_id = None;
        assert!(PurchaseOrder::from_dto(PurchaseOrderId(1), &form).is_err());
    }
}
