use crate::domain::a001_account::aggregate::AccountId;
use crate::domain::common::{BaseAggregate, FormRecord};
use crate::shared::form_input::{format_date, parse_date, require};
use crate::shared::line_totals::{
    order_totals, validate_line, OrderTotals, PricedLine, TOTALS_OVERFLOW,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Уникальный идентификатор заказа покупателя
    SalesOrderId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalesOrderStatus {
    #[default]
    Draft,
    Confirmed,
    Shipped,
    Invoiced,
    Cancelled,
}

impl SalesOrderStatus {
    pub fn all() -> &'static [SalesOrderStatus] {
        &[
            SalesOrderStatus::Draft,
            SalesOrderStatus::Confirmed,
            SalesOrderStatus::Shipped,
            SalesOrderStatus::Invoiced,
            SalesOrderStatus::Cancelled,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SalesOrderStatus::Draft => "draft",
            SalesOrderStatus::Confirmed => "confirmed",
            SalesOrderStatus::Shipped => "shipped",
            SalesOrderStatus::Invoiced => "invoiced",
            SalesOrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SalesOrderStatus::Draft => "Черновик",
            SalesOrderStatus::Confirmed => "Подтверждён",
            SalesOrderStatus::Shipped => "Отгружен",
            SalesOrderStatus::Invoiced => "Выставлен счёт",
            SalesOrderStatus::Cancelled => "Отменён",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == s)
    }
}

/// Строка табличной части заказа покупателя
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesOrderLine {
    pub product: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    /// Скидка, %
    pub discount_percentage: Decimal,
    /// Ставка налога, %
    pub tax_rate: Decimal,
}

impl PricedLine for SalesOrderLine {
    fn quantity(&self) -> Decimal {
        self.quantity
    }

    fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    fn discount_percentage(&self) -> Decimal {
        self.discount_percentage
    }
}

/// Заказ покупателя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrder {
    #[serde(flatten)]
    pub base: BaseAggregate<SalesOrderId>,

    /// Покупатель (a001_account)
    pub customer_id: AccountId,
    pub order_date: NaiveDate,
    pub status: SalesOrderStatus,
    pub lines: Vec<SalesOrderLine>,
    /// Итоги, округлённые при сохранении формы
    pub totals: OrderTotals,
}

crate::impl_aggregate_root!(
    SalesOrder,
    SalesOrderId,
    "a008",
    "sales_order",
    "Заказ покупателя",
    "Заказы покупателей"
);

impl FormRecord for SalesOrder {
    type Dto = SalesOrderDto;

    fn from_dto(id: SalesOrderId, dto: &SalesOrderDto) -> Result<Self, String> {
        let customer_id = dto
            .customer_id
            .ok_or_else(|| "Покупатель: поле обязательно для заполнения".to_string())?;
        let mut order = Self {
            base: BaseAggregate::new(id, String::new(), String::new()),
            customer_id,
            order_date: parse_date("Дата заказа", &dto.order_date)?,
            status: dto.status,
            lines: Vec::new(),
            totals: OrderTotals::default(),
        };
        order.apply_dto(dto)?;
        Ok(order)
    }

    fn apply_dto(&mut self, dto: &SalesOrderDto) -> Result<(), String> {
        let totals = dto
            .totals()
            .map(|t| t.rounded())
            .ok_or_else(|| TOTALS_OVERFLOW.to_string())?;
        self.customer_id = dto
            .customer_id
            .ok_or_else(|| "Покупатель: поле обязательно для заполнения".to_string())?;
        self.order_date = parse_date("Дата заказа", &dto.order_date)?;
        self.base.apply(&dto.code, &dto.description, &dto.comment);
        self.status = dto.status;
        self.lines = dto.lines.clone();
        self.totals = totals;
        self.base.before_write();
        Ok(())
    }

    fn to_dto(&self) -> SalesOrderDto {
        SalesOrderDto {
            code: self.base.code.clone(),
            description: self.base.description.clone(),
            customer_id: Some(self.customer_id),
            order_date: format_date(self.order_date),
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
        Ok(())
    }
}

/// Форма заказа покупателя
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesOrderDto {
    pub code: String,
    pub description: String,
    pub customer_id: Option<AccountId>,
    pub order_date: String,
    pub status: SalesOrderStatus,
    pub lines: Vec<SalesOrderLine>,
    pub comment: Option<String>,
}

impl SalesOrderDto {
    /// Итоги по текущим строкам формы (без округления); `None` при переполнении
    pub fn totals(&self) -> Option<OrderTotals> {
        order_totals(&self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn dto(lines: Vec<SalesOrderLine>) -> SalesOrderDto {
        SalesOrderDto {
            code: "SO-0001".into(),
            description: "Поставка оборудования".into(),
            customer_id: Some(AccountId(1)),
            order_date: "2024-06-01".into(),
            status: SalesOrderStatus::Confirmed,
            lines,
            comment: None,
        }
    }

    fn line(quantity: Decimal, unit_price: Decimal, discount: Decimal, tax_rate: Decimal) -> SalesOrderLine {
        SalesOrderLine {
            product: "Сервер".into(),
            quantity,
            unit_price,
            discount_percentage: discount,
            tax_rate,
        }
    }

    #[test]
    fn test_discounted_line_totals() {
        let form = dto(vec![line(dec!(1), dec!(100), dec!(10), dec!(16))]);
        let live = form.totals().unwrap();
        assert_eq!(live.after_discount(), dec!(90));
        assert_eq!(live.tax, dec!(14.4));
        assert_eq!(live.total, dec!(104.4));

        let order = SalesOrder::from_dto(SalesOrderId(1), &form).unwrap();
        assert!(order.validate().is_ok());
        assert_eq!(order.totals, live.rounded());
    }

    #[test]
    fn test_payload_rounding() {
        // 3 × 33.333 = 99.999; скидка 1% = 0.99999; налог 16% от 98.99901
        let form = dto(vec![line(dec!(3), dec!(33.333), dec!(1), dec!(16))]);
        let order = SalesOrder::from_dto(SalesOrderId(1), &form).unwrap();
        assert_eq!(order.totals.subtotal, dec!(100.00));
        assert_eq!(order.totals.discount, dec!(1.00));
        assert_eq!(order.totals.tax, dec!(15.84));
        assert_eq!(order.totals.total, dec!(114.84));
    }

    #[test]
    fn test_discount_over_hundred_rejected() {
        let form = dto(vec![line(dec!(1), dec!(100), dec!(150), dec!(16))]);
        let order = SalesOrder::from_dto(SalesOrderId(1), &form).unwrap();
        assert!(order.validate().is_err());
    }

    #[test]
    fn test_empty_order_totals_zero() {
        let form = dto(vec![]);
        assert_eq!(form.totals(), Some(OrderTotals::default()));
    }

    #[test]
    fn test_overflowing_order_is_rejected_on_save() {
        let huge = dec!(100000000000000);
        let form = dto(vec![line(huge, huge, dec!(0), dec!(16))]);
        assert_eq!(form.totals(), None);
        assert_eq!(
            SalesOrder::from_dto(SalesOrderId(1), &form).unwrap_err(),
            TOTALS_OVERFLOW
        );
    }
}
