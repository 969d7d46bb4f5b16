//! Итоги табличной части заказа (поставщику и покупателю)
//!
//! Для каждой строки:
//! - сумма = количество × цена
//! - скидка = сумма × процент скидки / 100
//! - налог = (сумма − скидка) × ставка налога / 100
//! - итого = сумма − скидка + налог
//!
//! Итоги документа складываются из итогов строк, строки друг на друга не влияют.
//! Арифметика точная (`Decimal`), округление только в `OrderTotals::rounded`.
//! Переполнение `Decimal` даёт `None`, а не панику: форма принимает любые числа.

use crate::shared::money::round_money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Сообщение формы, если итоги документа не помещаются в `Decimal`
pub const TOTALS_OVERFLOW: &str = "Сумма заказа слишком велика";

/// Верхняя граница количества в строке
pub const MAX_QUANTITY: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Верхняя граница цены в строке (10^12)
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Строка с ценой: всё, что нужно для расчёта итогов
pub trait PricedLine {
    fn quantity(&self) -> Decimal;

    fn unit_price(&self) -> Decimal;

    /// Ставка налога в процентах (16 = 16%)
    fn tax_rate(&self) -> Decimal;

    /// Процент скидки; у строк заказа поставщику скидки нет
    fn discount_percentage(&self) -> Decimal {
        Decimal::ZERO
    }
}

/// Итоги одной строки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineTotals {
    /// Количество × цена
    pub gross: Decimal,
    pub discount: Decimal,
    /// Сумма после скидки (база налога)
    pub net: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Рассчитать итоги строки; `None` при переполнении
pub fn line_totals<L: PricedLine + ?Sized>(line: &L) -> Option<LineTotals> {
    let gross = line.quantity().checked_mul(line.unit_price())?;
    let discount = percent_of(gross, line.discount_percentage())?;
    let net = gross.checked_sub(discount)?;
    let tax = percent_of(net, line.tax_rate())?;
    Some(LineTotals {
        gross,
        discount,
        net,
        tax,
        total: net.checked_add(tax)?,
    })
}

fn percent_of(base: Decimal, percent: Decimal) -> Option<Decimal> {
    base.checked_mul(percent)?.checked_div(HUNDRED)
}

/// Итоги документа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Σ(количество × цена)
    pub subtotal: Decimal,
    /// Σ скидок строк
    pub discount: Decimal,
    /// Σ налогов строк
    pub tax: Decimal,
    /// Σ итогов строк
    pub total: Decimal,
}

impl OrderTotals {
    /// Итоги с округлением до копеек (для отправки формы)
    pub fn rounded(&self) -> Self {
        Self {
            subtotal: round_money(self.subtotal),
            discount: round_money(self.discount),
            tax: round_money(self.tax),
            total: round_money(self.total),
        }
    }

    /// Сумма после скидок
    pub fn after_discount(&self) -> Decimal {
        self.subtotal - self.discount
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self {
            subtotal: self.subtotal.checked_add(rhs.subtotal)?,
            discount: self.discount.checked_add(rhs.discount)?,
            tax: self.tax.checked_add(rhs.tax)?,
            total: self.total.checked_add(rhs.total)?,
        })
    }
}

impl From<LineTotals> for OrderTotals {
    fn from(line: LineTotals) -> Self {
        Self {
            subtotal: line.gross,
            discount: line.discount,
            tax: line.tax,
            total: line.total,
        }
    }
}

impl Add for OrderTotals {
    type Output = OrderTotals;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            subtotal: self.subtotal + rhs.subtotal,
            discount: self.discount + rhs.discount,
            tax: self.tax + rhs.tax,
            total: self.total + rhs.total,
        }
    }
}

impl AddAssign for OrderTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for OrderTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(OrderTotals::default(), Add::add)
    }
}

/// Рассчитать итоги документа по строкам; `None`, если сумма не помещается в `Decimal`
pub fn order_totals<'a, L, I>(lines: I) -> Option<OrderTotals>
where
    L: PricedLine + 'a,
    I: IntoIterator<Item = &'a L>,
{
    lines.into_iter().try_fold(OrderTotals::default(), |acc, line| {
        acc.checked_add(line_totals(line)?.into())
    })
}

/// Проверка строки по правилам формы (min-ограничения полей)
pub fn validate_line<L: PricedLine + ?Sized>(line: &L, row: usize) -> Result<(), String> {
    if line.quantity() <= Decimal::ZERO {
        return Err(format!("Строка {}: количество должно быть больше 0", row));
    }
    if line.quantity() > MAX_QUANTITY {
        return Err(format!("Строка {}: количество слишком большое", row));
    }
    if line.unit_price() < Decimal::ZERO {
        return Err(format!("Строка {}: цена не может быть отрицательной", row));
    }
    if line.unit_price() > MAX_UNIT_PRICE {
        return Err(format!("Строка {}: цена слишком большая", row));
    }
    let in_percent_range = |v: Decimal| v >= Decimal::ZERO && v <= HUNDRED;
    if !in_percent_range(line.tax_rate()) {
        return Err(format!("Строка {}: ставка налога должна быть от 0 до 100", row));
    }
    if !in_percent_range(line.discount_percentage()) {
        return Err(format!("Строка {}: скидка должна быть от 0 до 100%", row));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    struct Line {
        quantity: Decimal,
        unit_price: Decimal,
        discount: Decimal,
        tax_rate: Decimal,
    }

    impl PricedLine for Line {
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
            self.discount
        }
    }

    fn line(quantity: Decimal, unit_price: Decimal, discount: Decimal, tax_rate: Decimal) -> Line {
        Line {
            quantity,
            unit_price,
            discount,
            tax_rate,
        }
    }

    #[test]
    fn test_empty_order_is_zero() {
        let lines: Vec<Line> = Vec::new();
        let totals = order_totals(&lines).unwrap();
        assert_eq!(totals, OrderTotals::default());
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn test_purchase_line() {
        let lines = vec![line(dec!(2), dec!(10), dec!(0), dec!(16))];
        let totals = order_totals(&lines).unwrap();
        assert_eq!(totals.subtotal, dec!(20));
        assert_eq!(totals.discount, dec!(0));
        assert_eq!(totals.tax, dec!(3.2));
        assert_eq!(totals.total, dec!(23.2));
    }

    #[test]
    fn test_sales_line_with_discount() {
        let l = line(dec!(1), dec!(100), dec!(10), dec!(16));
        let t = line_totals(&l).unwrap();
        assert_eq!(t.gross, dec!(100));
        assert_eq!(t.discount, dec!(10));
        assert_eq!(t.net, dec!(90));
        assert_eq!(t.tax, dec!(14.4));
        assert_eq!(t.total, dec!(104.4));

        let totals = order_totals(std::iter::once(&l)).unwrap();
        assert_eq!(totals.after_discount(), dec!(90));
        assert_eq!(totals.total, dec!(104.4));
    }

    #[test]
    fn test_order_equals_sum_of_lines() {
        let lines = vec![
            line(dec!(3), dec!(19.99), dec!(5), dec!(16)),
            line(dec!(1), dec!(250), dec!(0), dec!(8)),
            line(dec!(12), dec!(0.35), dec!(12.5), dec!(0)),
        ];
        let whole = order_totals(&lines).unwrap();
        let by_line: OrderTotals = lines
            .iter()
            .map(|l| OrderTotals::from(line_totals(l).unwrap()))
            .fold(OrderTotals::default(), |acc, t| acc + t);
        assert_eq!(whole, by_line);
        assert_eq!(whole.total, whole.subtotal - whole.discount + whole.tax);

        // порядок строк не важен
        let reversed: Vec<&Line> = lines.iter().rev().collect();
        let mut acc = OrderTotals::default();
        for l in reversed {
            acc += line_totals(l).unwrap().into();
        }
        assert_eq!(acc, whole);
    }

    #[test]
    fn test_rounded_totals() {
        let lines = vec![line(dec!(3), dec!(0.333), dec!(0), dec!(16))];
        let totals = order_totals(&lines).unwrap();
        assert_eq!(totals.subtotal, dec!(0.999));
        let rounded = totals.rounded();
        assert_eq!(rounded.subtotal, dec!(1.00));
        assert_eq!(rounded.tax, dec!(0.16));
        assert_eq!(rounded.total, dec!(1.16));
    }

    #[test]
    fn test_negative_inputs_are_computed_not_rejected() {
        let l = line(dec!(-2), dec!(10), dec!(0), dec!(16));
        let t = line_totals(&l).unwrap();
        assert_eq!(t.gross, dec!(-20));
        assert_eq!(t.total, dec!(-23.2));
        assert!(validate_line(&l, 1).is_err());
    }

    #[test]
    fn test_validate_line_bounds() {
        assert!(validate_line(&line(dec!(1), dec!(0), dec!(0), dec!(0)), 1).is_ok());
        assert!(validate_line(&line(dec!(0), dec!(10), dec!(0), dec!(16)), 1).is_err());
        assert!(validate_line(&line(dec!(1), dec!(-1), dec!(0), dec!(16)), 1).is_err());
        assert!(validate_line(&line(dec!(1), dec!(1), dec!(0), dec!(101)), 1).is_err());
        let err = validate_line(&line(dec!(1), dec!(1), dec!(-5), dec!(16)), 3).unwrap_err();
        assert!(err.starts_with("Строка 3"));
    }

    #[test]
    fn test_huge_values_do_not_panic() {
        let huge = dec!(100000000000000);
        let l = line(huge, huge, dec!(0), dec!(16));
        // 10^28 × 16 не помещается в Decimal
        assert_eq!(line_totals(&l), None);
        assert_eq!(order_totals(std::iter::once(&l)), None);
        assert!(validate_line(&l, 1).is_err());

        // каждая строка считается, но сумма документа переполняется
        let big = line(dec!(1), Decimal::MAX, dec!(0), dec!(0));
        assert!(line_totals(&big).is_some());
        assert_eq!(order_totals(&vec![big, line(dec!(1), Decimal::MAX, dec!(0), dec!(0))]), None);
    }

    #[test]
    fn test_upper_bounds() {
        assert_eq!(MAX_QUANTITY, dec!(1000000000));
        assert_eq!(MAX_UNIT_PRICE, dec!(1000000000000));
        assert!(validate_line(&line(MAX_QUANTITY, MAX_UNIT_PRICE, dec!(100), dec!(100)), 1).is_ok());
        assert!(validate_line(&line(MAX_QUANTITY + dec!(1), dec!(1), dec!(0), dec!(0)), 1).is_err());
        assert!(validate_line(&line(dec!(1), MAX_UNIT_PRICE + dec!(0.01), dec!(0), dec!(0)), 2)
            .unwrap_err()
            .starts_with("Строка 2"));
        // на границах расчёт не переполняется
        let bounded = line(MAX_QUANTITY, MAX_UNIT_PRICE, dec!(0), dec!(100));
        assert_eq!(line_totals(&bounded).unwrap().total, dec!(2000000000000000000000));
    }
}
