//! Денежные суммы: округление и форматирование

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Количество знаков после запятой для денежных сумм
pub const MONEY_SCALE: u32 = 2;

/// Округлить сумму до копеек (половина — от нуля)
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Формат вывода денежных сумм
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyFormat {
    /// Символ валюты
    pub symbol: String,
    /// Символ валюты после суммы ("1 000.00 ₽") или перед ней ("$1,000.00")
    pub symbol_after: bool,
    /// Разделитель тысяч
    pub thousands_separator: char,
    /// Десятичный разделитель
    pub decimal_separator: char,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            symbol_after: false,
            thousands_separator: ',',
            decimal_separator: '.',
        }
    }
}

impl MoneyFormat {
    /// Формат для рублей: "1 234.57 ₽"
    pub fn rub() -> Self {
        Self {
            symbol: "₽".to_string(),
            symbol_after: true,
            thousands_separator: ' ',
            decimal_separator: '.',
        }
    }

    /// Форматирует сумму с 2 знаками после запятой и разделителем тысяч
    pub fn format(&self, amount: Decimal) -> String {
        let number = format_number_with_decimals(
            amount,
            MONEY_SCALE,
            self.thousands_separator,
            self.decimal_separator,
        );
        let (sign, digits) = match number.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", number.as_str()),
        };
        if self.symbol_after {
            format!("{}{} {}", sign, digits, self.symbol)
        } else {
            format!("{}{}{}", sign, self.symbol, digits)
        }
    }
}

/// Форматирует сумму в формате по умолчанию
///
/// # Примеры
/// ```
/// use contracts::shared::money::format_currency;
/// use rust_decimal::Decimal;
/// assert_eq!(format_currency(Decimal::new(123456789, 2)), "$1,234,567.89");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    MoneyFormat::default().format(amount)
}

/// Форматирует число с разделителем тысяч и указанным количеством знаков после запятой
pub fn format_number_with_decimals(
    value: Decimal,
    decimals: u32,
    thousands_separator: char,
    decimal_separator: char,
) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{:.*}", decimals as usize, rounded);

    let (negative, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    // Вставляем разделитель каждые 3 цифры с конца целой части
    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(thousands_separator);
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();

    // "-0.00" не показываем
    if negative && rounded != Decimal::ZERO {
        result.insert(0, '-');
    }
    if let Some(d) = decimal_part {
        result.push(decimal_separator);
        result.push_str(d);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_money() {
        assert_eq!(round_money(dec!(2.345)), dec!(2.35));
        assert_eq!(round_money(dec!(-2.345)), dec!(-2.35));
        assert_eq!(round_money(dec!(2.344)), dec!(2.34));
        assert_eq!(round_money(dec!(23.2)), dec!(23.20));
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(23.2)), "$23.20");
        assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_currency(dec!(-1234.5)), "-$1,234.50");
        assert_eq!(format_currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn test_format_rub() {
        let fmt = MoneyFormat::rub();
        assert_eq!(fmt.format(dec!(1234.567)), "1 234.57 ₽");
        assert_eq!(fmt.format(dec!(-1234)), "-1 234.00 ₽");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(dec!(1234.567), 0, ' ', '.'), "1 235");
        assert_eq!(format_number_with_decimals(dec!(1234.567), 1, ' ', '.'), "1 234.6");
        assert_eq!(format_number_with_decimals(dec!(999), 2, ' ', ','), "999,00");
    }
}
