//! Разбор значений полей формы
//!
//! Числовые поля ведут себя как `<input type="number">`: нераспознанное
//! значение превращается в 0.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Формат дат в полях `<input type="date">`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Разобрать число; при ошибке — 0
///
/// Принимает запятую как десятичный разделитель и пробелы между триадами.
pub fn parse_decimal_or_zero(input: &str) -> Decimal {
    let normalized: String = input
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .unwrap_or(Decimal::ZERO)
}

/// Обязательное текстовое поле
pub fn require(label: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{}: поле обязательно для заполнения", label))
    } else {
        Ok(())
    }
}

/// Обязательное поле даты
pub fn parse_date(label: &str, value: &str) -> Result<NaiveDate, String> {
    require(label, value)?;
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| format!("{}: неверная дата '{}'", label, value.trim()))
}

/// Необязательное поле даты: пустая строка — `None`
pub fn parse_optional_date(label: &str, value: &str) -> Result<Option<NaiveDate>, String> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        parse_date(label, value).map(Some)
    }
}

/// Дата для поля формы
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Пустая строка — `None`
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_decimal_or_zero() {
        assert_eq!(parse_decimal_or_zero("12.5"), dec!(12.5));
        assert_eq!(parse_decimal_or_zero(" 12,5 "), dec!(12.5));
        assert_eq!(parse_decimal_or_zero("1 234.56"), dec!(1234.56));
        assert_eq!(parse_decimal_or_zero("-3"), dec!(-3));
        assert_eq!(parse_decimal_or_zero(""), dec!(0));
        assert_eq!(parse_decimal_or_zero("abc"), dec!(0));
        assert_eq!(parse_decimal_or_zero("1e2"), dec!(100));
    }

    #[test]
    fn test_require() {
        assert!(require("Название", "Проект").is_ok());
        let err = require("Название", "   ").unwrap_err();
        assert_eq!(err, "Название: поле обязательно для заполнения");
    }

    #[test]
    fn test_parse_dates() {
        let d = parse_date("Дата", "2024-03-15").unwrap();
        assert_eq!(format_date(d), "2024-03-15");
        assert!(parse_date("Дата", "15.03.2024").is_err());
        assert!(parse_date("Дата", "").is_err());
        assert_eq!(parse_optional_date("Срок", " ").unwrap(), None);
        assert!(parse_optional_date("Срок", "2024-02-30").is_err());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" a "), Some("a".to_string()));
    }
}
