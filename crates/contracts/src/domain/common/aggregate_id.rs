use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
///
/// Идентификаторы генерируются на клиенте и основаны на времени
/// (Unix-время в миллисекундах), поэтому внутри всегда `i64`.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Ord + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Создать ID из числового значения
    fn new(value: i64) -> Self;

    /// Числовое значение ID
    fn value(&self) -> i64;

    /// Преобразовать ID в строку
    fn as_string(&self) -> String {
        self.value().to_string()
    }

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(Self::new)
            .map_err(|e| format!("Invalid id '{}': {}", s, e))
    }
}

impl AggregateId for i64 {
    fn new(value: i64) -> Self {
        value
    }

    fn value(&self) -> i64 {
        *self
    }
}

/// Объявить newtype-идентификатор агрегата
///
/// ```rust,ignore
/// aggregate_id!(
///     /// ID проекта
///     ProjectId
/// );
/// ```
#[macro_export]
macro_rules! aggregate_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $crate::domain::common::AggregateId for $name {
            fn new(value: i64) -> Self {
                Self(value)
            }

            fn value(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::aggregate_id!(
        /// Тестовый идентификатор
        SampleId
    );

    #[test]
    fn test_id_string_roundtrip() {
        let id = SampleId::new(1_718_000_000_123);
        assert_eq!(id.as_string(), "1718000000123");
        assert_eq!(SampleId::from_string(" 1718000000123 ").unwrap(), id);
    }

    #[test]
    fn test_id_from_garbage() {
        assert!(SampleId::from_string("abc").is_err());
        assert!(SampleId::from_string("").is_err());
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&SampleId(42)).unwrap();
        assert_eq!(json, "42");
    }
}
