use super::Record;

/// Трейт для корня агрегата
///
/// Код записи и имена агрегата для заголовков списков, вопросов удаления
/// и идентификаторов таблиц
pub trait AggregateRoot: Record {
    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Получить бизнес-код записи (например, "PO-0001")
    fn code(&self) -> &str;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "purchase_order")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Заказ поставщику")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Заказы поставщикам")
    fn list_name() -> &'static str;

    /// Полное имя агрегата для системы (например, "a007_purchase_order")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}

/// Реализация `Record` и `AggregateRoot` для агрегата с полем `base: BaseAggregate<Id>`
#[macro_export]
macro_rules! impl_aggregate_root {
    ($ty:ty, $id:ty, $index:literal, $collection:literal, $element:literal, $list:literal) => {
        impl $crate::domain::common::Record for $ty {
            type Id = $id;

            fn record_id(&self) -> Self::Id {
                self.base.id
            }
        }

        impl $crate::domain::common::AggregateRoot for $ty {
            fn code(&self) -> &str {
                &self.base.code
            }

            fn aggregate_index() -> &'static str {
                $index
            }

            fn collection_name() -> &'static str {
                $collection
            }

            fn element_name() -> &'static str {
                $element
            }

            fn list_name() -> &'static str {
                $list
            }
        }
    };
}
