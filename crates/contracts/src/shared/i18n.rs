//! Тексты интерфейса по ключам
//!
//! Отсутствующий ключ возвращается как есть.

const RU: &[(&str, &str)] = &[
    ("nav.accounting", "Контрагенты и счета"),
    ("nav.projects", "Проекты"),
    ("nav.banking", "Банк"),
    ("nav.purchasing", "Заказы поставщикам"),
    ("nav.sales", "Заказы покупателей"),
    ("nav.administration", "Пользователи и роли"),
    ("action.create", "Создать"),
    ("action.save", "Сохранить"),
    ("action.cancel", "Отмена"),
    ("action.edit", "Изменить"),
    ("action.delete", "Удалить"),
    ("action.add_line", "Добавить строку"),
    ("action.sync", "Синхронизировать с банками"),
    ("notify.saved", "Запись сохранена"),
    ("notify.deleted", "Запись удалена"),
    ("notify.sync_done", "Синхронизация завершена"),
    ("notify.sync_failed", "Ошибка синхронизации с банками"),
    ("confirm.delete", "Удалить запись?"),
    ("totals.subtotal", "Сумма"),
    ("totals.discount", "Скидка"),
    ("totals.tax", "Налог"),
    ("totals.total", "Итого"),
];

/// Текст интерфейса по ключу
pub fn t(key: &str) -> &str {
    RU.iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key() {
        assert_eq!(t("action.save"), "Сохранить");
        assert_eq!(t("totals.total"), "Итого");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        assert_eq!(t("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_keys_are_unique() {
        for (i, (key, _)) in RU.iter().enumerate() {
            assert!(
                RU[i + 1..].iter().all(|(k, _)| k != key),
                "duplicate key {}",
                key
            );
        }
    }
}
