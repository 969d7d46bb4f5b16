//! Категории страниц, открываемых во вкладках
//!
//! Корневой элемент страницы получает `id` вида `{entity}--{category}`
//! (например `"a005_bank_account--list"`) и атрибут `data-page-category`.

/// Список записей
pub const PAGE_CAT_LIST: &str = "list";

/// Раздел из нескольких списков (вкладка модуля)
pub const PAGE_CAT_MODULE: &str = "module";

/// Страница use case (синхронизация и т.п.)
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Администрирование
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_MODULE,
    PAGE_CAT_USECASE,
    PAGE_CAT_SYSTEM,
];

/// Проверка формата `{entity}--{category}`
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a005_bank_account--list"));
        assert!(is_valid_page_id("banking--module"));
        assert!(!is_valid_page_id("banking"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("banking--dashboard"));
    }
}
