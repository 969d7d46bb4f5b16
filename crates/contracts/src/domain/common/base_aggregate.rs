use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Базовый агрегат с обязательными полями для всех агрегатов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Уникальный идентификатор записи
    pub id: Id,
    /// Бизнес-код записи (например, "PO-0001", "INV-2024-017")
    pub code: String,
    /// Описание/название записи
    pub description: String,
    /// Комментарий
    pub comment: Option<String>,
    /// Метаданные жизненного цикла
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    /// Создать новый агрегат
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            comment: None,
            metadata: EntityMetadata::new(),
        }
    }

    /// Применить общие поля формы
    pub fn apply(&mut self, code: &str, description: &str, comment: &Option<String>) {
        self.code = code.trim().to_string();
        self.description = description.trim().to_string();
        self.comment = comment
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
    }

    /// Хук перед записью в список: timestamp и версия
    pub fn before_write(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }

    /// Проверка общих обязательных полей
    pub fn validate(&self, code_label: &str, description_label: &str) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err(format!("{}: поле обязательно для заполнения", code_label));
        }
        if self.description.trim().is_empty() {
            return Err(format!(
                "{}: поле обязательно для заполнения",
                description_label
            ));
        }
        Ok(())
    }
}
