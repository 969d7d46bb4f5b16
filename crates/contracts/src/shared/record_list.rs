//! Список записей, которым владеет страница
//!
//! Записи живут только в памяти: создание — вставка, изменение — замена
//! записи с тем же ID, удаление — фильтрация списка.

use crate::domain::common::{AggregateId, FormRecord, Record};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordListError {
    #[error("Запись с ID {0} уже существует")]
    Duplicate(i64),
    #[error("Запись с ID {0} не найдена")]
    NotFound(i64),
    #[error("{0}")]
    Validation(String),
}

/// In-memory список записей одного типа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordList<T> {
    items: Vec<T>,
    /// Последний выданный ID (мс)
    last_issued: i64,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            last_issued: 0,
        }
    }
}

impl<T: Record> RecordList<T> {
    /// Создать список из начального набора (например, демо-данных)
    pub fn new(items: Vec<T>) -> Self {
        let last_issued = items
            .iter()
            .map(|r| r.record_id().value())
            .max()
            .unwrap_or(0);
        Self { items, last_issued }
    }

    /// Выдать новый ID на основе времени
    ///
    /// Если в ту же миллисекунду уже был выдан ID, берётся следующий.
    pub fn next_id(&mut self, now_millis: i64) -> T::Id {
        let value = now_millis.max(self.last_issued + 1);
        self.last_issued = value;
        T::Id::new(value)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.items.iter().any(|r| r.record_id() == id)
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|r| r.record_id() == id)
    }

    pub fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|r| r.record_id() == id)
    }

    /// Записи, удовлетворяющие условию
    pub fn filter_by<P>(&self, predicate: P) -> Vec<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().filter(|r| predicate(r)).collect()
    }

    /// Добавить запись в конец списка
    pub fn insert(&mut self, record: T) -> Result<T::Id, RecordListError> {
        let id = record.record_id();
        if self.contains(id) {
            return Err(RecordListError::Duplicate(id.value()));
        }
        self.last_issued = self.last_issued.max(id.value());
        self.items.push(record);
        Ok(id)
    }

    /// Заменить запись с тем же ID (позиция в списке сохраняется)
    pub fn replace(&mut self, record: T) -> Result<(), RecordListError> {
        let id = record.record_id();
        match self.items.iter_mut().find(|r| r.record_id() == id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(RecordListError::NotFound(id.value())),
        }
    }

    /// Удалить запись (фильтрация списка)
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let position = self.items.iter().position(|r| r.record_id() == id)?;
        Some(self.items.remove(position))
    }

    /// Удалить все записи, удовлетворяющие условию; возвращает количество
    pub fn remove_where<P>(&mut self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|r| !predicate(r));
        before - self.items.len()
    }
}

impl<T: FormRecord> RecordList<T> {
    /// Сохранить форму: без ID — создание, с ID — изменение
    ///
    /// При ошибке валидации список не меняется.
    pub fn save(
        &mut self,
        id: Option<T::Id>,
        dto: &T::Dto,
        now_millis: i64,
    ) -> Result<T::Id, RecordListError> {
        match id {
            None => {
                let candidate = self.peek_id(now_millis);
                let record =
                    T::from_dto(candidate, dto).map_err(RecordListError::Validation)?;
                record.validate().map_err(RecordListError::Validation)?;
                let issued = self.next_id(now_millis);
                debug_assert_eq!(issued, candidate);
                self.insert(record)
            }
            Some(id) => {
                let mut record = self
                    .get(id)
                    .cloned()
                    .ok_or(RecordListError::NotFound(id.value()))?;
                record.apply_dto(dto).map_err(RecordListError::Validation)?;
                record.validate().map_err(RecordListError::Validation)?;
                self.replace(record)?;
                Ok(id)
            }
        }
    }

    /// Форма для записи; пустая форма, если ID не задан или запись не найдена
    pub fn dto_for(&self, id: Option<T::Id>) -> T::Dto {
        id.and_then(|id| self.get(id))
            .map(T::to_dto)
            .unwrap_or_default()
    }

    fn peek_id(&self, now_millis: i64) -> T::Id {
        T::Id::new(now_millis.max(self.last_issued + 1))
    }
}

impl<'a, T> IntoIterator for &'a RecordList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::aggregate_id!(NoteId);

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: NoteId,
        text: String,
    }

    #[derive(Debug, Clone, Default)]
    struct NoteDto {
        text: String,
    }

    impl Record for Note {
        type Id = NoteId;
        fn record_id(&self) -> NoteId {
            self.id
        }
    }

    impl FormRecord for Note {
        type Dto = NoteDto;

        fn from_dto(id: NoteId, dto: &NoteDto) -> Result<Self, String> {
            Ok(Self {
                id,
                text: dto.text.clone(),
            })
        }

        fn apply_dto(&mut self, dto: &NoteDto) -> Result<(), String> {
            self.text = dto.text.clone();
            Ok(())
        }

        fn to_dto(&self) -> NoteDto {
            NoteDto {
                text: self.text.clone(),
            }
        }

        fn validate(&self) -> Result<(), String> {
            crate::shared::form_input::require("Текст", &self.text)
        }
    }

    fn dto(text: &str) -> NoteDto {
        NoteDto {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_ids_are_unique_within_same_millisecond() {
        let mut list: RecordList<Note> = RecordList::default();
        let a = list.save(None, &dto("a"), 1_000).unwrap();
        let b = list.save(None, &dto("b"), 1_000).unwrap();
        let c = list.save(None, &dto("c"), 999).unwrap();
        assert_eq!(a, NoteId(1_000));
        assert_eq!(b, NoteId(1_001));
        assert_eq!(c, NoteId(1_002));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_seeded_list_continues_after_max_id() {
        let mut list = RecordList::new(vec![Note {
            id: NoteId(5_000),
            text: "seed".into(),
        }]);
        assert_eq!(list.next_id(10), NoteId(5_001));
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut list: RecordList<Note> = RecordList::default();
        let first = list.save(None, &dto("first"), 1).unwrap();
        let second = list.save(None, &dto("second"), 2).unwrap();
        list.save(Some(first), &dto("changed"), 3).unwrap();
        assert_eq!(list.items()[0].text, "changed");
        assert_eq!(list.items()[1].id, second);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_invalid_form_leaves_list_untouched() {
        let mut list: RecordList<Note> = RecordList::default();
        let id = list.save(None, &dto("ok"), 1).unwrap();
        let before = list.clone();

        let err = list.save(None, &dto(" "), 2).unwrap_err();
        assert!(matches!(err, RecordListError::Validation(_)));
        let err = list.save(Some(id), &dto(""), 3).unwrap_err();
        assert!(matches!(err, RecordListError::Validation(_)));
        assert_eq!(list, before);
    }

    #[test]
    fn test_update_missing_record() {
        let mut list: RecordList<Note> = RecordList::default();
        let err = list.save(Some(NoteId(7)), &dto("x"), 1).unwrap_err();
        assert_eq!(err, RecordListError::NotFound(7));
        assert_eq!(err.to_string(), "Запись с ID 7 не найдена");
    }

    #[test]
    fn test_insert_duplicate() {
        let mut list: RecordList<Note> = RecordList::default();
        let note = Note {
            id: NoteId(1),
            text: "a".into(),
        };
        list.insert(note.clone()).unwrap();
        assert_eq!(list.insert(note), Err(RecordListError::Duplicate(1)));
    }

    #[test]
    fn test_remove_filters_list() {
        let mut list: RecordList<Note> = RecordList::default();
        let a = list.save(None, &dto("a"), 1).unwrap();
        let b = list.save(None, &dto("b"), 2).unwrap();
        assert_eq!(list.remove(a).map(|n| n.text), Some("a".to_string()));
        assert!(list.remove(a).is_none());
        assert!(list.contains(b));
        assert_eq!(list.remove_where(|n| n.text == "b"), 1);
        assert!(list.is_empty());
    }

    #[test]
    fn test_dto_for() {
        let mut list: RecordList<Note> = RecordList::default();
        let a = list.save(None, &dto("a"), 1).unwrap();
        assert_eq!(list.dto_for(Some(a)).text, "a");
        assert_eq!(list.dto_for(None).text, "");
        assert_eq!(list.dto_for(Some(NoteId(99))).text, "");
    }
}
