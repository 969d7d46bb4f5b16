//! Сохранение и удаление записей в списке страницы

use super::clock::now_millis;
use super::confirm::confirm;
use crate::layout::notification_service::NotificationService;
use contracts::domain::common::{AggregateRoot, FormRecord};
use contracts::shared::i18n::t;
use contracts::shared::record_list::{RecordList, RecordListError};
use leptos::prelude::*;

/// Сохранить форму в список; при успехе показать уведомление
///
/// Ошибка возвращается текстом для показа в форме, список при этом не меняется.
pub fn save_record<T>(
    list: RwSignal<RecordList<T>>,
    id: Option<T::Id>,
    dto: &T::Dto,
    notifications: NotificationService,
) -> Result<T::Id, String>
where
    T: FormRecord + Send + Sync + 'static,
{
    let result = list
        .try_update(|items| items.save(id, dto, now_millis()))
        .unwrap_or_else(|| Err(RecordListError::Validation("Список закрыт".to_string())));

    match result {
        Ok(saved_id) => {
            notifications.success(t("notify.saved"));
            Ok(saved_id)
        }
        Err(e) => Err(e.to_string()),
    }
}

/// Удалить запись после подтверждения
///
/// `message` — текст вопроса; возвращает `true`, если запись удалена.
pub fn confirm_and_remove<T>(
    list: RwSignal<RecordList<T>>,
    id: T::Id,
    message: &str,
    notifications: NotificationService,
) -> bool
where
    T: FormRecord + Send + Sync + 'static,
{
    if !confirm(message) {
        return false;
    }
    let removed = list.try_update(|items| items.remove(id)).flatten();
    if removed.is_some() {
        notifications.info(t("notify.deleted"));
        true
    } else {
        false
    }
}

/// Вопрос подтверждения удаления с названием записи
pub fn delete_question(name: &str) -> String {
    format!("{} «{}»", t("confirm.delete"), name)
}

/// Вопрос удаления записи агрегата: «Удалить запись? Счёт «INV-0001»»
pub fn delete_record_question<T: AggregateRoot>(record: &T) -> String {
    format!("{} {} «{}»", t("confirm.delete"), T::element_name(), record.code())
}

/// Сигнал поля формы для thaw-компонентов
///
/// Поле и форма синхронизируются в обе стороны через `Effect`:
/// правка в поле пишется в форму, сброс формы возвращается в поле.
pub fn bind_field<D, T>(form: RwSignal<D>, get: fn(&D) -> T, set: fn(&mut D, T)) -> RwSignal<T>
where
    D: Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let field = RwSignal::new(form.with_untracked(get));

    Effect::new(move |_| {
        let value = form.with(get);
        if field.with_untracked(|current| *current != value) {
            field.set(value);
        }
    });

    Effect::new(move |_| {
        let value = field.get();
        if form.with_untracked(|d| get(d) != value) {
            form.update(|d| set(d, value));
        }
    });

    field
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_account::aggregate::{Account, AccountDto, AccountId};

    #[test]
    fn test_delete_record_question_names_element_and_code() {
        let dto = AccountDto {
            code: "CUST-001".into(),
            description: "Acme Corp".into(),
            ..Default::default()
        };
        let account = Account::from_dto(AccountId(1), &dto).unwrap();
        assert_eq!(
            delete_record_question(&account),
            format!("{} Контрагент «CUST-001»", t("confirm.delete"))
        );
    }
}
