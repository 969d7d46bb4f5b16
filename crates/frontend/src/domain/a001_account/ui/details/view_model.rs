use crate::layout::notification_service::NotificationService;
use crate::shared::record_form::save_record;
use contracts::domain::a001_account::aggregate::{Account, AccountDto, AccountId};
use contracts::shared::record_list::RecordList;
use leptos::prelude::*;

/// ViewModel формы контрагента
#[derive(Clone, Copy)]
pub struct AccountDetailsViewModel {
    list: RwSignal<RecordList<Account>>,
    pub id: Option<AccountId>,
    pub form: RwSignal<AccountDto>,
    pub error: RwSignal<Option<String>>,
}

impl AccountDetailsViewModel {
    pub fn new(list: RwSignal<RecordList<Account>>, id: Option<AccountId>) -> Self {
        Self {
            list,
            id,
            form: RwSignal::new(list.with_untracked(|l| l.dto_for(id))),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn title(&self) -> String {
        if self.is_edit_mode() {
            "Редактирование контрагента".to_string()
        } else {
            "Новый контрагент".to_string()
        }
    }

    pub fn is_form_valid(&self) -> bool {
        self.form
            .with(|f| !f.code.trim().is_empty() && !f.description.trim().is_empty())
    }

    /// Save form data to the page list
    pub fn save_command(&self, notifications: NotificationService, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        match save_record(self.list, self.id, &current, notifications) {
            Ok(_) => on_saved.run(()),
            Err(e) => self.error.set(Some(e)),
        }
    }
}
