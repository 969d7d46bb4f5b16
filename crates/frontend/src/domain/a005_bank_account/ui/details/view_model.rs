use crate::layout::notification_service::NotificationService;
use crate::shared::record_form::save_record;
use contracts::domain::a005_bank_account::aggregate::{BankAccount, BankAccountDto, BankAccountId};
use contracts::shared::record_list::RecordList;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct BankAccountDetailsViewModel {
    list: RwSignal<RecordList<BankAccount>>,
    pub id: Option<BankAccountId>,
    pub form: RwSignal<BankAccountDto>,
    pub error: RwSignal<Option<String>>,
}

impl BankAccountDetailsViewModel {
    pub fn new(list: RwSignal<RecordList<BankAccount>>, id: Option<BankAccountId>) -> Self {
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
            "Редактирование банковского счёта".to_string()
        } else {
            "Новый банковский счёт".to_string()
        }
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| {
            !f.code.trim().is_empty()
                && !f.description.trim().is_empty()
                && !f.bank_name.trim().is_empty()
                && f.currency.trim().len() == 3
        })
    }

    pub fn save_command(&self, notifications: NotificationService, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        match save_record(self.list, self.id, &current, notifications) {
            Ok(_) => on_saved.run(()),
            Err(e) => self.error.set(Some(e)),
        }
    }
}
