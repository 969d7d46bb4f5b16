use crate::layout::notification_service::NotificationService;
use crate::shared::clock::today;
use crate::shared::record_form::save_record;
use contracts::domain::a002_invoice::aggregate::{Invoice, InvoiceDto, InvoiceId};
use contracts::shared::form_input::format_date;
use contracts::shared::record_list::RecordList;
use leptos::prelude::*;

/// Срок оплаты по умолчанию, дней
const DEFAULT_PAYMENT_TERM_DAYS: i64 = 30;

#[derive(Clone, Copy)]
pub struct InvoiceDetailsViewModel {
    list: RwSignal<RecordList<Invoice>>,
    pub id: Option<InvoiceId>,
    pub form: RwSignal<InvoiceDto>,
    pub error: RwSignal<Option<String>>,
}

impl InvoiceDetailsViewModel {
    pub fn new(list: RwSignal<RecordList<Invoice>>, id: Option<InvoiceId>) -> Self {
        let mut dto = list.with_untracked(|l| l.dto_for(id));
        if id.is_none() {
            let issue = today();
            dto.issue_date = format_date(issue);
            dto.due_date = format_date(issue + chrono::Duration::days(DEFAULT_PAYMENT_TERM_DAYS));
        }
        Self {
            list,
            id,
            form: RwSignal::new(dto),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn title(&self) -> String {
        if self.is_edit_mode() {
            "Редактирование счёта".to_string()
        } else {
            "Новый счёт".to_string()
        }
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| {
            !f.code.trim().is_empty()
                && !f.description.trim().is_empty()
                && f.account_id.is_some()
                && !f.issue_date.is_empty()
                && !f.due_date.is_empty()
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
