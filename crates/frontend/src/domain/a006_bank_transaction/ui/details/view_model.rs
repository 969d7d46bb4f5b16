use crate::layout::notification_service::NotificationService;
use crate::shared::clock::today;
use crate::shared::record_form::save_record;
use contracts::domain::a006_bank_transaction::aggregate::{
    BankTransaction, BankTransactionDto, BankTransactionId,
};
use contracts::shared::form_input::format_date;
use contracts::shared::record_list::RecordList;
use leptos::prelude::*;
use rust_decimal::Decimal;

/// ViewModel формы банковской операции
///
/// `external_ref` есть только у операций, загруженных из банка.
#[derive(Clone, Copy)]
pub struct BankTransactionDetailsViewModel {
    list: RwSignal<RecordList<BankTransaction>>,
    pub id: Option<BankTransactionId>,
    pub form: RwSignal<BankTransactionDto>,
    pub error: RwSignal<Option<String>>,
    pub external_ref: StoredValue<Option<String>>,
}

impl BankTransactionDetailsViewModel {
    pub fn new(list: RwSignal<RecordList<BankTransaction>>, id: Option<BankTransactionId>) -> Self {
        let (mut dto, external_ref) = list.with_untracked(|l| {
            let external_ref = id
                .and_then(|id| l.get(id))
                .and_then(|t| t.external_ref.clone());
            (l.dto_for(id), external_ref)
        });
        if id.is_none() {
            dto.date = format_date(today());
        }
        Self {
            list,
            id,
            form: RwSignal::new(dto),
            error: RwSignal::new(None),
            external_ref: StoredValue::new(external_ref),
        }
    }

    pub fn is_imported(&self) -> bool {
        self.external_ref.with_value(|r| r.is_some())
    }

    pub fn title(&self) -> String {
        match (self.id, self.is_imported()) {
            (None, _) => "Новая банковская операция".to_string(),
            (Some(_), true) => "Операция из банка".to_string(),
            (Some(_), false) => "Редактирование банковской операции".to_string(),
        }
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| {
            !f.description.trim().is_empty()
                && f.bank_account_id.is_some()
                && !f.date.is_empty()
                && f.amount > Decimal::ZERO
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
