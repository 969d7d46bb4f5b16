use crate::layout::notification_service::NotificationService;
use crate::shared::clock::today;
use crate::shared::record_form::save_record;
use contracts::domain::a004_time_entry::aggregate::{TimeEntry, TimeEntryDto, TimeEntryId};
use contracts::shared::form_input::format_date;
use contracts::shared::record_list::RecordList;
use leptos::prelude::*;
use rust_decimal::Decimal;

#[derive(Clone, Copy)]
pub struct TimeEntryDetailsViewModel {
    list: RwSignal<RecordList<TimeEntry>>,
    pub id: Option<TimeEntryId>,
    pub form: RwSignal<TimeEntryDto>,
    pub error: RwSignal<Option<String>>,
}

impl TimeEntryDetailsViewModel {
    pub fn new(list: RwSignal<RecordList<TimeEntry>>, id: Option<TimeEntryId>) -> Self {
        let mut dto = list.with_untracked(|l| l.dto_for(id));
        if id.is_none() {
            dto.date = format_date(today());
        }
        Self {
            list,
            id,
            form: RwSignal::new(dto),
            error: RwSignal::new(None),
        }
    }

    pub fn title(&self) -> String {
        if self.id.is_some() {
            "Запись времени".to_string()
        } else {
            "Новая запись времени".to_string()
        }
    }

    pub fn is_form_valid(&self) -> bool {
        self.form
            .with(|f| f.project_id.is_some() && !f.date.is_empty() && f.hours > Decimal::ZERO)
    }

    pub fn save_command(&self, notifications: NotificationService, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        match save_record(self.list, self.id, &current, notifications) {
            Ok(_) => on_saved.run(()),
            Err(e) => self.error.set(Some(e)),
        }
    }
}
