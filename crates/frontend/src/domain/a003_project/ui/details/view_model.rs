use crate::layout::notification_service::NotificationService;
use crate::shared::clock::today;
use crate::shared::record_form::save_record;
use contracts::domain::a003_project::aggregate::{Project, ProjectDto, ProjectId};
use contracts::shared::form_input::format_date;
use contracts::shared::record_list::RecordList;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ProjectDetailsViewModel {
    list: RwSignal<RecordList<Project>>,
    pub id: Option<ProjectId>,
    pub form: RwSignal<ProjectDto>,
    pub error: RwSignal<Option<String>>,
}

impl ProjectDetailsViewModel {
    pub fn new(list: RwSignal<RecordList<Project>>, id: Option<ProjectId>) -> Self {
        let mut dto = list.with_untracked(|l| l.dto_for(id));
        if id.is_none() {
            dto.start_date = format_date(today());
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
            "Редактирование проекта".to_string()
        } else {
            "Новый проект".to_string()
        }
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| {
            !f.code.trim().is_empty() && !f.description.trim().is_empty() && !f.start_date.is_empty()
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
