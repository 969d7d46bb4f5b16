use crate::domain::a003_project::ui::list::ProjectList;
use crate::domain::a004_time_entry::ui::list::TimeEntryList;
use crate::shared::mock_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_MODULE;
use leptos::prelude::*;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    // заказчики нужны только для выбора в форме проекта
    let accounts = RwSignal::new(mock_data::accounts());
    let projects = RwSignal::new(mock_data::projects());
    let time_entries = RwSignal::new(mock_data::time_entries());

    view! {
        <PageFrame page_id="projects--module" category=PAGE_CAT_MODULE>
            <ProjectList projects=projects accounts=accounts time_entries=time_entries />
            <TimeEntryList entries=time_entries projects=projects />
        </PageFrame>
    }
}
