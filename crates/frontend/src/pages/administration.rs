use crate::shared::mock_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::roles::ui::list::RolesList;
use crate::system::users::ui::list::UsersList;
use leptos::prelude::*;

#[component]
pub fn AdministrationPage() -> impl IntoView {
    let users = RwSignal::new(mock_data::users());
    let roles = RwSignal::new(mock_data::roles());

    view! {
        <PageFrame page_id="administration--system" category=PAGE_CAT_SYSTEM>
            <UsersList users=users roles=roles />
            <RolesList roles=roles users=users />
        </PageFrame>
    }
}
