use crate::layout::global_context::AppGlobalContext;
use crate::layout::notification_service::NotificationService;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Toast notifications for every page
    provide_context(NotificationService::new());

    view! {
        <Shell />
    }
}
