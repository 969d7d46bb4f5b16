//! Tab content registry — маппинг tab.key → View

use crate::pages::{
    AccountingPage, AdministrationPage, BankingPage, ProjectsPage, PurchasingPage, SalesPage,
};
use leptos::prelude::*;

/// Рендерит контент вкладки по её ключу
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "accounting" => view! { <AccountingPage /> }.into_any(),
        "projects" => view! { <ProjectsPage /> }.into_any(),
        "banking" => view! { <BankingPage /> }.into_any(),
        "purchasing" => view! { <PurchasingPage /> }.into_any(),
        "sales" => view! { <SalesPage /> }.into_any(),
        "administration" => view! { <AdministrationPage /> }.into_any(),
        unknown => {
            log::warn!("unknown tab key: {}", unknown);
            view! {
                <div class="placeholder">{format!("Раздел «{}» не найден", unknown)}</div>
            }
            .into_any()
        }
    }
}
