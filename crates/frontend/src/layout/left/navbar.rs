use crate::layout::global_context::{module_title, AppGlobalContext, MODULE_KEYS};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Меню разделов: клик открывает раздел во вкладке
#[component]
pub fn Navbar() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <nav class="main-nav-bar">
            <ul>
                {MODULE_KEYS.iter().map(|key| {
                    let key: &'static str = key;
                    let title = module_title(key);
                    let title_for_click = title.clone();
                    let is_active = move || tabs_store.active.get().as_deref() == Some(key);
                    view! {
                        <li
                            class:active=is_active
                            on:click=move |_| tabs_store.open_tab(key, &title_for_click)
                        >
                            {icon(key)}
                            <span>{title}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
