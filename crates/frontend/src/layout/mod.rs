pub mod global_context;
pub mod left;
pub mod notification_service;
pub mod tabs;

use global_context::AppGlobalContext;
use left::{Left, Navbar};
use leptos::prelude::*;
use notification_service::NotificationToasts;
use tabs::{TabBar, TabPage};

/// Каркас приложения
///
/// ```text
/// +------------------------------------------+
/// |              top-header                  |
/// +------------------------------------------+
/// |  Navbar   |   TabBar + TabPage...         |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <div class="top-header">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Скрыть навигацию" } else { "Показать навигацию" }
                >
                    "☰"
                </button>
                <span class="top-header__title">"Business Admin"</span>
            </div>

            <div class="app-body">
                <Left>
                    <Navbar />
                </Left>

                <div class="app-main" data-zone="center">
                    <TabBar />
                    <For
                        each=move || ctx.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab| view! { <TabPage tab=tab tabs_store=ctx /> }
                    />
                    <Show when=move || ctx.opened.with(|tabs| tabs.is_empty())>
                        <div class="placeholder">"Выберите раздел в меню слева"</div>
                    </Show>
                </div>
            </div>

            <NotificationToasts />
        </div>
    }
}
