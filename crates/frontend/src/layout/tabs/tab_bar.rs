use crate::layout::global_context::AppGlobalContext;
use leptos::ev;
use leptos::prelude::*;

/// Полоса заголовков открытых вкладок
#[component]
pub fn TabBar() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="tab-bar">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| {
                    let key_for_active = tab.key.clone();
                    let is_active = Memo::new(move |_| {
                        tabs_store.active.get().as_deref() == Some(key_for_active.as_str())
                    });
                    let key_for_click = tab.key.clone();
                    let key_for_close = tab.key.clone();
                    view! {
                        <div
                            class="tab"
                            class:active=is_active
                            on:click=move |_| tabs_store.activate_tab(&key_for_click)
                        >
                            <span>{tab.title}</span>
                            <button
                                class="tab-close"
                                on:click=move |ev: ev::MouseEvent| {
                                    ev.stop_propagation();
                                    tabs_store.close_tab(&key_for_close);
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
