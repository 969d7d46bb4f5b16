use leptos::prelude::*;

/// Заголовок страницы или раздела с кнопками справа
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional)] subtitle: Option<Signal<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h2 class="page-header__title">{title}</h2>
                {subtitle.map(|s| view! {
                    <div class="page-header__subtitle">{move || s.get()}</div>
                })}
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
