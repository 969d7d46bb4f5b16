use leptos::prelude::*;

/// Карточка показателя (остаток, итоги по часам и т.п.)
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    /// Уже отформатированное значение
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)] subtitle: Option<Signal<String>>,
    /// Подсветить как отрицательное/проблемное значение
    #[prop(optional)]
    negative: Option<Signal<bool>>,
) -> impl IntoView {
    let class = move || {
        if negative.map(|n| n.get()).unwrap_or(false) {
            "stat-card stat-card--error"
        } else {
            "stat-card"
        }
    };

    view! {
        <div class=class>
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{move || value.get()}</div>
            {subtitle.map(|s| view! {
                <div class="stat-card__subtitle">{move || s.get()}</div>
            })}
        </div>
    }
}
