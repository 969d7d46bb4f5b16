use leptos::prelude::*;

/// Поле даты с нативным календарём
///
/// Значение в формате yyyy-mm-dd; пустая строка — дата не задана.
#[component]
pub fn DateField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                type="date"
                class="form__input form__input--date"
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </div>
    }
}
