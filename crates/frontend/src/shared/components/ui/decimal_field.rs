use contracts::shared::form_input::parse_decimal_or_zero;
use leptos::prelude::*;
use rust_decimal::Decimal;
use thaw::TableCell;

/// Числовое поле
///
/// Значение разбирается при потере фокуса; нечисловой ввод превращается в 0.
/// Ограничение `min` только подсказка браузеру, проверка делается в `validate()`.
#[component]
pub fn DecimalField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<Decimal>,
    on_change: Callback<Decimal>,
    #[prop(optional)] min: Option<&'static str>,
    #[prop(optional)] step: Option<&'static str>,
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    let input = view! {
        <input
            type="number"
            class="form__input form__input--number"
            min=min
            step=step.unwrap_or("0.01")
            prop:value=move || value.get().normalize().to_string()
            on:change=move |ev| on_change.run(parse_decimal_or_zero(&event_target_value(&ev)))
        />
    };

    if compact {
        view! { <TableCell class="table__cell--input">{input}</TableCell> }.into_any()
    } else {
        view! {
            <div class="form__group">
                <label class="form__label">{label}</label>
                {input}
            </div>
        }
        .into_any()
    }
}
