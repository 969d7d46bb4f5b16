//! Ячейка таблицы для денежных значений
//!
//! ```rust,ignore
//! <TableCellMoney value=Signal::derive(move || Some(invoice.amount)) />
//! <TableCellMoney value=balance color_by_sign=true bold=true />
//! ```

use contracts::shared::money::format_currency;
use leptos::prelude::*;
use rust_decimal::Decimal;
use thaw::*;

/// Сумма через `format_currency`, выровненная вправо; `None` показывается как «—»
#[component]
pub fn TableCellMoney(
    #[prop(into)] value: Signal<Option<Decimal>>,
    /// Положительные зелёным, отрицательные красным
    #[prop(optional)]
    color_by_sign: bool,
    #[prop(optional)] bold: bool,
) -> impl IntoView {
    let formatted_text = move || match value.get() {
        Some(v) => format_currency(v),
        None => "—".to_string(),
    };

    let cell_style = move || {
        let mut styles = Vec::new();
        if color_by_sign {
            if let Some(v) = value.get() {
                if v > Decimal::ZERO {
                    styles.push("color: var(--color-success-700)");
                } else if v < Decimal::ZERO {
                    styles.push("color: var(--color-error-700)");
                }
            }
        }
        if bold {
            styles.push("font-weight: 600");
        }
        styles.join("; ")
    };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>{formatted_text}</span>
        </TableCell>
    }
}
