use leptos::prelude::*;
use thaw::*;

/// Строка итогов таблицы
///
/// # Пример использования
/// ```rust,ignore
/// <TableTotalsRow>
///     <TableCell attr:colspan="3">{t("totals.total")}</TableCell>
///     <TableCellMoney value=total bold=true />
/// </TableTotalsRow>
/// ```
#[component]
pub fn TableTotalsRow(children: Children) -> impl IntoView {
    view! {
        <TableRow class="table__totals-row">
            {children()}
        </TableRow>
    }
}
