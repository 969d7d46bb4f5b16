use super::view_model::PurchaseOrderDetailsViewModel;
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::ui::DecimalField;
use crate::shared::icons::icon;
use contracts::shared::i18n::t;
use contracts::shared::line_totals::line_totals;
use leptos::prelude::*;
use thaw::*;

/// Табличная часть «Товары»
#[component]
pub fn PurchaseOrderLines(vm: PurchaseOrderDetailsViewModel) -> impl IntoView {
    // строки перерисовываются только при добавлении/удалении
    let line_count = Memo::new(move |_| vm.line_count());

    let row = move |index: usize| {
        let line_total = Signal::derive(move || line_totals(&vm.line(index)).map(|t| t.total));
        view! {
            <TableRow>
                <TableCell>{index + 1}</TableCell>
                <TableCell class="table__cell--input">
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || vm.line(index).product
                        on:input=move |ev| {
                            let product = event_target_value(&ev);
                            vm.update_line(index, |l| l.product = product);
                        }
                    />
                </TableCell>
                <DecimalField
                    compact=true
                    label="Количество"
                    min="0"
                    value=Signal::derive(move || vm.line(index).quantity)
                    on_change=Callback::new(move |v| vm.update_line(index, |l| l.quantity = v))
                />
                <DecimalField
                    compact=true
                    label="Цена"
                    min="0"
                    value=Signal::derive(move || vm.line(index).unit_price)
                    on_change=Callback::new(move |v| vm.update_line(index, |l| l.unit_price = v))
                />
                <DecimalField
                    compact=true
                    label="Налог, %"
                    min="0"
                    value=Signal::derive(move || vm.line(index).tax_rate)
                    on_change=Callback::new(move |v| vm.update_line(index, |l| l.tax_rate = v))
                />
                <TableCellMoney value=line_total />
                <TableCell>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| vm.remove_line(index)>
                        {icon("x")}
                    </Button>
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell resizable=false min_width=40.0>"№"</TableHeaderCell>
                    <TableHeaderCell resizable=false min_width=200.0>"Товар"</TableHeaderCell>
                    <TableHeaderCell resizable=false min_width=90.0>"Количество"</TableHeaderCell>
                    <TableHeaderCell resizable=false min_width=100.0>"Цена"</TableHeaderCell>
                    <TableHeaderCell resizable=false min_width=80.0>"Налог, %"</TableHeaderCell>
                    <TableHeaderCell resizable=false min_width=110.0>"Сумма"</TableHeaderCell>
                    <TableHeaderCell resizable=false min_width=50.0></TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || (0..line_count.get()).map(row).collect_view()}
            </TableBody>
        </Table>
        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.add_line()>
            {icon("plus")}
            {t("action.add_line")}
        </Button>
    }
}
