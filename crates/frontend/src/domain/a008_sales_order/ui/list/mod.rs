use crate::domain::a008_sales_order::ui::details::SalesOrderDetails;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::table_totals_row::TableTotalsRow;
use crate::shared::icons::icon;
use crate::shared::record_form::{confirm_and_remove, delete_record_question};
use contracts::domain::a001_account::aggregate::Account;
use contracts::domain::a008_sales_order::aggregate::{
    SalesOrder, SalesOrderId, SalesOrderStatus,
};
use contracts::domain::common::AggregateRoot;
use contracts::shared::form_input::format_date;
use contracts::shared::i18n::t;
use contracts::shared::line_totals::OrderTotals;
use contracts::shared::record_list::RecordList;
use leptos::prelude::*;
use thaw::*;

fn status_color(status: SalesOrderStatus) -> BadgeColor {
    match status {
        SalesOrderStatus::Draft => BadgeColor::Subtle,
        SalesOrderStatus::Confirmed => BadgeColor::Brand,
        SalesOrderStatus::Shipped => BadgeColor::Warning,
        SalesOrderStatus::Invoiced => BadgeColor::Success,
        SalesOrderStatus::Cancelled => BadgeColor::Danger,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SalesOrderList(
    orders: RwSignal<RecordList<SalesOrder>>,
    accounts: RwSignal<RecordList<Account>>,
) -> impl IntoView {
    let notifications = use_notifications();
    let editing = RwSignal::new(None::<Option<SalesOrderId>>);

    let delete = move |id: SalesOrderId| {
        let question = orders.with_untracked(|l| l.get(id).map(delete_record_question));
        if let Some(question) = question {
            confirm_and_remove(orders, id, &question, notifications);
        }
    };

    // отменённые заказы в итог не входят
    let grand_totals = Signal::derive(move || {
        orders.with(|l| {
            l.iter()
                .filter(|o| o.status != SalesOrderStatus::Cancelled)
                .map(|o| o.totals)
                .sum::<OrderTotals>()
        })
    });

    let rows = move || {
        orders.with(|list| {
            list.iter()
                .map(|o| {
                    let id = o.base.id;
                    let totals = o.totals;
                    let code = o.base.code.clone();
                    let order_date = o.order_date;
                    let description = o.base.description.clone();
                    let status = o.status;
                    let customer = accounts.with(|l| {
                        l.get(o.customer_id)
                            .map(|a| a.base.description.clone())
                            .unwrap_or_else(|| "—".to_string())
                    });
                    view! {
                        <TableRow>
                            <TableCell>
                                <TableCellLayout truncate=true>{code}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>{format_date(order_date)}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>{customer}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>{description}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <Badge appearance=BadgeAppearance::Tint color=status_color(status)>
                                        {status.label()}
                                    </Badge>
                                </TableCellLayout>
                            </TableCell>
                            <TableCellMoney value=Signal::derive(move || Some(totals.subtotal)) />
                            <TableCellMoney value=Signal::derive(move || Some(totals.discount)) />
                            <TableCellMoney value=Signal::derive(move || Some(totals.tax)) />
                            <TableCellMoney value=Signal::derive(move || Some(totals.total)) bold=true />
                            <TableCell>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| editing.set(Some(Some(id)))
                                    attr:title=t("action.edit")
                                >
                                    {icon("edit")}
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| delete(id)
                                    attr:title=t("action.delete")
                                >
                                    {icon("delete")}
                                </Button>
                            </TableCell>
                        </TableRow>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="section" id=format!("{}--list", SalesOrder::full_name())>
            <PageHeader
                title=SalesOrder::list_name()
                subtitle=Signal::derive(move || format!("Всего: {}", orders.with(|l| l.len())))
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| editing.set(Some(None))
                >
                    {icon("plus")}
                    {t("action.create")}
                </Button>
            </PageHeader>

            <div class="table-wrapper">
                <Table attr:id=SalesOrder::full_name() attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=110.0>"Номер"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Дата"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=160.0>"Покупатель"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=180.0>"Описание"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>"Статус"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>{t("totals.subtotal")}</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>{t("totals.discount")}</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>{t("totals.tax")}</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>{t("totals.total")}</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {rows}
                        <TableTotalsRow>
                            <TableCell attr:colspan="5">{t("totals.total")}</TableCell>
                            <TableCellMoney value=Signal::derive(move || Some(grand_totals.get().subtotal)) bold=true />
                            <TableCellMoney value=Signal::derive(move || Some(grand_totals.get().discount)) bold=true />
                            <TableCellMoney value=Signal::derive(move || Some(grand_totals.get().tax)) bold=true />
                            <TableCellMoney value=Signal::derive(move || Some(grand_totals.get().total)) bold=true />
                            <TableCell>""</TableCell>
                        </TableTotalsRow>
                    </TableBody>
                </Table>
            </div>

            {move || editing.get().map(|id| view! {
                <SalesOrderDetails
                    list=orders
                    accounts=accounts
                    id=id
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
        </div>
    }
}
