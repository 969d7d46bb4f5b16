use crate::domain::a002_invoice::ui::details::InvoiceDetails;
use crate::layout::notification_service::use_notifications;
use crate::shared::clock::today;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::table_totals_row::TableTotalsRow;
use crate::shared::icons::icon;
use crate::shared::record_form::{confirm_and_remove, delete_record_question};
use contracts::domain::a001_account::aggregate::Account;
use contracts::domain::a002_invoice::aggregate::{Invoice, InvoiceId, InvoiceStatus};
use contracts::domain::common::AggregateRoot;
use contracts::shared::form_input::format_date;
use contracts::shared::i18n::t;
use contracts::shared::money::format_currency;
use contracts::shared::record_list::RecordList;
use leptos::prelude::*;
use rust_decimal::Decimal;
use thaw::*;

fn status_color(status: InvoiceStatus) -> BadgeColor {
    match status {
        InvoiceStatus::Paid => BadgeColor::Success,
        InvoiceStatus::Overdue => BadgeColor::Danger,
        InvoiceStatus::Sent => BadgeColor::Brand,
        InvoiceStatus::Draft | InvoiceStatus::Cancelled => BadgeColor::Subtle,
    }
}

/// Список счетов покупателям
///
/// Просроченность считается на сегодня и не хранится в записи.
#[component]
#[allow(non_snake_case)]
pub fn InvoiceList(
    invoices: RwSignal<RecordList<Invoice>>,
    accounts: RwSignal<RecordList<Account>>,
) -> impl IntoView {
    let notifications = use_notifications();
    let editing = RwSignal::new(None::<Option<InvoiceId>>);
    let status_filter = RwSignal::new(String::new());

    let delete = move |id: InvoiceId| {
        let question = invoices.with_untracked(|l| l.get(id).map(delete_record_question));
        if let Some(question) = question {
            confirm_and_remove(invoices, id, &question, notifications);
        }
    };

    let account_name = move |id| {
        accounts.with(|l| {
            l.get(id)
                .map(|a: &Account| a.base.description.clone())
                .unwrap_or_else(|| "—".to_string())
        })
    };

    let open_total = Signal::derive(move || {
        invoices.with(|l| {
            l.iter()
                .filter(|i| i.is_open())
                .map(|i| i.amount)
                .sum::<Decimal>()
        })
    });

    let rows = move || {
        let today = today();
        let filter = InvoiceStatus::parse(&status_filter.get());
        invoices.with(|list| {
            list.iter()
                .filter(|i| filter.map_or(true, |s| i.effective_status(today) == s))
                .map(|i| {
                    let id = i.base.id;
                    let status = i.effective_status(today);
                    let code = i.base.code.clone();
                    let account_id = i.account_id;
                    let issue_date = i.issue_date;
                    let due_date = i.due_date;
                    let amount = i.amount;
                    view! {
                        <TableRow class=if status == InvoiceStatus::Overdue { "table__row--warning" } else { "" }>
                            <TableCell>
                                <TableCellLayout truncate=true>{code}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>{account_name(account_id)}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>{format_date(issue_date)}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>{format_date(due_date)}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <Badge appearance=BadgeAppearance::Tint color=status_color(status)>
                                        {status.label()}
                                    </Badge>
                                </TableCellLayout>
                            </TableCell>
                            <TableCellMoney value=Signal::derive(move || Some(amount)) />
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
        <div class="section" id=format!("{}--list", Invoice::full_name())>
            <PageHeader
                title=Invoice::list_name()
                subtitle=Signal::derive(move || format!("К оплате: {}", format_currency(open_total.get())))
            >
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <Select value=status_filter>
                        <option value="">"Все статусы"</option>
                        {InvoiceStatus::all().iter().map(|s| view! {
                            <option value=s.as_str()>{s.label()}</option>
                        }).collect_view()}
                    </Select>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(None))
                    >
                        {icon("plus")}
                        {t("action.create")}
                    </Button>
                </Flex>
            </PageHeader>

            <div class="table-wrapper">
                <Table attr:id=Invoice::full_name() attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=110.0>"Номер"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=180.0>"Покупатель"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Дата"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Срок оплаты"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>"Статус"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Сумма"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {rows}
                        <TableTotalsRow>
                            <TableCell attr:colspan="5">{t("totals.total")}</TableCell>
                            <TableCellMoney
                                value=Signal::derive(move || Some(invoices.with(|l| l.iter().map(|i| i.amount).sum::<Decimal>())))
                                bold=true
                            />
                            <TableCell>""</TableCell>
                        </TableTotalsRow>
                    </TableBody>
                </Table>
            </div>

            {move || editing.get().map(|id| view! {
                <InvoiceDetails
                    list=invoices
                    accounts=accounts
                    id=id
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
        </div>
    }
}
