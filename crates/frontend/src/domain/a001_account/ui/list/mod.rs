use crate::domain::a001_account::ui::details::AccountDetails;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::TableCellMoney;
use crate::shared::icons::icon;
use crate::shared::record_form::{confirm_and_remove, delete_record_question};
use contracts::domain::a001_account::aggregate::{Account, AccountId, AccountKind};
use contracts::domain::a002_invoice::aggregate::{outstanding_for_account, Invoice};
use contracts::domain::common::AggregateRoot;
use contracts::shared::i18n::t;
use contracts::shared::record_list::RecordList;
use leptos::prelude::*;
use thaw::*;

/// Список контрагентов с задолженностью по счетам
#[component]
#[allow(non_snake_case)]
pub fn AccountList(
    accounts: RwSignal<RecordList<Account>>,
    invoices: RwSignal<RecordList<Invoice>>,
) -> impl IntoView {
    let notifications = use_notifications();
    // None — форма закрыта, Some(None) — новая запись
    let editing = RwSignal::new(None::<Option<AccountId>>);
    let kind_filter = RwSignal::new(String::new());

    let delete = move |id: AccountId| {
        let question = accounts.with_untracked(|l| l.get(id).map(delete_record_question));
        if let Some(question) = question {
            confirm_and_remove(accounts, id, &question, notifications);
        }
    };

    let rows = move || {
        let filter = AccountKind::parse(&kind_filter.get());
        accounts.with(|list| {
            list.iter()
                .filter(|a| filter.map_or(true, |k| a.kind == k))
                .map(|a| {
                    let id = a.base.id;
                    let is_customer = a.is_customer();
                    let kind_label = a.kind.label();
                    let code = a.base.code.clone();
                    let description = a.base.description.clone();
                    let email = a.email.clone().unwrap_or_default();
                    let tax_id = a.tax_id.clone().unwrap_or_default();
                    let outstanding = Signal::derive(move || {
                        invoices.with(|inv| Some(outstanding_for_account(inv.iter(), id)))
                    });
                    view! {
                        <TableRow>
                            <TableCell>
                                <TableCellLayout truncate=true>{code}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>
                                    <span style="font-weight: 500;">{description}</span>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <Badge
                                        appearance=BadgeAppearance::Tint
                                        color=if is_customer { BadgeColor::Brand } else { BadgeColor::Informative }
                                    >
                                        {kind_label}
                                    </Badge>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>{email}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>{tax_id}</TableCellLayout>
                            </TableCell>
                            <TableCellMoney value=outstanding />
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
        <div class="section" id=format!("{}--list", Account::full_name())>
            <PageHeader
                title=Account::list_name()
                subtitle=Signal::derive(move || format!("Всего: {}", accounts.with(|l| l.len())))
            >
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <Select value=kind_filter>
                        <option value="">"Все"</option>
                        {AccountKind::all().iter().map(|k| view! {
                            <option value=k.as_str()>{k.label()}</option>
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
                <Table attr:id=Account::full_name() attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=90.0>"Код"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=200.0>"Наименование"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>"Вид"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=160.0>"Email"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>"ИНН"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=130.0>"Долг по счетам"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{rows}</TableBody>
                </Table>
            </div>

            {move || editing.get().map(|id| view! {
                <AccountDetails
                    list=accounts
                    id=id
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
        </div>
    }
}
