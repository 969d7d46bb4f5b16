use crate::domain::a006_bank_transaction::ui::details::BankTransactionDetails;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::table_totals_row::TableTotalsRow;
use crate::shared::icons::icon;
use crate::shared::record_form::{confirm_and_remove, delete_record_question};
use contracts::domain::a005_bank_account::aggregate::{BankAccount, BankAccountId};
use contracts::domain::a006_bank_transaction::aggregate::{BankTransaction, BankTransactionId};
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::shared::form_input::format_date;
use contracts::shared::i18n::t;
use contracts::shared::record_list::RecordList;
use leptos::prelude::*;
use rust_decimal::Decimal;
use thaw::*;

/// Отметить операцию сверенной (или снять отметку)
///
/// Список не трогается, если отметка уже такая.
fn set_reconciled(
    transactions: RwSignal<RecordList<BankTransaction>>,
    id: BankTransactionId,
    reconciled: bool,
) {
    let changed = transactions
        .with_untracked(|l| l.get(id).is_some_and(|tx| tx.reconciled != reconciled));
    if !changed {
        return;
    }
    transactions.update(|l| {
        if let Some(tx) = l.get_mut(id) {
            tx.reconciled = reconciled;
            tx.base.before_write();
        }
    });
}

#[component]
#[allow(non_snake_case)]
pub fn BankTransactionList(
    transactions: RwSignal<RecordList<BankTransaction>>,
    accounts: RwSignal<RecordList<BankAccount>>,
) -> impl IntoView {
    let notifications = use_notifications();
    let editing = RwSignal::new(None::<Option<BankTransactionId>>);
    let account_filter_text = RwSignal::new(String::new());
    let account_filter =
        Signal::derive(move || BankAccountId::from_string(&account_filter_text.get()).ok());
    let unreconciled_only = RwSignal::new(false);

    let delete = move |id: BankTransactionId| {
        let question = transactions.with_untracked(|l| l.get(id).map(delete_record_question));
        if let Some(question) = question {
            confirm_and_remove(transactions, id, &question, notifications);
        }
    };

    let is_visible = move |tx: &BankTransaction| {
        account_filter.get().map_or(true, |a| tx.bank_account_id == a)
            && (!unreconciled_only.get() || !tx.reconciled)
    };

    let rows = move || {
        transactions.with(|list| {
            let mut visible: Vec<&BankTransaction> = list.iter().filter(|t| is_visible(*t)).collect();
            visible.sort_by(|a, b| b.date.cmp(&a.date));
            visible
                .into_iter()
                .map(|tx| {
                    let id = tx.base.id;
                    let date = tx.date;
                    let code = tx.base.code.clone();
                    let description = tx.base.description.clone();
                    let signed = tx.signed_amount();
                    let reconciled = RwSignal::new(tx.reconciled);
                    Effect::new(move |_| set_reconciled(transactions, id, reconciled.get()));
                    let account = accounts.with(|l| {
                        l.get(tx.bank_account_id)
                            .map(|a| a.base.description.clone())
                            .unwrap_or_else(|| "—".to_string())
                    });
                    view! {
                        <TableRow>
                            <TableCell>
                                <TableCellLayout>{format_date(date)}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>{code}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>{account}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>{description}</TableCellLayout>
                            </TableCell>
                            <TableCellMoney value=Signal::derive(move || Some(signed)) color_by_sign=true />
                            <TableCell>
                                <Checkbox checked=reconciled />
                            </TableCell>
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

    let visible_total = Signal::derive(move || {
        transactions.with(|l| {
            l.iter()
                .filter(|t| is_visible(*t))
                .map(BankTransaction::signed_amount)
                .sum::<Decimal>()
        })
    });

    view! {
        <div class="section" id=format!("{}--list", BankTransaction::full_name())>
            <PageHeader
                title=BankTransaction::list_name()
                subtitle=Signal::derive(move || {
                    let open = transactions.with(|l| l.iter().filter(|t| !t.reconciled).count());
                    format!("Не сверено: {}", open)
                })
            >
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Select value=account_filter_text>
                        <option value="">"Все счета"</option>
                        {move || accounts.with(|l| l.iter().map(|a| view! {
                            <option value=a.base.id.as_string()>{a.base.description.clone()}</option>
                        }).collect_view())}
                    </Select>
                    <Checkbox checked=unreconciled_only label="Только несверенные" />
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
                <Table attr:id=BankTransaction::full_name() attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=100.0>"Дата"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>"Документ"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=160.0>"Счёт"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=220.0>"Назначение"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Сумма"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=70.0>"Сверено"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {rows}
                        <TableTotalsRow>
                            <TableCell attr:colspan="4">{t("totals.total")}</TableCell>
                            <TableCellMoney
                                value=Signal::derive(move || Some(visible_total.get()))
                                color_by_sign=true
                                bold=true
                            />
                            <TableCell attr:colspan="2">""</TableCell>
                        </TableTotalsRow>
                    </TableBody>
                </Table>
            </div>

            {move || editing.get().map(|id| view! {
                <BankTransactionDetails
                    list=transactions
                    accounts=accounts
                    id=id
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
        </div>
    }
}
