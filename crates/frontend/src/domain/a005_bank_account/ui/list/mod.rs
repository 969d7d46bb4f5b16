use crate::domain::a005_bank_account::ui::details::BankAccountDetails;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::TableCellMoney;
use crate::shared::icons::icon;
use crate::shared::record_form::{confirm_and_remove, delete_record_question};
use contracts::domain::a005_bank_account::aggregate::{total_balance, BankAccount, BankAccountId};
use contracts::domain::a006_bank_transaction::aggregate::{net_flow, BankTransaction};
use contracts::domain::common::AggregateRoot;
use contracts::shared::i18n::t;
use contracts::shared::money::format_number_with_decimals;
use contracts::shared::record_list::RecordList;
use leptos::prelude::*;
use thaw::*;

/// Валюты активных счетов в порядке первого появления
fn active_currencies(accounts: &RecordList<BankAccount>) -> Vec<String> {
    let mut currencies: Vec<String> = Vec::new();
    for account in accounts.iter().filter(|a| a.is_active) {
        if !currencies.contains(&account.currency) {
            currencies.push(account.currency.clone());
        }
    }
    currencies
}

#[component]
#[allow(non_snake_case)]
pub fn BankAccountList(
    accounts: RwSignal<RecordList<BankAccount>>,
    transactions: RwSignal<RecordList<BankTransaction>>,
) -> impl IntoView {
    let notifications = use_notifications();
    let editing = RwSignal::new(None::<Option<BankAccountId>>);

    let delete = move |id: BankAccountId| {
        let question = accounts.with_untracked(|l| l.get(id).map(delete_record_question));
        if let Some(question) = question {
            confirm_and_remove(accounts, id, &question, notifications);
        }
    };

    let balance_cards = move || {
        accounts.with(|list| {
            active_currencies(list)
                .into_iter()
                .map(|currency| {
                    let total = total_balance(list.iter(), &currency);
                    let value = format!("{} {}", format_number_with_decimals(total, 2, ' ', ','), currency);
                    view! {
                        <StatCard
                            label=format!("Остаток, {}", currency)
                            value=value
                            negative=Signal::derive(move || total.is_sign_negative())
                        />
                    }
                })
                .collect_view()
        })
    };

    let rows = move || {
        accounts.with(|list| {
            list.iter()
                .map(|a| {
                    let id = a.base.id;
                    let balance = a.balance;
                    let account_number = a.account_number().to_string();
                    let description = a.base.description.clone();
                    let bank_name = a.bank_name.clone();
                    let currency = a.currency.clone();
                    let is_active = a.is_active;
                    let flow = Signal::derive(move || transactions.with(|l| Some(net_flow(l.iter(), id))));
                    let synced = a
                        .last_synced_at
                        .map(|at| at.format("%d.%m.%Y %H:%M").to_string())
                        .unwrap_or_else(|| "никогда".to_string());
                    view! {
                        <TableRow class=if is_active { "" } else { "table__row--muted" }>
                            <TableCell>
                                <TableCellLayout truncate=true>{account_number}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>
                                    <span style="font-weight: 500;">{description}</span>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>{bank_name}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>{currency}</TableCellLayout>
                            </TableCell>
                            <TableCellMoney value=Signal::derive(move || Some(balance)) bold=true />
                            <TableCellMoney value=flow color_by_sign=true />
                            <TableCell>
                                <TableCellLayout>
                                    <Badge
                                        appearance=BadgeAppearance::Tint
                                        color=if is_active { BadgeColor::Success } else { BadgeColor::Subtle }
                                    >
                                        {if is_active { "Активен" } else { "Закрыт" }}
                                    </Badge>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>{synced}</TableCellLayout>
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

    view! {
        <div class="section" id=format!("{}--list", BankAccount::full_name())>
            <PageHeader title=BankAccount::list_name()>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| editing.set(Some(None))
                >
                    {icon("plus")}
                    {t("action.create")}
                </Button>
            </PageHeader>

            <div class="stat-cards">{balance_cards}</div>

            <div class="table-wrapper">
                <Table attr:id=BankAccount::full_name() attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=110.0>"Номер"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=180.0>"Наименование"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=140.0>"Банк"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=70.0>"Валюта"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Остаток"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Оборот"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Состояние"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=130.0>"Синхронизирован"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{rows}</TableBody>
                </Table>
            </div>

            {move || editing.get().map(|id| view! {
                <BankAccountDetails
                    list=accounts
                    id=id
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_bank_account::aggregate::BankAccountDto;
    use contracts::domain::common::FormRecord;
    use rust_decimal::Decimal;

    fn account(id: i64, currency: &str, active: bool) -> BankAccount {
        let dto = BankAccountDto {
            code: format!("ACC-{}", id),
            description: "Счёт".into(),
            bank_name: "Test Bank".into(),
            currency: currency.into(),
            balance: Decimal::ONE,
            is_active: active,
            comment: None,
        };
        BankAccount::from_dto(BankAccountId(id), &dto).expect("valid account")
    }

    #[test]
    fn test_active_currencies_skip_inactive_and_duplicates() {
        let list = RecordList::new(vec![
            account(1, "USD", true),
            account(2, "EUR", true),
            account(3, "USD", true),
            account(4, "GBP", false),
        ]);
        assert_eq!(active_currencies(&list), vec!["USD".to_string(), "EUR".to_string()]);
    }
}
