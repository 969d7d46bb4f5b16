use super::response::{SyncFailure, SyncResponse};
use crate::domain::a005_bank_account::aggregate::BankAccount;
use crate::domain::a006_bank_transaction::aggregate::BankTransaction;
use crate::domain::common::BaseAggregate;
use crate::shared::record_list::RecordList;
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Итог применения выписки к спискам страницы
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncOutcome {
    /// Новых операций добавлено
    pub added: usize,
    /// Операций пропущено (уже были в списке)
    pub skipped: usize,
    /// Счетов синхронизировано успешно
    pub synced_accounts: usize,
    pub failures: Vec<SyncFailure>,
}

impl SyncOutcome {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Влить ответ банка в списки счетов и операций
///
/// Операция пропускается, если её `external_ref` уже есть в списке операций
/// или уже загружался на этот счёт раньше (`BankAccount::imported_refs`).
/// Поэтому повторная синхронизация за тот же период ничего не дублирует,
/// даже если загруженную операцию успели удалить. Остаток счёта меняется
/// только на суммы добавленных операций.
pub fn apply_sync(
    accounts: &mut RecordList<BankAccount>,
    transactions: &mut RecordList<BankTransaction>,
    response: &SyncResponse,
    now_millis: i64,
) -> SyncOutcome {
    let mut known: HashSet<String> = transactions
        .iter()
        .filter_map(|t| t.external_ref.clone())
        .collect();
    let mut outcome = SyncOutcome {
        failures: response.failures.clone(),
        ..Default::default()
    };

    for result in &response.results {
        // счёт могли удалить, пока шёл запрос
        let Some(account) = accounts.get_mut(result.bank_account_id) else {
            continue;
        };

        let mut balance_delta = Decimal::ZERO;
        for synced in &result.transactions {
            let new_in_list = known.insert(synced.external_ref.clone());
            let new_for_account = account.imported_refs.insert(synced.external_ref.clone());
            if !(new_in_list && new_for_account) {
                outcome.skipped += 1;
                continue;
            }
            let id = transactions.next_id(now_millis);
            let tx = BankTransaction {
                base: BaseAggregate::new(
                    id,
                    format!("TX-{}", id.0),
                    synced.description.clone(),
                ),
                bank_account_id: result.bank_account_id,
                date: synced.date,
                amount: synced.amount,
                direction: synced.direction,
                reconciled: false,
                external_ref: Some(synced.external_ref.clone()),
            };
            balance_delta += tx.signed_amount();
            if transactions.insert(tx).is_ok() {
                outcome.added += 1;
            }
        }

        account.balance += balance_delta;
        account.last_synced_at = Some(response.synced_at);
        account.base.metadata.touch();
        outcome.synced_accounts += 1;
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_bank_account::aggregate::{BankAccountDto, BankAccountId};
    use crate::domain::a006_bank_transaction::aggregate::Direction;
    use crate::usecases::u501_sync_with_banks::response::{AccountSyncResult, SyncedTransaction};
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn accounts() -> RecordList<BankAccount> {
        let mut list = RecordList::default();
        list.save(
            None,
            &BankAccountDto {
                code: "40702-001".into(),
                description: "Основной".into(),
                bank_name: "First Bank".into(),
                balance: dec!(1000),
                ..Default::default()
            },
            100,
        )
        .unwrap();
        list
    }

    fn synced(reference: &str, amount: Decimal, direction: Direction) -> SyncedTransaction {
        SyncedTransaction {
            external_ref: reference.into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            description: "Выписка".into(),
            amount,
            direction,
        }
    }

    fn response(account: BankAccountId, txs: Vec<SyncedTransaction>) -> SyncResponse {
        SyncResponse {
            synced_at: Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap(),
            results: vec![AccountSyncResult {
                bank_account_id: account,
                transactions: txs,
            }],
            failures: vec![],
        }
    }

    #[test]
    fn test_apply_adds_transactions_and_moves_balance() {
        let mut accs = accounts();
        let account_id = accs.items()[0].base.id;
        let mut txs = RecordList::default();
        let resp = response(
            account_id,
            vec![
                synced("FB-1", dec!(250), Direction::Credit),
                synced("FB-2", dec!(40.5), Direction::Debit),
            ],
        );

        let outcome = apply_sync(&mut accs, &mut txs, &resp, 5_000);
        assert_eq!(outcome.added, 2);
        assert_eq!(outcome.skipped, 0);
        assert_eq!(outcome.synced_accounts, 1);
        assert_eq!(txs.len(), 2);

        let account = accs.get(account_id).unwrap();
        assert_eq!(account.balance, dec!(1209.5));
        assert_eq!(account.last_synced_at, Some(resp.synced_at));
        assert!(txs.iter().all(|t| t.external_ref.is_some() && !t.reconciled));
    }

    #[test]
    fn test_repeated_sync_is_idempotent() {
        let mut accs = accounts();
        let account_id = accs.items()[0].base.id;
        let mut txs = RecordList::default();
        let resp = response(account_id, vec![synced("FB-1", dec!(250), Direction::Credit)]);

        apply_sync(&mut accs, &mut txs, &resp, 5_000);
        let again = apply_sync(&mut accs, &mut txs, &resp, 6_000);
        assert_eq!(again.added, 0);
        assert_eq!(again.skipped, 1);
        assert_eq!(txs.len(), 1);
        assert_eq!(accs.get(account_id).unwrap().balance, dec!(1250));
    }

    #[test]
    fn test_deleted_transaction_is_not_imported_again() {
        let mut accs = accounts();
        let account_id = accs.items()[0].base.id;
        let mut txs = RecordList::default();
        let resp = response(account_id, vec![synced("FB-1", dec!(250), Direction::Credit)]);

        apply_sync(&mut accs, &mut txs, &resp, 5_000);
        assert_eq!(accs.get(account_id).unwrap().balance, dec!(1250));

        let tx_id = txs.items()[0].base.id;
        assert!(txs.remove(tx_id).is_some());

        // тот же день, та же выписка
        let again = apply_sync(&mut accs, &mut txs, &resp, 6_000);
        assert_eq!(again.added, 0);
        assert_eq!(again.skipped, 1);
        assert!(txs.is_empty());
        let account = accs.get(account_id).unwrap();
        assert_eq!(account.balance, dec!(1250));
        assert!(account.imported_refs.contains("FB-1"));
    }

    #[test]
    fn test_deleted_account_is_ignored_and_failures_passed_through() {
        let mut accs = accounts();
        let mut txs = RecordList::default();
        let mut resp = response(BankAccountId(1), vec![synced("X-1", dec!(1), Direction::Credit)]);
        resp.failures.push(SyncFailure {
            bank_account_id: BankAccountId(2),
            message: "Банк недоступен".into(),
        });

        let outcome = apply_sync(&mut accs, &mut txs, &resp, 5_000);
        assert_eq!(outcome.added, 0);
        assert_eq!(outcome.synced_accounts, 0);
        assert!(outcome.has_failures());
        assert!(txs.is_empty());
    }
}
