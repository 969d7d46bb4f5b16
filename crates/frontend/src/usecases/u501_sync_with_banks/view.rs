use super::api;
use crate::layout::notification_service::use_notifications;
use crate::shared::client_log::log_to_server;
use crate::shared::clock::now_millis;
use crate::shared::icons::icon;
use contracts::domain::a005_bank_account::aggregate::BankAccount;
use contracts::domain::a006_bank_transaction::aggregate::BankTransaction;
use contracts::shared::i18n::t;
use contracts::shared::record_list::RecordList;
use contracts::usecases::u501_sync_with_banks::apply::{apply_sync, SyncOutcome};
use contracts::usecases::u501_sync_with_banks::request::SyncRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn outcome_message(outcome: &SyncOutcome) -> String {
    format!(
        "{}: счетов {}, новых операций {}, уже загружено {}",
        t("notify.sync_done"),
        outcome.synced_accounts,
        outcome.added,
        outcome.skipped
    )
}

/// Кнопка синхронизации активных счетов с банками
///
/// Ответ вливается в списки страницы; ошибки по отдельным банкам показываются
/// отдельными уведомлениями, повторов нет.
#[component]
pub fn SyncButton(
    accounts: RwSignal<RecordList<BankAccount>>,
    transactions: RwSignal<RecordList<BankTransaction>>,
) -> impl IntoView {
    let notifications = use_notifications();
    let syncing = RwSignal::new(false);

    let start = move || {
        if syncing.get_untracked() {
            return;
        }
        let request = accounts.with_untracked(|l| SyncRequest::for_active(l.iter()));
        if request.is_empty() {
            notifications.warning("Нет активных счетов для синхронизации");
            return;
        }

        syncing.set(true);
        spawn_local(async move {
            match api::sync_with_banks(&request).await {
                Ok(response) => {
                    let outcome = accounts
                        .try_update(|a| {
                            transactions.try_update(|tx| apply_sync(a, tx, &response, now_millis()))
                        })
                        .flatten();
                    // страницу могли закрыть, пока шёл запрос
                    if let Some(outcome) = outcome {
                        notifications.success(outcome_message(&outcome));
                        for failure in &outcome.failures {
                            let name = accounts.with_untracked(|l| {
                                l.get(failure.bank_account_id)
                                    .map(|a| a.base.description.clone())
                                    .unwrap_or_default()
                            });
                            notifications.error(format!("{}: {}", name, failure.message));
                        }
                    }
                }
                Err(e) => {
                    notifications.error(format!("{}: {}", t("notify.sync_failed"), e));
                    log_to_server("u501_sync_with_banks", &e);
                }
            }
            let _ = syncing.try_set(false);
        });
    };

    view! {
        <Button
            appearance=ButtonAppearance::Primary
            disabled=Signal::derive(move || syncing.get())
            on_click=move |_| start()
        >
            {icon("sync")}
            {move || if syncing.get() { "Синхронизация...".to_string() } else { t("action.sync").to_string() }}
        </Button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_message_lists_counts() {
        let outcome = SyncOutcome {
            added: 5,
            skipped: 2,
            synced_accounts: 2,
            failures: Vec::new(),
        };
        let message = outcome_message(&outcome);
        assert!(message.contains("счетов 2"));
        assert!(message.contains("новых операций 5"));
        assert!(message.contains("уже загружено 2"));
    }
}
