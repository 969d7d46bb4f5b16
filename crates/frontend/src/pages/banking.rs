use crate::domain::a005_bank_account::ui::list::BankAccountList;
use crate::domain::a006_bank_transaction::ui::list::BankTransactionList;
use crate::shared::mock_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_MODULE;
use crate::usecases::u501_sync_with_banks::SyncButton;
use leptos::prelude::*;

#[component]
pub fn BankingPage() -> impl IntoView {
    let accounts = RwSignal::new(mock_data::bank_accounts());
    let transactions = RwSignal::new(mock_data::bank_transactions());

    view! {
        <PageFrame page_id="banking--module" category=PAGE_CAT_MODULE>
            <div class="page__toolbar">
                <SyncButton accounts=accounts transactions=transactions />
            </div>
            <BankAccountList accounts=accounts transactions=transactions />
            <BankTransactionList transactions=transactions accounts=accounts />
        </PageFrame>
    }
}
