use crate::domain::a001_account::ui::list::AccountList;
use crate::domain::a002_invoice::ui::list::InvoiceList;
use crate::shared::mock_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_MODULE;
use leptos::prelude::*;

#[component]
pub fn AccountingPage() -> impl IntoView {
    let accounts = RwSignal::new(mock_data::accounts());
    let invoices = RwSignal::new(mock_data::invoices());

    view! {
        <PageFrame page_id="accounting--module" category=PAGE_CAT_MODULE>
            <AccountList accounts=accounts invoices=invoices />
            <InvoiceList invoices=invoices accounts=accounts />
        </PageFrame>
    }
}
