use crate::domain::a007_purchase_order::ui::list::PurchaseOrderList;
use crate::shared::mock_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_MODULE;
use leptos::prelude::*;

#[component]
pub fn PurchasingPage() -> impl IntoView {
    let accounts = RwSignal::new(mock_data::accounts());
    let orders = RwSignal::new(mock_data::purchase_orders());

    view! {
        <PageFrame page_id="purchasing--module" category=PAGE_CAT_MODULE>
            <PurchaseOrderList orders=orders accounts=accounts />
        </PageFrame>
    }
}
