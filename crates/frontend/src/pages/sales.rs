use crate::domain::a008_sales_order::ui::list::SalesOrderList;
use crate::shared::mock_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_MODULE;
use leptos::prelude::*;

#[component]
pub fn SalesPage() -> impl IntoView {
    let accounts = RwSignal::new(mock_data::accounts());
    let orders = RwSignal::new(mock_data::sales_orders());

    view! {
        <PageFrame page_id="sales--module" category=PAGE_CAT_MODULE>
            <SalesOrderList orders=orders accounts=accounts />
        </PageFrame>
    }
}
