//! PageFrame — корневая обёртка страницы во вкладке.
//!
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="banking--module" category=PAGE_CAT_MODULE>
//!         ...
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id в формате `{entity}--{category}`
    page_id: &'static str,
    /// Одна из констант PAGE_CAT_*
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {}", page_id);

    let class = match category {
        PAGE_CAT_MODULE => "page page--module",
        PAGE_CAT_USECASE => "page page--usecase",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
