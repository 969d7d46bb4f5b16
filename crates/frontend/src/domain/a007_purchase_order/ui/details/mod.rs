mod lines;
mod view;
mod view_model;

pub use view::PurchaseOrderDetails;
pub use view_model::PurchaseOrderDetailsViewModel;
