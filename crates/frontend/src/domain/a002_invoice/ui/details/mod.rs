mod view;
mod view_model;

pub use view::InvoiceDetails;
pub use view_model::InvoiceDetailsViewModel;
