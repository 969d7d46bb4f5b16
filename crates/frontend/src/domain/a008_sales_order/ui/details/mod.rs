mod lines;
mod view;
mod view_model;

pub use view::SalesOrderDetails;
pub use view_model::SalesOrderDetailsViewModel;
