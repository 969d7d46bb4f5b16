mod view;
mod view_model;

pub use view::BankAccountDetails;
pub use view_model::BankAccountDetailsViewModel;
