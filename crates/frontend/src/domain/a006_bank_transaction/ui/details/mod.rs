mod view;
mod view_model;

pub use view::BankTransactionDetails;
pub use view_model::BankTransactionDetailsViewModel;
