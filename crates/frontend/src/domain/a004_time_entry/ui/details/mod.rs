mod view;
mod view_model;

pub use view::TimeEntryDetails;
pub use view_model::TimeEntryDetailsViewModel;
