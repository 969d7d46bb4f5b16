mod view;
mod view_model;

pub use view::ProjectDetails;
pub use view_model::ProjectDetailsViewModel;
