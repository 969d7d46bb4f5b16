//! Account Details UI Module
//!
//! MVVM:
//! - view_model.rs: состояние формы и команды
//! - view.rs: компонент Leptos

mod view;
mod view_model;

pub use view::AccountDetails;
pub use view_model::AccountDetailsViewModel;
