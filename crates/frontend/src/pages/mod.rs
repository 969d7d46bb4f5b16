//! Вкладки модулей
//!
//! Каждая страница создаёт свои списки из тестовых данных; списки живут,
//! пока открыта вкладка.

mod accounting;
mod administration;
mod banking;
mod projects;
mod purchasing;
mod sales;

pub use accounting::AccountingPage;
pub use administration::AdministrationPage;
pub use banking::BankingPage;
pub use projects::ProjectsPage;
pub use purchasing::PurchasingPage;
pub use sales::SalesPage;
