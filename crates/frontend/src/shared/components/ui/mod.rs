pub mod date_field;
pub mod decimal_field;

pub use date_field::DateField;
pub use decimal_field::DecimalField;
