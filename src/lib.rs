pub mod config;
pub mod emissions;
pub mod error;
pub mod form;
pub mod ui;

pub use error::{CalcError, Result};
pub use form::CalculatorForm;
