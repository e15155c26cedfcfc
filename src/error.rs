use thiserror::Error;

use crate::emissions::InputField;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Eines der Zahlenfelder ist leer oder keine gültige Zahl.
    /// Der Text ist die Meldung für den Dialog, das Feld landet nur im Log.
    #[error("Please enter valid numbers!")]
    InvalidNumericInput { field: InputField },
}

impl CalcError {
    /// Titel des Fehlerdialogs
    pub fn title(&self) -> &'static str {
        match self {
            CalcError::InvalidNumericInput { .. } => "Input Error",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
