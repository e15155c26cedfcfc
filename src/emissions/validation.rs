// Eingabe-Validierung: Text aus den Eingabefeldern -> Zahl

use super::types::InputField;
use crate::error::{CalcError, Result};

/// Liest eine Dezimalzahl aus einem Eingabefeld.
/// Punkt als Dezimaltrenner, unabhängig von der Spracheinstellung.
/// Leerzeichen am Rand werden ignoriert, NaN und Unendlich sind ungültig.
/// Negative Werte werden bewusst akzeptiert.
pub fn parse_quantity(text: &str, field: InputField) -> Result<f64> {
    parse_finite(text).ok_or(CalcError::InvalidNumericInput { field })
}

/// Für den Live-Hinweis unter dem Feld: leer zählt noch nicht als Fehler
pub fn is_pending_invalid(text: &str) -> bool {
    !text.trim().is_empty() && parse_finite(text).is_none()
}

fn parse_finite(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
