//! Zustand des Rechner-Formulars, unabhängig von egui.
//!
//! `CalculatorForm` besitzt die Eingabetexte, die gewählte Kategorie und das
//! letzte erfolgreiche Ergebnis. Die Oberfläche ruft nur `compute`, `reset`
//! und `dismiss_error` auf.

use crate::emissions::*;
use crate::error::{CalcError, Result};

#[derive(Debug, Default)]
pub struct CalculatorForm {
    // Eingabefelder
    pub transport_input: String,
    pub electricity_input: String,
    pub food: FoodCategory,

    // Ergebnis der letzten erfolgreichen Berechnung
    last_result_kg: Option<f64>,
    last_breakdown: Option<EmissionBreakdown>,

    // Offener Fehlerdialog
    error: Option<CalcError>,
}

impl CalculatorForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Liest beide Felder, berechnet die Summe und merkt sich das Ergebnis.
    /// Bei einem Fehler bleibt das vorherige Ergebnis unverändert und der
    /// Fehler wird für den Dialog gespeichert.
    pub fn compute(&mut self) -> Result<f64> {
        match self.evaluate() {
            Ok(breakdown) => {
                let total = breakdown.total_kg();
                self.last_breakdown = Some(breakdown);
                self.last_result_kg = Some(total);
                tracing::info!(
                    total_kg = total,
                    food = ?self.food,
                    "emissions calculated"
                );
                Ok(total)
            }
            Err(e) => {
                match &e {
                    CalcError::InvalidNumericInput { field } => {
                        tracing::warn!(%field, "rejected input");
                    }
                }
                tracing::debug!(
                    transport = %self.transport_input,
                    electricity = %self.electricity_input,
                    "raw input"
                );
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    fn evaluate(&self) -> Result<EmissionBreakdown> {
        let transport_km = parse_quantity(&self.transport_input, InputField::Transport)?;
        let electricity_kwh = parse_quantity(&self.electricity_input, InputField::Electricity)?;
        let breakdown = calculate_emissions(transport_km, electricity_kwh, self.food);

        // Jeder Term bleibt endlich, nur die Summe kann überlaufen
        if !breakdown.total_kg().is_finite() {
            return Err(CalcError::InvalidNumericInput {
                field: InputField::Electricity,
            });
        }
        Ok(breakdown)
    }

    /// Setzt Eingaben und Ergebnis auf den Startzustand zurück
    pub fn reset(&mut self) {
        *self = Self::default();
        tracing::info!("form reset");
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    pub fn last_result_kg(&self) -> Option<f64> {
        self.last_result_kg
    }

    pub fn last_breakdown(&self) -> Option<&EmissionBreakdown> {
        self.last_breakdown.as_ref()
    }

    /// Angezeigte Ergebniszeile
    pub fn result_label(&self) -> String {
        match self.last_result_kg {
            Some(total) => format_result_label(total),
            None => INITIAL_RESULT_LABEL.to_string(),
        }
    }

    /// Entfällt, wenn die Baumanzahl nicht mehr darstellbar ist
    pub fn offset_suggestion(&self) -> Option<String> {
        self.last_result_kg
            .and_then(trees_to_offset)
            .map(format_offset_suggestion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(transport: &str, electricity: &str, food: FoodCategory) -> CalculatorForm {
        CalculatorForm {
            transport_input: transport.to_string(),
            electricity_input: electricity.to_string(),
            food,
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let f = CalculatorForm::new();
        assert_eq!(f.food, FoodCategory::MeatBased);
        assert_eq!(f.result_label(), "Your CO2 emissions: 0 kg");
        assert!(f.last_result_kg().is_none());
        assert!(f.error().is_none());
        assert!(f.offset_suggestion().is_none());
    }

    #[test]
    fn test_error_is_stored_until_dismissed() {
        let mut f = form("abc", "5", FoodCategory::Vegetarian);
        assert!(f.compute().is_err());
        assert_eq!(f.error().unwrap().to_string(), "Please enter valid numbers!");
        assert_eq!(f.error().unwrap().title(), "Input Error");
        f.dismiss_error();
        assert!(f.error().is_none());
    }

    #[test]
    fn test_compute_does_not_touch_inputs() {
        let mut f = form("10", "5", FoodCategory::MeatBased);
        f.compute().unwrap();
        assert_eq!(f.transport_input, "10");
        assert_eq!(f.electricity_input, "5");
        assert_eq!(f.food, FoodCategory::MeatBased);
    }
}
