// Berechnung der täglichen CO2-Emission
// Feste lineare Faktoren, keine Konfiguration

use super::types::{EmissionBreakdown, FoodCategory};

/// kg CO2 pro gefahrenem Kilometer
pub const TRANSPORT_KG_PER_KM: f64 = 0.12;

/// kg CO2 pro verbrauchter Kilowattstunde
pub const ELECTRICITY_KG_PER_KWH: f64 = 0.92;

/// Jährliche CO2-Aufnahme eines Baumes in kg
pub const TREE_ABSORPTION_KG_PER_YEAR: f64 = 25.0;

const DAYS_PER_YEAR: f64 = 365.0;

/// Gewichtete Summe der drei Faktoren
pub fn calculate_emissions(
    transport_km: f64,
    electricity_kwh: f64,
    food: FoodCategory,
) -> EmissionBreakdown {
    EmissionBreakdown {
        transport_kg: transport_km * TRANSPORT_KG_PER_KM,
        electricity_kg: electricity_kwh * ELECTRICITY_KG_PER_KWH,
        food_kg: food.daily_kg(),
    }
}

/// Anzahl Bäume, die ein Jahr mit diesem Tageswert ausgleichen würden.
/// `None`, wenn der Wert nicht mehr darstellbar ist.
pub fn trees_to_offset(daily_total_kg: f64) -> Option<f64> {
    if daily_total_kg <= 0.0 {
        return Some(0.0);
    }
    // Erst teilen, damit große Tageswerte nicht überlaufen
    let trees = daily_total_kg / TREE_ABSORPTION_KG_PER_YEAR * DAYS_PER_YEAR;
    trees.is_finite().then_some(trees)
}
