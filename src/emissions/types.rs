// Grundlegende Datentypen für die Emissionsberechnung
// Alle Mengen in kg CO2 pro Tag

use std::fmt;

/// Ernährungsweise mit fester täglicher CO2-Pauschale
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FoodCategory {
    #[default]
    MeatBased,
    Vegetarian,
    Vegan,
}

impl FoodCategory {
    /// Reihenfolge wie in der Auswahlliste
    pub const ALL: [FoodCategory; 3] = [
        FoodCategory::MeatBased,
        FoodCategory::Vegetarian,
        FoodCategory::Vegan,
    ];

    /// Tägliche Emission der Kategorie in kg CO2
    pub fn daily_kg(self) -> f64 {
        match self {
            FoodCategory::MeatBased => 2.5,
            FoodCategory::Vegetarian => 1.5,
            FoodCategory::Vegan => 1.0,
        }
    }

    /// Text für die Auswahlliste
    pub fn label(self) -> &'static str {
        match self {
            FoodCategory::MeatBased => "Meat-based (2.5 kg)",
            FoodCategory::Vegetarian => "Vegetarian (1.5 kg)",
            FoodCategory::Vegan => "Vegan (1.0 kg)",
        }
    }
}

/// Numerische Eingabefelder des Formulars
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputField {
    Transport,
    Electricity,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Transport => f.write_str("transport km per day"),
            InputField::Electricity => f.write_str("electricity kWh per day"),
        }
    }
}

/// Ergebnis einer Berechnung, aufgeteilt nach Quelle (kg CO2 pro Tag)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmissionBreakdown {
    pub transport_kg: f64,
    pub electricity_kg: f64,
    pub food_kg: f64,
}

impl EmissionBreakdown {
    pub fn total_kg(&self) -> f64 {
        self.transport_kg + self.electricity_kg + self.food_kg
    }

    /// Beschriftete Einzelwerte, Reihenfolge wie im Formular
    pub fn entries(&self) -> [(&'static str, f64); 3] {
        [
            ("Transport", self.transport_kg),
            ("Electricity", self.electricity_kg),
            ("Food", self.food_kg),
        ]
    }

    /// Balkenlängen 0.0..=1.0 relativ zum größten Einzelwert
    /// Negative Werte ergeben leere Balken
    pub fn bar_shares(&self) -> [f64; 3] {
        let values = self.entries().map(|(_, kg)| kg.max(0.0));
        let max = values.iter().fold(0.0_f64, |a, &b| a.max(b));

        if max <= 0.0 || !max.is_finite() {
            return [0.0; 3];
        }
        values.map(|kg| kg / max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_category() {
        assert_eq!(FoodCategory::default(), FoodCategory::MeatBased);
        assert_eq!(FoodCategory::ALL[0], FoodCategory::default());
    }

    #[test]
    fn test_bar_shares() {
        let b = EmissionBreakdown {
            transport_kg: 1.0,
            electricity_kg: 4.0,
            food_kg: 2.0,
        };
        assert_eq!(b.bar_shares(), [0.25, 1.0, 0.5]);

        let negative = EmissionBreakdown {
            transport_kg: -0.6,
            electricity_kg: 0.0,
            food_kg: 1.0,
        };
        assert_eq!(negative.bar_shares(), [0.0, 0.0, 1.0]);

        let empty = EmissionBreakdown {
            transport_kg: -2.0,
            electricity_kg: 0.0,
            food_kg: 0.0,
        };
        assert_eq!(empty.bar_shares(), [0.0; 3]);
    }

    #[test]
    fn test_category_labels() {
        let labels: Vec<_> = FoodCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            ["Meat-based (2.5 kg)", "Vegetarian (1.5 kg)", "Vegan (1.0 kg)"]
        );
    }
}
