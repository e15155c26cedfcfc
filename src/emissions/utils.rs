// Formatierung der Ergebnisse für die Anzeige

/// Text der Ergebniszeile vor der ersten Berechnung
pub const INITIAL_RESULT_LABEL: &str = "Your CO2 emissions: 0 kg";

/// Ergebniszeile mit genau zwei Nachkommastellen
/// Rundung: Standard-Formatierung von f64 (exakter Binärwert, Gleichstand -> gerade)
pub fn format_result_label(total_kg: f64) -> String {
    format!("Your CO2 emissions: {:.2} kg", total_kg)
}

/// Einzelwert, z.B. "Transport: 1.20 kg"
pub fn format_breakdown_line(name: &str, kg: f64) -> String {
    format!("{}: {:.2} kg", name, kg)
}

pub fn format_offset_suggestion(trees: f64) -> String {
    format!("Offset suggestion: plant {:.1} trees per year", trees)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_label_two_decimals() {
        assert_eq!(format_result_label(1.0), "Your CO2 emissions: 1.00 kg");
        assert_eq!(format_result_label(8.3), "Your CO2 emissions: 8.30 kg");
        assert_eq!(
            format_result_label(0.12 * -5.0 + 1.0),
            "Your CO2 emissions: 0.40 kg"
        );
        assert_eq!(format_result_label(1234.5678), "Your CO2 emissions: 1234.57 kg");
    }

    #[test]
    fn test_breakdown_and_offset_lines() {
        assert_eq!(format_breakdown_line("Food", 2.5), "Food: 2.50 kg");
        assert_eq!(
            format_offset_suggestion(121.18),
            "Offset suggestion: plant 121.2 trees per year"
        );
    }
}
