// Haupt-Emissions-Modul
// Exportiert alle öffentlichen Typen und Funktionen

pub mod types;
pub mod validation;
pub mod calculation;
pub mod utils;

// Re-exports für einfachen Zugriff
pub use types::{EmissionBreakdown, FoodCategory, InputField};
pub use calculation::{calculate_emissions, trees_to_offset};
pub use utils::{
    format_breakdown_line,
    format_offset_suggestion,
    format_result_label,
    INITIAL_RESULT_LABEL,
};
pub use validation::{is_pending_invalid, parse_quantity};
