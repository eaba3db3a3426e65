pub mod constants;
pub mod input;
pub mod macros;
pub mod meals;
pub mod templates;

pub use constants::*;
pub use input::{clamp_percentage, coerce_number, non_negative, round_to, whole_number};
pub use macros::{MacroDistribution, MacroOutcome};
pub use meals::{MealPlanStructure, MoveDirection, Readiness, RebalanceOutcome};
pub use templates::{find_template, for_meal_count, MealTemplate, STANDARD, TEMPLATES};
