pub mod macros;
pub mod meal;

pub use macros::{MacroInput, MacroKey, MacroSplit, MacroTarget};
pub use meal::MealEntry;
