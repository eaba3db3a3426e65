pub mod cli;
pub mod distribution;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use distribution::{MacroDistribution, MacroOutcome, MealPlanStructure, RebalanceOutcome};
pub use error::{PlanError, Result};
pub use models::{MacroInput, MacroKey, MacroTarget, MealEntry};
pub use state::PlanSession;
