use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::distribution::MoveDirection;
use crate::models::{MacroInput, MacroKey};

/// diet-split — split a daily calorie target across meals and macronutrients.
#[derive(Parser, Debug)]
#[command(name = "diet-split")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the meal plan JSON file.
    #[arg(short, long, env = "DIET_SPLIT_FILE", default_value = "meal_plan.json")]
    pub file: String,

    /// Log rebalancing details.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show meals, macros, and generation readiness.
    Show,

    /// Start a new plan file.
    Init {
        /// Daily calorie target.
        #[arg(long, default_value_t = 2000)]
        calories: u32,

        /// Body weight in kg (0 if unknown).
        #[arg(long, default_value_t = 0.0)]
        weight: f64,

        /// Number of meals per day.
        #[arg(long)]
        meals: Option<usize>,

        /// Overwrite an existing plan file.
        #[arg(long)]
        force: bool,
    },

    /// Change the daily calorie target.
    Target { calories: u32 },

    /// Change the body weight in kg.
    Weight { kg: f64 },

    /// Set a meal's calories and rebalance the other unlocked meals.
    Edit {
        /// Meal position (1-based), name, or key.
        meal: String,
        calories: String,
    },

    /// Append an empty meal.
    Add {
        #[arg(long)]
        name: Option<String>,
    },

    /// Remove a meal and spread its calories over the unlocked meals.
    Remove { meal: String },

    /// Move a meal up or down.
    Move {
        meal: String,
        direction: MoveDirection,
    },

    /// Lock or unlock a meal.
    Lock { meal: String },

    /// Rename a meal.
    Rename { meal: String, name: String },

    /// Describe what a meal should contain.
    Describe { meal: String, description: String },

    /// Replace the meals with a template (name or meal count).
    Template { name: String },

    /// Set a macro as percentage, grams, or g/kg.
    Macro {
        key: MacroKey,
        input: MacroInput,
        value: String,
    },

    /// Lock or unlock a macro.
    MacroLock { key: MacroKey },

    /// Reset macros to the 30/40/30 default.
    MacroReset {
        /// Restore the last balanced split instead.
        #[arg(long)]
        last_good: bool,
    },

    /// Undo the last edit.
    Undo,

    /// Redo the last undone edit.
    Redo,

    /// Export the meal table as CSV.
    Export { path: PathBuf },

    /// Edit the plan with interactive prompts.
    Interactive,
}

impl Default for Command {
    fn default() -> Self {
        Command::Show
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_macro_command() {
        let cli = Cli::try_parse_from(["diet-split", "macro", "protein", "pct", "40"]).unwrap();
        match cli.command {
            Some(Command::Macro { key, input, value }) => {
                assert_eq!(key, MacroKey::Protein);
                assert_eq!(input, MacroInput::Percentage);
                assert_eq!(value, "40");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_move_command() {
        let cli =
            Cli::try_parse_from(["diet-split", "-f", "plan.json", "move", "lunch", "up"]).unwrap();
        assert_eq!(cli.file, "plan.json");
        assert!(matches!(
            cli.command,
            Some(Command::Move {
                direction: MoveDirection::Up,
                ..
            })
        ));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
