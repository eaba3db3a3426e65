use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::distribution::constants::DEFAULT_DAILY_CALORIES;
use crate::distribution::input::non_negative;
use crate::distribution::templates::{for_meal_count, MealTemplate, STANDARD};
use crate::distribution::{
    MacroDistribution, MacroOutcome, MealPlanStructure, MoveDirection, Readiness,
    RebalanceOutcome,
};
use crate::error::{PlanError, Result};
use crate::models::{MacroInput, MacroKey};
use crate::state::History;

/// A discrete user edit to the meal structure.
#[derive(Debug, Clone, PartialEq)]
pub enum MealEdit {
    EditCalories { index: usize, calories: u32 },
    Add,
    Remove { index: usize },
    Move { index: usize, direction: MoveDirection },
    ToggleLock { index: usize },
    Rename { index: usize, name: String },
    Describe { index: usize, description: String },
}

/// A discrete user edit to one macro.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroEdit {
    pub key: MacroKey,
    pub input: MacroInput,
    pub value: f64,
}

/// Everything an undo step restores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSnapshot {
    #[serde(rename = "dailyCalories")]
    pub daily_calories: u32,

    #[serde(rename = "bodyWeightKg", default)]
    pub body_weight_kg: f64,

    pub meals: MealPlanStructure,

    #[serde(default)]
    pub macros: MacroDistribution,
}

/// Daily target, body weight, meals, macros, and their edit history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSession {
    plan: PlanSnapshot,

    #[serde(default)]
    history: History<PlanSnapshot>,
}

impl Default for PlanSession {
    fn default() -> Self {
        Self::new(DEFAULT_DAILY_CALORIES, 0.0)
    }
}

impl PlanSession {
    /// A fresh plan from the standard template and the default macro split.
    pub fn new(daily_calories: u32, body_weight_kg: f64) -> Self {
        let body_weight_kg = non_negative(body_weight_kg);
        let mut macros = MacroDistribution::default();
        macros.ensure_initialized(daily_calories, body_weight_kg);
        Self {
            plan: PlanSnapshot {
                daily_calories,
                body_weight_kg,
                meals: MealPlanStructure::from_template(&STANDARD, daily_calories),
                macros,
            },
            history: History::default(),
        }
    }

    pub fn plan(&self) -> &PlanSnapshot {
        &self.plan
    }

    pub fn daily_calories(&self) -> u32 {
        self.plan.daily_calories
    }

    pub fn body_weight_kg(&self) -> f64 {
        self.plan.body_weight_kg
    }

    pub fn meals(&self) -> &MealPlanStructure {
        &self.plan.meals
    }

    pub fn macros(&self) -> &MacroDistribution {
        &self.plan.macros
    }

    pub fn history(&self) -> &History<PlanSnapshot> {
        &self.history
    }

    /// Run an edit, recording the prior state only if something changed.
    fn tracked<R>(&mut self, edit: impl FnOnce(&mut PlanSnapshot) -> R) -> R {
        let before = self.plan.clone();
        let result = edit(&mut self.plan);
        if self.plan != before {
            self.history.record(before);
        }
        result
    }

    /// Change the daily calorie target and recompute meals and macros.
    pub fn set_daily_calories(&mut self, kcal: u32, edited: Option<usize>) -> RebalanceOutcome {
        self.tracked(|plan| {
            let previous = plan.daily_calories;
            let outcome = plan.meals.set_daily_target(previous, kcal, edited);
            plan.daily_calories = kcal;
            // A known target keeps the user's split; only a first target seeds the default.
            let seeded = (previous == 0 || plan.macros.is_empty())
                && plan.macros.ensure_initialized(kcal, plan.body_weight_kg);
            if !seeded {
                plan.macros.recompute(kcal, plan.body_weight_kg);
            }
            outcome
        })
    }

    pub fn set_body_weight(&mut self, kg: f64) {
        self.tracked(|plan| {
            plan.body_weight_kg = non_negative(kg);
            plan.macros.recompute(plan.daily_calories, plan.body_weight_kg);
        })
    }

    /// Apply one meal edit against the current daily target.
    pub fn apply_meal_edit(&mut self, edit: MealEdit) -> Result<RebalanceOutcome> {
        debug!(?edit, "applying meal edit");
        self.tracked(|plan| {
            let total = plan.daily_calories;
            let meals = &mut plan.meals;
            match edit {
                MealEdit::EditCalories { index, calories } => {
                    meals.edit_meal_calories(index, calories, total)
                }
                MealEdit::Add => {
                    meals.add_meal();
                    Ok(RebalanceOutcome::Balanced)
                }
                MealEdit::Remove { index } => {
                    let (removed, outcome) = meals.remove_meal(index, total)?;
                    info!(meal = removed.label(), "meal removed");
                    Ok(outcome)
                }
                MealEdit::Move { index, direction } => {
                    meals.move_meal(index, direction)?;
                    Ok(RebalanceOutcome::Balanced)
                }
                MealEdit::ToggleLock { index } => {
                    meals.toggle_lock(index)?;
                    Ok(RebalanceOutcome::Balanced)
                }
                MealEdit::Rename { index, name } => {
                    meals.rename_meal(index, &name)?;
                    Ok(RebalanceOutcome::Balanced)
                }
                MealEdit::Describe { index, description } => {
                    meals.describe_meal(index, &description)?;
                    Ok(RebalanceOutcome::Balanced)
                }
            }
        })
    }

    /// Apply one macro edit against the current target and body weight.
    pub fn apply_macro_edit(&mut self, edit: MacroEdit) -> MacroOutcome {
        debug!(?edit, "applying macro edit");
        self.tracked(|plan| {
            plan.macros.set_macro(
                edit.key,
                edit.input,
                edit.value,
                plan.daily_calories,
                plan.body_weight_kg,
            )
        })
    }

    pub fn toggle_macro_lock(&mut self, key: MacroKey) -> bool {
        self.tracked(|plan| plan.macros.toggle_lock(key))
    }

    /// Reset macros to the default split, or to the last balanced split.
    pub fn reset_macros(&mut self, to_last_good: bool) -> bool {
        self.tracked(|plan| {
            let (kcal, weight) = (plan.daily_calories, plan.body_weight_kg);
            if to_last_good {
                plan.macros.reset_to_last_good(kcal, weight)
            } else {
                plan.macros.reset_to_default(kcal, weight);
                true
            }
        })
    }

    pub fn apply_template(&mut self, template: &MealTemplate) -> RebalanceOutcome {
        self.tracked(|plan| plan.meals.apply_template(template, plan.daily_calories))
    }

    /// Replace the meals with `count` slots, from a template when one exists.
    pub fn set_meal_count(&mut self, count: usize) -> Result<RebalanceOutcome> {
        if count == 0 {
            return Err(PlanError::InvalidInput(
                "a plan needs at least one meal".to_string(),
            ));
        }
        Ok(self.tracked(|plan| match for_meal_count(count) {
            Some(template) => plan.meals.apply_template(template, plan.daily_calories),
            None => {
                plan.meals = MealPlanStructure::with_equal_split(count, plan.daily_calories);
                RebalanceOutcome::Balanced
            }
        }))
    }

    /// Step back one edit. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.plan.clone()) {
            Some(previous) => {
                self.plan = previous;
                true
            }
            None => false,
        }
    }

    /// Drop the last edit for good; unlike [`undo`](Self::undo) it cannot be redone.
    pub fn revert(&mut self) -> bool {
        match self.history.discard_latest() {
            Some(previous) => {
                self.plan = previous;
                true
            }
            None => false,
        }
    }

    /// Re-apply an undone edit. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.plan.clone()) {
            Some(next) => {
                self.plan = next;
                true
            }
            None => false,
        }
    }

    pub fn readiness(&self) -> Readiness {
        self.plan.meals.generation_readiness()
    }
}
