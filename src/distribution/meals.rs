use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::distribution::constants::{MEAL_PCT_DECIMALS, MEAL_PCT_ROUNDING_STEP};
use crate::distribution::input::round_to;
use crate::distribution::templates::{MealTemplate, STANDARD};
use crate::error::{PlanError, Result};
use crate::models::MealEntry;

/// Result of a rebalancing pass, reported alongside the updated meals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebalanceOutcome {
    /// Calories sum exactly to the daily target.
    Balanced,

    /// Locked calories alone exceed the target; every unlocked meal was zeroed.
    OverBudget { locked_calories: u32, target: u32 },

    /// No unlocked meal could absorb the remaining difference to the target.
    Unabsorbed { residual: i64 },
}

impl RebalanceOutcome {
    /// Whether the caller should surface a warning.
    pub fn is_warning(&self) -> bool {
        !matches!(self, RebalanceOutcome::Balanced)
    }
}

impl fmt::Display for RebalanceOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RebalanceOutcome::Balanced => write!(f, "balanced"),
            RebalanceOutcome::OverBudget {
                locked_calories,
                target,
            } => write!(
                f,
                "locked meals total {} kcal, which exceeds the {} kcal target",
                locked_calories, target
            ),
            RebalanceOutcome::Unabsorbed { residual } => write!(
                f,
                "no unlocked meal left to absorb {:+} kcal",
                residual
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

impl FromStr for MoveDirection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(MoveDirection::Up),
            "down" => Ok(MoveDirection::Down),
            other => Err(format!("unknown direction '{}' (expected up or down)", other)),
        }
    }
}

/// Whether meal descriptions allow menu generation to proceed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    /// Some meals are described and these are not.
    Incomplete { missing: Vec<String> },
}

/// Ordered meals whose calories track a daily target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealPlanStructure {
    meals: Vec<MealEntry>,
}

impl Default for MealPlanStructure {
    fn default() -> Self {
        Self {
            meals: STANDARD.meals(),
        }
    }
}

impl MealPlanStructure {
    pub fn new(meals: Vec<MealEntry>) -> Self {
        Self { meals }
    }

    /// Build a structure from a template with calories assigned for `total`.
    pub fn from_template(template: &MealTemplate, total: u32) -> Self {
        let mut structure = Self::new(template.meals());
        structure.recalculate_from_percentages(total);
        structure
    }

    /// `count` custom meals sharing the day equally.
    pub fn with_equal_split(count: usize, total: u32) -> Self {
        let pct = if count > 0 {
            round_to(100.0 / count as f64, MEAL_PCT_DECIMALS)
        } else {
            0.0
        };
        let meals = (1..=count)
            .map(|position| {
                let mut meal = MealEntry::custom(position);
                meal.calories_pct = pct;
                meal
            })
            .collect();
        let mut structure = Self::new(meals);
        structure.recalculate_from_percentages(total);
        structure
    }

    pub fn meals(&self) -> &[MealEntry] {
        &self.meals
    }

    pub fn get(&self, index: usize) -> Result<&MealEntry> {
        self.check_index(index)?;
        Ok(&self.meals[index])
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    pub fn total_calories(&self) -> u64 {
        self.meals.iter().map(|m| m.calories as u64).sum()
    }

    pub fn total_percentage(&self) -> f64 {
        self.meals.iter().map(|m| m.calories_pct).sum()
    }

    /// Index of the meal whose key or name matches `query` (case-insensitive).
    pub fn position(&self, query: &str) -> Option<usize> {
        let needle = query.trim().to_lowercase();
        self.meals.iter().position(|m| {
            m.name.to_lowercase() == needle
                || m.key.as_deref().map(str::to_lowercase).as_deref() == Some(needle.as_str())
        })
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if self.meals.is_empty() {
            return Err(PlanError::EmptyPlan);
        }
        if index >= self.meals.len() {
            return Err(PlanError::MealIndexOutOfRange {
                index,
                len: self.meals.len(),
            });
        }
        Ok(())
    }

    /// Apply a new daily target.
    ///
    /// When `total` equals `previous`, only the percentages of meals that are
    /// neither locked nor `edited` are refreshed from their calories. Otherwise
    /// every meal's calories are recomputed from its percentage.
    pub fn set_daily_target(
        &mut self,
        previous: u32,
        total: u32,
        edited: Option<usize>,
    ) -> RebalanceOutcome {
        if total == previous {
            for (i, meal) in self.meals.iter_mut().enumerate() {
                if !meal.locked && Some(i) != edited {
                    meal.sync_percentage(total);
                }
            }
            self.correct_percentage_residual(total, edited);
            return RebalanceOutcome::Balanced;
        }

        debug!(previous, total, "recalculating meal calories from percentages");
        self.recalculate_from_percentages(total)
    }

    fn recalculate_from_percentages(&mut self, total: u32) -> RebalanceOutcome {
        for meal in &mut self.meals {
            meal.sync_calories(total);
        }
        let outcome = self.correct_residual(total, None);
        self.sync_percentages(total, None);
        outcome
    }

    /// Set one meal's calories and rescale the other unlocked meals to fill the rest.
    ///
    /// The edited meal and locked meals keep their calories exactly.
    pub fn edit_meal_calories(
        &mut self,
        index: usize,
        new_calories: u32,
        total: u32,
    ) -> Result<RebalanceOutcome> {
        self.check_index(index)?;

        let locked_others: i64 = self
            .meals
            .iter()
            .enumerate()
            .filter(|(i, m)| *i != index && m.locked)
            .map(|(_, m)| m.calories as i64)
            .sum();
        let committed = locked_others + new_calories as i64;
        let remaining = total as i64 - committed;
        let flexible: i64 = self
            .meals
            .iter()
            .enumerate()
            .filter(|(i, m)| *i != index && !m.locked)
            .map(|(_, m)| m.calories as i64)
            .sum();

        self.meals[index].calories = new_calories;

        if remaining < 0 {
            warn!(
                committed,
                total, "locked meals and edited meal exceed the daily target"
            );
            for (i, meal) in self.meals.iter_mut().enumerate() {
                if i != index && !meal.locked {
                    meal.calories = 0;
                    meal.calories_pct = 0.0;
                } else {
                    meal.sync_percentage(total);
                }
            }
            return Ok(RebalanceOutcome::OverBudget {
                locked_calories: saturate(committed),
                target: total,
            });
        }

        let factor = scaling_factor(remaining, flexible);
        debug!(index, new_calories, remaining, flexible, factor, "rebalancing after meal edit");

        for (i, meal) in self.meals.iter_mut().enumerate() {
            if i != index && !meal.locked {
                meal.calories = scale(meal.calories, factor);
            }
        }

        let outcome = self.correct_residual(total, Some(index));
        self.sync_percentages(total, Some(index));
        Ok(outcome)
    }

    /// Append an empty unlocked meal. Returns its index.
    pub fn add_meal(&mut self) -> usize {
        let mut position = self.meals.len() + 1;
        while self.meals.iter().any(|m| {
            m.key.as_deref() == Some(format!("meal_{}", position).as_str())
        }) {
            position += 1;
        }
        self.meals.push(MealEntry::custom(position));
        self.meals.len() - 1
    }

    /// Remove a meal and spread the freed budget across the remaining unlocked meals.
    pub fn remove_meal(&mut self, index: usize, total: u32) -> Result<(MealEntry, RebalanceOutcome)> {
        self.check_index(index)?;
        let removed = self.meals.remove(index);
        debug!(meal = removed.label(), calories = removed.calories, "removed meal");
        let outcome = self.refill(total);
        Ok((removed, outcome))
    }

    /// Scale every unlocked meal so the whole plan sums to `total`.
    fn refill(&mut self, total: u32) -> RebalanceOutcome {
        let locked_total: i64 = self
            .meals
            .iter()
            .filter(|m| m.locked)
            .map(|m| m.calories as i64)
            .sum();
        let remaining = total as i64 - locked_total;

        if remaining <= 0 {
            warn!(locked_total, total, "locked meals leave no budget for unlocked meals");
            for meal in &mut self.meals {
                if !meal.locked {
                    meal.calories = 0;
                    meal.calories_pct = 0.0;
                } else {
                    meal.sync_percentage(total);
                }
            }
            return RebalanceOutcome::OverBudget {
                locked_calories: saturate(locked_total),
                target: total,
            };
        }

        let unlocked_total: i64 = self
            .meals
            .iter()
            .filter(|m| !m.locked)
            .map(|m| m.calories as i64)
            .sum();
        let factor = scaling_factor(remaining, unlocked_total);
        debug!(remaining, unlocked_total, factor, "refilling unlocked meals");

        for meal in self.meals.iter_mut().filter(|m| !m.locked) {
            meal.calories = scale(meal.calories, factor);
        }

        let outcome = self.correct_residual(total, None);
        self.sync_percentages(total, None);
        outcome
    }

    /// Swap a meal with its neighbour. Returns false at the list boundary.
    pub fn move_meal(&mut self, index: usize, direction: MoveDirection) -> Result<bool> {
        self.check_index(index)?;
        let target = match direction {
            MoveDirection::Up if index > 0 => index - 1,
            MoveDirection::Down if index + 1 < self.meals.len() => index + 1,
            _ => return Ok(false),
        };
        self.meals.swap(index, target);
        Ok(true)
    }

    /// Flip a meal's lock. Returns the new state.
    pub fn toggle_lock(&mut self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        let meal = &mut self.meals[index];
        meal.locked = !meal.locked;
        Ok(meal.locked)
    }

    pub fn rename_meal(&mut self, index: usize, name: &str) -> Result<()> {
        self.check_index(index)?;
        self.meals[index].name = name.trim().to_string();
        Ok(())
    }

    pub fn describe_meal(&mut self, index: usize, description: &str) -> Result<()> {
        self.check_index(index)?;
        self.meals[index].description = description.trim().to_string();
        Ok(())
    }

    /// Replace every meal with a template's meals at `total`.
    pub fn apply_template(&mut self, template: &MealTemplate, total: u32) -> RebalanceOutcome {
        debug!(template = template.name, total, "applying meal template");
        self.meals = template.meals();
        self.recalculate_from_percentages(total)
    }

    /// Meals must be either all described or none described before generating a menu.
    pub fn generation_readiness(&self) -> Readiness {
        let missing: Vec<String> = self
            .meals
            .iter()
            .filter(|m| !m.has_description())
            .map(|m| m.label().to_string())
            .collect();

        if missing.is_empty() || missing.len() == self.meals.len() {
            Readiness::Ready
        } else {
            Readiness::Incomplete { missing }
        }
    }

    fn sync_percentages(&mut self, total: u32, exclude: Option<usize>) {
        for meal in &mut self.meals {
            meal.sync_percentage(total);
        }
        self.correct_percentage_residual(total, exclude);
    }

    /// Push the rounding gap between the percentages and 100 into the largest
    /// unlocked meal, then the edited meal, then locked meals.
    ///
    /// Only runs when calories sum to `total` and the gap is within what
    /// one-decimal rounding can produce.
    fn correct_percentage_residual(&mut self, total: u32, exclude: Option<usize>) {
        if total == 0 || self.total_calories() != total as u64 {
            return;
        }
        let mut residual = round_to(100.0 - self.total_percentage(), MEAL_PCT_DECIMALS);
        let max_rounding = MEAL_PCT_ROUNDING_STEP * self.meals.len() as f64 + 1e-9;
        if residual == 0.0 || residual.abs() > max_rounding {
            return;
        }

        let rank = |i: usize, meal: &MealEntry| -> u8 {
            if meal.locked {
                2
            } else if Some(i) == exclude {
                1
            } else {
                0
            }
        };
        let mut order: Vec<usize> = (0..self.meals.len()).collect();
        order.sort_by(|&a, &b| {
            rank(a, &self.meals[a])
                .cmp(&rank(b, &self.meals[b]))
                .then(self.meals[b].calories.cmp(&self.meals[a].calories))
        });

        for idx in order {
            let meal = &mut self.meals[idx];
            let adjusted = round_to(meal.calories_pct + residual, MEAL_PCT_DECIMALS);
            debug!(meal = meal.label(), residual, "applying percentage rounding correction");
            meal.calories_pct = adjusted.max(0.0);
            residual = adjusted.min(0.0);
            if residual == 0.0 {
                break;
            }
        }
    }

    /// Push `total - sum(calories)` into the largest unlocked meal.
    ///
    /// Ties go to the earlier meal. A negative residual larger than that meal
    /// spills over to the next largest.
    fn correct_residual(&mut self, total: u32, exclude: Option<usize>) -> RebalanceOutcome {
        let mut residual = total as i64 - self.total_calories() as i64;
        if residual == 0 {
            return RebalanceOutcome::Balanced;
        }

        let mut candidates: Vec<usize> = (0..self.meals.len())
            .filter(|&i| !self.meals[i].locked && Some(i) != exclude)
            .collect();
        candidates.sort_by(|&a, &b| self.meals[b].calories.cmp(&self.meals[a].calories));

        if candidates.is_empty() {
            warn!(residual, "no unlocked meal to absorb calorie residual");
            return RebalanceOutcome::Unabsorbed { residual };
        }

        for idx in candidates {
            let adjusted = self.meals[idx].calories as i64 + residual;
            debug!(meal = self.meals[idx].label(), residual, "applying rounding correction");
            self.meals[idx].calories = saturate(adjusted);
            residual = adjusted.min(0);
            if residual == 0 {
                break;
            }
        }

        if residual == 0 {
            RebalanceOutcome::Balanced
        } else {
            RebalanceOutcome::Unabsorbed { residual }
        }
    }
}

fn scaling_factor(remaining: i64, current: i64) -> f64 {
    if current > 0 {
        remaining as f64 / current as f64
    } else {
        0.0
    }
}

fn scale(calories: u32, factor: f64) -> u32 {
    saturate((calories as f64 * factor).round() as i64)
}

fn saturate(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::templates::THREE_MEALS;

    fn calories(structure: &MealPlanStructure) -> Vec<u32> {
        structure.meals().iter().map(|m| m.calories).collect()
    }

    fn plan(values: &[u32]) -> MealPlanStructure {
        let meals = values
            .iter()
            .enumerate()
            .map(|(i, &cal)| {
                let mut meal = MealEntry::custom(i + 1);
                meal.calories = cal;
                meal
            })
            .collect();
        MealPlanStructure::new(meals)
    }

    #[test]
    fn test_default_template_at_2000() {
        let structure = MealPlanStructure::from_template(&STANDARD, 2000);
        assert_eq!(calories(&structure), vec![600, 600, 600, 200]);
    }

    #[test]
    fn test_edit_with_lock_scales_the_rest() {
        let mut structure = MealPlanStructure::from_template(&STANDARD, 2000);
        structure.toggle_lock(0).unwrap();

        let outcome = structure.edit_meal_calories(1, 700, 2000).unwrap();

        assert_eq!(outcome, RebalanceOutcome::Balanced);
        assert_eq!(calories(&structure), vec![600, 700, 525, 175]);
        assert_eq!(structure.meals()[0].calories_pct, 30.0);
        assert_eq!(structure.meals()[1].calories_pct, 35.0);
        assert!((structure.total_percentage() - 100.0).abs() <= 0.1);
    }

    #[test]
    fn test_edit_rounding_correction_hits_largest_other_meal() {
        let mut structure = plan(&[500, 500, 500, 500]);
        let outcome = structure.edit_meal_calories(0, 501, 2000).unwrap();
        // Each 500 scales to 499.67 and rounds back up; the extra kcal comes off meal 1.
        assert_eq!(outcome, RebalanceOutcome::Balanced);
        assert_eq!(calories(&structure), vec![501, 499, 500, 500]);
    }

    #[test]
    fn test_edit_over_budget_zeroes_unlocked() {
        let mut structure = plan(&[1500, 300, 200]);
        structure.toggle_lock(0).unwrap();

        let outcome = structure.edit_meal_calories(1, 800, 2000).unwrap();

        assert_eq!(
            outcome,
            RebalanceOutcome::OverBudget {
                locked_calories: 2300,
                target: 2000
            }
        );
        assert_eq!(calories(&structure), vec![1500, 800, 0]);
        assert_eq!(structure.meals()[2].calories_pct, 0.0);
        assert!(outcome.is_warning());
    }

    #[test]
    fn test_edit_with_all_others_at_zero_fills_first() {
        let mut structure = plan(&[2000, 0, 0]);
        let outcome = structure.edit_meal_calories(0, 1000, 2000).unwrap();
        assert_eq!(outcome, RebalanceOutcome::Balanced);
        assert_eq!(calories(&structure), vec![1000, 1000, 0]);
    }

    #[test]
    fn test_edit_with_every_other_meal_locked_is_unabsorbed() {
        let mut structure = plan(&[1000, 1000]);
        structure.toggle_lock(1).unwrap();
        let outcome = structure.edit_meal_calories(0, 800, 2000).unwrap();
        assert_eq!(outcome, RebalanceOutcome::Unabsorbed { residual: 200 });
        assert_eq!(calories(&structure), vec![800, 1000]);
    }

    #[test]
    fn test_negative_residual_spills_over() {
        let mut structure = plan(&[1998, 1, 1, 1, 1]);
        // Four meals of 1 kcal scale to 0.5 each and all round up to 1.
        let outcome = structure.edit_meal_calories(0, 1998, 2000).unwrap();
        assert_eq!(outcome, RebalanceOutcome::Balanced);
        assert_eq!(structure.total_calories(), 2000);
    }

    #[test]
    fn test_remove_meal_refills_budget() {
        let mut structure = plan(&[500, 500, 1000]);
        let (removed, outcome) = structure.remove_meal(2, 2000).unwrap();
        assert_eq!(removed.calories, 1000);
        assert_eq!(outcome, RebalanceOutcome::Balanced);
        assert_eq!(calories(&structure), vec![1000, 1000]);
        assert_eq!(structure.meals()[0].calories_pct, 50.0);
    }

    #[test]
    fn test_remove_meal_with_locks_exceeding_target() {
        let mut structure = plan(&[1200, 900, 300]);
        structure.toggle_lock(0).unwrap();
        structure.toggle_lock(1).unwrap();
        let (_, outcome) = structure.remove_meal(2, 2000).unwrap();
        assert_eq!(
            outcome,
            RebalanceOutcome::OverBudget {
                locked_calories: 2100,
                target: 2000
            }
        );
        assert_eq!(calories(&structure), vec![1200, 900]);
    }

    #[test]
    fn test_remove_meal_rounding_residual() {
        let mut structure = plan(&[300, 300, 300, 1100]);
        let (_, outcome) = structure.remove_meal(3, 2000).unwrap();
        assert_eq!(outcome, RebalanceOutcome::Balanced);
        // 3 x 667 overshoots by one; the first of the tied meals gives it back.
        assert_eq!(calories(&structure), vec![666, 667, 667]);
    }

    #[test]
    fn test_add_meal_starts_at_zero() {
        let mut structure = MealPlanStructure::from_template(&STANDARD, 2000);
        let idx = structure.add_meal();
        assert_eq!(idx, 4);
        assert_eq!(structure.meals()[idx].calories, 0);
        assert_eq!(structure.meals()[idx].key.as_deref(), Some("meal_5"));
        assert_eq!(structure.total_calories(), 2000);
    }

    #[test]
    fn test_add_meal_skips_taken_keys() {
        let mut structure = plan(&[1000, 1000]);
        structure.remove_meal(0, 2000).unwrap();
        let idx = structure.add_meal();
        assert_eq!(structure.meals()[idx].key.as_deref(), Some("meal_3"));
    }

    #[test]
    fn test_move_meal_boundaries() {
        let mut structure = MealPlanStructure::from_template(&STANDARD, 2000);
        assert!(!structure.move_meal(0, MoveDirection::Up).unwrap());
        assert!(!structure.move_meal(3, MoveDirection::Down).unwrap());
        assert!(structure.move_meal(3, MoveDirection::Up).unwrap());
        assert_eq!(structure.meals()[2].name, "Snack");
        assert_eq!(calories(&structure), vec![600, 600, 200, 600]);
    }

    #[test]
    fn test_index_errors() {
        let mut structure = plan(&[1000, 1000]);
        assert!(matches!(
            structure.toggle_lock(5),
            Err(PlanError::MealIndexOutOfRange { index: 5, len: 2 })
        ));
        let mut empty = MealPlanStructure::new(Vec::new());
        assert!(matches!(
            empty.edit_meal_calories(0, 100, 2000),
            Err(PlanError::EmptyPlan)
        ));
    }

    #[test]
    fn test_set_daily_target_recomputes_from_percentages() {
        let mut structure = MealPlanStructure::from_template(&STANDARD, 2000);
        let outcome = structure.set_daily_target(2000, 2500, None);
        assert_eq!(outcome, RebalanceOutcome::Balanced);
        assert_eq!(calories(&structure), vec![750, 750, 750, 250]);
    }

    #[test]
    fn test_set_daily_target_is_idempotent() {
        let mut structure = MealPlanStructure::from_template(&THREE_MEALS, 2000);
        structure.set_daily_target(2000, 2345, None);
        let once = structure.clone();
        structure.set_daily_target(2345, 2345, None);
        assert_eq!(structure, once);
        assert_eq!(structure.total_calories(), 2345);
    }

    #[test]
    fn test_set_daily_target_unchanged_skips_edited_and_locked() {
        let mut structure = plan(&[900, 900, 200]);
        structure.toggle_lock(2).unwrap();
        structure.set_daily_target(2000, 2000, Some(1));
        assert_eq!(structure.meals()[0].calories_pct, 45.0);
        assert_eq!(structure.meals()[1].calories_pct, 0.0);
        assert_eq!(structure.meals()[2].calories_pct, 0.0);
    }

    #[test]
    fn test_generation_readiness() {
        let mut structure = MealPlanStructure::from_template(&STANDARD, 2000);
        assert_eq!(structure.generation_readiness(), Readiness::Ready);

        structure.describe_meal(0, "Oats with berries").unwrap();
        assert_eq!(
            structure.generation_readiness(),
            Readiness::Incomplete {
                missing: vec!["Lunch".into(), "Dinner".into(), "Snack".into()]
            }
        );

        for i in 1..4 {
            structure.describe_meal(i, "Something").unwrap();
        }
        assert_eq!(structure.generation_readiness(), Readiness::Ready);
    }

    #[test]
    fn test_equal_split_sums_to_total() {
        let structure = MealPlanStructure::with_equal_split(3, 2000);
        assert_eq!(structure.len(), 3);
        assert_eq!(structure.total_calories(), 2000);
        assert_eq!(calories(&structure), vec![668, 666, 666]);
    }

    #[test]
    fn test_equal_split_percentages_sum_to_100() {
        for count in 3..=8 {
            for total in (1200..=4000).step_by(7) {
                let structure = MealPlanStructure::with_equal_split(count, total);
                let deviation = (structure.total_percentage() - 100.0).abs();
                assert!(
                    deviation < 0.05,
                    "{} meals at {} kcal sum to {}%",
                    count,
                    total,
                    structure.total_percentage()
                );
            }
        }
    }

    #[test]
    fn test_percentage_residual_goes_to_largest_other_meal() {
        let mut structure = MealPlanStructure::from_template(&STANDARD, 2000);
        structure.toggle_lock(0).unwrap();
        structure.edit_meal_calories(1, 700, 2000).unwrap();

        // 26.25 and 8.75 both round up; the extra tenth comes off dinner.
        let pcts: Vec<f64> = structure.meals().iter().map(|m| m.calories_pct).collect();
        assert_eq!(pcts, vec![30.0, 35.0, 26.2, 8.8]);
    }

    #[test]
    fn test_position_matches_key_or_name() {
        let structure = MealPlanStructure::from_template(&STANDARD, 2000);
        assert_eq!(structure.position("LUNCH"), Some(1));
        assert_eq!(structure.position("snack"), Some(3));
        assert_eq!(structure.position("brunch"), None);
    }
}
