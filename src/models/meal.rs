use serde::{Deserialize, Serialize};

use crate::distribution::constants::MEAL_PCT_DECIMALS;
use crate::distribution::input::round_to;

/// One named meal slot with its share of the daily calorie target.
///
/// `calories_pct` carries one decimal place; `calories` is the absolute share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "caloriesPct", default)]
    pub calories_pct: f64,

    #[serde(default)]
    pub calories: u32,

    #[serde(default)]
    pub locked: bool,
}

impl MealEntry {
    /// Create a meal holding `calories_pct` percent of the day, with no calories assigned yet.
    pub fn new(key: Option<&str>, name: &str, calories_pct: f64) -> Self {
        Self {
            key: key.map(str::to_string),
            name: name.to_string(),
            description: String::new(),
            calories_pct,
            calories: 0,
            locked: false,
        }
    }

    /// An empty custom meal in slot `position` (1-based).
    pub fn custom(position: usize) -> Self {
        Self {
            key: Some(format!("meal_{}", position)),
            name: format!("Meal {}", position),
            description: String::new(),
            calories_pct: 0.0,
            calories: 0,
            locked: false,
        }
    }

    /// Whether the user wrote anything describing this meal.
    #[inline]
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }

    /// Recompute `calories_pct` from `calories` against `total`.
    ///
    /// Leaves the percentage untouched when `total` is zero.
    pub fn sync_percentage(&mut self, total: u32) {
        if total > 0 {
            self.calories_pct =
                round_to(self.calories as f64 / total as f64 * 100.0, MEAL_PCT_DECIMALS);
        }
    }

    /// Recompute `calories` from `calories_pct` against `total`.
    pub fn sync_calories(&mut self, total: u32) {
        let calories = (self.calories_pct / 100.0 * total as f64).round();
        self.calories = if calories.is_finite() && calories > 0.0 {
            calories as u32
        } else {
            0
        };
    }

    /// Label used in tables and prompts.
    pub fn label(&self) -> &str {
        if self.name.trim().is_empty() {
            self.key.as_deref().unwrap_or("(unnamed)")
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_calories_from_percentage() {
        let mut meal = MealEntry::new(Some("breakfast"), "Breakfast", 30.0);
        meal.sync_calories(2000);
        assert_eq!(meal.calories, 600);
    }

    #[test]
    fn test_sync_percentage_one_decimal() {
        let mut meal = MealEntry::new(None, "Lunch", 0.0);
        meal.calories = 666;
        meal.sync_percentage(2000);
        assert_eq!(meal.calories_pct, 33.3);
    }

    #[test]
    fn test_sync_percentage_zero_total_keeps_value() {
        let mut meal = MealEntry::new(None, "Lunch", 25.0);
        meal.calories = 500;
        meal.sync_percentage(0);
        assert_eq!(meal.calories_pct, 25.0);
    }

    #[test]
    fn test_custom_meal_starts_empty() {
        let meal = MealEntry::custom(5);
        assert_eq!(meal.key.as_deref(), Some("meal_5"));
        assert_eq!(meal.name, "Meal 5");
        assert_eq!(meal.calories, 0);
        assert!(!meal.locked);
        assert!(!meal.has_description());
    }

    #[test]
    fn test_label_falls_back_to_key() {
        let mut meal = MealEntry::custom(2);
        meal.name = "  ".to_string();
        assert_eq!(meal.label(), "meal_2");
    }
}
