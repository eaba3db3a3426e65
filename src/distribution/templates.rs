use crate::error::{PlanError, Result};
use crate::models::MealEntry;

/// A preset meal structure: ordered `(key, name, percentage)` slots summing to 100%.
#[derive(Debug)]
pub struct MealTemplate {
    pub name: &'static str,
    slots: &'static [(&'static str, &'static str, f64)],
}

impl MealTemplate {
    /// Fresh meal entries for this template, with percentages but no calories yet.
    pub fn meals(&self) -> Vec<MealEntry> {
        self.slots
            .iter()
            .map(|(key, name, pct)| MealEntry::new(Some(*key), name, *pct))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

pub static THREE_MEALS: MealTemplate = MealTemplate {
    name: "three-meals",
    slots: &[
        ("breakfast", "Breakfast", 30.0),
        ("lunch", "Lunch", 40.0),
        ("dinner", "Dinner", 30.0),
    ],
};

/// The template a new plan starts from.
pub static STANDARD: MealTemplate = MealTemplate {
    name: "standard",
    slots: &[
        ("breakfast", "Breakfast", 30.0),
        ("lunch", "Lunch", 30.0),
        ("dinner", "Dinner", 30.0),
        ("snack", "Snack", 10.0),
    ],
};

pub static FIVE_MEALS: MealTemplate = MealTemplate {
    name: "five-meals",
    slots: &[
        ("breakfast", "Breakfast", 25.0),
        ("morning_snack", "Morning Snack", 10.0),
        ("lunch", "Lunch", 30.0),
        ("afternoon_snack", "Afternoon Snack", 10.0),
        ("dinner", "Dinner", 25.0),
    ],
};

pub static SIX_MEALS: MealTemplate = MealTemplate {
    name: "six-meals",
    slots: &[
        ("breakfast", "Breakfast", 20.0),
        ("morning_snack", "Morning Snack", 10.0),
        ("lunch", "Lunch", 25.0),
        ("afternoon_snack", "Afternoon Snack", 10.0),
        ("dinner", "Dinner", 25.0),
        ("evening_snack", "Evening Snack", 10.0),
    ],
};

pub static TEMPLATES: [&MealTemplate; 4] = [&THREE_MEALS, &STANDARD, &FIVE_MEALS, &SIX_MEALS];

/// Template for a given number of meals per day, if one exists.
pub fn for_meal_count(count: usize) -> Option<&'static MealTemplate> {
    TEMPLATES.iter().copied().find(|t| t.len() == count)
}

/// Look a template up by name, or by meal count given as digits.
pub fn find_template(name: &str) -> Result<&'static MealTemplate> {
    let needle = name.trim().to_lowercase();
    if let Ok(count) = needle.parse::<usize>() {
        return for_meal_count(count).ok_or_else(|| PlanError::UnknownTemplate(name.to_string()));
    }
    TEMPLATES
        .iter()
        .copied()
        .find(|t| t.name == needle)
        .ok_or_else(|| PlanError::UnknownTemplate(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_sum_to_100() {
        for template in TEMPLATES {
            let total: f64 = template.meals().iter().map(|m| m.calories_pct).sum();
            assert!((total - 100.0).abs() < 1e-9, "{} sums to {}", template.name, total);
        }
    }

    #[test]
    fn test_standard_template_split() {
        let pcts: Vec<f64> = STANDARD.meals().iter().map(|m| m.calories_pct).collect();
        assert_eq!(pcts, vec![30.0, 30.0, 30.0, 10.0]);
    }

    #[test]
    fn test_find_template() {
        assert_eq!(find_template("standard").unwrap().name, "standard");
        assert_eq!(find_template("5").unwrap().name, "five-meals");
        assert!(find_template("9").is_err());
        assert!(find_template("brunch-only").is_err());
    }
}
