use crate::distribution::{MacroDistribution, MacroOutcome, Readiness, RebalanceOutcome};
use crate::models::MacroKey;
use crate::state::PlanSession;

/// Display the meal table for a session.
pub fn display_meals(session: &PlanSession) {
    let meals = session.meals();
    println!();
    println!("=== Meal Plan ({} kcal/day) ===", session.daily_calories());
    println!();

    if meals.is_empty() {
        println!("(no meals)");
        println!();
        return;
    }

    let width = meals
        .meals()
        .iter()
        .map(|m| m.label().len())
        .max()
        .unwrap_or(10);

    for (i, meal) in meals.meals().iter().enumerate() {
        let lock = if meal.locked { " [locked]" } else { "" };
        let description = if meal.has_description() {
            format!("  {}", meal.description)
        } else {
            String::new()
        };
        println!(
            "{:>3}. {:<width$} {:>5} kcal {:>5.1}%{}{}",
            i + 1,
            meal.label(),
            meal.calories,
            meal.calories_pct,
            lock,
            description,
            width = width
        );
    }

    println!();
    println!(
        "Total: {} kcal ({:.1}%)",
        meals.total_calories(),
        meals.total_percentage()
    );
    println!();
}

/// Display the macro split table.
pub fn display_macros(macros: &MacroDistribution, body_weight_kg: f64) {
    println!("=== Macros ===");
    println!();

    for key in MacroKey::ALL {
        let target = macros.get(key);
        let lock = if target.locked { " [locked]" } else { "" };
        let per_kg = if body_weight_kg > 0.0 {
            format!(" {:>6.2} g/kg", target.grams_per_kg)
        } else {
            String::new()
        };
        println!(
            "  {:<8} {:>6.1}% {:>5} g {:>5.0} kcal{}{}",
            key.name(),
            target.percentage,
            target.grams,
            target.kcal(key),
            per_kg,
            lock
        );
    }

    println!();
    println!("Total: {:.1}%", macros.total_percentage());
    println!();
}

/// Display a full session: meals, macros, and generation readiness.
pub fn display_session(session: &PlanSession) {
    display_meals(session);
    display_macros(session.macros(), session.body_weight_kg());
    display_readiness(&session.readiness());
}

/// Surface a rebalancing warning, if any.
pub fn display_outcome(outcome: &RebalanceOutcome) {
    if outcome.is_warning() {
        eprintln!();
        eprintln!("!!! WARNING: {}", outcome);
        if matches!(outcome, RebalanceOutcome::OverBudget { .. }) {
            eprintln!("!!! Unlock a meal or lower a locked meal to fit the daily target.");
        }
        eprintln!();
    }
}

pub fn display_macro_outcome(outcome: &MacroOutcome) {
    if let MacroOutcome::Rejected { available } = outcome {
        eprintln!();
        eprintln!(
            "!!! WARNING: macro change ignored; it would leave {:.1}% for the other macros.",
            available
        );
        eprintln!();
    }
}

pub fn display_readiness(readiness: &Readiness) {
    if let Readiness::Incomplete { missing } = readiness {
        println!("Menu generation blocked until every meal is described.");
        println!("Missing descriptions: {}", missing.join(", "));
        println!();
    }
}
