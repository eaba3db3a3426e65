use std::time::Duration;

use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;
use tracing::debug;

use crate::distribution::input::coerce_number;
use crate::distribution::{MealPlanStructure, MoveDirection, TEMPLATES};
use crate::error::{PlanError, Result};
use crate::models::{MacroInput, MacroKey};
use crate::state::{KeyedCache, MemoryCache};

/// Minimum Jaro-Winkler similarity for a fuzzy meal match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// How long a confirmed fuzzy match is reused without asking again.
pub const REMEMBERED_MATCH_TTL: Duration = Duration::from_secs(600);

/// One step of the interactive editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SetCalories,
    SetWeight,
    EditMeal,
    AddMeal,
    RemoveMeal,
    MoveMeal,
    ToggleMealLock,
    RenameMeal,
    DescribeMeal,
    ApplyTemplate,
    SetMacro,
    ToggleMacroLock,
    ResetMacros,
    Undo,
    Redo,
    SaveAndQuit,
    Quit,
}

impl Action {
    const ALL: [(Action, &'static str); 17] = [
        (Action::SetCalories, "Set daily calories"),
        (Action::SetWeight, "Set body weight"),
        (Action::EditMeal, "Edit meal calories"),
        (Action::AddMeal, "Add meal"),
        (Action::RemoveMeal, "Remove meal"),
        (Action::MoveMeal, "Move meal"),
        (Action::ToggleMealLock, "Lock/unlock meal"),
        (Action::RenameMeal, "Rename meal"),
        (Action::DescribeMeal, "Describe meal"),
        (Action::ApplyTemplate, "Apply template"),
        (Action::SetMacro, "Set macro"),
        (Action::ToggleMacroLock, "Lock/unlock macro"),
        (Action::ResetMacros, "Reset macros to default"),
        (Action::Undo, "Undo"),
        (Action::Redo, "Redo"),
        (Action::SaveAndQuit, "Save and quit"),
        (Action::Quit, "Quit without saving"),
    ];
}

/// Meals whose name or key resembles `query`, best first.
pub fn fuzzy_candidates(meals: &MealPlanStructure, query: &str) -> Vec<(usize, f64)> {
    let needle = query.trim().to_lowercase();
    let mut candidates: Vec<(usize, f64)> = meals
        .meals()
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let by_name = jaro_winkler(&m.name.to_lowercase(), &needle);
            let by_key = m
                .key
                .as_deref()
                .map(|k| jaro_winkler(&k.to_lowercase(), &needle))
                .unwrap_or(0.0);
            (i, by_name.max(by_key))
        })
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Resolve a meal reference: 1-based position, exact name/key, or fuzzy match.
///
/// Fuzzy matches are confirmed with the user.
pub fn resolve_meal(meals: &MealPlanStructure, query: &str) -> Result<usize> {
    resolve_meal_with(meals, query, &mut MemoryCache::new())
}

/// [`resolve_meal`], reusing fuzzy matches the user confirmed within
/// [`REMEMBERED_MATCH_TTL`].
///
/// `remembered` maps a lowercased query to the confirmed meal's name. A stale
/// entry whose meal is gone falls through to a fresh lookup.
pub fn resolve_meal_with<C>(
    meals: &MealPlanStructure,
    query: &str,
    remembered: &mut C,
) -> Result<usize>
where
    C: KeyedCache<String, String>,
{
    if meals.is_empty() {
        return Err(PlanError::EmptyPlan);
    }

    if let Ok(position) = query.trim().parse::<usize>() {
        if position >= 1 && position <= meals.len() {
            return Ok(position - 1);
        }
        return Err(PlanError::MealIndexOutOfRange {
            index: position.saturating_sub(1),
            len: meals.len(),
        });
    }

    if let Some(index) = meals.position(query) {
        return Ok(index);
    }

    let needle = query.trim().to_lowercase();
    if let Some(index) = remembered.get(&needle).and_then(|name| meals.position(&name)) {
        debug!(query, index, "reusing confirmed meal match");
        return Ok(index);
    }

    let candidates = fuzzy_candidates(meals, query);
    let index = match candidates.as_slice() {
        [] => return Err(PlanError::MealNotFound(query.to_string())),
        [(index, _)] => {
            let label = meals.meals()[*index].label();
            if !prompt_yes_no(&format!("Did you mean '{}'?", label), true)? {
                return Err(PlanError::MealNotFound(query.to_string()));
            }
            *index
        }
        _ => {
            let options: Vec<(usize, String)> = candidates
                .iter()
                .take(5)
                .map(|(i, _)| (*i, meals.meals()[*i].label().to_string()))
                .collect();

            let mut labels: Vec<String> = options.iter().map(|(_, l)| l.clone()).collect();
            labels.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which meal did you mean?")
                .items(&labels)
                .default(0)
                .interact()?;

            options
                .get(selection)
                .map(|(i, _)| *i)
                .ok_or_else(|| PlanError::MealNotFound(query.to_string()))?
        }
    };

    remembered.put(needle, meals.meals()[index].name.clone(), REMEMBERED_MATCH_TTL);
    Ok(index)
}

/// Prompt for a number; anything unparseable counts as 0.
pub fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;
    Ok(coerce_number(&input))
}

pub fn prompt_text(prompt: &str, default: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

pub fn prompt_action() -> Result<Action> {
    let labels: Vec<&str> = Action::ALL.iter().map(|(_, l)| *l).collect();
    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Action::ALL[selection].0)
}

/// Ask for a meal by number or name.
pub fn prompt_meal<C>(meals: &MealPlanStructure, remembered: &mut C) -> Result<usize>
where
    C: KeyedCache<String, String>,
{
    if meals.is_empty() {
        return Err(PlanError::EmptyPlan);
    }
    let query: String = Input::new()
        .with_prompt("Which meal? (number or name)")
        .interact_text()?;
    resolve_meal_with(meals, &query, remembered)
}

pub fn prompt_direction() -> Result<MoveDirection> {
    let selection = Select::new()
        .with_prompt("Move which way?")
        .items(&["Up", "Down"])
        .default(0)
        .interact()?;
    Ok(if selection == 0 {
        MoveDirection::Up
    } else {
        MoveDirection::Down
    })
}

pub fn prompt_macro_key() -> Result<MacroKey> {
    let labels: Vec<&str> = MacroKey::ALL.iter().map(|k| k.name()).collect();
    let selection = Select::new()
        .with_prompt("Which macro?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(MacroKey::ALL[selection])
}

pub fn prompt_macro_input() -> Result<MacroInput> {
    let options = [
        (MacroInput::Percentage, "Percentage of calories"),
        (MacroInput::Grams, "Grams"),
        (MacroInput::GramsPerKg, "Grams per kg of body weight"),
    ];
    let labels: Vec<&str> = options.iter().map(|(_, l)| *l).collect();
    let selection = Select::new()
        .with_prompt("Enter it as")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(options[selection].0)
}

pub fn prompt_template() -> Result<&'static crate::distribution::MealTemplate> {
    let labels: Vec<String> = TEMPLATES
        .iter()
        .map(|t| format!("{} ({} meals)", t.name, t.len()))
        .collect();
    let selection = Select::new()
        .with_prompt("Which template?")
        .items(&labels)
        .default(1)
        .interact()?;
    Ok(TEMPLATES[selection])
}
