use diet_split::distribution::{MoveDirection, Readiness, RebalanceOutcome};
use diet_split::models::{MacroInput, MacroKey};
use diet_split::state::{load_session, save_session, MacroEdit, MealEdit, PlanSession};
use tempfile::tempdir;

#[test]
fn test_session_edit_undo_save_cycle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("meal_plan.json");

    let mut session = PlanSession::new(2200, 70.0);
    session.apply_meal_edit(MealEdit::Add).unwrap();
    session
        .apply_meal_edit(MealEdit::Rename {
            index: 4,
            name: "Evening Snack".to_string(),
        })
        .unwrap();
    session
        .apply_meal_edit(MealEdit::EditCalories {
            index: 4,
            calories: 200,
        })
        .unwrap();
    assert_eq!(session.meals().total_calories(), 2200);

    session.apply_macro_edit(MacroEdit {
        key: MacroKey::Protein,
        input: MacroInput::GramsPerKg,
        value: 2.0,
    });
    assert_eq!(session.macros().protein.grams, 140);

    save_session(&path, &session).unwrap();
    let mut reloaded = load_session(&path).unwrap();
    assert_eq!(reloaded.plan(), session.plan());

    // Undo survives the round-trip through the file.
    assert!(reloaded.undo());
    assert_eq!(reloaded.macros().protein.grams, 165);
}

#[test]
fn test_over_budget_edit_is_reported() {
    let mut session = PlanSession::new(2000, 0.0);
    session
        .apply_meal_edit(MealEdit::ToggleLock { index: 0 })
        .unwrap();
    session
        .apply_meal_edit(MealEdit::ToggleLock { index: 1 })
        .unwrap();

    let outcome = session
        .apply_meal_edit(MealEdit::EditCalories {
            index: 2,
            calories: 900,
        })
        .unwrap();

    assert_eq!(
        outcome,
        RebalanceOutcome::OverBudget {
            locked_calories: 2100,
            target: 2000
        }
    );
    assert_eq!(session.meals().meals()[3].calories, 0);

    assert!(session.undo());
    assert_eq!(session.meals().meals()[3].calories, 200);
}

#[test]
fn test_move_does_not_touch_calories() {
    let mut session = PlanSession::new(2000, 0.0);
    session
        .apply_meal_edit(MealEdit::Move {
            index: 0,
            direction: MoveDirection::Down,
        })
        .unwrap();

    let names: Vec<&str> = session.meals().meals().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Lunch", "Breakfast", "Dinner", "Snack"]);
    assert_eq!(session.meals().total_calories(), 2000);
}

#[test]
fn test_partial_descriptions_block_generation() {
    let mut session = PlanSession::new(2000, 0.0);
    assert_eq!(session.readiness(), Readiness::Ready);

    session
        .apply_meal_edit(MealEdit::Describe {
            index: 2,
            description: "Salmon, rice, greens".to_string(),
        })
        .unwrap();
    assert!(matches!(session.readiness(), Readiness::Incomplete { missing } if missing.len() == 3));
}
