use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use diet_split::cli::{Cli, Command};
use diet_split::distribution::input::{coerce_number, whole_number};
use diet_split::distribution::{find_template, RebalanceOutcome};
use diet_split::error::{PlanError, Result};
use diet_split::interface::{
    display_macro_outcome, display_outcome, display_session, prompt_action, prompt_direction,
    prompt_macro_input, prompt_macro_key, prompt_meal, prompt_number, prompt_template,
    prompt_text, prompt_yes_no, resolve_meal, Action,
};
use diet_split::state::{
    export_meals_csv, load_or_new, load_session, save_session, KeyedCache, MacroEdit, MealEdit,
    MemoryCache, PlanSession,
};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();
    let path = Path::new(&cli.file);

    match command {
        Command::Show => cmd_show(path),
        Command::Init {
            calories,
            weight,
            meals,
            force,
        } => cmd_init(path, calories, weight, meals, force),
        Command::Target { calories } => edit_plan(path, |session| {
            let outcome = session.set_daily_calories(calories, None);
            display_outcome(&outcome);
            Ok(())
        }),
        Command::Weight { kg } => edit_plan(path, |session| {
            session.set_body_weight(kg);
            Ok(())
        }),
        Command::Edit { meal, calories } => edit_plan(path, |session| {
            let index = resolve_meal(session.meals(), &meal)?;
            let calories = whole_number(coerce_number(&calories));
            apply_meal(session, MealEdit::EditCalories { index, calories })
        }),
        Command::Add { name } => edit_plan(path, |session| {
            apply_meal(session, MealEdit::Add)?;
            if let Some(name) = name {
                let index = session.meals().len() - 1;
                apply_meal(session, MealEdit::Rename { index, name })?;
            }
            Ok(())
        }),
        Command::Remove { meal } => edit_plan(path, |session| {
            let index = resolve_meal(session.meals(), &meal)?;
            apply_meal(session, MealEdit::Remove { index })
        }),
        Command::Move { meal, direction } => edit_plan(path, |session| {
            let index = resolve_meal(session.meals(), &meal)?;
            apply_meal(session, MealEdit::Move { index, direction })
        }),
        Command::Lock { meal } => edit_plan(path, |session| {
            let index = resolve_meal(session.meals(), &meal)?;
            apply_meal(session, MealEdit::ToggleLock { index })
        }),
        Command::Rename { meal, name } => edit_plan(path, |session| {
            let index = resolve_meal(session.meals(), &meal)?;
            apply_meal(session, MealEdit::Rename { index, name })
        }),
        Command::Describe { meal, description } => edit_plan(path, |session| {
            let index = resolve_meal(session.meals(), &meal)?;
            apply_meal(session, MealEdit::Describe { index, description })
        }),
        Command::Template { name } => edit_plan(path, |session| {
            let template = find_template(&name)?;
            let outcome = session.apply_template(template);
            display_outcome(&outcome);
            Ok(())
        }),
        Command::Macro { key, input, value } => edit_plan(path, |session| {
            let outcome = session.apply_macro_edit(MacroEdit {
                key,
                input,
                value: coerce_number(&value),
            });
            display_macro_outcome(&outcome);
            Ok(())
        }),
        Command::MacroLock { key } => edit_plan(path, |session| {
            let locked = session.toggle_macro_lock(key);
            println!("{} {}", key, if locked { "locked" } else { "unlocked" });
            Ok(())
        }),
        Command::MacroReset { last_good } => edit_plan(path, |session| {
            if !session.reset_macros(last_good) {
                println!("No balanced macro split recorded yet.");
            }
            Ok(())
        }),
        Command::Undo => edit_plan(path, |session| {
            if !session.undo() {
                println!("Nothing to undo.");
            }
            Ok(())
        }),
        Command::Redo => edit_plan(path, |session| {
            if !session.redo() {
                println!("Nothing to redo.");
            }
            Ok(())
        }),
        Command::Export { path: out } => cmd_export(path, &out),
        Command::Interactive => cmd_interactive(path),
    }
}

/// Load the plan, apply an edit, show the result, and save it.
fn edit_plan<F>(path: &Path, edit: F) -> Result<()>
where
    F: FnOnce(&mut PlanSession) -> Result<()>,
{
    if !path.exists() {
        eprintln!("Plan file not found: {}", path.display());
        eprintln!("Run 'diet-split init' to create one.");
        return Ok(());
    }

    let mut session = load_session(path)?;
    edit(&mut session)?;
    display_session(&session);
    save_session(path, &session)?;
    Ok(())
}

fn apply_meal(session: &mut PlanSession, edit: MealEdit) -> Result<()> {
    let outcome = session.apply_meal_edit(edit)?;
    display_outcome(&outcome);
    Ok(())
}

/// Show the current plan without changing it.
fn cmd_show(path: &Path) -> Result<()> {
    if !path.exists() {
        println!("No plan file at {}; showing the default plan.", path.display());
    }
    let session = load_or_new(path)?;
    display_session(&session);
    Ok(())
}

/// Create a new plan file.
fn cmd_init(
    path: &Path,
    calories: u32,
    weight: f64,
    meals: Option<usize>,
    force: bool,
) -> Result<()> {
    if path.exists() && !force {
        println!(
            "Plan file {} already exists. Use --force to overwrite it.",
            path.display()
        );
        return Ok(());
    }

    let mut session = PlanSession::new(calories, weight);
    if let Some(count) = meals {
        let outcome = session.set_meal_count(count)?;
        display_outcome(&outcome);
    }

    display_session(&session);
    save_session(path, &session)?;
    println!("Plan saved to {}.", path.display());
    Ok(())
}

fn cmd_export(path: &Path, out: &Path) -> Result<()> {
    let session = load_or_new(path)?;
    export_meals_csv(out, session.meals())?;
    println!("Exported {} meals to {}.", session.meals().len(), out.display());
    Ok(())
}

/// Edit the plan through prompts until the user quits.
fn cmd_interactive(path: &Path) -> Result<()> {
    let mut session = load_or_new(path)?;
    let mut remembered: MemoryCache<String, String> = MemoryCache::new();

    loop {
        remembered.evict_expired();
        display_session(&session);

        match prompt_action()? {
            Action::SaveAndQuit => {
                save_session(path, &session)?;
                println!("Plan saved to {}.", path.display());
                return Ok(());
            }
            Action::Quit => {
                if prompt_yes_no("Discard unsaved changes?", false)? {
                    return Ok(());
                }
            }
            action => match interactive_step(&mut session, &mut remembered, action) {
                Ok(Some(outcome @ RebalanceOutcome::OverBudget { .. })) => {
                    display_outcome(&outcome);
                    if !prompt_yes_no("Keep this change anyway?", false)? {
                        session.revert();
                    }
                }
                Ok(Some(outcome)) => display_outcome(&outcome),
                Ok(None) => {}
                Err(e @ PlanError::Prompt(_)) => return Err(e),
                Err(e) => eprintln!("Error: {}", e),
            },
        }
    }
}

/// Prompt for and apply one editing action.
fn interactive_step(
    session: &mut PlanSession,
    remembered: &mut MemoryCache<String, String>,
    action: Action,
) -> Result<Option<RebalanceOutcome>> {
    let outcome = match action {
        Action::SetCalories => {
            let kcal = prompt_number("Daily calories", session.daily_calories() as f64)?;
            session.set_daily_calories(whole_number(kcal), None)
        }
        Action::SetWeight => {
            let kg = prompt_number("Body weight (kg)", session.body_weight_kg())?;
            session.set_body_weight(kg);
            return Ok(None);
        }
        Action::EditMeal => {
            let index = prompt_meal(session.meals(), remembered)?;
            let current = session.meals().get(index)?.calories as f64;
            let calories = whole_number(prompt_number("Calories", current)?);
            session.apply_meal_edit(MealEdit::EditCalories { index, calories })?
        }
        Action::AddMeal => session.apply_meal_edit(MealEdit::Add)?,
        Action::RemoveMeal => {
            let index = prompt_meal(session.meals(), remembered)?;
            session.apply_meal_edit(MealEdit::Remove { index })?
        }
        Action::MoveMeal => {
            let index = prompt_meal(session.meals(), remembered)?;
            let direction = prompt_direction()?;
            session.apply_meal_edit(MealEdit::Move { index, direction })?
        }
        Action::ToggleMealLock => {
            let index = prompt_meal(session.meals(), remembered)?;
            session.apply_meal_edit(MealEdit::ToggleLock { index })?
        }
        Action::RenameMeal => {
            let index = prompt_meal(session.meals(), remembered)?;
            let current = session.meals().get(index)?.name.clone();
            let name = prompt_text("Name", &current)?;
            session.apply_meal_edit(MealEdit::Rename { index, name })?
        }
        Action::DescribeMeal => {
            let index = prompt_meal(session.meals(), remembered)?;
            let current = session.meals().get(index)?.description.clone();
            let description = prompt_text("Description", &current)?;
            session.apply_meal_edit(MealEdit::Describe { index, description })?
        }
        Action::ApplyTemplate => session.apply_template(prompt_template()?),
        Action::SetMacro => {
            let key = prompt_macro_key()?;
            let input = prompt_macro_input()?;
            let value = prompt_number("Value", 0.0)?;
            let outcome = session.apply_macro_edit(MacroEdit { key, input, value });
            display_macro_outcome(&outcome);
            return Ok(None);
        }
        Action::ToggleMacroLock => {
            session.toggle_macro_lock(prompt_macro_key()?);
            return Ok(None);
        }
        Action::ResetMacros => {
            session.reset_macros(false);
            return Ok(None);
        }
        Action::Undo => {
            if !session.undo() {
                println!("Nothing to undo.");
            }
            return Ok(None);
        }
        Action::Redo => {
            if !session.redo() {
                println!("Nothing to redo.");
            }
            return Ok(None);
        }
        Action::SaveAndQuit | Action::Quit => return Ok(None),
    };
    Ok(Some(outcome))
}
