use std::fs;
use std::path::Path;

use tracing::debug;

use crate::distribution::MealPlanStructure;
use crate::error::Result;
use crate::state::PlanSession;

/// Load a session from a JSON file.
pub fn load_session<P: AsRef<Path>>(path: P) -> Result<PlanSession> {
    let content = fs::read_to_string(path.as_ref())?;
    let session: PlanSession = serde_json::from_str(&content)?;
    debug!(path = %path.as_ref().display(), "loaded plan session");
    Ok(session)
}

/// Load a session, or start the default plan when the file does not exist yet.
pub fn load_or_new<P: AsRef<Path>>(path: P) -> Result<PlanSession> {
    if path.as_ref().exists() {
        load_session(path)
    } else {
        Ok(PlanSession::default())
    }
}

/// Save a session to a JSON file.
pub fn save_session<P: AsRef<Path>>(path: P, session: &PlanSession) -> Result<()> {
    let json = serde_json::to_string_pretty(session)?;
    fs::write(path.as_ref(), json)?;
    debug!(path = %path.as_ref().display(), "saved plan session");
    Ok(())
}

/// Write the meal table as CSV.
pub fn export_meals_csv<P: AsRef<Path>>(path: P, meals: &MealPlanStructure) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "name",
        "key",
        "calories",
        "calories_pct",
        "locked",
        "description",
    ])?;

    for meal in meals.meals() {
        wtr.write_record([
            meal.name.clone(),
            meal.key.clone().unwrap_or_default(),
            meal.calories.to_string(),
            format!("{:.1}", meal.calories_pct),
            meal.locked.to_string(),
            meal.description.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
