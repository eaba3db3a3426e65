use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Meal index {index} out of range (plan has {len} meals)")]
    MealIndexOutOfRange { index: usize, len: usize },

    #[error("Meal not found: {0}")]
    MealNotFound(String),

    #[error("Meal plan is empty")]
    EmptyPlan,

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
