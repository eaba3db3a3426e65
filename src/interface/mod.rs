pub mod prompts;
pub mod render;

pub use prompts::{
    fuzzy_candidates, prompt_action, prompt_direction, prompt_macro_input, prompt_macro_key,
    prompt_meal, prompt_number, prompt_template, prompt_text, prompt_yes_no, resolve_meal,
    resolve_meal_with, Action, REMEMBERED_MATCH_TTL,
};
pub use render::{
    display_macro_outcome, display_macros, display_meals, display_outcome, display_readiness,
    display_session,
};
