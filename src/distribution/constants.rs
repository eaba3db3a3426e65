/// Energy density of protein in kcal per gram.
pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;

/// Energy density of carbohydrates in kcal per gram.
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;

/// Energy density of fat in kcal per gram.
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// Default macro split applied when calories first become known.
pub const DEFAULT_PROTEIN_PCT: f64 = 30.0;
pub const DEFAULT_CARBS_PCT: f64 = 40.0;
pub const DEFAULT_FAT_PCT: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Precision
// ─────────────────────────────────────────────────────────────────────────────

/// Decimal places kept on a meal's share of the day.
pub const MEAL_PCT_DECIMALS: u32 = 1;

/// Decimal places kept on macro percentages.
pub const MACRO_PCT_DECIMALS: u32 = 3;

/// Decimal places kept on grams per kg of body weight.
pub const GRAMS_PER_KG_DECIMALS: u32 = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Tolerances
// ─────────────────────────────────────────────────────────────────────────────

/// Macro totals further than this from 100% get a rounding correction.
pub const MACRO_CORRECTION_EPSILON: f64 = 0.01;

/// Macro totals within this distance of 100% are kept as the reset baseline.
pub const LAST_GOOD_TOLERANCE: f64 = 0.5;

/// Relative gram deviation from the default split that forces re-initialization.
pub const INIT_DEVIATION_THRESHOLD: f64 = 0.9;

/// Macro percentages summing within this distance of 100% count as complete.
pub const MACRO_PCT_TOLERANCE: f64 = 0.1;

/// Largest rounding error one meal percentage can carry at one decimal.
pub const MEAL_PCT_ROUNDING_STEP: f64 = 0.05;

// ─────────────────────────────────────────────────────────────────────────────
// Session defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Daily calorie target of a freshly initialized plan.
pub const DEFAULT_DAILY_CALORIES: u32 = 2000;

/// Number of undo snapshots kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;
