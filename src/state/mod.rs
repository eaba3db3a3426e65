mod cache;
mod history;
mod persistence;
mod session;

pub use cache::{Clock, KeyedCache, ManualClock, MemoryCache, SystemClock};
pub use history::History;
pub use persistence::{export_meals_csv, load_session, load_or_new, save_session};
pub use session::{MacroEdit, MealEdit, PlanSession, PlanSnapshot};
