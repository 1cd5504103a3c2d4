pub mod food;
pub mod meal;
pub mod profile;

pub use food::{Food, Macros};
pub use meal::{DailyTotals, MealEntry};
pub use profile::{Gender, UserProfile};
