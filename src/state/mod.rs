mod meals;
mod persistence;
mod store;

pub use meals::MealLog;
pub use persistence::{load_meals, load_profile, save_meals, save_profile};
pub use store::TrackerStore;
