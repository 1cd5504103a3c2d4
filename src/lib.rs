pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod lotto;
pub mod models;
pub mod nutrition;
pub mod state;

pub use error::{Result, TrackerError};
pub use models::{Food, MealEntry, UserProfile};
