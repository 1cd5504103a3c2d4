pub mod prompts;
pub mod render;

pub use prompts::{parse_measurement, prompt_food_name, prompt_profile, prompt_yes_no};
pub use render::{
    display_draws, display_food_table, display_meals, display_profile, display_report,
};
