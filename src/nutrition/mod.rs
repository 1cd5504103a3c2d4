pub mod constants;
pub mod feedback;
pub mod recommendation;
pub mod report;

pub use constants::*;
pub use feedback::Feedback;
pub use recommendation::{
    RecommendedIntake, basal_metabolic_rate, daily_energy_expenditure, recommend,
};
pub use report::DailyReport;
