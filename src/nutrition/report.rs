use crate::error::Result;
use crate::models::{DailyTotals, UserProfile};
use crate::nutrition::feedback::Feedback;
use crate::nutrition::recommendation::{RecommendedIntake, recommend};
use crate::state::MealLog;

/// Intake compared against the recommendation for one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyReport {
    pub totals: DailyTotals,
    pub recommended: RecommendedIntake,
    pub feedback: Feedback,
}

impl DailyReport {
    pub fn build(profile: &UserProfile, meals: &MealLog) -> Result<Self> {
        let recommended = recommend(profile)?;
        let totals = meals.totals();
        let feedback = Feedback::classify(&totals, &recommended)?;

        Ok(Self {
            totals,
            recommended,
            feedback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use crate::models::Gender;

    #[test]
    fn test_report_with_empty_log() {
        let profile = UserProfile::new(180.0, 80.0, 30.0, Gender::Male);
        let report = DailyReport::build(&profile, &MealLog::default()).unwrap();

        assert_eq!(report.totals, DailyTotals::default());
        assert_eq!(report.recommended.calories, 2224.0);
        assert_eq!(report.feedback, Feedback::UnderTarget);
    }

    #[test]
    fn test_report_requires_profile() {
        let mut meals = MealLog::default();
        meals.add("아몬드").unwrap();
        assert!(matches!(
            DailyReport::build(&UserProfile::default(), &meals),
            Err(TrackerError::ProfileIncomplete)
        ));
    }
}
