use crate::error::{Result, TrackerError};
use crate::models::{Gender, UserProfile};
use crate::nutrition::constants::*;

/// Daily intake target derived from a profile. All values are rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendedIntake {
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

impl RecommendedIntake {
    /// Split a TDEE into the rounded calorie and macro targets.
    pub fn from_tdee(tdee: f64) -> Self {
        Self {
            calories: tdee.round(),
            carbs: (tdee * CARBS_SHARE / KCAL_PER_G_CARBS).round(),
            protein: (tdee * PROTEIN_SHARE / KCAL_PER_G_PROTEIN).round(),
            fat: (tdee * FAT_SHARE / KCAL_PER_G_FAT).round(),
        }
    }
}

/// Revised Harris-Benedict BMR in kcal/day.
///
/// Inputs are not range-checked.
pub fn basal_metabolic_rate(height_cm: f64, weight_kg: f64, age_years: f64, gender: Gender) -> f64 {
    let (base, per_kg, per_cm, per_year) = match gender {
        Gender::Male => BMR_MALE,
        Gender::Female => BMR_FEMALE,
    };
    base + per_kg * weight_kg + per_cm * height_cm - per_year * age_years
}

/// BMR scaled by the sedentary activity factor.
pub fn daily_energy_expenditure(bmr: f64) -> f64 {
    bmr * ACTIVITY_FACTOR
}

/// Compute the recommended intake for a profile.
///
/// Fails with `ProfileIncomplete` if height, weight or age is missing.
pub fn recommend(profile: &UserProfile) -> Result<RecommendedIntake> {
    let (height, weight, age) = profile
        .measurements()
        .ok_or(TrackerError::ProfileIncomplete)?;

    let bmr = basal_metabolic_rate(height, weight, age, profile.gender);
    let tdee = daily_energy_expenditure(bmr);

    tracing::debug!(bmr, tdee, gender = %profile.gender, "computed energy expenditure");

    Ok(RecommendedIntake::from_tdee(tdee))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_male() {
        let bmr = basal_metabolic_rate(180.0, 80.0, 30.0, Gender::Male);
        assert!((bmr - 1853.632).abs() < 1e-6);
    }

    #[test]
    fn test_bmr_female() {
        // 447.593 + 9.247*60 + 3.098*165 - 4.330*25
        let bmr = basal_metabolic_rate(165.0, 60.0, 25.0, Gender::Female);
        assert!((bmr - 1405.333).abs() < 1e-6);
    }

    #[test]
    fn test_recommend_male() {
        let profile = UserProfile::new(180.0, 80.0, 30.0, Gender::Male);
        let rec = recommend(&profile).unwrap();
        assert_eq!(rec.calories, 2224.0);
        assert_eq!(rec.carbs, 278.0);
        assert_eq!(rec.protein, 167.0);
        assert_eq!(rec.fat, 49.0);
    }

    #[test]
    fn test_recommend_requires_measurements() {
        let mut profile = UserProfile::new(180.0, 80.0, 30.0, Gender::Male);
        profile.age = None;
        assert!(matches!(
            recommend(&profile),
            Err(TrackerError::ProfileIncomplete)
        ));
        assert!(matches!(
            recommend(&UserProfile::default()),
            Err(TrackerError::ProfileIncomplete)
        ));
    }

    #[test]
    fn test_negative_inputs_pass_through() {
        let profile = UserProfile::new(-10.0, 80.0, 30.0, Gender::Male);
        let rec = recommend(&profile).unwrap();
        let expected = daily_energy_expenditure(basal_metabolic_rate(
            -10.0,
            80.0,
            30.0,
            Gender::Male,
        ));
        assert_eq!(rec.calories, expected.round());
    }
}
