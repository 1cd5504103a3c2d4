/// Revised Harris-Benedict coefficients: `(base, per_kg, per_cm, per_year)`.
pub const BMR_MALE: (f64, f64, f64, f64) = (88.362, 13.397, 4.799, 5.677);
pub const BMR_FEMALE: (f64, f64, f64, f64) = (447.593, 9.247, 3.098, 4.330);

/// Sedentary activity multiplier applied to BMR.
pub const ACTIVITY_FACTOR: f64 = 1.2;

// ─────────────────────────────────────────────────────────────────────────────
// Macro split of the daily calorie target
// ─────────────────────────────────────────────────────────────────────────────

pub const CARBS_SHARE: f64 = 0.50;
pub const PROTEIN_SHARE: f64 = 0.30;
pub const FAT_SHARE: f64 = 0.20;

/// Energy density in kcal per gram.
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Feedback bands (intake / target)
// ─────────────────────────────────────────────────────────────────────────────

/// Below this ratio the day is under target.
pub const UNDER_TARGET_RATIO: f64 = 0.8;

/// Above this ratio the day is over target.
pub const OVER_TARGET_RATIO: f64 = 1.2;
