use crate::error::{Result, TrackerError};
use crate::models::DailyTotals;
use crate::nutrition::constants::{OVER_TARGET_RATIO, UNDER_TARGET_RATIO};
use crate::nutrition::recommendation::RecommendedIntake;

/// Qualitative verdict on the day's calorie intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    UnderTarget,
    OnTarget,
    OverTarget,
}

impl Feedback {
    /// Classify by `totals.calories / recommended.calories`.
    ///
    /// A non-positive target is rejected instead of producing an infinite or
    /// NaN ratio.
    pub fn classify(totals: &DailyTotals, recommended: &RecommendedIntake) -> Result<Self> {
        if recommended.calories <= 0.0 {
            return Err(TrackerError::ZeroCalorieTarget);
        }
        Ok(Self::from_ratio(totals.calories / recommended.calories))
    }

    /// Both band edges belong to `OnTarget`.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < UNDER_TARGET_RATIO {
            Feedback::UnderTarget
        } else if ratio > OVER_TARGET_RATIO {
            Feedback::OverTarget
        } else {
            Feedback::OnTarget
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Feedback::UnderTarget => {
                "아직 목표 섭취량까지는 조금 더 남았어요. 건강한 간식을 추가해보는 건 어떨까요?"
            }
            Feedback::OnTarget => {
                "훌륭해요! 목표치에 맞게 균형 잡힌 식사를 하셨습니다. 이대로 꾸준히 유지해보세요."
            }
            Feedback::OverTarget => {
                "목표 섭취량을 초과했습니다. 내일은 활동량을 조금 늘려보는 것도 좋겠네요!"
            }
        }
    }
}
