use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, TrackerError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    /// Anything other than `"male"` takes the non-male formula branch.
    #[default]
    #[serde(other)]
    Female,
}

impl Gender {
    /// Label shown in prompts and reports.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "남성",
            Gender::Female => "여성",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("male"),
            Gender::Female => f.write_str("female"),
        }
    }
}

impl FromStr for Gender {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(TrackerError::InvalidInput(format!(
                "알 수 없는 성별 '{other}' (male 또는 female)"
            ))),
        }
    }
}

/// Body measurements used for the recommendation.
///
/// Stored as a single record and replaced wholesale on every save. A field
/// is `None` when it was never entered, or when the saved value is empty,
/// zero or not a number.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,

    #[serde(default, deserialize_with = "lenient_gender")]
    pub gender: Gender,
}

impl UserProfile {
    pub fn new(height_cm: f64, weight_kg: f64, age_years: f64, gender: Gender) -> Self {
        Self {
            height: Some(height_cm),
            weight: Some(weight_kg),
            age: Some(age_years),
            gender,
        }
    }

    /// `(height_cm, weight_kg, age_years)` when all three are present.
    pub fn measurements(&self) -> Option<(f64, f64, f64)> {
        Some((self.height?, self.weight?, self.age?))
    }

    pub fn is_complete(&self) -> bool {
        self.measurements().is_some()
    }
}

/// Accepts numbers or numeric strings; empty, zero and unparseable values
/// decode as missing.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl RawNumber {
    fn into_value(self) -> Option<f64> {
        let value = match self {
            RawNumber::Number(n) => n,
            RawNumber::Text(s) => s.trim().parse().ok()?,
            RawNumber::Other(_) => return None,
        };
        (value.is_finite() && value != 0.0).then_some(value)
    }
}

fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    Ok(raw.and_then(RawNumber::into_value))
}

/// Only the string `"male"` selects `Gender::Male`; null, other strings
/// and non-string values all decode as `Gender::Female`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawGender {
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn lenient_gender<'de, D>(deserializer: D) -> std::result::Result<Gender, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawGender>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawGender::Text(s)) if s == "male" => Gender::Male,
        _ => Gender::Female,
    })
}
