use dialoguer::{Confirm, Input, Select};

use crate::error::{Result, TrackerError};
use crate::models::{Gender, UserProfile};

/// Parse a positive number, as entered in the profile form.
pub fn parse_measurement(label: &str, input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| TrackerError::InvalidInput(format!("{label}은(는) 숫자여야 합니다")))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(TrackerError::InvalidInput(format!(
            "{label}은(는) 0보다 커야 합니다"
        )));
    }

    Ok(value)
}

fn prompt_measurement(label: &str, current: Option<f64>) -> Result<f64> {
    let mut input = Input::<String>::new().with_prompt(label).validate_with(
        |s: &String| -> std::result::Result<(), String> {
            parse_measurement(label, s).map(|_| ()).map_err(|e| e.to_string())
        },
    );

    if let Some(value) = current {
        input = input.default(value.to_string());
    }

    let text = input.interact_text()?;
    parse_measurement(label, &text)
}

/// Prompt for height in cm.
pub fn prompt_height(current: Option<f64>) -> Result<f64> {
    prompt_measurement("키 (cm)", current)
}

/// Prompt for weight in kg.
pub fn prompt_weight(current: Option<f64>) -> Result<f64> {
    prompt_measurement("몸무게 (kg)", current)
}

/// Prompt for age in years.
pub fn prompt_age(current: Option<f64>) -> Result<f64> {
    prompt_measurement("나이", current)
}

/// Prompt for gender. Defaults to male when nothing is saved.
pub fn prompt_gender(current: Option<Gender>) -> Result<Gender> {
    let options = [Gender::Male, Gender::Female];
    let default = match current.unwrap_or(Gender::Male) {
        Gender::Male => 0,
        Gender::Female => 1,
    };

    let selection = Select::new()
        .with_prompt("성별")
        .items(&options.map(Gender::label))
        .default(default)
        .interact()?;

    Ok(options[selection])
}

/// Fill in a profile, prefilling from `current` and skipping any value
/// already given.
pub fn prompt_profile(
    current: Option<&UserProfile>,
    height: Option<f64>,
    weight: Option<f64>,
    age: Option<f64>,
    gender: Option<Gender>,
) -> Result<UserProfile> {
    let saved = current.copied().unwrap_or_default();

    let height = match height {
        Some(h) => h,
        None => prompt_height(saved.height)?,
    };
    let weight = match weight {
        Some(w) => w,
        None => prompt_weight(saved.weight)?,
    };
    let age = match age {
        Some(a) => a,
        None => prompt_age(saved.age)?,
    };
    let gender = match gender {
        Some(g) => g,
        None => prompt_gender(current.map(|p| p.gender))?,
    };

    Ok(UserProfile::new(height, weight, age, gender))
}

/// Prompt for the name of a food to add.
pub fn prompt_food_name() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("음식 이름 (예: 사과, 닭가슴살)")
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_measurement() {
        assert_eq!(parse_measurement("Height", " 172.5 ").unwrap(), 172.5);
        assert!(parse_measurement("Height", "").is_err());
        assert!(parse_measurement("Height", "tall").is_err());
        assert!(parse_measurement("Height", "0").is_err());
        assert!(parse_measurement("Height", "-3").is_err());
    }
}
