use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::models::{MealEntry, UserProfile};

/// Read and decode a JSON file, or `None` if it does not exist, is empty,
/// or holds `null`.
fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Option<T>> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no saved state, using defaults");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    if content.trim().is_empty() {
        return Ok(None);
    }

    Ok(serde_json::from_str::<Option<T>>(&content)?)
}

/// Encode and write a JSON file, replacing any previous contents.
fn write_json<T: Serialize + ?Sized, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), "state written");
    Ok(())
}

/// Load the saved profile. A missing file means no profile.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Option<UserProfile>> {
    read_json(path)
}

/// Save the profile, overwriting whatever was there.
pub fn save_profile<P: AsRef<Path>>(path: P, profile: &UserProfile) -> Result<()> {
    write_json(path, profile)
}

/// Load today's meals. A missing file means an empty list.
pub fn load_meals<P: AsRef<Path>>(path: P) -> Result<Vec<MealEntry>> {
    Ok(read_json::<Vec<MealEntry>, _>(path)?.unwrap_or_default())
}

/// Save the full meal list.
pub fn save_meals<P: AsRef<Path>>(path: P, meals: &[MealEntry]) -> Result<()> {
    write_json(path, meals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Food, Gender};
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn test_missing_files_default() {
        let dir = tempdir().unwrap();
        assert!(load_profile(dir.path().join("userInfo.json")).unwrap().is_none());
        assert!(load_meals(dir.path().join("todaysMeals.json")).unwrap().is_empty());
    }

    #[test]
    fn test_null_files_default() {
        let dir = tempdir().unwrap();
        let profile_path = dir.path().join("userInfo.json");
        let meals_path = dir.path().join("todaysMeals.json");
        std::fs::write(&profile_path, "null").unwrap();
        std::fs::write(&meals_path, "null\n").unwrap();

        assert!(load_profile(&profile_path).unwrap().is_none());
        assert!(load_meals(&meals_path).unwrap().is_empty());
    }

    #[test]
    fn test_meals_roundtrip_preserves_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todaysMeals.json");
        let meals = vec![
            MealEntry::from_food(Food::Tofu),
            MealEntry::from_food(Food::Apple),
            MealEntry::from_food(Food::Tofu),
        ];

        save_meals(&path, &meals).unwrap();
        assert_eq!(load_meals(&path).unwrap(), meals);
    }

    #[test]
    fn test_profile_overwritten_wholesale() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("userInfo.json");

        save_profile(&path, &UserProfile::new(180.0, 80.0, 30.0, Gender::Male)).unwrap();
        let second = UserProfile {
            height: Some(160.0),
            weight: None,
            age: Some(50.0),
            gender: Gender::Female,
        };
        save_profile(&path, &second).unwrap();

        assert_eq!(load_profile(&path).unwrap(), Some(second));
    }

    #[test]
    fn test_load_legacy_string_profile() {
        let json = r#"{"height":"180","weight":"80","age":"30","gender":"male"}"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let profile = load_profile(file.path()).unwrap().unwrap();
        assert_eq!(profile, UserProfile::new(180.0, 80.0, 30.0, Gender::Male));
    }

    #[test]
    fn test_corrupt_meals_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[{\"name\": 1}").unwrap();
        assert!(load_meals(file.path()).is_err());
    }
}
