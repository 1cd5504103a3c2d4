use std::path::{Path, PathBuf};

/// File holding the saved profile.
pub const PROFILE_FILE: &str = "userInfo.json";

/// File holding today's meal list.
pub const MEALS_FILE: &str = "todaysMeals.json";

/// Locations of the tracker's state files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub profile_path: PathBuf,
    pub meals_path: PathBuf,
}

impl Config {
    /// Place both state files under `data_dir`.
    pub fn from_data_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        Self {
            profile_path: data_dir.join(PROFILE_FILE),
            meals_path: data_dir.join(MEALS_FILE),
            data_dir,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_data_dir(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_under_data_dir() {
        let config = Config::from_data_dir("/tmp/tracker");
        assert_eq!(config.profile_path, Path::new("/tmp/tracker/userInfo.json"));
        assert_eq!(config.meals_path, Path::new("/tmp/tracker/todaysMeals.json"));
    }
}
