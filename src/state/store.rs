use crate::config::Config;
use crate::error::Result;
use crate::models::{MealEntry, UserProfile};
use crate::nutrition::{DailyReport, RecommendedIntake, recommend};
use crate::state::meals::MealLog;
use crate::state::persistence::{load_meals, load_profile, save_meals, save_profile};

/// Profile and meal list for one data directory.
///
/// State is read once in [`TrackerStore::load`]; every mutation writes the
/// whole affected record back before returning.
pub struct TrackerStore {
    config: Config,
    profile: Option<UserProfile>,
    meals: MealLog,
}

impl TrackerStore {
    pub fn load(config: Config) -> Result<Self> {
        let profile = load_profile(&config.profile_path)?;
        let meals = MealLog::new(load_meals(&config.meals_path)?);

        tracing::info!(
            data_dir = %config.data_dir.display(),
            has_profile = profile.is_some(),
            meals = meals.len(),
            "state loaded"
        );

        Ok(Self {
            config,
            profile,
            meals,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn meals(&self) -> &MealLog {
        &self.meals
    }

    /// Replace the saved profile.
    pub fn set_profile(&mut self, profile: UserProfile) -> Result<()> {
        save_profile(&self.config.profile_path, &profile)?;
        self.profile = Some(profile);
        Ok(())
    }

    pub fn add_meal(&mut self, name: &str) -> Result<MealEntry> {
        let entry = self.meals.add(name)?.clone();
        self.persist_meals()?;
        Ok(entry)
    }

    pub fn remove_meal(&mut self, index: usize) -> Result<MealEntry> {
        let removed = self.meals.remove(index)?;
        self.persist_meals()?;
        Ok(removed)
    }

    pub fn clear_meals(&mut self) -> Result<()> {
        self.meals.clear();
        self.persist_meals()
    }

    /// Recommended intake for the saved profile, computed fresh each call.
    pub fn recommendation(&self) -> Result<RecommendedIntake> {
        recommend(&self.profile.unwrap_or_default())
    }

    pub fn report(&self) -> Result<DailyReport> {
        DailyReport::build(&self.profile.unwrap_or_default(), &self.meals)
    }

    fn persist_meals(&self) -> Result<()> {
        save_meals(&self.config.meals_path, self.meals.entries())
    }
}
