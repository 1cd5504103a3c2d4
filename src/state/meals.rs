use crate::error::{Result, TrackerError};
use crate::models::{DailyTotals, Food, MealEntry};

/// Today's meals, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealLog {
    entries: Vec<MealEntry>,
}

impl MealLog {
    pub fn new(entries: Vec<MealEntry>) -> Self {
        Self { entries }
    }

    /// Look up `name` in the food table and append a 100g snapshot.
    ///
    /// The log is left untouched on failure.
    pub fn add(&mut self, name: &str) -> Result<&MealEntry> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::InvalidInput(
                "음식 이름을 입력해주세요".to_string(),
            ));
        }

        let food: Food = name.parse()?;
        self.entries.push(MealEntry::from_food(food));
        tracing::debug!(food = name, count = self.entries.len(), "meal added");

        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Remove the entry at `index`, shifting later entries down.
    pub fn remove(&mut self, index: usize) -> Result<MealEntry> {
        if index >= self.entries.len() {
            return Err(TrackerError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }

        let removed = self.entries.remove(index);
        tracing::debug!(food = %removed.name, index, "meal removed");
        Ok(removed)
    }

    /// Convert a 1-based display position into an index into the log.
    pub fn index_for_position(&self, position: usize) -> Result<usize> {
        let index = position.checked_sub(1).ok_or_else(|| {
            TrackerError::InvalidInput("목록 번호는 1부터 시작합니다".to_string())
        })?;

        if index >= self.entries.len() {
            return Err(TrackerError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }

        Ok(index)
    }

    /// Field-wise sum across all entries.
    pub fn totals(&self) -> DailyTotals {
        self.entries.iter().collect()
    }

    pub fn entries(&self) -> &[MealEntry] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_totals_are_zero() {
        let log = MealLog::default();
        assert_eq!(log.totals(), DailyTotals::default());
    }

    #[test]
    fn test_add_then_totals() {
        let mut log = MealLog::default();
        log.add("사과").unwrap();

        let totals = log.totals();
        assert_eq!(totals.calories, 52.0);
        assert_eq!(totals.carbs, 14.0);
        assert_eq!(totals.protein, 0.3);
        assert_eq!(totals.fat, 0.2);
    }

    #[test]
    fn test_unknown_food_leaves_log_unchanged() {
        let mut log = MealLog::default();
        log.add("사과").unwrap();

        let err = log.add("XYZ").unwrap_err();
        assert!(matches!(err, TrackerError::FoodNotFound { .. }));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut log = MealLog::default();
        assert!(matches!(log.add("   "), Err(TrackerError::InvalidInput(_))));
        assert!(log.is_empty());
    }

    #[test]
    fn test_add_trims_input() {
        let mut log = MealLog::default();
        let entry = log.add("  바나나 ").unwrap();
        assert_eq!(entry.name, "바나나");
    }

    #[test]
    fn test_remove_shifts_left() {
        let mut log = MealLog::default();
        log.add("사과").unwrap();
        log.add("밥").unwrap();
        log.add("두부").unwrap();

        let removed = log.remove(1).unwrap();
        assert_eq!(removed.name, "밥");

        let names: Vec<&str> = log.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["사과", "두부"]);
    }

    #[test]
    fn test_remove_single_and_empty() {
        let mut log = MealLog::default();
        log.add("계란").unwrap();
        log.remove(0).unwrap();
        assert!(log.is_empty());

        assert!(matches!(
            log.remove(0),
            Err(TrackerError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_index_for_position() {
        let mut log = MealLog::default();
        log.add("사과").unwrap();
        log.add("밥").unwrap();

        assert!(matches!(
            log.index_for_position(0),
            Err(TrackerError::InvalidInput(_))
        ));
        assert_eq!(log.index_for_position(1).unwrap(), 0);
        assert_eq!(log.index_for_position(2).unwrap(), 1);
        assert!(matches!(
            log.index_for_position(3),
            Err(TrackerError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_clear() {
        let mut log = MealLog::default();
        log.add("우유").unwrap();
        log.add("고구마").unwrap();
        log.clear();
        assert!(log.is_empty());
    }
}
