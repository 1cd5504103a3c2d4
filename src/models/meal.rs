use serde::{Deserialize, Serialize};

use crate::models::food::{Food, Macros};

/// A 100g portion of a food, copied from the table when it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    pub name: String,
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

impl MealEntry {
    pub fn from_food(food: Food) -> Self {
        let Macros {
            calories,
            carbs,
            protein,
            fat,
        } = food.macros();

        Self {
            name: food.name().to_string(),
            calories,
            carbs,
            protein,
            fat,
        }
    }

    pub fn macros(&self) -> Macros {
        Macros::new(self.calories, self.carbs, self.protein, self.fat)
    }
}

/// Sum of all meal entries for the day.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DailyTotals {
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

impl DailyTotals {
    pub fn add(&mut self, entry: &MealEntry) {
        self.calories += entry.calories;
        self.carbs += entry.carbs;
        self.protein += entry.protein;
        self.fat += entry.fat;
    }
}

impl<'a> FromIterator<&'a MealEntry> for DailyTotals {
    fn from_iter<I: IntoIterator<Item = &'a MealEntry>>(iter: I) -> Self {
        iter.into_iter().fold(DailyTotals::default(), |mut acc, e| {
            acc.add(e);
            acc
        })
    }
}
