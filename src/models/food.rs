use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{Result, TrackerError};

/// Macronutrients for a 100g reference portion.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

impl Macros {
    pub const fn new(calories: f64, carbs: f64, protein: f64, fat: f64) -> Self {
        Self {
            calories,
            carbs,
            protein,
            fat,
        }
    }
}

/// Foods with built-in nutrition data.
///
/// Names are matched exactly, so `Food::from_name("사과")` succeeds while
/// any spacing or spelling variant does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Food {
    Apple,
    ChickenBreast,
    Egg,
    Rice,
    Banana,
    Almond,
    SweetPotato,
    Milk,
    Tofu,
}

impl Food {
    /// Every table entry, in display order.
    pub const ALL: [Food; 9] = [
        Food::Apple,
        Food::ChickenBreast,
        Food::Egg,
        Food::Rice,
        Food::Banana,
        Food::Almond,
        Food::SweetPotato,
        Food::Milk,
        Food::Tofu,
    ];

    /// Display name, which is also the lookup key.
    pub fn name(self) -> &'static str {
        match self {
            Food::Apple => "사과",
            Food::ChickenBreast => "닭가슴살",
            Food::Egg => "계란",
            Food::Rice => "밥",
            Food::Banana => "바나나",
            Food::Almond => "아몬드",
            Food::SweetPotato => "고구마",
            Food::Milk => "우유",
            Food::Tofu => "두부",
        }
    }

    /// Per-100g macros.
    pub fn macros(self) -> Macros {
        match self {
            Food::Apple => Macros::new(52.0, 14.0, 0.3, 0.2),
            Food::ChickenBreast => Macros::new(165.0, 0.0, 31.0, 3.6),
            Food::Egg => Macros::new(155.0, 1.1, 13.0, 11.0),
            Food::Rice => Macros::new(130.0, 28.0, 2.7, 0.3),
            Food::Banana => Macros::new(89.0, 23.0, 1.1, 0.3),
            Food::Almond => Macros::new(579.0, 22.0, 21.0, 49.0),
            Food::SweetPotato => Macros::new(86.0, 20.0, 1.6, 0.1),
            Food::Milk => Macros::new(42.0, 5.0, 3.4, 1.0),
            Food::Tofu => Macros::new(76.0, 1.9, 8.0, 4.8),
        }
    }

    /// Exact-match lookup.
    pub fn from_name(name: &str) -> Option<Food> {
        Food::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Names to offer when `query` has no match, closest first.
    ///
    /// Falls back to the first two table entries when nothing is similar.
    pub fn suggestions(query: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(Food, f64)> = Food::ALL
            .into_iter()
            .map(|f| (f, jaro_winkler(f.name(), query)))
            .filter(|(_, score)| *score > 0.5)
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut names: Vec<String> = scored
            .into_iter()
            .take(limit)
            .map(|(f, _)| f.name().to_string())
            .collect();

        if names.is_empty() {
            names = Food::ALL
                .iter()
                .take(limit.min(2))
                .map(|f| f.name().to_string())
                .collect();
        }

        names
    }
}

impl fmt::Display for Food {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Food {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        Food::from_name(s).ok_or_else(|| TrackerError::FoodNotFound {
            name: s.to_string(),
            suggestions: Food::suggestions(s, 3),
        })
    }
}
