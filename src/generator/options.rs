//! Generation options: time budget, diet, pantry basics

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LarderError;

/// Default time budget in minutes
pub const DEFAULT_TIME_MINUTES: u32 = 30;

/// Dietary preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
    #[default]
    None,
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
}

impl Diet {
    pub const ALL: [Diet; 5] = [
        Diet::None,
        Diet::Vegetarian,
        Diet::Vegan,
        Diet::GlutenFree,
        Diet::DairyFree,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Diet::None => "none",
            Diet::Vegetarian => "vegetarian",
            Diet::Vegan => "vegan",
            Diet::GlutenFree => "gluten-free",
            Diet::DairyFree => "dairy-free",
        }
    }

    /// Tag shown on cards, if any
    pub fn tag(self) -> Option<&'static str> {
        match self {
            Diet::None => None,
            other => Some(other.as_str()),
        }
    }

    pub fn allows_meat(self) -> bool {
        !matches!(self, Diet::Vegetarian | Diet::Vegan)
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Diet {
    type Err = LarderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Diet::ALL
            .into_iter()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| LarderError::UnknownDiet {
                value: s.to_string(),
            })
    }
}

/// Options for a single generate action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Time budget in minutes
    pub time_minutes: u32,

    pub diet: Diet,

    /// Assume oil, salt, pepper and spices are on hand
    pub pantry_basics: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            time_minutes: DEFAULT_TIME_MINUTES,
            diet: Diet::None,
            pantry_basics: true,
        }
    }
}

impl GenerateOptions {
    pub fn with_time(mut self, minutes: u32) -> Self {
        self.time_minutes = minutes;
        self
    }

    pub fn with_diet(mut self, diet: Diet) -> Self {
        self.diet = diet;
        self
    }

    pub fn with_pantry_basics(mut self, pantry_basics: bool) -> Self {
        self.pantry_basics = pantry_basics;
        self
    }
}
