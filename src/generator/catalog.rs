//! Keyword catalog used for category matching
//!
//! Tables are ordered: the first entry found in the ingredient list wins.

use serde::{Deserialize, Serialize};

use crate::ingredients::IngredientList;

pub const PROTEINS: &[&str] = &[
    "chicken",
    "beef",
    "pork",
    "tofu",
    "eggs",
    "beans",
    "lentils",
    "chickpeas",
    "fish",
    "salmon",
    "tuna",
];

pub const CARBS: &[&str] = &[
    "rice", "pasta", "noodles", "bread", "tortilla", "potatoes", "quinoa",
];

pub const VEGETABLES: &[&str] = &[
    "onion", "garlic", "tomato", "spinach", "broccoli", "pepper", "mushroom", "carrot", "zucchini",
];

/// Ingredient category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Protein,
    Carb,
    Vegetable,
}

impl Category {
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Protein => PROTEINS,
            Category::Carb => CARBS,
            Category::Vegetable => VEGETABLES,
        }
    }

    /// Suggestion shown under "missing" when nothing in this category matched
    pub fn placeholder(self) -> &'static str {
        match self {
            Category::Protein => "a protein (e.g., chicken/tofu/eggs)",
            Category::Carb => "a carb (rice/noodles)",
            Category::Vegetable => "a vegetable (e.g., onion/pepper/broccoli)",
        }
    }

    /// Every missing-list wording an idea may use for this category
    pub fn suggestions(self) -> &'static [&'static str] {
        match self {
            Category::Protein => &["a protein (e.g., chicken/tofu/eggs)"],
            Category::Carb => &["a carb (rice/noodles)", BASE_PLACEHOLDER],
            Category::Vegetable => &["a vegetable (e.g., onion/pepper/broccoli)"],
        }
    }
}

/// Carb wording for dishes built on a base
pub const BASE_PLACEHOLDER: &str = "a base (rice/quinoa/bread)";

/// First keyword in `table` that is a substring of some ingredient.
pub fn pick(table: &[&'static str], ingredients: &IngredientList) -> Option<&'static str> {
    table.iter().copied().find(|w| ingredients.has(w))
}

/// One selected keyword per category, if any matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Picks {
    pub protein: Option<&'static str>,
    pub carb: Option<&'static str>,
    pub vegetable: Option<&'static str>,
}

impl Picks {
    pub fn from_ingredients(ingredients: &IngredientList) -> Self {
        Self {
            protein: pick(Category::Protein.keywords(), ingredients),
            carb: pick(Category::Carb.keywords(), ingredients),
            vegetable: pick(Category::Vegetable.keywords(), ingredients),
        }
    }

    pub fn get(&self, category: Category) -> Option<&'static str> {
        match category {
            Category::Protein => self.protein,
            Category::Carb => self.carb,
            Category::Vegetable => self.vegetable,
        }
    }

    /// Unmatched categories, in order protein, vegetable, carb.
    pub fn unmatched(&self) -> Vec<Category> {
        [Category::Protein, Category::Vegetable, Category::Carb]
            .into_iter()
            .filter(|c| self.get(*c).is_none())
            .collect()
    }

    /// Placeholders for unmatched categories: protein, vegetable, carb.
    pub fn gaps(&self) -> Vec<String> {
        self.unmatched()
            .into_iter()
            .map(|c| c.placeholder().to_string())
            .collect()
    }
}
