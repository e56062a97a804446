//! Recipe idea generation
//!
//! This module provides:
//! - The fixed keyword catalog (proteins, carbs, vegetables)
//! - `RecipeIdea` and the generation options
//! - `IdeaGenerator` trait with the local heuristic and the AI stub

mod ai;
mod catalog;
mod idea;
mod local;
mod options;

pub use ai::AiRecipeGenerator;
pub use catalog::{pick, Category, Picks, BASE_PLACEHOLDER, CARBS, PROTEINS, VEGETABLES};
pub use idea::RecipeIdea;
pub use local::{generate_local_recipes, LocalRecipeGenerator};
pub use options::{Diet, GenerateOptions};

use crate::error::Result;
use crate::ingredients::IngredientList;

/// Anything that can turn an ingredient list into recipe ideas.
pub trait IdeaGenerator {
    /// Short name shown in logs
    fn name(&self) -> &str;

    fn generate(&self, ingredients: &IngredientList, options: &GenerateOptions)
        -> Result<Vec<RecipeIdea>>;
}
