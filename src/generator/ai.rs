//! AI-backed generation
//!
//! Not connected: every call fails with `LarderError::AiNotConnected`.
//! Keys belong behind a server-side route, so nothing here talks to a model
//! directly.

use log::warn;

use super::idea::RecipeIdea;
use super::options::GenerateOptions;
use super::IdeaGenerator;
use crate::error::{LarderError, Result};
use crate::ingredients::IngredientList;

#[derive(Debug, Default, Clone, Copy)]
pub struct AiRecipeGenerator;

impl IdeaGenerator for AiRecipeGenerator {
    fn name(&self) -> &str {
        "ai"
    }

    fn generate(
        &self,
        ingredients: &IngredientList,
        _options: &GenerateOptions,
    ) -> Result<Vec<RecipeIdea>> {
        warn!(
            "AI generation requested for {} ingredients but no backend is connected",
            ingredients.len()
        );
        Err(LarderError::AiNotConnected)
    }
}
