//! Session: one user's working state
//!
//! Every mutation happens synchronously inside a command handler, so the
//! session is plain owned data.

use log::{debug, info, warn};
use serde::Serialize;

use crate::generator::{GenerateOptions, IdeaGenerator, LocalRecipeGenerator, RecipeIdea};
use crate::ingredients::IngredientList;

/// Generation is refused below this many ingredients
pub const MIN_INGREDIENTS: usize = 2;

pub const STATUS_NEED_MORE: &str = "Add at least 2 ingredients for better ideas.";

#[derive(Debug, Clone, Default, Serialize)]
pub struct Session {
    ingredients: IngredientList,
    options: GenerateOptions,
    results: Vec<RecipeIdea>,
    status: String,
}

impl Session {
    pub fn new(options: GenerateOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn ingredients(&self) -> &IngredientList {
        &self.ingredients
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut GenerateOptions {
        &mut self.options
    }

    pub fn results(&self) -> &[RecipeIdea] {
        &self.results
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Add one ingredient; returns whether the list changed.
    pub fn add(&mut self, raw: &str) -> bool {
        self.ingredients.add(raw)
    }

    /// Add comma-separated ingredients; returns how many were new.
    pub fn add_many(&mut self, raw: &str) -> usize {
        self.ingredients.add_many(raw)
    }

    pub fn remove(&mut self, value: &str) -> bool {
        self.ingredients.remove(value)
    }

    /// Reset ingredients, results and status.
    pub fn clear(&mut self) {
        info!("Clearing session");
        self.ingredients.clear();
        self.results.clear();
        self.status.clear();
    }

    /// Generate with the local heuristic generator.
    pub fn generate(&mut self) {
        self.generate_with(&LocalRecipeGenerator);
    }

    /// Generate with `generator`, updating results and status.
    ///
    /// Never fails: too few ingredients or a generator error both end up in
    /// the status line with the results emptied.
    pub fn generate_with(&mut self, generator: &dyn IdeaGenerator) {
        if self.ingredients.len() < MIN_INGREDIENTS {
            debug!(
                "Refusing to generate with {} ingredient(s)",
                self.ingredients.len()
            );
            self.status = STATUS_NEED_MORE.to_string();
            self.results.clear();
            return;
        }

        info!(
            "Generating ideas with '{}' generator from {} ingredients",
            generator.name(),
            self.ingredients.len()
        );

        match generator.generate(&self.ingredients, &self.options) {
            Ok(ideas) => {
                self.status = format!("Showing {} ideas.", ideas.len());
                self.results = ideas;
            }
            Err(e) => {
                warn!("Generation failed [{}]: {}", e.error_code(), e);
                self.status = e.friendly_message();
                self.results.clear();
            }
        }
    }
}
