//! Recipe idea record

use serde::{Deserialize, Serialize};

/// One templated recipe suggestion.
///
/// Built fresh on every generate action and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIdea {
    pub title: String,

    /// Time estimate, e.g. "30 min"
    pub time: String,

    pub tags: Vec<String>,

    /// Ingredients from the list this idea uses
    pub uses: Vec<String>,

    /// Things worth picking up
    pub missing: Vec<String>,

    /// Ordered instructions
    pub steps: Vec<String>,
}

impl RecipeIdea {
    pub fn new(title: &str, minutes: u32) -> Self {
        Self {
            title: title.to_string(),
            time: format!("{} min", minutes),
            tags: Vec::new(),
            uses: Vec::new(),
            missing: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Add tags, skipping absent ones
    pub fn with_tags<'a>(mut self, tags: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        self.tags.extend(tags.into_iter().flatten().map(str::to_string));
        self
    }

    pub fn with_uses<'a>(mut self, uses: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        self.uses.extend(uses.into_iter().flatten().map(str::to_string));
        self
    }

    pub fn with_missing<S: Into<String>>(mut self, missing: impl IntoIterator<Item = S>) -> Self {
        self.missing.extend(missing.into_iter().map(Into::into));
        self
    }

    pub fn with_steps<S: Into<String>>(mut self, steps: impl IntoIterator<Item = S>) -> Self {
        self.steps.extend(steps.into_iter().map(Into::into));
        self
    }
}
