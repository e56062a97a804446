//! Deduplicated, insertion-ordered ingredient list

use log::debug;
use serde::{Deserialize, Serialize};

use super::normalize::{normalize_ingredient, split_input};

/// The ingredients the user currently has on hand.
///
/// Entries are normalized and unique by value. Order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct IngredientList {
    items: Vec<String>,
}

impl IngredientList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Normalize `raw` and append it.
    ///
    /// Returns `false` when the normalized value is empty or already
    /// present, in which case the list is unchanged.
    pub fn add(&mut self, raw: &str) -> bool {
        let value = normalize_ingredient(raw);
        if value.is_empty() || self.contains(&value) {
            return false;
        }

        debug!("Adding ingredient: {}", value);
        self.items.push(value);
        true
    }

    /// Add every comma-separated ingredient in `raw`; returns how many were new.
    pub fn add_many(&mut self, raw: &str) -> usize {
        split_input(raw)
            .iter()
            .filter(|value| self.add(value))
            .count()
    }

    /// Remove all entries equal to `value`. Unknown values are a no-op.
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i != value);
        let removed = self.items.len() != before;
        if removed {
            debug!("Removed ingredient: {}", value);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, value: &str) -> bool {
        self.items.iter().any(|i| i == value)
    }

    /// True when some ingredient contains `word` as a substring.
    pub fn has(&self, word: &str) -> bool {
        self.items.iter().any(|i| i.contains(word))
    }

    /// True when any of `words` is a substring of some ingredient.
    pub fn has_any(&self, words: &[&str]) -> bool {
        words.iter().any(|w| self.has(w))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

impl<S: AsRef<str>> FromIterator<S> for IngredientList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = IngredientList::new();
        for raw in iter {
            list.add(raw.as_ref());
        }
        list
    }
}

impl From<Vec<String>> for IngredientList {
    fn from(items: Vec<String>) -> Self {
        items.into_iter().collect()
    }
}

impl From<IngredientList> for Vec<String> {
    fn from(list: IngredientList) -> Self {
        list.items
    }
}
