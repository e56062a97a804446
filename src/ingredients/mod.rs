//! Ingredient list management
//!
//! This module provides:
//! - Normalization of free-text ingredient input
//! - The deduplicated, insertion-ordered ingredient list

mod list;
mod normalize;

pub use list::IngredientList;
pub use normalize::{normalize_ingredient, split_input};
