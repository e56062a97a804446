//! Larder - Recipe Idea Generator
//!
//! Larder keeps a list of the ingredients you have on hand and suggests a
//! few recipe ideas built from them.
//!
//! # Architecture
//!
//! - `ingredients`: normalized, deduplicated ingredient list
//! - `generator`: keyword catalog and templated idea generation
//! - `session`: ingredient list, options, latest results and status line
//! - `render`: plain-text chips and recipe cards
//! - `config`: preferences from file and environment
//! - `cli`: command-line front end

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod ingredients;
pub mod render;
pub mod session;

pub use error::{LarderError, Result};
