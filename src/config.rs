//! User preferences
//!
//! Resolved in layers: defaults, then an optional JSON file, then
//! `LARDER_*` environment variables. CLI flags are applied last by the
//! binary.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::error::{LarderError, Result};
use crate::generator::{Diet, GenerateOptions};

pub const ENV_TIME: &str = "LARDER_TIME";
pub const ENV_DIET: &str = "LARDER_DIET";
pub const ENV_PANTRY: &str = "LARDER_PANTRY";

/// Accepted time budget range, in minutes
pub const MIN_TIME_MINUTES: u32 = 5;
pub const MAX_TIME_MINUTES: u32 = 240;

/// Check a time budget is within range.
pub fn validate_time(minutes: u32) -> Result<u32> {
    if (MIN_TIME_MINUTES..=MAX_TIME_MINUTES).contains(&minutes) {
        Ok(minutes)
    } else {
        Err(LarderError::InvalidConfig {
            field: "time_minutes".to_string(),
            reason: format!(
                "{} is outside {}..={} minutes",
                minutes, MIN_TIME_MINUTES, MAX_TIME_MINUTES
            ),
        })
    }
}

/// Persisted user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub time_minutes: u32,
    pub diet: Diet,
    pub pantry_basics: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        let options = GenerateOptions::default();
        Self {
            time_minutes: options.time_minutes,
            diet: options.diet,
            pantry_basics: options.pantry_basics,
        }
    }
}

impl Preferences {
    /// Defaults, overlaid with `path` (if given) and the process environment.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let prefs = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        let env: HashMap<String, String> = std::env::vars().collect();
        prefs.with_env(&env)
    }

    /// Load preferences from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading preferences from: {}", path.display());

        let contents = fs::read_to_string(path).map_err(|e| LarderError::ConfigNotFound {
            path: path.display().to_string(),
            source: Some(e),
        })?;
        let prefs: Preferences = serde_json::from_str(&contents)?;
        prefs.validate()
    }

    /// Apply `LARDER_TIME`, `LARDER_DIET` and `LARDER_PANTRY` from `env`.
    pub fn with_env(mut self, env: &HashMap<String, String>) -> Result<Self> {
        if let Some(raw) = env.get(ENV_TIME) {
            debug!("{} overrides time budget: {}", ENV_TIME, raw);
            self.time_minutes = raw.trim().parse().map_err(|_| LarderError::InvalidConfig {
                field: ENV_TIME.to_string(),
                reason: format!("'{}' is not a number of minutes", raw),
            })?;
        }

        if let Some(raw) = env.get(ENV_DIET) {
            debug!("{} overrides diet: {}", ENV_DIET, raw);
            self.diet = raw.parse()?;
        }

        if let Some(raw) = env.get(ENV_PANTRY) {
            debug!("{} overrides pantry basics: {}", ENV_PANTRY, raw);
            self.pantry_basics = parse_flag(ENV_PANTRY, raw)?;
        }

        self.validate()
    }

    pub fn validate(self) -> Result<Self> {
        validate_time(self.time_minutes)?;
        Ok(self)
    }

    pub fn to_options(&self) -> GenerateOptions {
        GenerateOptions::default()
            .with_time(self.time_minutes)
            .with_diet(self.diet)
            .with_pantry_basics(self.pantry_basics)
    }
}

fn parse_flag(field: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(LarderError::InvalidConfig {
            field: field.to_string(),
            reason: format!("'{}' is not a boolean", other),
        }),
    }
}
