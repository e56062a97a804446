//! Error handling for Larder
//!
//! Every error carries a stable code and a message fit for the status line.

use thiserror::Error;

/// Result type alias for Larder operations
pub type Result<T> = std::result::Result<T, LarderError>;

/// Main error type for Larder operations
#[derive(Error, Debug)]
pub enum LarderError {
    // Generation Errors
    #[error("AI mode not connected yet.")]
    AiNotConnected,

    #[error("Generation failed: {reason}")]
    GenerationFailed { reason: String },

    // Configuration Errors
    #[error("Invalid configuration: {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Unknown diet: {value}")]
    UnknownDiet { value: String },

    #[error("Config file not found: {path}")]
    ConfigNotFound {
        path: String,
        #[source]
        source: Option<std::io::Error>,
    },

    // Session Errors
    #[error("Unknown command: {command}")]
    UnknownCommand { command: String },

    #[error("Invalid argument for '{command}': {reason}")]
    InvalidArgument { command: String, reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LarderError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            LarderError::AiNotConnected => "AI_NOT_CONNECTED",
            LarderError::GenerationFailed { .. } => "GENERATION_FAILED",
            LarderError::InvalidConfig { .. } => "INVALID_CONFIG",
            LarderError::UnknownDiet { .. } => "UNKNOWN_DIET",
            LarderError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            LarderError::UnknownCommand { .. } => "UNKNOWN_COMMAND",
            LarderError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            LarderError::Io(_) => "IO_ERROR",
            LarderError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if the session can carry on after this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, LarderError::Io(_))
    }

    /// Get a user-friendly message for this error
    pub fn friendly_message(&self) -> String {
        match self {
            LarderError::UnknownDiet { value } => format!(
                "I don't know the '{}' diet. Try one of: none, vegetarian, vegan, gluten-free, dairy-free.",
                value
            ),
            LarderError::UnknownCommand { command } => {
                format!("'{}' isn't a command I know. Type 'help' to see them.", command)
            }
            LarderError::ConfigNotFound { path, .. } => {
                format!("I couldn't find the config file at '{}'.", path)
            }
            LarderError::GenerationFailed { reason } if reason.trim().is_empty() => {
                "Something went wrong.".to_string()
            }
            _ => self.to_string(),
        }
    }
}
