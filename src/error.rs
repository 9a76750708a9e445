use thiserror::Error;

/// A form field could not be read as a number.
///
/// Deliberately carries no field name: the user is asked to fix all fields.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Please enter numeric values in all fields.")]
pub struct ParseError;

/// Rejected readings or tariffs
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Values cannot be negative.")]
    Negative,
    #[error("Current readings cannot be less than initial readings.")]
    Regression,
    #[error("Values are too large to calculate.")]
    Overflow,
}

impl ValidationError {
    /// Short machine-readable reason
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::Negative => "negative",
            ValidationError::Regression => "regression",
            ValidationError::Overflow => "overflow",
        }
    }
}

/// Failure of a calculation request before any result exists
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CalculationError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Settings could not be written after a successful calculation
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to save settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to save settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Strict settings load failures, only surfaced by `--check`
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Settings file is corrupted: {0}")]
    Corrupted(String),
}

impl From<serde_json::Error> for SettingsError {
    fn from(error: serde_json::Error) -> Self {
        SettingsError::Corrupted(format!("JSON parsing failed: {}", error))
    }
}
