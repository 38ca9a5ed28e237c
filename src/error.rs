//! Unified error hierarchy for TrainMeter
//!
//! Activity constructors validate their inputs and report problems through
//! [`TrainMeterError`]. Once an activity exists every calculation on it is
//! infallible, so the error surface is mostly construction and configuration.

use thiserror::Error;

/// Top-level error type for all TrainMeter operations
#[derive(Debug, Error)]
pub enum TrainMeterError {
    /// A raw workout input was rejected at construction time
    #[error("Invalid input for {field}: {value} ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Calculation errors
    #[error("Calculation error: {0}")]
    Calculation(#[from] CalculationError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization errors (JSON / TOML output)
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Calculation errors
#[derive(Debug, Error)]
pub enum CalculationError {
    /// A formula produced NaN or infinity
    #[error("Non-finite result in {calculation}: {value}")]
    NonFinite { calculation: String, value: f64 },
}

/// Result type alias for TrainMeter operations
pub type Result<T> = std::result::Result<T, TrainMeterError>;

impl TrainMeterError {
    /// Shorthand for building an [`TrainMeterError::InvalidInput`]
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        TrainMeterError::InvalidInput {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TrainMeterError::InvalidInput { .. } => ErrorSeverity::Warning,
            TrainMeterError::Configuration(_) => ErrorSeverity::Warning,
            TrainMeterError::Calculation(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            TrainMeterError::InvalidInput { field, value, .. } => {
                format!("The workout value for {} ({}) cannot be used.", field, value)
            }
            TrainMeterError::Configuration(reason) => {
                format!("Configuration problem: {}. Falling back to defaults may help.", reason)
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Critical system error requiring immediate attention
    Critical,
    /// Error that prevents operation but system can continue
    Error,
    /// Warning that doesn't prevent operation
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}

/// Reject negative, NaN and infinite values for a named input
pub(crate) fn ensure_non_negative(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(TrainMeterError::invalid_input(field, value, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(TrainMeterError::invalid_input(field, value, "must not be negative"));
    }
    Ok(value)
}

/// Reject zero as well as everything [`ensure_non_negative`] rejects
pub(crate) fn ensure_positive(field: &str, value: f64) -> Result<f64> {
    let value = ensure_non_negative(field, value)?;
    if value == 0.0 {
        return Err(TrainMeterError::invalid_input(field, value, "must be greater than zero"));
    }
    Ok(value)
}
