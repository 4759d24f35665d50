//! Error types for the color_engine library

use thiserror::Error;

/// Result type alias for color_engine operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Error types for color conversion and configuration operations
#[derive(Error, Debug)]
pub enum ColorError {
    /// Hex color string is malformed (wrong length, missing `#`, non-hex digits)
    #[error("Invalid hex color '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    /// Numeric component outside its valid range
    #[error("{parameter} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        parameter: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Configuration could not be loaded, saved, or failed validation
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ColorError {
    /// Create an invalid-format error for a hex string
    pub fn invalid_format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an out-of-range error for a named component
    pub fn out_of_range(parameter: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            parameter: parameter.into(),
            value,
            min,
            max,
        }
    }

    /// Create a configuration error with an underlying cause
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error without an underlying cause
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: None,
        }
    }

    /// Check if the caller can recover by asking the user for different input
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ColorError::InvalidFormat { .. } | ColorError::OutOfRange { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ColorError::InvalidFormat { input, .. } => format!(
                "'{}' is not a valid color. Please enter # followed by 6 hex digits, e.g. #2d8cf0.",
                input
            ),
            ColorError::OutOfRange {
                parameter, min, max, ..
            } => format!(
                "The {} value must be between {} and {}.",
                parameter, min, max
            ),
            ColorError::ConfigError { .. } => {
                "Settings could not be loaded. Default settings will be used.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_display() {
        let err = ColorError::invalid_format("#12", "expected 7 characters, got 3");
        assert_eq!(
            err.to_string(),
            "Invalid hex color '#12': expected 7 characters, got 3"
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_out_of_range_display() {
        let err = ColorError::out_of_range("saturation", 1.5, 0.0, 1.0);
        assert_eq!(
            err.to_string(),
            "saturation out of range: 1.5 (expected 0..=1)"
        );
        assert!(err.user_message().contains("saturation"));
    }

    #[test]
    fn test_config_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ColorError::config("Failed to read settings.json", io);

        assert!(!err.is_recoverable());
        assert!(std::error::Error::source(&err).is_some());
    }
}
