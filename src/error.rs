//! Error types for the hours engine.
//!
//! Only configuration loading can fail. The categorization stages degrade
//! malformed attendance data to zero values and record an audit warning
//! instead of returning an error.

use thiserror::Error;

/// The main error type for the hours engine.
///
/// # Example
///
/// ```
/// use hours_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value is outside its accepted range.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The configuration key that was rejected.
        field: String,
        /// A description of the accepted range.
        message: String,
    },

    /// The configured time zone is not a known IANA identifier.
    #[error("Unknown time zone: {name}")]
    UnknownTimezone {
        /// The identifier that failed to resolve.
        name: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
