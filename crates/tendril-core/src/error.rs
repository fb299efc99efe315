use thiserror::Error;

/// Errors raised while loading or validating a spreader configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse spreader config RON: {0}")]
    ParseError(String),

    #[error("Config '{field}' must be at least {min}, got {value}")]
    BelowMinimum {
        field: &'static str,
        min: i32,
        value: i32,
    },

    #[error("Replaceable set '{0}' is empty")]
    EmptyReplaceableSet(String),

    #[error("Replaceable set '{0}' contains air")]
    AirReplaceable(String),
}
