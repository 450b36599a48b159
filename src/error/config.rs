use thiserror::Error;

/// Invalid configuration from the environment or the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number, got '{value}'")]
    InvalidNumber { var: String, value: String },

    #[error("unknown theme '{0}' (expected 'dark' or 'light')")]
    InvalidTheme(String),

    #[error("invalid API URL '{0}'")]
    InvalidUrl(String),

    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("unknown argument '{0}'")]
    UnknownArgument(String),
}
