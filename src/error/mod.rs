mod context;
mod exit_codes;
mod format;
#[cfg(test)]
mod tests;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::format_error_with_color;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForwardError {
    #[error("{0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Java executable '{program}' not found")]
    JavaNotFound { program: String, reason: String },

    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ForwardError>;
