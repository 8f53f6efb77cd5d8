//! Error handling for wordlist-forge

use thiserror::Error;

/// Main error type for wordlist-forge
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordlistError {
    #[error("Invalid specification: {message}")]
    InvalidSpecification { message: String },

    #[error("Overflow: {message}")]
    Overflow { message: String },

    #[error("Sink error after {written} words: {message}")]
    Sink { message: String, written: u64 },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl WordlistError {
    /// Create an invalid specification error
    pub fn invalid_spec(message: impl Into<String>) -> Self {
        Self::InvalidSpecification {
            message: message.into(),
        }
    }

    /// Create an overflow error
    pub fn overflow(message: impl Into<String>) -> Self {
        Self::Overflow {
            message: message.into(),
        }
    }

    /// Create a sink failure error
    pub fn sink(message: impl Into<String>, written: u64) -> Self {
        Self::Sink {
            message: message.into(),
            written,
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidSpecification { message } => {
                format!("❌ Invalid specification: {}\n💡 Check the charset, lengths and pattern", message)
            }
            Self::Overflow { message } => {
                format!("⚠️  {}\n💡 Narrow the charset or the length range", message)
            }
            Self::Sink { message, written } => {
                format!(
                    "❌ Failed to write output after {} words: {}\n💡 Check free disk space and permissions",
                    written, message
                )
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or WORDLIST_* variables", message)
            }
            Self::Cli { message } => {
                format!("❌ Command error: {}\n💡 Use --help for usage information", message)
            }
        }
    }
}

impl From<std::io::Error> for WordlistError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<serde_json::Error> for WordlistError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(format!("Failed to serialize: {}", err))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WordlistError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! invalid_spec {
    ($msg:expr) => {
        $crate::error::WordlistError::invalid_spec($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::WordlistError::invalid_spec(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::WordlistError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::WordlistError::config(format!($fmt, $($arg)*))
    };
}
