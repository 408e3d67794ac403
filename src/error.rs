//! Error types for the DevCloud translation service.
//!
//! Missing translation keys are deliberately absent from this taxonomy:
//! lookups degrade to the key itself and never fail.

use std::io;
use thiserror::Error;

use crate::i18n::Language;

/// Translation service and CLI error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A language code outside the supported set.
    #[error("Unsupported language '{0}'. Supported languages: en, fr, ar")]
    UnsupportedLanguage(String),

    /// The bundle resource could not be reached or read.
    #[error("Failed to fetch '{language}' bundle: {message}")]
    Fetch {
        /// Language whose bundle was requested.
        language: Language,
        /// Transport-level failure description.
        message: String,
    },

    /// The bundle resource answered with a non-success status.
    #[error("Failed to fetch '{language}' bundle: HTTP {status}")]
    Status {
        /// Language whose bundle was requested.
        language: Language,
        /// HTTP status code returned by the server.
        status: u16,
    },

    /// The bundle payload parsed but is not a translation tree.
    #[error("Invalid translation bundle: {0}")]
    InvalidBundle(String),

    /// Configuration error (invalid config file, bad bundle location).
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file operations).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// General/unspecified error.
    #[error("{0}")]
    Other(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the process exit code for this error type.
    ///
    /// - 1: General error
    /// - 2: Invalid arguments, configuration or language
    /// - 10: Network or IO error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnsupportedLanguage(_) | Self::Config(_) | Self::InvalidArgument(_) => 2,
            Self::Fetch { .. } | Self::Status { .. } | Self::Io(_) => 10,
            Self::InvalidBundle(_) | Self::Json(_) | Self::Yaml(_) | Self::Other(_) => 1,
        }
    }

    /// Returns true if the error came from loading a bundle resource.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Self::Fetch { .. } | Self::Status { .. } | Self::InvalidBundle(_) | Self::Json(_)
        )
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a bundle fetch error.
    pub fn fetch(language: Language, msg: impl ToString) -> Self {
        Self::Fetch { language, message: msg.to_string() }
    }

    /// Create a general error.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
