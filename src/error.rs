//! Error types for icon registration, printing and configuration.

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring the registry, injecting
/// stylesheets or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The registry was configured with an empty base path.
    #[error("icon base path must not be empty")]
    EmptyBasePath,

    /// An icon identifier could not be parsed (strict mode only).
    #[error("malformed icon identifier '{input}'")]
    MalformedIcon { input: String },

    /// A CSS class name could not be mapped back to an icon (strict mode only).
    #[error("malformed icon class name '{input}'")]
    MalformedClassName { input: String },

    /// The stylesheet sink failed to install the generated CSS.
    #[error("failed to replace stylesheet '{id}': {message}")]
    Sink { id: String, message: String },

    /// JSON (de)serialization of a configuration or grid failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a malformed icon error.
    pub fn malformed_icon(input: impl Into<String>) -> Self {
        Self::MalformedIcon {
            input: input.into(),
        }
    }

    /// Create a malformed class name error.
    pub fn malformed_class_name(input: impl Into<String>) -> Self {
        Self::MalformedClassName {
            input: input.into(),
        }
    }

    /// Create a sink error.
    pub fn sink(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Sink {
            id: id.into(),
            message: message.into(),
        }
    }
}
