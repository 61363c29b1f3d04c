//! Serializable registry configuration.
//!
//! A [`RegistryConfig`] holds everything [`IconRegistry::initialize`]
//! needs. It can be written by hand or loaded from JSON:
//!
//! ```
//! use icon_loader::RegistryConfig;
//!
//! let config = RegistryConfig::from_json(r#"{ "basePath": "/icons/" }"#).unwrap();
//! assert!(config.use_library_path);
//! assert_eq!(config.stylesheet_id, "ux-icons");
//! ```
//!
//! [`IconRegistry::initialize`]: crate::IconRegistry::initialize

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Base path used when none is configured.
pub const DEFAULT_BASE_PATH: &str = "/icons/";

/// Id under which the generated stylesheet is installed.
pub const DEFAULT_STYLESHEET_ID: &str = "ux-icons";

/// Configuration for an [`IconRegistry`](crate::IconRegistry).
///
/// # JSON Format
///
/// ```json
/// {
///   "basePath": "/icons/",
///   "useLibraryPath": true,
///   "stylesheetId": "ux-icons",
///   "strict": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct RegistryConfig {
    /// Prefix under which icon assets are found. Usually ends with `/`.
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Whether the library name is inserted as a subdirectory of `base_path`.
    #[serde(default = "default_true")]
    pub use_library_path: bool,

    /// Id handed to the stylesheet sink.
    #[serde(default = "default_stylesheet_id")]
    pub stylesheet_id: String,

    /// Report malformed icon identifiers instead of dropping them.
    #[serde(default)]
    pub strict: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PATH)
    }
}

impl RegistryConfig {
    /// Creates a lenient config with the library path enabled.
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            use_library_path: true,
            stylesheet_id: default_stylesheet_id(),
            strict: false,
        }
    }

    /// Sets whether the library name becomes a path segment.
    pub fn with_library_path(mut self, use_library_path: bool) -> Self {
        self.use_library_path = use_library_path;
        self
    }

    /// Sets the stylesheet id handed to the sink.
    pub fn with_stylesheet_id(mut self, id: impl Into<String>) -> Self {
        self.stylesheet_id = id.into();
        self
    }

    /// Enables or disables strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Checks the configuration.
    ///
    /// An empty (or whitespace-only) base path is a programmer error.
    pub fn validate(&self) -> Result<()> {
        if self.base_path.trim().is_empty() {
            return Err(Error::EmptyBasePath);
        }
        Ok(())
    }

    /// Serializes the config to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the config to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a config from a JSON string. Missing fields use defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn default_true() -> bool {
    true
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

fn default_stylesheet_id() -> String {
    DEFAULT_STYLESHEET_ID.to_string()
}
