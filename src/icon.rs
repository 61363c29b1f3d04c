//! Icon identifiers and their canonical registry keys.
//!
//! An icon is named by an optional sub-library and a file name, e.g.
//! `"accept"` (default library) or `"fugue/anchor"`. Every request folds to a
//! canonical [`IconKey`] which knows its CSS class, asset path and rule.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Library used when a request does not name one.
pub const DEFAULT_LIBRARY: &str = "silk";

/// Class alias used for icons from the default library (`icon-accept`).
pub const DEFAULT_ALIAS: &str = "icon";

/// Asset extensions for libraries that do not ship PNGs.
///
/// This is a closed table; a library missing here uses [`DEFAULT_EXTENSION`].
pub const LIBRARY_EXTENSIONS: &[(&str, &str)] = &[("fav", "gif")];

/// Asset extension for every library not listed in [`LIBRARY_EXTENSIONS`].
pub const DEFAULT_EXTENSION: &str = "png";

/// Returns the asset extension used by `library`.
pub fn extension_for(library: &str) -> &'static str {
    LIBRARY_EXTENSIONS
        .iter()
        .find(|(lib, _)| *lib == library)
        .map(|(_, ext)| *ext)
        .unwrap_or(DEFAULT_EXTENSION)
}

// ============================================================================
// IconRequest
// ============================================================================

/// A request for a single icon asset.
///
/// # Example
///
/// ```
/// use icon_loader::IconRequest;
///
/// let silk = IconRequest::parse("accept");
/// assert_eq!(silk.library(), "silk");
///
/// let fugue = IconRequest::parse("fugue/anchor");
/// assert_eq!(fugue, IconRequest::with_library("fugue", "anchor"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconRequest {
    /// Sub-library the icon lives in. `None` (or empty) means the default library.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,

    /// File name of the icon without extension.
    pub name: String,
}

impl IconRequest {
    /// Creates a request for an icon in the default library.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            library: None,
            name: name.into(),
        }
    }

    /// Creates a request for an icon in a specific library.
    pub fn with_library(library: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            library: Some(library.into()),
            name: name.into(),
        }
    }

    /// Parses the `"library/name"` or `"name"` form.
    ///
    /// Only the first `/` separates the library. Nothing is validated here;
    /// see [`key`](Self::key).
    pub fn parse(input: &str) -> Self {
        match input.split_once('/') {
            Some((library, name)) => Self::with_library(library, name),
            None => Self::new(input),
        }
    }

    /// Parses a generated class name (`icon-accept`, `fugue-anchor`) back
    /// into a request.
    ///
    /// The alias `icon` maps to the default library, any other alias is the
    /// library name. Returns `None` without a `-` separator, when either
    /// side of it is empty, or when the alias is the default library's own
    /// name (`silk-accept`): default-library icons are only ever emitted as
    /// `icon-*`, so such a class could never be styled.
    pub fn from_class_name(class_name: &str) -> Option<Self> {
        let (alias, name) = class_name.split_once('-')?;
        if alias.is_empty() || name.is_empty() || alias == DEFAULT_LIBRARY {
            return None;
        }
        if alias == DEFAULT_ALIAS {
            Some(Self::new(name))
        } else {
            Some(Self::with_library(alias, name))
        }
    }

    /// Returns the effective library, folding an absent one to the default.
    pub fn library(&self) -> &str {
        match self.library.as_deref() {
            Some(lib) if !lib.is_empty() => lib,
            _ => DEFAULT_LIBRARY,
        }
    }

    /// Returns the canonical key, or `None` if the request is malformed.
    pub fn key(&self) -> Option<IconKey> {
        let library = self.library();
        if !is_valid_library(library) || !is_valid_name(&self.name) {
            return None;
        }
        Some(IconKey {
            library: library.to_string(),
            name: self.name.clone(),
        })
    }
}

impl From<&str> for IconRequest {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl From<String> for IconRequest {
    fn from(input: String) -> Self {
        Self::parse(&input)
    }
}

impl From<&String> for IconRequest {
    fn from(input: &String) -> Self {
        Self::parse(input)
    }
}

impl From<(&str, &str)> for IconRequest {
    fn from((library, name): (&str, &str)) -> Self {
        Self::with_library(library, name)
    }
}

impl fmt::Display for IconRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.library.as_deref() {
            Some(lib) if !lib.is_empty() => write!(f, "{}/{}", lib, self.name),
            _ => f.write_str(&self.name),
        }
    }
}

// Names end up in a class selector unescaped, so '.' and other selector
// punctuation are rejected.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
}

// Libraries cannot contain '-': it separates alias and name in class names.
fn is_valid_library(library: &str) -> bool {
    !library.is_empty()
        && library
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// ============================================================================
// IconKey
// ============================================================================

/// Canonical `library/name` key of a registered icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconKey {
    library: String,
    name: String,
}

impl IconKey {
    /// Returns the library (never empty).
    pub fn library(&self) -> &str {
        &self.library
    }

    /// Returns the icon name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the icon belongs to the default library.
    pub fn is_default_library(&self) -> bool {
        self.library == DEFAULT_LIBRARY
    }

    /// Returns the class alias: `icon` for the default library, the library
    /// name otherwise.
    pub fn alias(&self) -> &str {
        if self.is_default_library() {
            DEFAULT_ALIAS
        } else {
            &self.library
        }
    }

    /// Returns the asset extension for this icon's library.
    pub fn extension(&self) -> &'static str {
        extension_for(&self.library)
    }

    /// Returns the CSS class name, e.g. `icon-accept` or `fugue-anchor`.
    pub fn class_name(&self) -> String {
        format!("{}-{}", self.alias(), self.name)
    }

    /// Builds the asset path under `base_path`.
    pub fn asset_path(&self, base_path: &str, use_library_path: bool) -> String {
        let mut path = String::from(base_path);
        if use_library_path {
            path.push_str(&self.library);
            path.push('/');
        }
        path.push_str(&self.name);
        path.push('.');
        path.push_str(self.extension());
        path
    }

    /// Builds the CSS rule mapping this icon's class to its image.
    pub fn css_rule(&self, base_path: &str, use_library_path: bool) -> String {
        format!(
            ".{} {{ background-image: url({}) !important; background-repeat: no-repeat; }}",
            self.class_name(),
            self.asset_path(base_path, use_library_path)
        )
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.library, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_and_namespaced() {
        let plain = IconRequest::parse("accept");
        assert_eq!(plain.library, None);
        assert_eq!(plain.library(), "silk");
        assert_eq!(plain.key().unwrap().to_string(), "silk/accept");

        let fugue = IconRequest::parse("fugue/anchor");
        assert_eq!(fugue.library.as_deref(), Some("fugue"));
        assert_eq!(fugue.key().unwrap().to_string(), "fugue/anchor");
    }

    #[test]
    fn explicit_default_library_matches_implicit() {
        assert_eq!(
            IconRequest::with_library("silk", "accept").key(),
            IconRequest::new("accept").key()
        );
        assert_eq!(
            IconRequest::with_library("", "accept").key(),
            IconRequest::new("accept").key()
        );
    }

    #[test]
    fn malformed_requests_have_no_key() {
        assert!(IconRequest::new("").key().is_none());
        assert!(IconRequest::parse("fugue/").key().is_none());
        assert!(IconRequest::parse("a/b/c").key().is_none());
        assert!(IconRequest::new("bad name").key().is_none());
        assert!(IconRequest::new("x{y}").key().is_none());
        assert!(IconRequest::with_library("my-lib", "x").key().is_none());
    }

    #[test]
    fn dotted_names_are_malformed() {
        assert!(IconRequest::new("arrow.up").key().is_none());
        assert!(IconRequest::parse("fugue/arrow.up").key().is_none());
        assert!(IconRequest::from_class_name("icon-arrow.up").unwrap().key().is_none());
    }

    #[test]
    fn class_name_parsing() {
        assert_eq!(
            IconRequest::from_class_name("icon-accept"),
            Some(IconRequest::new("accept"))
        );
        assert_eq!(
            IconRequest::from_class_name("fugue-anchor"),
            Some(IconRequest::with_library("fugue", "anchor"))
        );
        // Only the first hyphen separates the alias.
        assert_eq!(
            IconRequest::from_class_name("icon-arrow-up").unwrap().name,
            "arrow-up"
        );
        assert_eq!(IconRequest::from_class_name("noSeparator"), None);
        assert_eq!(IconRequest::from_class_name("icon-"), None);
        assert_eq!(IconRequest::from_class_name("-accept"), None);
        assert_eq!(IconRequest::from_class_name(""), None);
    }

    #[test]
    fn default_library_name_is_not_an_alias() {
        assert_eq!(IconRequest::from_class_name("silk-accept"), None);
        // The library itself is still addressable by path.
        assert_eq!(
            IconRequest::parse("silk/accept").key().unwrap().class_name(),
            "icon-accept"
        );
    }

    #[test]
    fn extension_table() {
        assert_eq!(extension_for("fav"), "gif");
        assert_eq!(extension_for("silk"), "png");
        assert_eq!(extension_for("fugue"), "png");
    }

    #[test]
    fn key_paths_and_classes() {
        let key = IconRequest::parse("fugue/anchor").key().unwrap();
        assert_eq!(key.alias(), "fugue");
        assert_eq!(key.class_name(), "fugue-anchor");
        assert_eq!(key.asset_path("/icons/", true), "/icons/fugue/anchor.png");
        assert_eq!(key.asset_path("/icons/", false), "/icons/anchor.png");

        let silk = IconRequest::new("accept").key().unwrap();
        assert_eq!(silk.class_name(), "icon-accept");
        assert_eq!(silk.asset_path("/icons/", true), "/icons/silk/accept.png");

        let fav = IconRequest::parse("fav/uniorg").key().unwrap();
        assert!(fav.asset_path("/i/", true).ends_with(".gif"));
    }

    #[test]
    fn css_rule_format() {
        let key = IconRequest::new("accept").key().unwrap();
        assert_eq!(
            key.css_rule("/icons/", true),
            ".icon-accept { background-image: url(/icons/silk/accept.png) !important; background-repeat: no-repeat; }"
        );
    }

    #[test]
    fn request_deserializes_without_library() {
        let req: IconRequest = serde_json::from_str(r#"{"name":"accept"}"#).unwrap();
        assert_eq!(req, IconRequest::new("accept"));
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"name":"accept"}"#);
    }
}
