//! Icon registry and on-demand stylesheet synthesis.
//!
//! [`IconRegistry`] remembers every icon requested so far. When a call to
//! [`require`](IconRegistry::require) adds at least one new icon, the
//! registry rebuilds one stylesheet covering all registered icons and hands
//! it to its [`StylesheetSink`]. Duplicate or malformed requests never cause
//! a replacement.
//!
//! # Example
//!
//! ```
//! use icon_loader::{IconRegistry, MemorySink, RegistryConfig};
//!
//! let mut registry = IconRegistry::initialize(
//!     RegistryConfig::new("/icons/"),
//!     MemorySink::new(),
//! ).unwrap();
//!
//! registry.require(["accept", "fugue/anchor"]).unwrap();
//! registry.require("accept").unwrap(); // already registered, no-op
//!
//! assert_eq!(registry.sink().replacements(), 1);
//! assert!(registry.build_stylesheet().contains(".fugue-anchor"));
//! ```

use std::collections::HashSet;

use crate::config::RegistryConfig;
use crate::error::{Error, Result};
use crate::icon::{IconKey, IconRequest};
use crate::sink::StylesheetSink;

// ============================================================================
// Request conversion
// ============================================================================

/// Types that can be passed to [`IconRegistry::require`]: a single request
/// or a collection of them.
pub trait IntoIconRequests {
    /// Converts `self` into a list of requests.
    fn into_icon_requests(self) -> Vec<IconRequest>;
}

impl IntoIconRequests for IconRequest {
    fn into_icon_requests(self) -> Vec<IconRequest> {
        vec![self]
    }
}

impl IntoIconRequests for &str {
    fn into_icon_requests(self) -> Vec<IconRequest> {
        vec![IconRequest::parse(self)]
    }
}

impl IntoIconRequests for String {
    fn into_icon_requests(self) -> Vec<IconRequest> {
        vec![IconRequest::parse(&self)]
    }
}

impl IntoIconRequests for (&str, &str) {
    fn into_icon_requests(self) -> Vec<IconRequest> {
        vec![self.into()]
    }
}

impl<T: Into<IconRequest>> IntoIconRequests for Vec<T> {
    fn into_icon_requests(self) -> Vec<IconRequest> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<IconRequest>, const N: usize> IntoIconRequests for [T; N] {
    fn into_icon_requests(self) -> Vec<IconRequest> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Clone + Into<IconRequest>> IntoIconRequests for &[T] {
    fn into_icon_requests(self) -> Vec<IconRequest> {
        self.iter().cloned().map(Into::into).collect()
    }
}

/// Implemented by UI components that declare the icons they render.
///
/// A host calls [`IconRegistry::require_for`] after constructing such a
/// component.
pub trait RequiresIcons {
    /// Returns the icons this component needs.
    fn required_icons(&self) -> Vec<IconRequest>;
}

// ============================================================================
// IconRegistry
// ============================================================================

/// Tracks requested icons and keeps an injected stylesheet in sync with them.
#[derive(Debug)]
pub struct IconRegistry<S: StylesheetSink> {
    config: RegistryConfig,
    /// Registered keys in registration order.
    entries: Vec<IconKey>,
    index: HashSet<IconKey>,
    sink: S,
}

impl<S: StylesheetSink> IconRegistry<S> {
    /// Creates an empty registry.
    ///
    /// Fails with [`Error::EmptyBasePath`] if the base path is empty.
    pub fn initialize(config: RegistryConfig, sink: S) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            base_path = %config.base_path,
            use_library_path = config.use_library_path,
            "icon registry initialized"
        );
        Ok(Self {
            config,
            entries: Vec::new(),
            index: HashSet::new(),
            sink,
        })
    }

    /// Replaces the configuration and forgets every registered icon.
    ///
    /// On error the registry is left untouched. The sink is not called;
    /// the next successful [`require`](Self::require) replaces the old sheet.
    pub fn reinitialize(&mut self, config: RegistryConfig) -> Result<()> {
        config.validate()?;
        tracing::debug!(base_path = %config.base_path, "icon registry reinitialized");
        self.config = config;
        self.reset();
        Ok(())
    }

    /// Forgets every registered icon, keeping the configuration.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Returns the configuration in effect.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns the effective base path.
    pub fn base_path(&self) -> &str {
        &self.config.base_path
    }

    /// Returns the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the sink mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the registry, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Returns the number of registered icons.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no icon is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the registered keys in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &IconKey> {
        self.entries.iter()
    }

    /// Returns true if the icon is registered.
    pub fn contains(&self, icon: impl Into<IconRequest>) -> bool {
        icon.into()
            .key()
            .is_some_and(|key| self.index.contains(&key))
    }

    /// Registers one or many icons.
    ///
    /// Returns how many icons were new. If any were, the stylesheet is
    /// rebuilt and installed through the sink exactly once.
    ///
    /// Malformed identifiers are dropped, or in strict mode fail the call
    /// before anything from the batch is registered. If the sink fails, the
    /// icons added by this call are unregistered again.
    pub fn require(&mut self, icons: impl IntoIconRequests) -> Result<usize> {
        let requests = icons.into_icon_requests();
        let mut keys = Vec::with_capacity(requests.len());
        for request in &requests {
            match request.key() {
                Some(key) => keys.push(key),
                None if self.config.strict => {
                    return Err(Error::malformed_icon(request.to_string()));
                }
                None => tracing::trace!(icon = %request, "ignoring malformed icon identifier"),
            }
        }

        let previous_len = self.entries.len();
        for key in keys {
            if self.index.insert(key.clone()) {
                self.entries.push(key);
            }
        }

        let added = self.entries.len() - previous_len;
        if added == 0 {
            return Ok(0);
        }

        let css = self.build_stylesheet();
        tracing::debug!(
            added,
            total = self.entries.len(),
            "replacing icon stylesheet"
        );
        if let Err(err) = self
            .sink
            .replace_stylesheet(&self.config.stylesheet_id, &css)
        {
            tracing::warn!(error = %err, "icon stylesheet was not installed");
            for key in self.entries.drain(previous_len..) {
                self.index.remove(&key);
            }
            return Err(err);
        }
        Ok(added)
    }

    /// Registers the icon behind a generated class name such as
    /// `icon-accept` or `fugue-anchor`.
    ///
    /// Input without a `-` separator is a no-op (an error in strict mode).
    pub fn require_by_class_name(&mut self, class_name: &str) -> Result<usize> {
        match IconRequest::from_class_name(class_name) {
            Some(request) => self.require(request),
            None if self.config.strict => Err(Error::malformed_class_name(class_name)),
            None => {
                tracing::trace!(class_name, "ignoring malformed icon class name");
                Ok(0)
            }
        }
    }

    /// Registers the icons a component declares.
    pub fn require_for<C: RequiresIcons + ?Sized>(&mut self, component: &C) -> Result<usize> {
        self.require(component.required_icons())
    }

    /// Builds the stylesheet for all registered icons.
    ///
    /// One rule per icon in registration order, each terminated by `\n`.
    /// Depends only on the entries, the base path and the library path flag.
    pub fn build_stylesheet(&self) -> String {
        let mut css = String::new();
        for key in &self.entries {
            css.push_str(&key.css_rule(&self.config.base_path, self.config.use_library_path));
            css.push('\n');
        }
        css
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    fn registry() -> IconRegistry<MemorySink> {
        IconRegistry::initialize(RegistryConfig::new("/icons/"), MemorySink::new()).unwrap()
    }

    struct FailingSink;

    impl StylesheetSink for FailingSink {
        fn replace_stylesheet(&mut self, id: &str, _css_text: &str) -> Result<()> {
            Err(Error::sink(id, "no document"))
        }
    }

    #[test]
    fn initialize_rejects_empty_base_path() {
        let result = IconRegistry::initialize(RegistryConfig::new(""), MemorySink::new());
        assert!(matches!(result, Err(Error::EmptyBasePath)));
    }

    #[test]
    fn initialize_returns_base_path() {
        let registry = registry();
        assert_eq!(registry.base_path(), "/icons/");
        assert!(registry.is_empty());
    }

    #[test]
    fn duplicate_require_is_noop() {
        let mut registry = registry();

        assert_eq!(registry.require("accept").unwrap(), 1);
        let first = registry.build_stylesheet();
        assert_eq!(registry.require("accept").unwrap(), 0);

        assert_eq!(registry.build_stylesheet(), first);
        assert_eq!(registry.sink().replacements(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn batch_triggers_single_replacement() {
        let mut registry = registry();
        let added = registry
            .require(vec!["accept", "cross", "fugue/anchor", "accept"])
            .unwrap();

        assert_eq!(added, 3);
        assert_eq!(registry.sink().replacements(), 1);
    }

    #[test]
    fn partially_new_batch_regenerates() {
        let mut registry = registry();
        registry.require(["accept"]).unwrap();
        registry.require(["accept", "cross"]).unwrap();

        assert_eq!(registry.sink().replacements(), 2);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn order_is_stable_across_calls() {
        let mut registry = registry();
        registry.require(["a", "b"]).unwrap();
        registry.require(["c"]).unwrap();
        registry.require(["b", "a"]).unwrap();

        let css = registry.build_stylesheet();
        let a = css.find(".icon-a ").unwrap();
        let b = css.find(".icon-b ").unwrap();
        let c = css.find(".icon-c ").unwrap();
        assert!(a < b && b < c);
        assert_eq!(css.lines().count(), 3);
    }

    #[test]
    fn class_name_matches_plain_request() {
        let mut by_class = registry();
        by_class.require_by_class_name("icon-accept").unwrap();
        by_class.require_by_class_name("fugue-anchor").unwrap();

        let mut by_name = registry();
        by_name.require(IconRequest::new("accept")).unwrap();
        by_name
            .require(IconRequest::with_library("fugue", "anchor"))
            .unwrap();

        assert_eq!(by_class.build_stylesheet(), by_name.build_stylesheet());
        assert!(by_class.contains(("fugue", "anchor")));
        assert!(by_class.contains("accept"));
    }

    #[test]
    fn stylesheet_rules() {
        let mut registry = registry();
        registry.require(["fugue/anchor", "fav/uniorg"]).unwrap();

        assert_eq!(
            registry.build_stylesheet(),
            ".fugue-anchor { background-image: url(/icons/fugue/anchor.png) !important; background-repeat: no-repeat; }\n\
             .fav-uniorg { background-image: url(/icons/fav/uniorg.gif) !important; background-repeat: no-repeat; }\n"
        );
    }

    #[test]
    fn stylesheet_without_library_path() {
        let mut registry = IconRegistry::initialize(
            RegistryConfig::new("/icons/").with_library_path(false),
            MemorySink::new(),
        )
        .unwrap();
        registry.require("fugue/anchor").unwrap();

        assert!(registry.build_stylesheet().contains("url(/icons/anchor.png)"));
    }

    #[test]
    fn sink_receives_stylesheet_under_configured_id() {
        let mut registry = IconRegistry::initialize(
            RegistryConfig::new("/icons/").with_stylesheet_id("app-icons"),
            MemorySink::new(),
        )
        .unwrap();
        registry.require("accept").unwrap();

        let expected = registry.build_stylesheet();
        assert_eq!(registry.sink().get("app-icons"), Some(expected.as_str()));
    }

    #[test]
    fn malformed_input_is_dropped() {
        let mut registry = registry();
        assert_eq!(registry.require(IconRequest::new("")).unwrap(), 0);
        assert_eq!(registry.require("").unwrap(), 0);
        assert_eq!(registry.require_by_class_name("noSeparator").unwrap(), 0);
        assert_eq!(registry.require_by_class_name("").unwrap(), 0);

        assert!(registry.is_empty());
        assert_eq!(registry.sink().replacements(), 0);
    }

    #[test]
    fn malformed_entries_do_not_block_valid_ones() {
        let mut registry = registry();
        assert_eq!(registry.require(["", "accept", "bad name"]).unwrap(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn default_library_class_name_is_dropped() {
        let mut registry = registry();
        assert_eq!(registry.require_by_class_name("silk-accept").unwrap(), 0);
        assert!(registry.is_empty());
        assert!(!registry.build_stylesheet().contains(".icon-accept"));
        assert_eq!(registry.sink().replacements(), 0);
    }

    #[test]
    fn dotted_name_never_reaches_the_stylesheet() {
        let mut registry = registry();
        assert_eq!(registry.require("arrow.up").unwrap(), 0);
        assert_eq!(registry.require_by_class_name("icon-arrow.up").unwrap(), 0);

        assert!(registry.is_empty());
        assert!(!registry.build_stylesheet().contains(".icon-arrow.up"));
        assert_eq!(registry.sink().replacements(), 0);
    }

    #[test]
    fn strict_mode_rejects_unstylable_names() {
        let mut registry = IconRegistry::initialize(
            RegistryConfig::new("/icons/").with_strict(true),
            MemorySink::new(),
        )
        .unwrap();

        let err = registry.require_by_class_name("silk-accept").unwrap_err();
        assert!(matches!(err, Error::MalformedClassName { .. }));
        let err = registry.require("arrow.up").unwrap_err();
        assert!(matches!(err, Error::MalformedIcon { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn strict_mode_rejects_whole_batch() {
        let mut registry = IconRegistry::initialize(
            RegistryConfig::new("/icons/").with_strict(true),
            MemorySink::new(),
        )
        .unwrap();

        let err = registry.require(["accept", ""]).unwrap_err();
        assert!(matches!(err, Error::MalformedIcon { .. }));
        assert!(registry.is_empty());

        let err = registry.require_by_class_name("noSeparator").unwrap_err();
        assert!(matches!(err, Error::MalformedClassName { .. }));
        assert_eq!(registry.sink().replacements(), 0);
    }

    #[test]
    fn sink_failure_rolls_back_batch() {
        let mut registry =
            IconRegistry::initialize(RegistryConfig::new("/icons/"), FailingSink).unwrap();

        let err = registry.require(["accept", "cross"]).unwrap_err();
        assert!(matches!(err, Error::Sink { .. }));
        assert!(registry.is_empty());
        assert!(!registry.contains("accept"));
    }

    #[test]
    fn reinitialize_clears_entries() {
        let mut registry = registry();
        registry.require("accept").unwrap();

        registry
            .reinitialize(RegistryConfig::new("/other/"))
            .unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.base_path(), "/other/");

        registry.require("accept").unwrap();
        assert!(registry.build_stylesheet().contains("/other/silk/accept.png"));
    }

    #[test]
    fn reinitialize_with_bad_config_keeps_state() {
        let mut registry = registry();
        registry.require("accept").unwrap();

        assert!(registry.reinitialize(RegistryConfig::new("")).is_err());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.base_path(), "/icons/");
    }

    #[test]
    fn reset_keeps_config() {
        let mut registry = registry();
        registry.require("accept").unwrap();
        registry.reset();

        assert!(registry.is_empty());
        assert_eq!(registry.build_stylesheet(), "");
        assert_eq!(registry.base_path(), "/icons/");
    }

    #[test]
    fn require_for_component() {
        struct Toolbar;

        impl RequiresIcons for Toolbar {
            fn required_icons(&self) -> Vec<IconRequest> {
                vec![IconRequest::new("cross"), IconRequest::new("printer")]
            }
        }

        let mut registry = registry();
        assert_eq!(registry.require_for(&Toolbar).unwrap(), 2);
        assert_eq!(registry.require_for(&Toolbar).unwrap(), 0);
        assert_eq!(registry.sink().replacements(), 1);
    }

    #[test]
    fn slices_and_strings_are_accepted() {
        let mut registry = registry();
        let icons = vec![String::from("accept"), String::from("cross")];
        assert_eq!(registry.require(icons.as_slice()).unwrap(), 2);
        assert_eq!(registry.require(String::from("printer")).unwrap(), 1);
    }
}
