//! icon-loader: on-demand icon stylesheets and printable grids
//!
//! This crate provides framework-independent helpers for web UIs: an icon
//! registry that synthesizes one CSS stylesheet for every icon class a UI
//! uses, a printer that turns a grid's column and row model into a
//! standalone HTML document, and a table of framework default overrides.
//!
//! # Example
//!
//! ```
//! use icon_loader::{IconRegistry, MemorySink, RegistryConfig};
//!
//! let mut icons = IconRegistry::initialize(
//!     RegistryConfig::new("/icons/"),
//!     MemorySink::new(),
//! ).unwrap();
//!
//! // Components declare the icons they render
//! icons.require(["accept", "fugue/anchor", "fav/uniorg"]).unwrap();
//!
//! // Class names map back to icons
//! icons.require_by_class_name("icon-cross").unwrap();
//!
//! let css = icons.sink().get("ux-icons").unwrap();
//! assert!(css.contains(".fugue-anchor { background-image: url(/icons/fugue/anchor.png)"));
//! assert!(css.contains("url(/icons/fav/uniorg.gif)"));
//! ```
//!
//! # Sinks
//!
//! The registry hands generated CSS to a [`StylesheetSink`]. Any
//! `FnMut(&str, &str)` closure is a sink; [`MemorySink`] keeps the sheets in
//! memory; with the `web` feature, `DomSink` writes `<style>` elements into
//! a browser document.
//!
//! ```
//! use icon_loader::{IconRegistry, RegistryConfig};
//!
//! let mut installed = Vec::new();
//! let mut icons = IconRegistry::initialize(
//!     RegistryConfig::new("/icons/"),
//!     |id: &str, css: &str| installed.push((id.to_string(), css.to_string())),
//! ).unwrap();
//!
//! icons.require("accept").unwrap();
//! icons.require("accept").unwrap();
//! drop(icons);
//!
//! assert_eq!(installed.len(), 1);
//! ```

mod config;
mod defaults;
mod error;
mod icon;
mod registry;
mod sink;

pub mod printer;

#[cfg(feature = "web")]
mod web;

pub use config::{DEFAULT_BASE_PATH, DEFAULT_STYLESHEET_ID, RegistryConfig};
pub use defaults::{
    DataFieldDefaults, FormDefaults, FrameworkDefaults, ProxyParams, REQUIRED_LABEL_MARKUP,
    StoreDefaults,
};
pub use error::{Error, Result};
pub use icon::{
    DEFAULT_ALIAS, DEFAULT_EXTENSION, DEFAULT_LIBRARY, IconKey, IconRequest, LIBRARY_EXTENSIONS,
    extension_for,
};
pub use registry::{IconRegistry, IntoIconRequests, RequiresIcons};
pub use sink::{MemorySink, StylesheetSink};

#[cfg(feature = "web")]
pub use web::{DomSink, WebIconLoader};
