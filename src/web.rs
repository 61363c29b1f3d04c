//! Browser document support for WASM environments.
//!
//! [`DomSink`] installs generated CSS as a `<style>` element in a live
//! document. [`WebIconLoader`] wraps an [`IconRegistry`] over a `DomSink`
//! for JavaScript callers.
//!
//! # Feature Flag
//!
//! This module is only available with the `web` feature enabled:
//!
//! ```toml
//! [dependencies]
//! icon-loader = { version = "0.1", features = ["web"] }
//! ```
//!
//! # Example (JavaScript/TypeScript)
//!
//! ```javascript
//! import init, { WebIconLoader } from 'icon-loader';
//!
//! await init();
//!
//! const icons = new WebIconLoader('/icons/', true);
//! icons.require(['accept', 'fugue/anchor']);
//! icons.requireByClassName('icon-printer');
//! ```

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::RegistryConfig;
use crate::error::{Error, Result};
use crate::registry::IconRegistry;
use crate::sink::StylesheetSink;

// ============================================================================
// DomSink
// ============================================================================

/// A sink that writes stylesheets into a browser document's `<head>`.
pub struct DomSink {
    document: Document,
}

impl DomSink {
    /// Creates a sink for the given document.
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Creates a sink for the current window's document.
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| Error::sink("", "no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| Error::sink("", "window has no document"))?;
        Ok(Self::new(document))
    }
}

impl StylesheetSink for DomSink {
    fn replace_stylesheet(&mut self, id: &str, css_text: &str) -> Result<()> {
        // The previous sheet is dropped, never appended to.
        if let Some(existing) = self.document.get_element_by_id(id) {
            existing.remove();
        }

        let style = self
            .document
            .create_element("style")
            .map_err(|_| Error::sink(id, "failed to create <style> element"))?;
        style.set_id(id);
        style
            .set_attribute("type", "text/css")
            .map_err(|_| Error::sink(id, "failed to set stylesheet type"))?;
        style.set_text_content(Some(css_text));

        let head = self
            .document
            .head()
            .ok_or_else(|| Error::sink(id, "document has no <head>"))?;
        head.append_child(&style)
            .map_err(|_| Error::sink(id, "failed to append <style> element"))?;
        Ok(())
    }
}

// ============================================================================
// WebIconLoader
// ============================================================================

/// An icon registry bound to the current document, exposed to JavaScript.
#[wasm_bindgen]
pub struct WebIconLoader {
    registry: IconRegistry<DomSink>,
}

#[wasm_bindgen]
impl WebIconLoader {
    /// Creates a loader for the current document.
    ///
    /// # Arguments
    ///
    /// * `base_path` - Prefix under which icon assets are found
    /// * `use_library_path` - Whether the library name is a subdirectory
    #[wasm_bindgen(constructor)]
    pub fn new(
        base_path: &str,
        use_library_path: bool,
    ) -> std::result::Result<WebIconLoader, JsError> {
        let config = RegistryConfig::new(base_path).with_library_path(use_library_path);
        Self::with_config(config)
    }

    /// Creates a loader from a JSON [`RegistryConfig`].
    #[wasm_bindgen(js_name = "fromConfigJson")]
    pub fn from_config_json(json: &str) -> std::result::Result<WebIconLoader, JsError> {
        let config = RegistryConfig::from_json(json)
            .map_err(|e| JsError::new(&format!("Failed to parse config: {}", e)))?;
        Self::with_config(config)
    }

    /// Registers icons given as `"name"` or `"library/name"`.
    ///
    /// Returns the number of newly registered icons.
    pub fn require(&mut self, icons: Vec<String>) -> std::result::Result<usize, JsError> {
        Ok(self.registry.require(icons)?)
    }

    /// Registers the icon behind a class name such as `icon-accept`.
    #[wasm_bindgen(js_name = "requireByClassName")]
    pub fn require_by_class_name(
        &mut self,
        class_name: &str,
    ) -> std::result::Result<usize, JsError> {
        Ok(self.registry.require_by_class_name(class_name)?)
    }

    /// Returns the stylesheet for all registered icons.
    #[wasm_bindgen(js_name = "buildStylesheet")]
    pub fn build_stylesheet(&self) -> String {
        self.registry.build_stylesheet()
    }

    /// Returns the configured base path.
    #[wasm_bindgen(js_name = "basePath")]
    pub fn base_path(&self) -> String {
        self.registry.base_path().to_string()
    }

    /// Forgets every registered icon.
    pub fn reset(&mut self) {
        self.registry.reset();
    }
}

impl WebIconLoader {
    fn with_config(config: RegistryConfig) -> std::result::Result<WebIconLoader, JsError> {
        let sink = DomSink::from_window()?;
        let registry = IconRegistry::initialize(config, sink)?;
        Ok(Self { registry })
    }
}
