//! Stylesheet sinks: where generated CSS ends up.
//!
//! The registry never touches a document itself. It hands the complete
//! stylesheet to a [`StylesheetSink`], which replaces whatever it installed
//! earlier under the same id.

use std::collections::HashMap;

use crate::error::Result;

/// Installs generated CSS into a live rendering surface.
pub trait StylesheetSink {
    /// Removes any stylesheet previously installed under `id` and installs
    /// `css_text` in its place.
    fn replace_stylesheet(&mut self, id: &str, css_text: &str) -> Result<()>;
}

impl<F> StylesheetSink for F
where
    F: FnMut(&str, &str),
{
    fn replace_stylesheet(&mut self, id: &str, css_text: &str) -> Result<()> {
        self(id, css_text);
        Ok(())
    }
}

/// An in-memory sink that keeps the latest stylesheet per id.
///
/// Useful for headless hosts (server-side rendering, static exports) and
/// for tests that need to count replacements.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    sheets: HashMap<String, String>,
    replacements: usize,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stylesheet currently installed under `id`.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.sheets.get(id).map(String::as_str)
    }

    /// Returns how many times a stylesheet was replaced.
    pub fn replacements(&self) -> usize {
        self.replacements
    }

    /// Returns the number of distinct stylesheet ids installed.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Returns true if nothing was installed yet.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl StylesheetSink for MemorySink {
    fn replace_stylesheet(&mut self, id: &str, css_text: &str) -> Result<()> {
        self.sheets.insert(id.to_string(), css_text.to_string());
        self.replacements += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_replaces_by_id() {
        let mut sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.replace_stylesheet("a", "one").unwrap();
        sink.replace_stylesheet("a", "two").unwrap();
        sink.replace_stylesheet("b", "three").unwrap();

        assert_eq!(sink.get("a"), Some("two"));
        assert_eq!(sink.get("b"), Some("three"));
        assert_eq!(sink.get("c"), None);
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.replacements(), 3);
    }

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        {
            let mut sink = |id: &str, css: &str| seen.push(format!("{id}:{css}"));
            sink.replace_stylesheet("x", "body {}").unwrap();
        }
        assert_eq!(seen, vec!["x:body {}".to_string()]);
    }
}
