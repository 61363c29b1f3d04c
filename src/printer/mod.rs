//! Grid to printable HTML.
//!
//! [`GridPrinter`] reflects over a [`Grid`]'s column model and rows and
//! produces a standalone XHTML document: a heading, a table header built from
//! the visible columns, and one body row per record. Per-column renderers can
//! turn raw values into markup.
//!
//! Opening a window and invoking the print dialog are left to the host;
//! [`GridPrinter::preview`] describes the preview window and registers the
//! icons its buttons use.
//!
//! # Example
//!
//! ```
//! use icon_loader::printer::{Align, Column, Grid, GridPrinter};
//! use serde_json::json;
//!
//! let grid = Grid::new("Orders")
//!     .with_column(Column::new("Name", "name"))
//!     .with_column(Column::new("Price", "price").with_align(Align::Right))
//!     .with_row(json!({ "name": "Tea", "price": 3.5 }).as_object().unwrap().clone());
//!
//! let mut printer = GridPrinter::default();
//! printer.set_renderer("price", |value, _meta| format!("{value} EUR"));
//!
//! let html = printer.render(&grid);
//! assert!(html.contains("<th>Price</th>"));
//! assert!(html.contains(r#"<div style="text-align:right;">3.5 EUR</div>"#));
//! ```

pub mod grid;
pub mod template;

pub use grid::{Align, Column, Grid, Record, flatten_columns};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::icon::IconRequest;
use crate::registry::{IconRegistry, RequiresIcons};
use crate::sink::StylesheetSink;

const DOCTYPE: &str = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">"#;

// ============================================================================
// PrinterConfig
// ============================================================================

/// Settings for [`GridPrinter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct PrinterConfig {
    /// Stylesheet linked from the printed document.
    pub stylesheet_path: String,

    /// Heading printed above the table.
    pub main_title: String,

    /// Markup printed for empty cells.
    pub empty_text: String,

    /// Prefix of the preview window title.
    pub print_preview_text: String,

    pub print_link_text: String,

    pub close_link_text: String,

    /// Prefix of the CSS classes on `<html>` and `<body>`.
    pub css_prefix: String,

    /// Ask the host to open the print dialog as soon as the preview shows.
    pub print_automatically: bool,

    /// Ask the host to close the preview after printing.
    pub close_automatically_after_print: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            stylesheet_path: "../resources/css/ux-grid-Printer.css".to_string(),
            main_title: String::new(),
            empty_text: "&#160;".to_string(),
            print_preview_text: "Printpreview".to_string(),
            print_link_text: "Print".to_string(),
            close_link_text: "Close".to_string(),
            css_prefix: "x-".to_string(),
            print_automatically: false,
            close_automatically_after_print: false,
        }
    }
}

// ============================================================================
// Renderers
// ============================================================================

/// Context handed to a column renderer.
#[derive(Debug, Clone, Copy)]
pub struct RenderMeta<'a> {
    /// The whole record being rendered.
    pub record: &'a Record,
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based index into the flattened column list.
    pub col: usize,
}

/// Turns a raw cell value into markup.
pub type Renderer = Box<dyn Fn(&Value, &RenderMeta<'_>) -> String>;

// ============================================================================
// Print preview
// ============================================================================

/// What a preview button does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreviewAction {
    Print,
    Close,
}

/// A button in the preview window's footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewButton {
    pub text: String,
    pub icon_cls: String,
    pub action: PreviewAction,
}

/// Description of the print preview window a host should open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintPreview {
    pub title: String,
    pub icon_cls: String,
    pub width: u32,
    pub height: u32,
    pub buttons: Vec<PreviewButton>,
    pub print_automatically: bool,
    pub close_automatically_after_print: bool,
    /// The printable document to load into the window.
    pub html: String,
}

impl RequiresIcons for PrintPreview {
    fn required_icons(&self) -> Vec<IconRequest> {
        std::iter::once(self.icon_cls.as_str())
            .chain(self.buttons.iter().map(|b| b.icon_cls.as_str()))
            .filter_map(IconRequest::from_class_name)
            .collect()
    }
}

// ============================================================================
// GridPrinter
// ============================================================================

/// Renders grids to printable HTML.
#[derive(Default)]
pub struct GridPrinter {
    config: PrinterConfig,
    renderers: HashMap<String, Renderer>,
}

impl GridPrinter {
    /// Creates a printer with the given settings.
    pub fn new(config: PrinterConfig) -> Self {
        Self {
            config,
            renderers: HashMap::new(),
        }
    }

    /// Returns the settings.
    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Returns the settings mutably.
    pub fn config_mut(&mut self) -> &mut PrinterConfig {
        &mut self.config
    }

    /// Registers a renderer for the column keyed `column`, replacing any
    /// earlier one.
    pub fn set_renderer<F>(&mut self, column: impl Into<String>, renderer: F)
    where
        F: Fn(&Value, &RenderMeta<'_>) -> String + 'static,
    {
        self.renderers.insert(column.into(), Box::new(renderer));
    }

    /// Removes the renderer of a column. Returns true if one was set.
    pub fn remove_renderer(&mut self, column: &str) -> bool {
        self.renderers.remove(column).is_some()
    }

    /// Converts one record into cell markup keyed by column key.
    ///
    /// Every column with a data index present in the record gets a cell,
    /// including hidden ones. Emptiness is checked on the rendered text
    /// before alignment wrapping, so an empty value prints `empty_text`
    /// unwrapped even in a centered or right-aligned column.
    fn convert_row(
        &self,
        columns: &[&Column],
        record: &Record,
        row: usize,
    ) -> HashMap<String, String> {
        let mut cells = HashMap::new();
        for (col, column) in columns.iter().enumerate() {
            let (Some(data_index), Some(key)) = (column.data_index(), column.key()) else {
                continue;
            };
            let Some(value) = record.get(data_index) else {
                continue;
            };

            let meta = RenderMeta { record, row, col };
            let text = match self.renderers.get(key) {
                Some(renderer) => renderer(value, &meta),
                None => value_to_string(value),
            };

            let cell = if text.is_empty() {
                self.config.empty_text.clone()
            } else if column.align != Align::Left {
                format!(
                    r#"<div style="text-align:{};">{}</div>"#,
                    column.align.as_str(),
                    text
                )
            } else {
                text
            };
            cells.insert(key.to_string(), cell);
        }
        cells
    }

    /// Renders the grid as a standalone XHTML document.
    pub fn render(&self, grid: &Grid) -> String {
        let all_columns = flatten_columns(&grid.columns);
        let printable: Vec<&Column> = all_columns
            .iter()
            .copied()
            .filter(|c| c.is_printable())
            .collect();
        let prefix = &self.config.css_prefix;

        tracing::debug!(
            title = %grid.title,
            rows = grid.rows.len(),
            columns = printable.len(),
            "rendering printable grid"
        );

        let mut html = String::new();
        html.push_str(DOCTYPE);
        html.push('\n');
        html.push_str(&format!(r#"<html class="{prefix}ux-grid-printer">"#));
        html.push_str("<head>");
        html.push_str(r#"<meta content="text/html; charset=UTF-8" http-equiv="Content-Type" />"#);
        html.push_str(&format!(
            r#"<link href="{}" rel="stylesheet" type="text/css" />"#,
            self.config.stylesheet_path
        ));
        html.push_str(&format!("<title>{}</title>", grid.title));
        html.push_str("</head>\n");
        html.push_str(&format!(r#"<body class="{prefix}ux-grid-printer-body">"#));
        html.push_str(&format!("<h1>{}</h1>\n", self.config.main_title));

        html.push_str("<table>\n<thead><tr>");
        for column in &printable {
            html.push_str(&format!("<th>{}</th>", column.text));
        }
        html.push_str("</tr></thead>\n<tbody>\n");

        for (row, record) in grid.rows.iter().enumerate() {
            let cells = self.convert_row(&all_columns, record, row);
            // Row classes count from one, so the first row is odd.
            let class = if (row + 1) % 2 == 0 { "even" } else { "odd" };

            html.push_str(&format!(r#"<tr class="{class}">"#));
            for column in &printable {
                let cell = column
                    .key()
                    .and_then(|key| cells.get(key))
                    .map(String::as_str)
                    .unwrap_or("");
                html.push_str(&format!("<td>{cell}</td>"));
            }
            html.push_str("</tr>\n");

            if let Some(row_body) = &grid.row_body {
                let body = template::substitute(row_body, |name| {
                    cells
                        .get(name)
                        .cloned()
                        .or_else(|| record.get(name).map(value_to_string))
                });
                html.push_str(&format!(
                    r#"<tr class="{class}"><td colspan="{}">{body}</td></tr>"#,
                    printable.len()
                ));
                html.push('\n');
            }
        }

        html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
        html
    }

    /// Renders the grid and describes the preview window for it.
    ///
    /// The icons used by the window and its buttons are registered with
    /// `registry` so the host can show them.
    pub fn preview<S: StylesheetSink>(
        &self,
        grid: &Grid,
        registry: &mut IconRegistry<S>,
    ) -> Result<PrintPreview> {
        let preview = PrintPreview {
            title: format!("{}: {}", self.config.print_preview_text, grid.title),
            icon_cls: "icon-printer".to_string(),
            width: 640,
            height: 480,
            buttons: vec![
                PreviewButton {
                    text: self.config.print_link_text.clone(),
                    icon_cls: "icon-printer".to_string(),
                    action: PreviewAction::Print,
                },
                PreviewButton {
                    text: self.config.close_link_text.clone(),
                    icon_cls: "icon-cross".to_string(),
                    action: PreviewAction::Close,
                },
            ],
            print_automatically: self.config.print_automatically,
            close_automatically_after_print: self.config.close_automatically_after_print,
            html: self.render(grid),
        };
        registry.require_for(&preview)?;
        Ok(preview)
    }
}

/// Stringifies a raw JSON value for display: strings verbatim, `null` empty.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) if items.is_empty() => String::new(),
        other => other.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
