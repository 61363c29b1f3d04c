//! Framework default overrides.
//!
//! A flat, serializable table of the defaults a host UI framework should
//! use: date formats, pagination parameter names, page size and form
//! submission behavior. The table is data; the host applies it. A few helpers
//! compute values derived from it (pagination queries, required-field markers).
//!
//! ```
//! use icon_loader::FrameworkDefaults;
//!
//! let defaults = FrameworkDefaults::default();
//! let query = defaults.proxy.page_query(3, defaults.store.default_page_size);
//! assert_eq!(query[1], ("_start".to_string(), "20".to_string()));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Markup appended to labels of mandatory form fields.
pub const REQUIRED_LABEL_MARKUP: &str = r#"<span class="required" data-qtip="Required">*</span>"#;

// ============================================================================
// Sections
// ============================================================================

/// Defaults for record fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct DataFieldDefaults {
    /// Date format used when reading date fields.
    pub date_format: String,

    /// Convert unparseable numeric/boolean values to `null` instead of a
    /// type default.
    pub use_null: bool,
}

impl Default for DataFieldDefaults {
    fn default() -> Self {
        Self {
            date_format: "Y-m-d".to_string(),
            use_null: true,
        }
    }
}

/// Query parameter names sent by server proxies.
///
/// Every name carries a `_` prefix, keeping it apart from record fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct ProxyParams {
    pub page_param: String,
    pub start_param: String,
    pub limit_param: String,
    pub group_param: String,
    pub group_direction_param: String,
    pub sort_param: String,
    pub filter_param: String,
    pub direction_param: String,
}

impl Default for ProxyParams {
    fn default() -> Self {
        Self {
            page_param: "_page".to_string(),
            start_param: "_start".to_string(),
            limit_param: "_limit".to_string(),
            group_param: "_group".to_string(),
            group_direction_param: "_groupDir".to_string(),
            sort_param: "_sort".to_string(),
            filter_param: "_filter".to_string(),
            direction_param: "_dir".to_string(),
        }
    }
}

impl ProxyParams {
    /// Builds the paging query for a 1-based `page` of `limit` records.
    ///
    /// Page `0` is treated as the first page.
    pub fn page_query(&self, page: u32, limit: u32) -> Vec<(String, String)> {
        let page = page.max(1);
        let start = u64::from(page - 1) * u64::from(limit);
        vec![
            (self.page_param.clone(), page.to_string()),
            (self.start_param.clone(), start.to_string()),
            (self.limit_param.clone(), limit.to_string()),
        ]
    }
}

/// Defaults for data stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct StoreDefaults {
    pub default_page_size: u32,
}

impl Default for StoreDefaults {
    fn default() -> Self {
        Self {
            default_page_size: 10,
        }
    }
}

/// Defaults for forms and form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct FormDefaults {
    /// Send placeholder (empty) text along with the form.
    pub submit_empty_text: bool,

    /// Value submitted for a checked checkbox.
    pub checkbox_input_value: i64,

    /// Value submitted for an unchecked checkbox.
    pub checkbox_unchecked_value: i64,

    /// Format of dates submitted to the server.
    pub date_submit_format: String,

    /// Submit numbers with the locale's decimal separator instead of `.`.
    pub submit_locale_separator: bool,

    /// Limit input length to the field's max length.
    pub enforce_max_length: bool,

    /// Markup appended to labels of fields that may not be blank.
    pub required_label_markup: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            submit_empty_text: false,
            checkbox_input_value: 1,
            checkbox_unchecked_value: 0,
            date_submit_format: "Y-m-d".to_string(),
            submit_locale_separator: false,
            enforce_max_length: true,
            required_label_markup: REQUIRED_LABEL_MARKUP.to_string(),
        }
    }
}

impl FormDefaults {
    /// Returns the label suffix for a field, if it is mandatory.
    pub fn label_suffix(&self, allow_blank: bool) -> Option<&str> {
        if allow_blank {
            None
        } else {
            Some(self.required_label_markup.as_str())
        }
    }

    /// Returns the value submitted for a checkbox.
    pub fn checkbox_value(&self, checked: bool) -> i64 {
        if checked {
            self.checkbox_input_value
        } else {
            self.checkbox_unchecked_value
        }
    }
}

// ============================================================================
// FrameworkDefaults
// ============================================================================

/// All framework overrides in one serializable table.
///
/// # JSON Format
///
/// ```json
/// {
///   "dataField": { "dateFormat": "Y-m-d", "useNull": true },
///   "proxy": { "pageParam": "_page", "startParam": "_start", ... },
///   "store": { "defaultPageSize": 10 },
///   "form": { "submitEmptyText": false, ... }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct FrameworkDefaults {
    pub data_field: DataFieldDefaults,
    pub proxy: ProxyParams,
    pub store: StoreDefaults,
    pub form: FormDefaults,
}

impl FrameworkDefaults {
    /// Serializes the table to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the table to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a table from JSON. Missing sections and fields keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
