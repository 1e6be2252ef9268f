//! Page configuration
//!
//! Defaults match the portfolio page markup. A page can override them with
//! `data-*` attributes on the `<html>` element:
//!
//! ```html
//! <html data-comments-api="https://api.example" data-comments-delete-button="wipe">
//! ```

use web_sys::Document;

/// Attribute holding the API base prefix
pub const API_BASE_ATTR: &str = "data-comments-api";
/// Attribute holding the delete button id
pub const DELETE_BUTTON_ATTR: &str = "data-comments-delete-button";

/// Ids of the elements the widget binds to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub form: String,
    pub max: String,
    pub language: String,
    pub container: String,
    pub delete_button: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            form: "comments-form".to_string(),
            max: "max".to_string(),
            language: "language".to_string(),
            container: "comments-container".to_string(),
            delete_button: "delete-comments".to_string(),
        }
    }
}

/// Full widget configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Prefix for every endpoint; empty means same origin
    pub api_base: String,
    /// Class that keeps the form hidden until it has an upload target
    pub hidden_class: String,
    pub ids: ElementIds,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            hidden_class: "hidden".to_string(),
            ids: ElementIds::default(),
        }
    }
}

impl PageConfig {
    /// Load configuration from the document's root element
    pub fn from_document(doc: &Document) -> Self {
        let root = doc.document_element();
        Self::from_attributes(|name| root.as_ref().and_then(|el| el.get_attribute(name)))
    }

    /// Build a config from an attribute lookup, falling back to defaults
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        let non_empty = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(base) = non_empty(API_BASE_ATTR) {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(id) = non_empty(DELETE_BUTTON_ATTR) {
            config.ids.delete_button = id;
        }

        config
    }
}
