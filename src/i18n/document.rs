//! Document adapter: the surface translations are applied to.
//!
//! Elements opt into translation through marker attributes naming a dotted
//! key path. The adapter only needs to find marked elements and patch
//! their content, attributes and classes; [`MemoryDocument`] implements it
//! over an in-memory page snapshot.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Direction;
use crate::error::{Error, Result};

/// Marker attributes.
pub mod markers {
    /// Translate the element's inner content (markup allowed).
    pub const CONTENT: &str = "data-i18n";
    /// Translate the element's `placeholder` attribute.
    pub const PLACEHOLDER: &str = "data-i18n-placeholder";
    /// Translate the element's generic attribute (see [`TARGET_ATTRIBUTE`]).
    pub const ATTRIBUTE: &str = "data-i18n-content";
    /// Translate the document title.
    pub const TITLE: &str = "data-i18n-title";
    /// Language-switch control; the value is a language code.
    pub const SWITCH: &str = "data-lang";

    /// Attribute written for [`ATTRIBUTE`] markers (e.g. `<meta content>`).
    pub const TARGET_ATTRIBUTE: &str = "content";
    /// Attribute written for [`PLACEHOLDER`] markers.
    pub const PLACEHOLDER_ATTRIBUTE: &str = "placeholder";
    /// Class carried by the switch control of the active language.
    pub const ACTIVE_CLASS: &str = "active";
}

/// Handle to an element within a document.
pub type ElementId = usize;

/// Presentation-level operations the translation service performs.
pub trait Document {
    /// All elements carrying `marker`, in document order.
    fn elements_with(&self, marker: &str) -> Vec<ElementId>;

    /// Value of an attribute on an element.
    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    /// Replace an element's rendered content.
    fn set_inner_html(&mut self, element: ElementId, html: &str);

    /// Set an attribute on an element.
    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str);

    /// Add (`enabled`) or remove a class on an element.
    fn set_class(&mut self, element: ElementId, class: &str, enabled: bool);

    /// Set the document title.
    fn set_title(&mut self, title: &str);

    /// Set the root language and text direction.
    fn set_language(&mut self, code: &str, direction: Direction);
}

/// One element of a [`MemoryDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Optional tag name, informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Attributes, marker attributes included.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    /// Class list, in insertion order without duplicates.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,

    /// Inner content.
    #[serde(default)]
    pub inner_html: String,
}

impl Element {
    /// Create an element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: Some(tag.into()), ..Self::default() }
    }

    /// Set an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set the inner content.
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.inner_html = html.into();
        self
    }

    /// Add a class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Whether the element carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// An in-memory page snapshot implementing [`Document`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryDocument {
    /// Root `lang` attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Root `dir` attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<Direction>,

    /// Document title.
    #[serde(default)]
    pub title: String,

    /// Elements in document order.
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl MemoryDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a snapshot from a JSON or YAML file (by extension; JSON otherwise).
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::invalid_arg(format!("Failed to read page {}: {}", path.display(), e))
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Ok(serde_yaml::from_str(&contents)?),
            _ => Ok(serde_json::from_str(&contents)?),
        }
    }

    /// Append an element, returning its handle.
    pub fn push(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        self.elements.len() - 1
    }

    /// Look up an element.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }
}

impl Document for MemoryDocument {
    fn elements_with(&self, marker: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| el.attributes.contains_key(marker))
            .map(|(id, _)| id)
            .collect()
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.elements.get(element)?.attributes.get(name).cloned()
    }

    fn set_inner_html(&mut self, element: ElementId, html: &str) {
        if let Some(el) = self.elements.get_mut(element) {
            el.inner_html = html.to_string();
        }
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        if let Some(el) = self.elements.get_mut(element) {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn set_class(&mut self, element: ElementId, class: &str, enabled: bool) {
        let Some(el) = self.elements.get_mut(element) else {
            return;
        };
        if enabled {
            if !el.has_class(class) {
                el.classes.push(class.to_string());
            }
        } else {
            el.classes.retain(|c| c != class);
        }
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_language(&mut self, code: &str, direction: Direction) {
        self.lang = Some(code.to_string());
        self.dir = Some(direction);
    }
}
