//! Component metadata
//!
//! Every component carries a [`Metadata`] block: the type tag used for
//! dispatch, an optional title made of title-capable components, and an
//! optional accessor.

use serde_json::{Map, Value};

use crate::component::Component;
use crate::kind::ComponentKind;
use crate::types::Text;

/// Attributes shared by every component
///
/// # Invariants
/// - `component_type` equals the owning variant's tag after construction
/// - The tag is rewritten from the variant on encode and on decode, so a
///   stale in-memory value never reaches the wire
/// - Every title entry is title-capable
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metadata {
    /// Type tag (`metadata.type` on the wire)
    pub component_type: String,

    /// Title, rendered inline before the component
    pub title: Vec<Component>,

    /// Optional identifier
    pub accessor: Option<String>,
}

impl Metadata {
    /// Create metadata for a kind with the given title
    #[inline]
    #[must_use]
    pub fn new(kind: ComponentKind, title: Vec<Component>) -> Self {
        Self {
            component_type: kind.as_str().to_string(),
            title,
            accessor: None,
        }
    }

    /// Set accessor
    #[inline]
    #[must_use]
    pub fn with_accessor(mut self, accessor: impl Into<String>) -> Self {
        self.accessor = Some(accessor.into());
        self
    }

    /// Title flattened to plain text
    #[must_use]
    pub fn title_text(&self) -> String {
        self.title.iter().map(Component::projection).collect()
    }

    /// Wire form, with the tag forced to `kind`
    pub(crate) fn to_wire(&self, kind: ComponentKind) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::from(kind.as_str()));
        if !self.title.is_empty() {
            let title = self.title.iter().map(Component::to_value).collect();
            map.insert("title".to_string(), Value::Array(title));
        }
        if let Some(accessor) = &self.accessor {
            map.insert("accessor".to_string(), Value::from(accessor.as_str()));
        }
        Value::Object(map)
    }
}

/// Build a title from a plain string
///
/// An empty string yields an empty title rather than a blank text entry.
#[must_use]
pub fn title_from_string(title: &str) -> Vec<Component> {
    if title.is_empty() {
        Vec::new()
    } else {
        vec![Component::Text(Text::new(title))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_sets_tag() {
        let metadata = Metadata::new(ComponentKind::Link, Vec::new());
        assert_eq!(metadata.component_type, "link");
        assert!(metadata.title.is_empty());
        assert!(metadata.accessor.is_none());
    }

    #[test]
    fn empty_title_from_string() {
        assert!(title_from_string("").is_empty());
    }

    #[test]
    fn title_from_string_is_text() {
        let title = title_from_string("Pods");
        assert_eq!(title.len(), 1);
        assert_eq!(title[0].kind(), ComponentKind::Text);
        assert_eq!(title[0].projection(), "Pods");
    }

    #[test]
    fn wire_forces_kind() {
        let mut metadata = Metadata::new(ComponentKind::Text, Vec::new());
        metadata.component_type = "bogus".to_string();
        assert_eq!(
            metadata.to_wire(ComponentKind::Text),
            json!({"type": "text"})
        );
    }

    #[test]
    fn wire_includes_title_and_accessor() {
        let metadata =
            Metadata::new(ComponentKind::Link, title_from_string("Docs")).with_accessor("docs");
        let wire = metadata.to_wire(ComponentKind::Link);
        assert_eq!(wire["accessor"], json!("docs"));
        assert_eq!(wire["title"][0]["metadata"]["type"], json!("text"));
        assert_eq!(wire["title"][0]["config"]["value"], json!("Docs"));
    }

    #[test]
    fn title_text_concatenates() {
        let metadata = Metadata::new(ComponentKind::Table, title_from_string("Nodes"));
        assert_eq!(metadata.title_text(), "Nodes");
    }
}
