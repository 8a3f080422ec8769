//! Link component

use serde::Deserialize;
use serde_json::{json, Value};

use crate::codec::{DecodeScope, RawComponent};
use crate::component::{private, Component, View};
use crate::error::DecodeError;
use crate::kind::ComponentKind;
use crate::metadata::{title_from_string, Metadata};

/// Contents of a [`Link`]
///
/// Both fields are required on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct LinkConfig {
    /// Display text
    #[serde(rename = "value")]
    pub text: String,
    /// Link target
    #[serde(rename = "ref")]
    pub reference: String,
}

/// Text that points at a reference. Title-capable.
///
/// The projection is the display text; the reference is carried for
/// round-tripping only.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    metadata: Metadata,
    config: LinkConfig,
}

impl Link {
    /// Create link component
    #[must_use]
    pub fn new(title: &str, text: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            metadata: Metadata::new(ComponentKind::Link, title_from_string(title)),
            config: LinkConfig {
                text: text.into(),
                reference: reference.into(),
            },
        }
    }

    /// Display text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.config.text
    }

    /// Link target
    #[inline]
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.config.reference
    }

    /// Payload reference
    #[inline]
    #[must_use]
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    pub(crate) fn decode(raw: RawComponent, scope: &mut DecodeScope<'_>) -> Result<Component, DecodeError> {
        let config = scope.payload(ComponentKind::Link, raw.config)?;
        let metadata = scope.metadata(ComponentKind::Link, raw.metadata)?;
        Ok(Component::Link(Self { metadata, config }))
    }
}

impl private::Sealed for Link {}

impl View for Link {
    const KIND: ComponentKind = ComponentKind::Link;

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    fn projection(&self) -> String {
        self.config.text.clone()
    }

    fn config_value(&self) -> Value {
        json!({
            "value": self.config.text,
            "ref": self.config.reference,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_new() {
        let link = Link::new("Owner", "Alice", "/users/alice");
        assert_eq!(link.text(), "Alice");
        assert_eq!(link.reference(), "/users/alice");
        assert_eq!(link.metadata().component_type, "link");
        assert_eq!(link.metadata().title_text(), "Owner");
    }

    #[test]
    fn link_projection_ignores_reference() {
        let link = Link::new("", "Alice", "/zzz");
        assert_eq!(link.projection(), "Alice");
    }

    #[test]
    fn link_config_wire_names() {
        let link = Link::new("", "Alice", "/a");
        assert_eq!(link.config_value(), json!({"value": "Alice", "ref": "/a"}));
    }

    #[test]
    fn link_config_requires_ref() {
        let result = serde_json::from_value::<LinkConfig>(json!({"value": "Alice"}));
        assert!(result.is_err());
    }
}
