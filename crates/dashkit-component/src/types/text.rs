//! Text component

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::codec::{DecodeScope, RawComponent};
use crate::component::{private, Component, View};
use crate::error::DecodeError;
use crate::kind::ComponentKind;
use crate::metadata::{title_from_string, Metadata};

/// Contents of a [`Text`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextConfig {
    /// Text value
    pub value: String,
    /// Render value as markdown
    #[serde(default)]
    pub is_markdown: bool,
}

/// Plain or markdown text. Title-capable.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    metadata: Metadata,
    config: TextConfig,
}

impl Text {
    /// Create plain text without a title
    #[inline]
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_title("", value)
    }

    /// Create plain text with a title
    #[must_use]
    pub fn with_title(title: &str, value: impl Into<String>) -> Self {
        Self {
            metadata: Metadata::new(ComponentKind::Text, title_from_string(title)),
            config: TextConfig {
                value: value.into(),
                is_markdown: false,
            },
        }
    }

    /// Create markdown text without a title
    #[must_use]
    pub fn markdown(value: impl Into<String>) -> Self {
        let mut text = Self::new(value);
        text.config.is_markdown = true;
        text
    }

    /// Text value
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.config.value
    }

    /// Whether value is markdown
    #[inline]
    #[must_use]
    pub fn is_markdown(&self) -> bool {
        self.config.is_markdown
    }

    /// Payload reference
    #[inline]
    #[must_use]
    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    pub(crate) fn decode(raw: RawComponent, scope: &mut DecodeScope<'_>) -> Result<Component, DecodeError> {
        let config = scope.payload(ComponentKind::Text, raw.config)?;
        let metadata = scope.metadata(ComponentKind::Text, raw.metadata)?;
        Ok(Component::Text(Self { metadata, config }))
    }
}

impl private::Sealed for Text {}

impl View for Text {
    const KIND: ComponentKind = ComponentKind::Text;

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    fn projection(&self) -> String {
        self.config.value.clone()
    }

    fn config_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("value".to_string(), Value::from(self.config.value.as_str()));
        if self.config.is_markdown {
            map.insert("isMarkdown".to_string(), Value::Bool(true));
        }
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_new() {
        let text = Text::new("hello");
        assert_eq!(text.value(), "hello");
        assert!(!text.is_markdown());
        assert!(text.metadata().title.is_empty());
        assert_eq!(text.metadata().component_type, "text");
    }

    #[test]
    fn text_markdown_config() {
        let text = Text::markdown("**bold**");
        assert!(text.is_markdown());
        assert_eq!(
            text.config_value(),
            json!({"value": "**bold**", "isMarkdown": true})
        );
    }

    #[test]
    fn plain_text_omits_markdown_flag() {
        assert_eq!(Text::new("x").config_value(), json!({"value": "x"}));
    }

    #[test]
    fn text_with_title() {
        let text = Text::with_title("Phase", "Running");
        assert_eq!(text.metadata().title_text(), "Phase");
        assert_eq!(text.projection(), "Running");
        assert!(text.supports_title());
    }
}
