//! Tagged envelope codec
//!
//! Encoding writes `{"metadata": {"type": <tag>, ...}, "config": {...}}` with
//! the tag taken from the variant. Decoding reads the tag first, resolves a
//! decoder through the [`ComponentRegistry`], and recurses into nested
//! components (title entries, table cells) through the same path.
//!
//! # Architecture
//!
//! ```text
//! &str → Value → RawComponent → registry.resolve(tag) → Decoder → Component
//!                     ↑_____________________________________|
//!                      DecodeScope::decode (titles, cells)
//! ```

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::component::Component;
use crate::config::CodecConfig;
use crate::error::DecodeError;
use crate::kind::ComponentKind;
use crate::metadata::Metadata;
use crate::registry::ComponentRegistry;

/// Untyped envelope, as read off the wire
///
/// Only `metadata.type` is required; the payload stays raw until a decoder
/// for the tag has been chosen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawComponent {
    /// Envelope metadata
    pub metadata: RawMetadata,
    /// Variant payload
    #[serde(default)]
    pub config: Value,
}

/// Untyped metadata block
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawMetadata {
    /// Tag used for dispatch
    #[serde(rename = "type")]
    pub component_type: String,
    /// Title entries, still encoded
    #[serde(default)]
    pub title: Option<Vec<Value>>,
    /// Optional identifier
    #[serde(default)]
    pub accessor: Option<String>,
}

/// Decoding state for one top-level decode
///
/// Tracks nesting depth and gives decoders access to the registry.
#[derive(Debug)]
pub struct DecodeScope<'a> {
    codec: &'a Codec,
    depth: usize,
}

impl<'a> DecodeScope<'a> {
    fn new(codec: &'a Codec) -> Self {
        Self { codec, depth: 0 }
    }

    /// Current nesting depth (0 before the top-level component)
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Decode one envelope, top-level or nested
    ///
    /// # Errors
    /// - `DepthExceeded` if nesting passes `max_depth`
    /// - `InvalidEnvelope` if `value` has no `metadata.type`
    /// - `UnknownVariant` if no decoder is registered for the tag
    /// - any error from the variant decoder
    pub fn decode(&mut self, value: Value) -> Result<Component, DecodeError> {
        let limit = self.codec.config.max_depth;
        if self.depth >= limit {
            return Err(DecodeError::DepthExceeded { limit });
        }

        let raw: RawComponent = serde_json::from_value(value).map_err(DecodeError::InvalidEnvelope)?;

        self.depth += 1;
        let result = self.dispatch(raw);
        self.depth -= 1;
        result
    }

    fn dispatch(&mut self, raw: RawComponent) -> Result<Component, DecodeError> {
        let tag = raw.metadata.component_type.as_str();
        let Some(decoder) = self.codec.registry.resolve(tag) else {
            tracing::warn!(tag, depth = self.depth, "no decoder registered for component tag");
            return Err(DecodeError::UnknownVariant {
                tag: tag.to_string(),
            });
        };

        tracing::debug!(tag, depth = self.depth, "decoding component");
        decoder(raw, self)
    }

    /// Build metadata for `kind`, decoding title entries
    ///
    /// The tag is taken from `kind`; the wire value is ignored.
    ///
    /// # Errors
    /// Returns error if a title entry fails to decode or is not title-capable
    pub fn metadata(&mut self, kind: ComponentKind, raw: RawMetadata) -> Result<Metadata, DecodeError> {
        let entries = raw.title.unwrap_or_default();
        let mut title = Vec::with_capacity(entries.len());
        for entry in entries {
            let component = self.decode(entry)?;
            if !component.supports_title() {
                return Err(DecodeError::TitleNotSupported {
                    tag: component.tag().to_string(),
                });
            }
            title.push(component);
        }

        Ok(Metadata {
            component_type: kind.as_str().to_string(),
            title,
            accessor: raw.accessor,
        })
    }

    /// Parse a variant payload
    ///
    /// # Errors
    /// Returns `MalformedPayload` if `config` does not match `T`
    pub fn payload<T: DeserializeOwned>(&self, kind: ComponentKind, config: Value) -> Result<T, DecodeError> {
        serde_json::from_value(config).map_err(|source| DecodeError::malformed(kind.as_str(), source))
    }
}

/// Encoder/decoder for component envelopes
///
/// Immutable once built; share it by reference across threads.
#[derive(Debug, Clone)]
pub struct Codec {
    registry: ComponentRegistry,
    config: CodecConfig,
}

impl Codec {
    /// Create codec from registry and config
    #[inline]
    #[must_use]
    pub fn new(registry: ComponentRegistry, config: CodecConfig) -> Self {
        Self { registry, config }
    }

    /// Codec for the built-in kinds with default config
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ComponentRegistry::with_defaults(), CodecConfig::default())
    }

    /// Registry reference
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Config reference
    #[inline]
    #[must_use]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode to an envelope value
    #[must_use]
    pub fn encode_value(&self, component: &Component) -> Value {
        tracing::trace!(tag = component.tag(), "encoding component");
        component.to_value()
    }

    /// Encode to a JSON document
    #[must_use]
    pub fn encode(&self, component: &Component) -> String {
        let value = self.encode_value(component);
        if self.config.pretty {
            format!("{value:#}")
        } else {
            value.to_string()
        }
    }

    /// Decode a JSON document
    ///
    /// # Errors
    /// Returns error if the document is not JSON or any component in it
    /// fails to decode
    pub fn decode(&self, input: &str) -> Result<Component, DecodeError> {
        let value: Value = serde_json::from_str(input).map_err(DecodeError::InvalidEnvelope)?;
        self.decode_value(value)
    }

    /// Decode an envelope value
    ///
    /// # Errors
    /// Returns error if any component in `value` fails to decode
    pub fn decode_value(&self, value: Value) -> Result<Component, DecodeError> {
        DecodeScope::new(self).decode(value)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::with_defaults()
    }
}
