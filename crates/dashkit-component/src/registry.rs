//! Decoder registry
//!
//! Provides [`ComponentRegistry`] for mapping wire tags to decoders.

use std::collections::HashMap;

use crate::codec::{DecodeScope, RawComponent};
use crate::component::Component;
use crate::error::DecodeError;
use crate::kind::ComponentKind;
use crate::types::{Link, Table, Text};

/// Decoder for one tag
///
/// Receives the untyped envelope and a scope for decoding nested components.
pub type Decoder = fn(RawComponent, &mut DecodeScope<'_>) -> Result<Component, DecodeError>;

/// Built-in decoder for a kind
#[must_use]
pub fn builtin_decoder(kind: ComponentKind) -> Decoder {
    match kind {
        ComponentKind::Text => Text::decode,
        ComponentKind::Link => Link::decode,
        ComponentKind::Table => Table::decode,
    }
}

/// Registry of decoders keyed by wire tag
///
/// Passed to [`Codec`](crate::Codec) as a value; there is no global registry.
#[derive(Debug, Default, Clone)]
pub struct ComponentRegistry {
    decoders: HashMap<String, Decoder>,
}

impl ComponentRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Create registry with every built-in kind
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for kind in ComponentKind::ALL {
            registry.register(kind.as_str(), builtin_decoder(kind));
        }
        registry
    }

    /// Register a decoder, replacing any previous one for the tag
    pub fn register(&mut self, tag: &str, decoder: Decoder) {
        self.decoders.insert(tag.to_string(), decoder);
    }

    /// Decoder for a tag
    #[inline]
    #[must_use]
    pub fn resolve(&self, tag: &str) -> Option<Decoder> {
        self.decoders.get(tag).copied()
    }

    /// Check if tag is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.decoders.contains_key(tag)
    }

    /// Remove tag
    #[inline]
    pub fn remove(&mut self, tag: &str) -> bool {
        self.decoders.remove(tag).is_some()
    }

    /// All registered tags, sorted
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.decoders.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Get number of registered tags
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}
