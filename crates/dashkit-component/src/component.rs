//! Component abstraction
//!
//! Defines the sealed [`View`] trait every variant implements and the
//! closed [`Component`] sum type that holds any of them.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::kind::ComponentKind;
use crate::metadata::Metadata;
use crate::types::{Link, Table, Text};

/// Sealed trait - prevents external implementations
#[doc(hidden)]
pub mod private {
    /// Sealed trait marker
    pub trait Sealed {}
}

/// Trait for component variants
///
/// This trait is **sealed**: the set of variants is closed so that decode
/// can match exhaustively on [`ComponentKind`].
///
/// # Contract
/// - `KIND` is the variant's canonical kind and never changes
/// - `projection` is deterministic (same content, same string)
/// - `config_value` is the variant payload only; the envelope and the tag
///   are added by [`encode_view`]
pub trait View: Send + Sync + Clone + fmt::Debug + PartialEq + private::Sealed {
    /// Kind of this variant
    const KIND: ComponentKind;

    /// Metadata reference
    fn metadata(&self) -> &Metadata;

    /// Mutable metadata reference
    fn metadata_mut(&mut self) -> &mut Metadata;

    /// Canonical plain-text representation, used for sorting
    fn projection(&self) -> String;

    /// Variant payload (`config` on the wire)
    fn config_value(&self) -> Value;

    /// Whether this variant may be used as a title entry
    #[inline]
    fn supports_title(&self) -> bool {
        Self::KIND.supports_title()
    }
}

/// Encode a variant into its tagged envelope
///
/// `metadata.type` is always taken from `V::KIND`, whatever the in-memory
/// metadata says.
#[must_use]
pub fn encode_view<V: View>(view: &V) -> Value {
    let mut envelope = Map::new();
    envelope.insert("config".to_string(), view.config_value());
    envelope.insert("metadata".to_string(), view.metadata().to_wire(V::KIND));
    Value::Object(envelope)
}

/// Any component
///
/// Owns its variant; nested components (title entries, table cells) are
/// owned by their parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    /// Text component
    Text(Text),
    /// Link component
    Link(Link),
    /// Table component
    Table(Table),
}

/// Forward a call to the inner variant
macro_rules! dispatch {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            Component::Text($inner) => $body,
            Component::Link($inner) => $body,
            Component::Table($inner) => $body,
        }
    };
}

impl Component {
    /// Kind of the inner variant
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Text(_) => ComponentKind::Text,
            Self::Link(_) => ComponentKind::Link,
            Self::Table(_) => ComponentKind::Table,
        }
    }

    /// Canonical tag of the inner variant
    #[inline]
    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Metadata reference
    #[inline]
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        dispatch!(self, inner => inner.metadata())
    }

    /// Mutable metadata reference
    #[inline]
    pub fn metadata_mut(&mut self) -> &mut Metadata {
        dispatch!(self, inner => inner.metadata_mut())
    }

    /// Textual projection of the inner variant
    #[inline]
    #[must_use]
    pub fn projection(&self) -> String {
        dispatch!(self, inner => inner.projection())
    }

    /// Whether this component may be used as a title entry
    #[inline]
    #[must_use]
    pub fn supports_title(&self) -> bool {
        dispatch!(self, inner => inner.supports_title())
    }

    /// Encode into the tagged envelope
    #[must_use]
    pub fn to_value(&self) -> Value {
        dispatch!(self, inner => encode_view(inner))
    }

    /// Inner text, if this is a text component
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Inner link, if this is a link component
    #[inline]
    #[must_use]
    pub fn as_link(&self) -> Option<&Link> {
        match self {
            Self::Link(link) => Some(link),
            _ => None,
        }
    }

    /// Inner table, if this is a table component
    #[inline]
    #[must_use]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Mutable inner table, if this is a table component
    #[inline]
    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.projection())
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl From<Text> for Component {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Link> for Component {
    fn from(link: Link) -> Self {
        Self::Link(link)
    }
}

impl From<Table> for Component {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}
