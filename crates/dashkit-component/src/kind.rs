//! Component kinds
//!
//! The closed set of component variants and their wire tags.

use std::fmt;
use std::str::FromStr;

/// Discriminator for every component variant
///
/// The tag returned by [`ComponentKind::as_str`] is what appears in
/// `metadata.type` on the wire. Tags are:
/// - Globally unique across all kinds
/// - Stable (never change)
/// - Lowercase ASCII
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    /// Plain or markdown text
    Text,
    /// Text pointing at a reference
    Link,
    /// Columns and rows of nested components
    Table,
}

impl ComponentKind {
    /// Every kind, in declaration order
    pub const ALL: [ComponentKind; 3] = [Self::Text, Self::Link, Self::Table];

    /// Canonical wire tag
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Link => "link",
            Self::Table => "table",
        }
    }

    /// Look up a kind by its wire tag
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    /// Whether components of this kind may appear in a title
    #[inline]
    #[must_use]
    pub const fn supports_title(self) -> bool {
        matches!(self, Self::Text | Self::Link)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised tag
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown component tag: '{0}'")]
pub struct UnknownTag(pub String);

impl FromStr for ComponentKind {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownTag(s.to_string()))
    }
}
