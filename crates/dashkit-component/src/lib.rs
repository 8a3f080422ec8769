//! dashkit Components
//!
//! Polymorphic view components with a self-describing, tagged JSON envelope.
//!
//! # Core Concepts
//!
//! - [`Component`]: Closed sum type over every variant
//! - [`View`]: Sealed trait implemented by each variant ([`Text`], [`Link`], [`Table`])
//! - [`ComponentKind`]: Variant discriminator and wire tag
//! - [`Codec`]: Encodes components to envelopes and decodes them by tag
//! - [`ComponentRegistry`]: Tag → decoder mapping injected into the codec
//!
//! # Example
//!
//! ```
//! use dashkit_component::{columns_from_keys, Codec, Component, Link, Table, TableRow};
//!
//! let mut table = Table::new("People", columns_from_keys(["name"]));
//! table.add([
//!     TableRow::new().with("name", Link::new("", "Bob", "/bob")),
//!     TableRow::new().with("name", Link::new("", "Alice", "/alice")),
//! ]);
//! table.sort("name");
//!
//! let codec = Codec::with_defaults();
//! let json = codec.encode(&Component::from(table.clone()));
//! let decoded = codec.decode(&json).unwrap();
//!
//! assert_eq!(decoded, Component::from(table));
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

// Core modules
mod codec;
mod component;
mod config;
mod error;
mod kind;
mod metadata;
mod registry;

/// Component variant implementations
pub mod types;

// Re-exports
pub use codec::{Codec, DecodeScope, RawComponent, RawMetadata};
pub use component::{encode_view, Component, View};
pub use config::CodecConfig;
pub use error::{ConfigError, DecodeError, DecodeResult};
pub use kind::{ComponentKind, UnknownTag};
pub use metadata::{title_from_string, Metadata};
pub use registry::{builtin_decoder, ComponentRegistry, Decoder};
pub use types::{
    columns_from_keys, Link, LinkConfig, Table, TableColumn, TableConfig, TableRow, TableRows,
    Text, TextConfig,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn nested_table_round_trip() {
        let inner = Table::new_with_rows(
            "Labels",
            columns_from_keys(["key", "value"]),
            [TableRow::new()
                .with("key", Text::new("app"))
                .with("value", Text::markdown("`web`"))],
        );
        let outer = Table::new_with_rows(
            "Pods",
            columns_from_keys(["name", "labels"]),
            [TableRow::new()
                .with("name", Link::new("", "web-0", "/pods/web-0"))
                .with("labels", inner)],
        )
        .with_empty_content("No pods");

        let codec = Codec::with_defaults();
        let original = Component::from(outer);
        let decoded = codec.decode(&codec.encode(&original)).unwrap();

        assert_eq!(decoded, original);
        let table = decoded.as_table().unwrap();
        assert_eq!(table.empty_content(), "No pods");
        assert_eq!(table.metadata().title_text(), "Pods");
    }

    #[test]
    fn decoded_type_is_rederived() {
        let mut link = Component::from(Link::new("", "a", "/a"));
        link.metadata_mut().component_type = "stale".to_string();

        let decoded = Codec::with_defaults().decode_value(link.to_value()).unwrap();
        assert_eq!(decoded.metadata().component_type, "link");
    }
}
