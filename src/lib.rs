//! # Pack Models Library
//!
//! This library reconstructs the inheritance forest of the JSON models in a
//! resource pack and derives artifacts from it. It is designed to be used by
//! the `pack-models` command-line tool but the pieces are usable on their own.
//!
//! ## Quick Example
//!
//! ```
//! use pack_models::resolver::{resolve, Markers, Record};
//!
//! // Children may be listed before their parents
//! let records = vec![
//!     Record::child("ruby:item/sword", "ruby:item/handheld"),
//!     Record::root("ruby:item/handheld").with_display(),
//! ];
//!
//! let markers = Markers::new(Some("*".to_string()), None);
//! let tree = resolve("ruby", &records, &markers).unwrap();
//!
//! assert_eq!(tree.label, "ruby");
//! let handheld = tree.find("* ruby:item/handheld").unwrap();
//! assert_eq!(handheld.children[0].label, "ruby:item/sword");
//! ```
//!
//! ## Core Concepts
//!
//! - **Discovery (`discovery`)**: Finds model files under `models/` and names
//!   them `namespace:path/name`.
//! - **Model Schema (`model`)**: serde structures for a model file.
//! - **Record Sources (`source`)**: Turn a pack (or any record set) into the
//!   complete, unordered record list the resolver works on.
//! - **Resolution (`resolver`)**: Builds the inheritance forest regardless of
//!   discovery order and reports unresolvable parents or cycles.
//! - **Rendering (`render`)**: Draws the forest as an indented text tree.
//! - **Parent Rewriting (`parents`)**: Turns `./name` parents into qualified
//!   names.
//! - **ItemsAdder (`itemsadder`)**: Generates an `items.yml` from the pack.
//! - **Settings (`settings`)**: Optional YAML settings file.

pub mod defaults;
pub mod discovery;
pub mod error;
pub mod itemsadder;
pub mod model;
pub mod output;
pub mod parents;
pub mod render;
pub mod resolver;
pub mod settings;
pub mod source;

#[cfg(test)]
mod resolver_proptest;
