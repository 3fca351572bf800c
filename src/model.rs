//! # Resource Pack Model Schema
//!
//! serde structures for the JSON model files found under a resource pack's
//! `models/` directory. Only the keys this tool reasons about are typed:
//!
//! - **`parent`**: qualified name of the model this one inherits from.
//! - **`textures`**: texture variable bindings.
//! - **`elements`**: cuboid geometry, kept as raw JSON values.
//! - **`display`**: per-context transforms (`gui`, `ground`, ...).
//!
//! Everything else is carried through untouched in `extra`, so rewriting a
//! model (see `parents`) never drops keys the tool does not know about.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::{Error, Result};

/// Transform applied to a model in one display context.
///
/// Components stay JSON numbers so integer transforms are written back as
/// integers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplaySection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec<Number>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<Vec<Number>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vec<Number>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// The `display` block of a model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Display {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gui: Option<DisplaySection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ground: Option<DisplaySection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<DisplaySection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thirdperson_righthand: Option<DisplaySection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstperson_righthand: Option<DisplaySection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<DisplaySection>,
    /// Contexts not listed above (`thirdperson_lefthand`, ...).
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

/// A single model file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub textures: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Model {
    /// Parse a model from its JSON text.
    pub fn parse(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse the model file at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::ModelParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&content).map_err(|e| Error::ModelParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Write the model back to `path` as compact JSON.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn has_display(&self) -> bool {
        self.display.is_some()
    }

    pub fn has_elements(&self) -> bool {
        self.elements.is_some()
    }

    /// Models with their own textures or geometry can stand in as items.
    pub fn is_item_candidate(&self) -> bool {
        self.textures.is_some() || self.elements.is_some()
    }
}
