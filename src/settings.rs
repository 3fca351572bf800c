//! # Settings File
//!
//! Optional YAML file holding the same knobs as the CLI flags, so a pack can
//! keep its markers, material and lore next to its sources:
//!
//! ```yaml
//! display_mark: "⭐"
//! elements_mark: "🌐"
//! material: PAPER
//! lore:
//!   - Crafted by hand
//! category_name: Ruby Tools
//! itemsadder_output: build/items.yml
//! tree_output: build/model_tree.txt
//! ```
//!
//! Precedence is CLI flag, then settings file, then the values in `defaults`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::{Error, Result};
use crate::itemsadder::ItemsAdderOptions;
use crate::resolver::Markers;

/// Every setting is optional; unset values fall through to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Marker for models with a `display` section. Empty disables it.
    pub display_mark: Option<String>,
    /// Marker for models with `elements`. Empty disables it.
    pub elements_mark: Option<String>,
    /// Base material of generated items.
    pub material: Option<String>,
    /// Lore lines attached to every generated item.
    pub lore: Option<Vec<String>>,
    /// Category display name.
    pub category_name: Option<String>,
    /// Where to write the ItemsAdder config.
    pub itemsadder_output: Option<PathBuf>,
    /// Where to write the model tree.
    pub tree_output: Option<PathBuf>,
}

impl Settings {
    /// Values set in `overrides` win over values set in `self`.
    pub fn merge(self, overrides: Settings) -> Settings {
        Settings {
            display_mark: overrides.display_mark.or(self.display_mark),
            elements_mark: overrides.elements_mark.or(self.elements_mark),
            material: overrides.material.or(self.material),
            lore: overrides.lore.or(self.lore),
            category_name: overrides.category_name.or(self.category_name),
            itemsadder_output: overrides.itemsadder_output.or(self.itemsadder_output),
            tree_output: overrides.tree_output.or(self.tree_output),
        }
    }

    pub fn markers(&self) -> Markers {
        Markers::new(
            Some(
                self.display_mark
                    .clone()
                    .unwrap_or_else(|| defaults::DISPLAY_MARK.to_string()),
            ),
            Some(
                self.elements_mark
                    .clone()
                    .unwrap_or_else(|| defaults::ELEMENTS_MARK.to_string()),
            ),
        )
    }

    pub fn itemsadder_options(&self) -> ItemsAdderOptions {
        ItemsAdderOptions {
            lore: self.lore.clone(),
            material: self
                .material
                .clone()
                .unwrap_or_else(|| defaults::MATERIAL.to_string()),
            category_name: self.category_name.clone(),
        }
    }
}

/// Parse settings from YAML text. An empty document yields the defaults.
pub fn parse(yaml: &str) -> Result<Settings> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: Some("The settings file must be a YAML mapping".to_string()),
    })?;
    if value.is_null() {
        return Ok(Settings::default());
    }
    serde_yaml::from_value(value).map_err(|e| {
        let message = e.to_string();
        let hint = message.contains("unknown field").then(|| {
            "Known keys: display_mark, elements_mark, material, lore, category_name, itemsadder_output, tree_output".to_string()
        });
        Error::ConfigParse { message, hint }
    })
}

/// Read and parse the settings file at `path`.
pub fn from_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| Error::ConfigParse {
        message: format!("Cannot read {}: {}", path.display(), e),
        hint: None,
    })?;
    parse(&content)
}

/// Load settings from `explicit` if given, otherwise from
/// `.pack-models.yaml` in `dir` if it exists, otherwise the defaults.
pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Settings> {
    if let Some(path) = explicit {
        return from_file(path);
    }
    let implicit = dir.join(defaults::SETTINGS_FILE_NAME);
    if implicit.is_file() {
        from_file(&implicit)
    } else {
        Ok(Settings::default())
    }
}
