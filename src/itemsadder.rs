//! # ItemsAdder Configuration
//!
//! Generates an ItemsAdder `items.yml` that registers every model with its
//! own textures or geometry as an item, plus one category per namespace
//! listing all of those items.
//!
//! ## Output Shape
//!
//! ```yaml
//! info:
//!   namespace: ruby
//! items:
//!   sword:
//!     displayname: sword
//!     resource:
//!       material: IRON_INGOT
//!       generate: false
//!       model_path: item/tools/sword
//! categories:
//!   ruby:
//!     enabled: true
//!     icon: ruby:sword
//!     name: ruby
//!     items:
//!     - ruby:sword
//! ```
//!
//! Items are keyed by file name, so two models with the same file name in
//! different directories collide. The later one wins and a warning is logged.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::discovery::namespace_of;
use crate::error::Result;
use crate::source::load_models;

/// The `info` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub namespace: String,
}

/// A creative-menu category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub enabled: bool,
    pub icon: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// How an item is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub material: String,
    #[serde(default)]
    pub generate: bool,
    pub model_path: String,
}

/// A single item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub displayname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lore: Option<Vec<String>>,
    pub resource: Resource,
}

/// A complete ItemsAdder configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsAdderConfig {
    pub info: Info,
    #[serde(default)]
    pub items: BTreeMap<String, Item>,
    #[serde(default)]
    pub categories: BTreeMap<String, Category>,
}

impl ItemsAdderConfig {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            info: Info {
                namespace: namespace.into(),
            },
            items: BTreeMap::new(),
            categories: BTreeMap::new(),
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Options applied to every generated item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemsAdderOptions {
    /// Lore lines attached to every item.
    pub lore: Option<Vec<String>>,
    /// Base material of every item.
    pub material: String,
    /// Display name of the category; defaults to the namespace.
    pub category_name: Option<String>,
}

impl Default for ItemsAdderOptions {
    fn default() -> Self {
        Self {
            lore: None,
            material: defaults::MATERIAL.to_string(),
            category_name: None,
        }
    }
}

/// Build the configuration for every eligible model under `models_path`.
pub fn build_config(models_path: &Path, options: &ItemsAdderOptions) -> Result<ItemsAdderConfig> {
    let mut config = ItemsAdderConfig::new(namespace_of(models_path)?);

    for loaded in load_models(models_path)? {
        if !loaded.model.is_item_candidate() {
            continue;
        }
        let entry = &loaded.entry;
        let icon = format!("{}:{}", entry.namespace, entry.name);

        let item = Item {
            displayname: entry.name.clone(),
            lore: options.lore.clone(),
            resource: Resource {
                material: options.material.clone(),
                generate: false,
                model_path: entry.model_path(),
            },
        };
        if let Some(previous) = config.items.insert(entry.name.clone(), item) {
            warn!(
                "Item {} from {} replaces the one from {}",
                entry.name,
                entry.model_path(),
                previous.resource.model_path
            );
        }

        let category = config
            .categories
            .entry(entry.namespace.clone())
            .or_insert_with(|| Category {
                enabled: true,
                icon: icon.clone(),
                name: options
                    .category_name
                    .clone()
                    .unwrap_or_else(|| entry.namespace.clone()),
                items: Vec::new(),
            });
        if !category.items.contains(&icon) {
            category.items.push(icon);
        }
    }

    Ok(config)
}

/// Where the configuration file goes: `output` itself, or `items.yml`
/// inside it when `output` is a directory.
pub fn config_file_path(output: &Path) -> PathBuf {
    if output.is_dir() {
        output.join(defaults::ITEMS_FILE_NAME)
    } else {
        output.to_path_buf()
    }
}

/// Write `config` as YAML and return the file written.
pub fn write_config(config: &ItemsAdderConfig, output: &Path) -> Result<PathBuf> {
    let path = config_file_path(output);
    fs::write(&path, config.to_yaml()?)?;
    info!(
        "ItemsAdder config file with {} items saved as \"{}\"",
        config.items.len(),
        path.display()
    );
    Ok(path)
}

/// Build and write the configuration in one step.
pub fn create_config(
    models_path: &Path,
    output: &Path,
    options: &ItemsAdderOptions,
) -> Result<PathBuf> {
    info!("Generating ItemsAdder config file...");
    let config = build_config(models_path, options)?;
    write_config(&config, output)
}
