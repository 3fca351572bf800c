//! Default values for pack-models settings.
//!
//! This module provides centralized default values used across commands,
//! ensuring the CLI, the settings file and the library agree.

/// Marker placed before models that define a `display` section.
pub const DISPLAY_MARK: &str = "⭐";

/// Marker placed before models that define `elements`.
pub const ELEMENTS_MARK: &str = "🌐";

/// Base material for generated ItemsAdder items.
pub const MATERIAL: &str = "IRON_INGOT";

/// File name used when the ItemsAdder output path is a directory.
pub const ITEMS_FILE_NAME: &str = "items.yml";

/// File name used when the tree output path is a directory.
pub const TREE_FILE_NAME: &str = "model_tree.txt";

/// Settings file looked up in the current directory when `--config` is not
/// given.
pub const SETTINGS_FILE_NAME: &str = ".pack-models.yaml";
