//! Model file discovery.
//!
//! A resource pack keeps its models under `assets/<namespace>/models/`. This
//! module walks that directory and describes every `*.json` file it finds by
//! the pieces the rest of the tool needs: the namespace, the directory path
//! relative to `models/` and the file name.
//!
//! A model at `assets/ns/models/item/tools/sword.json` is reported as
//! namespace `ns`, relpath `item/tools`, name `sword`, which gives the
//! qualified name `ns:item/tools/sword`.

use std::path::{Component, Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Extension of model files.
pub const MODEL_EXTENSION: &str = "json";

/// A model file found under a `models/` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelEntry {
    /// Directory containing the file.
    pub dir: PathBuf,
    /// Resource pack namespace.
    pub namespace: String,
    /// Directory of the file relative to `models/`, `/`-separated. Empty for
    /// files directly inside `models/`.
    pub relpath: String,
    /// File name without extension.
    pub name: String,
    /// File extension.
    pub ext: String,
}

impl ModelEntry {
    /// Full path of the model file.
    pub fn file_path(&self) -> PathBuf {
        self.dir.join(format!("{}.{}", self.name, self.ext))
    }

    /// Path of the model relative to `models/` without extension.
    pub fn model_path(&self) -> String {
        if self.relpath.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.relpath, self.name)
        }
    }

    /// `namespace:relpath/name`, the name other models use to refer to this one.
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.namespace, self.model_path())
    }
}

/// Namespace of a pack's `models/` directory: the name of its parent directory.
pub fn namespace_of(models_path: &Path) -> Result<String> {
    let absolute = models_path.canonicalize().map_err(|e| Error::Path {
        message: format!("Cannot access {}: {}", models_path.display(), e),
    })?;
    absolute
        .parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| Error::Path {
            message: format!(
                "Cannot determine namespace for {}: no parent directory",
                models_path.display()
            ),
        })
}

/// Find every model file under `models_path`, sorted by path.
pub fn find_models(models_path: &Path) -> Result<Vec<ModelEntry>> {
    if !models_path.is_dir() {
        return Err(Error::Path {
            message: format!("Models directory not found: {}", models_path.display()),
        });
    }
    let namespace = namespace_of(models_path)?;
    let mut entries = Vec::new();

    for entry in WalkDir::new(models_path)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(MODEL_EXTENSION) {
            continue;
        }

        let dir = path.parent().ok_or_else(|| Error::Path {
            message: format!("Model file has no parent directory: {}", path.display()),
        })?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| non_utf8(path))?;
        let relative_dir = dir.strip_prefix(models_path).map_err(|_| Error::Path {
            message: format!("Failed to make path relative: {}", path.display()),
        })?;

        entries.push(ModelEntry {
            dir: dir.to_path_buf(),
            namespace: namespace.clone(),
            relpath: to_slash(relative_dir).ok_or_else(|| non_utf8(path))?,
            name: name.to_string(),
            ext: MODEL_EXTENSION.to_string(),
        });
    }

    debug!(
        "Found {} model files under {}",
        entries.len(),
        models_path.display()
    );
    Ok(entries)
}

/// Join the normal components of `path` with `/`. `None` if one of them is
/// not valid UTF-8.
fn to_slash(path: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in path.components() {
        if let Component::Normal(part) = component {
            parts.push(part.to_str()?);
        }
    }
    Some(parts.join("/"))
}

fn non_utf8(path: &Path) -> Error {
    Error::Path {
        message: format!("Model path is not valid UTF-8: {}", path.display()),
    }
}
