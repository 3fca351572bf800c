//! Rewriting of relative parent references.
//!
//! Model authors sometimes write `"parent": "./base"` to mean "the model
//! named `base` next to me". The game does not understand that form, and
//! neither does the resolver, so [`fix_parents`] rewrites such references into
//! qualified `namespace:path/name` form in place.

use std::path::Path;

use log::info;

use crate::error::Result;
use crate::source::load_models;

const RELATIVE_PREFIX: &str = "./";

/// Outcome of a [`fix_parents`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixReport {
    /// Model files examined.
    pub processed: usize,
    /// Model files whose parent was rewritten.
    pub fixed: usize,
}

/// Qualify a `./`-relative `parent` of the model in directory `relpath`.
///
/// Returns `None` when `parent` is not relative.
///
/// ```
/// use pack_models::parents::qualify_parent;
///
/// assert_eq!(
///     qualify_parent("ruby", "item/tools", "./handle").as_deref(),
///     Some("ruby:item/handle")
/// );
/// assert_eq!(qualify_parent("ruby", "item", "ruby:item/base"), None);
/// ```
pub fn qualify_parent(namespace: &str, relpath: &str, parent: &str) -> Option<String> {
    let rest = parent.strip_prefix(RELATIVE_PREFIX)?;
    let base = relpath.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("");
    Some(if base.is_empty() {
        format!("{}:{}", namespace, rest)
    } else {
        format!("{}:{}/{}", namespace, base, rest)
    })
}

/// Rewrite every relative parent reference under `models_path`.
///
/// With `dry_run` set the files are left untouched but the report still
/// counts what would have been fixed.
pub fn fix_parents(models_path: &Path, dry_run: bool) -> Result<FixReport> {
    info!("Processing model parents...");
    let mut report = FixReport::default();

    for mut loaded in load_models(models_path)? {
        let name = loaded.entry.qualified_name();
        let qualified = loaded.model.parent.as_deref().and_then(|parent| {
            qualify_parent(&loaded.entry.namespace, &loaded.entry.relpath, parent)
        });

        match qualified {
            Some(parent) => {
                loaded.model.parent = Some(parent);
                if !dry_run {
                    loaded.model.write_to(&loaded.entry.file_path())?;
                }
                info!("✅ {}", name);
                report.fixed += 1;
            }
            None => info!("👁 {}", name),
        }
        report.processed += 1;
    }

    info!(
        "{} models processed | {} parent paths fixed",
        report.processed, report.fixed
    );
    Ok(report)
}
