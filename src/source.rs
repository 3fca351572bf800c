//! Record sources feeding the resolver.
//!
//! The resolver needs the complete record set up front. A [`RecordSource`]
//! hands it over as a fully materialized `Vec<Record>`; how the records are
//! produced is up to the source. [`PackSource`] reads them from a resource
//! pack's `models/` directory, parsing the model files in parallel.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::debug;
use rayon::prelude::*;

use crate::discovery::{find_models, namespace_of, ModelEntry};
use crate::error::{Error, Result};
use crate::model::Model;
use crate::resolver::{resolve, Markers, Node, Record};

/// Something that can enumerate a complete record set.
pub trait RecordSource {
    /// Return every record. Each call yields a fresh snapshot; no order is
    /// guaranteed.
    fn records(&self) -> Result<Vec<Record>>;
}

impl RecordSource for [Record] {
    fn records(&self) -> Result<Vec<Record>> {
        Ok(self.to_vec())
    }
}

/// A model file together with its parsed content.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub entry: ModelEntry,
    pub model: Model,
}

impl LoadedModel {
    pub fn to_record(&self) -> Record {
        Record {
            qualified_name: self.entry.qualified_name(),
            parent: self.model.parent.clone(),
            has_display_info: self.model.has_display(),
            has_geometry_info: self.model.has_elements(),
        }
    }
}

/// Discover and parse every model under `models_path`.
///
/// Files are parsed in parallel; the result keeps discovery order.
pub fn load_models(models_path: &Path) -> Result<Vec<LoadedModel>> {
    find_models(models_path)?
        .into_par_iter()
        .map(|entry| -> Result<LoadedModel> {
            let model = Model::from_file(&entry.file_path())?;
            Ok(LoadedModel { entry, model })
        })
        .collect()
}

/// Records read from a resource pack's `models/` directory.
#[derive(Debug, Clone)]
pub struct PackSource {
    models_path: PathBuf,
}

impl PackSource {
    pub fn new(models_path: impl Into<PathBuf>) -> Self {
        Self {
            models_path: models_path.into(),
        }
    }

    pub fn models_path(&self) -> &Path {
        &self.models_path
    }

    /// Namespace the pack's models live in.
    pub fn namespace(&self) -> Result<String> {
        namespace_of(&self.models_path)
    }
}

impl RecordSource for PackSource {
    fn records(&self) -> Result<Vec<Record>> {
        let records = unique_records(&load_models(&self.models_path)?)?;
        debug!(
            "Loaded {} records from {}",
            records.len(),
            self.models_path.display()
        );
        Ok(records)
    }
}

/// Turn loaded models into records, rejecting two files with the same
/// qualified name.
pub fn unique_records(models: &[LoadedModel]) -> Result<Vec<Record>> {
    let mut seen: HashMap<String, PathBuf> = HashMap::with_capacity(models.len());
    let mut records = Vec::with_capacity(models.len());

    for loaded in models {
        let record = loaded.to_record();
        let path = loaded.entry.file_path();
        if let Some(first) = seen.get(&record.qualified_name) {
            return Err(Error::DuplicateModel {
                name: record.qualified_name,
                first: first.clone(),
                second: path,
            });
        }
        seen.insert(record.qualified_name.clone(), path);
        records.push(record);
    }
    Ok(records)
}

/// Enumerate `source` and resolve its records under `namespace`.
pub fn build_tree<S: RecordSource + ?Sized>(
    source: &S,
    namespace: &str,
    markers: &Markers,
) -> Result<Node> {
    let records = source.records()?;
    Ok(resolve(namespace, &records, markers)?)
}
