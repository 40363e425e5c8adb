//! Reference dataset loading
//!
//! Each dataset is a paginated JSON export `{"docs": [...], "totalDocs": n}`.
//! Loaded datasets are memoized in a process-wide cache: a dataset is read
//! once and never invalidated for the lifetime of the process.

use crate::error::Result;
use crate::models::{Card, Expansion, Pack, PackCard, Rarity, Type};
use lazy_static::lazy_static;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::any::Any;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// A record addressable by its stable string id
pub trait Record {
    fn id(&self) -> &str;
}

macro_rules! impl_record {
    ($($ty:ty),*) => {
        $(impl Record for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

impl_record!(Card, Expansion, Pack, PackCard, Rarity, Type);

/// The six reference datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Cards,
    Expansions,
    Packs,
    PackCards,
    Rarities,
    Types,
}

impl DatasetKind {
    /// Dataset name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            DatasetKind::Cards => "cards",
            DatasetKind::Expansions => "expansions",
            DatasetKind::Packs => "packs",
            DatasetKind::PackCards => "packCards",
            DatasetKind::Rarities => "rarities",
            DatasetKind::Types => "types",
        }
    }

    /// File name of the dataset inside the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            DatasetKind::Cards => "cards.json",
            DatasetKind::Expansions => "expansions.json",
            DatasetKind::Packs => "packs.json",
            DatasetKind::PackCards => "pack-cards.json",
            DatasetKind::Rarities => "rarities.json",
            DatasetKind::Types => "types.json",
        }
    }
}

/// Id-keyed records in document order
///
/// A repeated id replaces the earlier record in place.
#[derive(Debug, Clone)]
pub struct Dataset<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Dataset<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Record> Dataset<T> {
    pub fn from_records(records: impl IntoIterator<Item = T>) -> Self {
        let mut dataset = Self::default();
        for record in records {
            match dataset.index.get(record.id()) {
                Some(&pos) => dataset.records[pos] = record,
                None => {
                    dataset
                        .index
                        .insert(record.id().to_string(), dataset.records.len());
                    dataset.records.push(record);
                }
            }
        }
        dataset
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Deserialize)]
struct Paginated<T> {
    docs: Option<Vec<T>>,
    #[serde(rename = "totalDocs")]
    total_docs: Option<usize>,
}

/// Parse a paginated export into a dataset
///
/// An incomplete export (missing `totalDocs`, or fewer docs than `totalDocs`)
/// yields an empty dataset rather than a partial one.
pub fn parse_dataset<T>(kind: DatasetKind, json: &str) -> Result<Dataset<T>>
where
    T: DeserializeOwned + Record,
{
    let page: Paginated<T> = serde_json::from_str(json)?;
    let docs = page.docs.unwrap_or_default();
    match page.total_docs {
        Some(total) if total == docs.len() => {
            log::info!("Loaded {} {}", docs.len(), kind.name());
            Ok(Dataset::from_records(docs))
        }
        total => {
            log::warn!(
                "Incomplete {} export ({} docs, totalDocs {:?}), using empty dataset",
                kind.name(),
                docs.len(),
                total
            );
            Ok(Dataset::default())
        }
    }
}

type CachedDataset = Arc<dyn Any + Send + Sync>;

lazy_static! {
    static ref DATASET_CACHE: Mutex<HashMap<String, CachedDataset>> = Mutex::new(HashMap::new());
}

/// Load a dataset from `data_dir`, reusing the cached copy if already loaded
///
/// The cache key is the dataset's file path, so the same dataset name in two
/// data directories is cached separately.
pub fn load_dataset_cached<T>(data_dir: &Path, kind: DatasetKind) -> Result<Arc<Dataset<T>>>
where
    T: DeserializeOwned + Record + Send + Sync + 'static,
{
    let path = data_dir.join(kind.file_name());
    let key = path.to_string_lossy().to_string();

    let mut cache = DATASET_CACHE.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(cached) = cache.get(&key) {
        if let Ok(dataset) = Arc::clone(cached).downcast::<Dataset<T>>() {
            log::debug!("Dataset cache hit for {}", key);
            return Ok(dataset);
        }
    }

    log::debug!("Dataset cache miss for {}, reading from disk", key);
    let content = std::fs::read_to_string(&path)?;
    let dataset = Arc::new(parse_dataset::<T>(kind, &content)?);
    cache.insert(key, dataset.clone() as CachedDataset);
    Ok(dataset)
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
