//! Persistence bridge between the owned collection store and a durable slot
//!
//! The store is read once at startup and rewritten in full after every
//! mutation. Persistence never blocks collection tracking: unreadable state
//! starts an empty collection and failed writes are only logged.

use crate::store::{OwnedCards, OwnedCollectionStore, OwnedEntry};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tcgp_common::{CollectionError, Result};

/// Key of the slot holding the owned collection
pub const STORAGE_KEY: &str = "tcgp";

/// A named, durable key-value location
pub trait DurableSlot {
    /// Read the value stored under `key`, `None` if nothing was stored yet
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Slot backed by one JSON file per key
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default state directory, e.g. ~/.local/share/tcgp_collection
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tcgp_collection")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl DurableSlot for FileSlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path(key), value)?;
        Ok(())
    }
}

/// Slot kept in memory, for tests and embedding
#[derive(Debug, Default)]
pub struct MemorySlot {
    values: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let slot = Self::default();
        slot.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        slot
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    /// Number of writes performed so far
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl DurableSlot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.value(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Serialized layout: `{"ownedCards": [["A1-001", {"duplicates": 2}], ...]}`
#[derive(Debug, Serialize, Deserialize)]
struct PersistedCollection {
    #[serde(rename = "ownedCards")]
    owned_cards: Vec<(String, OwnedEntry)>,
}

/// Serialize all entries in iteration order
pub fn serialize_collection(cards: &OwnedCards) -> Result<String> {
    let persisted = PersistedCollection {
        owned_cards: cards
            .iter()
            .map(|(id, entry)| (id.to_string(), entry.clone()))
            .collect(),
    };
    Ok(serde_json::to_string(&persisted)?)
}

/// Rebuild a store from serialized content
pub fn restore_collection(content: &str) -> Result<OwnedCollectionStore> {
    let persisted: PersistedCollection = serde_json::from_str(content)?;
    Ok(OwnedCollectionStore::from_entries(persisted.owned_cards))
}

/// Load the store from the slot, starting empty when nothing usable is stored
pub fn load_store(slot: &dyn DurableSlot) -> OwnedCollectionStore {
    let content = match slot.read(STORAGE_KEY) {
        Ok(Some(content)) => content,
        Ok(None) => {
            log::info!("No saved collection found, starting empty");
            return OwnedCollectionStore::new();
        }
        Err(e) => {
            log::warn!("Failed to read saved collection, starting empty: {}", e);
            return OwnedCollectionStore::new();
        }
    };

    match restore_collection(&content) {
        Ok(store) => {
            log::info!("Loaded collection with {} owned cards", store.len());
            store
        }
        Err(e) => {
            log::warn!("Failed to parse saved collection, starting empty: {}", e);
            OwnedCollectionStore::new()
        }
    }
}

fn save(slot: &dyn DurableSlot, cards: &OwnedCards) -> Result<()> {
    let content = serialize_collection(cards)?;
    slot.write(STORAGE_KEY, &content)
        .map_err(|e| CollectionError::Slot(e.to_string()))
}

/// Subscribe the store so every mutation rewrites the slot
pub fn attach(store: &mut OwnedCollectionStore, slot: Rc<dyn DurableSlot>) {
    store.subscribe(move |cards, change| {
        match save(slot.as_ref(), cards) {
            Ok(()) => log::debug!(
                "Saved collection with {} owned cards after change to {}",
                cards.len(),
                change.card_id()
            ),
            Err(e) => log::warn!("Failed to save collection: {}", e),
        }
    });
}

/// Load the store from the slot and keep the slot updated from then on
pub fn open_store(slot: Rc<dyn DurableSlot>) -> OwnedCollectionStore {
    let mut store = load_store(slot.as_ref());
    attach(&mut store, slot);
    store
}

#[cfg(test)]
#[path = "persistence_tests.rs"]
mod tests;
