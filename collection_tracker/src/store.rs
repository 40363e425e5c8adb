//! Owned collection store
//!
//! The single source of truth for which cards are owned. Every mutation is
//! applied synchronously and then announced to all subscribers, which is how
//! the persistence bridge and any derived views stay in sync.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Highest accepted duplicate count
pub const MAX_DUPLICATES: u32 = 1000;

/// Ownership record for one card
///
/// A card with an entry is owned; `duplicates` is `None` when the count is not tracked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicates: Option<u32>,
}

impl OwnedEntry {
    pub fn with_duplicates(duplicates: u32) -> Self {
        Self {
            duplicates: Some(duplicates),
        }
    }
}

/// Owned entries in insertion order
///
/// Overwriting an existing card keeps its position; new cards are appended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnedCards {
    entries: Vec<(String, OwnedEntry)>,
    index: HashMap<String, usize>,
}

impl OwnedCards {
    pub fn has(&self, card_id: &str) -> bool {
        self.index.contains_key(card_id)
    }

    pub fn get(&self, card_id: &str) -> Option<&OwnedEntry> {
        self.index.get(card_id).map(|&pos| &self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OwnedEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    fn set(&mut self, card_id: &str, entry: OwnedEntry) {
        match self.index.get(card_id) {
            Some(&pos) => self.entries[pos].1 = entry,
            None => {
                self.index.insert(card_id.to_string(), self.entries.len());
                self.entries.push((card_id.to_string(), entry));
            }
        }
    }

    fn delete(&mut self, card_id: &str) -> bool {
        let Some(pos) = self.index.remove(card_id) else {
            return false;
        };
        self.entries.remove(pos);
        for (id, _) in &self.entries[pos..] {
            if let Some(i) = self.index.get_mut(id) {
                *i -= 1;
            }
        }
        true
    }
}

/// What a mutation did, passed to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    Set { card_id: String },
    Deleted { card_id: String },
}

impl StoreChange {
    pub fn card_id(&self) -> &str {
        match self {
            StoreChange::Set { card_id } | StoreChange::Deleted { card_id } => card_id,
        }
    }
}

type Listener = Box<dyn FnMut(&OwnedCards, &StoreChange)>;

/// Observable container of owned cards
#[derive(Default)]
pub struct OwnedCollectionStore {
    cards: OwnedCards,
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for OwnedCollectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnedCollectionStore")
            .field("cards", &self.cards)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl OwnedCollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from entries without notifying anyone
    pub fn from_entries(entries: impl IntoIterator<Item = (String, OwnedEntry)>) -> Self {
        let mut cards = OwnedCards::default();
        for (card_id, entry) in entries {
            cards.set(&card_id, entry);
        }
        Self {
            cards,
            listeners: Vec::new(),
        }
    }

    pub fn has(&self, card_id: &str) -> bool {
        self.cards.has(card_id)
    }

    pub fn get(&self, card_id: &str) -> Option<&OwnedEntry> {
        self.cards.get(card_id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OwnedEntry)> {
        self.cards.iter()
    }

    /// Current contents
    pub fn cards(&self) -> &OwnedCards {
        &self.cards
    }

    /// Insert or wholesale replace the entry for a card
    ///
    /// The duplicate count is not validated here.
    pub fn set(&mut self, card_id: &str, entry: OwnedEntry) {
        self.cards.set(card_id, entry);
        self.notify(StoreChange::Set {
            card_id: card_id.to_string(),
        });
    }

    /// Remove a card; deleting a card that is not owned changes nothing
    pub fn delete(&mut self, card_id: &str) {
        if self.cards.delete(card_id) {
            self.notify(StoreChange::Deleted {
                card_id: card_id.to_string(),
            });
        }
    }

    /// Register a listener called after every mutation
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&OwnedCards, &StoreChange) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, change: StoreChange) {
        log::trace!("Store change: {:?}", change);
        for listener in &mut self.listeners {
            listener(&self.cards, &change);
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
