//! Shared types for TCG Pocket collection tracking
//!
//! Reference records (cards, expansions, packs, pack rates, rarities, types),
//! the dataset loader with its process-wide cache, and the error type used by
//! the collection tracker.

pub mod dataset;
pub mod error;
pub mod models;
pub mod reference;

pub use dataset::{load_dataset_cached, parse_dataset, Dataset, DatasetKind, Record};
pub use error::{CollectionError, Result};
pub use models::{
    Card, CardType, Expansion, Pack, PackCard, Pool, Rarity, SlotSpec, TrainerType, Type,
};
pub use reference::ReferenceData;
