use crate::dataset::{load_dataset_cached, Dataset, DatasetKind};
use crate::error::Result;
use crate::models::{Card, Expansion, Pack, PackCard, Rarity, Type};
use std::path::Path;
use std::sync::Arc;

/// The six reference datasets, immutable once loaded
///
/// Cross references between records are plain ids; every lookup returns an
/// `Option` so callers pick their own fallback for dangling ids.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub cards: Arc<Dataset<Card>>,
    pub expansions: Arc<Dataset<Expansion>>,
    pub packs: Arc<Dataset<Pack>>,
    pub pack_cards: Arc<Dataset<PackCard>>,
    pub rarities: Arc<Dataset<Rarity>>,
    pub types: Arc<Dataset<Type>>,
}

impl ReferenceData {
    /// Load all datasets from a directory through the process-wide cache
    pub fn load(data_dir: &Path) -> Result<Self> {
        log::info!("Loading reference data from {}", data_dir.display());
        Ok(Self {
            cards: load_dataset_cached(data_dir, DatasetKind::Cards)?,
            expansions: load_dataset_cached(data_dir, DatasetKind::Expansions)?,
            packs: load_dataset_cached(data_dir, DatasetKind::Packs)?,
            pack_cards: load_dataset_cached(data_dir, DatasetKind::PackCards)?,
            rarities: load_dataset_cached(data_dir, DatasetKind::Rarities)?,
            types: load_dataset_cached(data_dir, DatasetKind::Types)?,
        })
    }

    /// Build reference data from in-memory records
    pub fn from_records(
        cards: Vec<Card>,
        expansions: Vec<Expansion>,
        packs: Vec<Pack>,
        pack_cards: Vec<PackCard>,
        rarities: Vec<Rarity>,
        types: Vec<Type>,
    ) -> Self {
        Self {
            cards: Arc::new(Dataset::from_records(cards)),
            expansions: Arc::new(Dataset::from_records(expansions)),
            packs: Arc::new(Dataset::from_records(packs)),
            pack_cards: Arc::new(Dataset::from_records(pack_cards)),
            rarities: Arc::new(Dataset::from_records(rarities)),
            types: Arc::new(Dataset::from_records(types)),
        }
    }

    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.get(id)
    }

    pub fn pack(&self, id: &str) -> Option<&Pack> {
        self.packs.get(id)
    }

    /// Name of the rarity with the given id, if both exist
    pub fn rarity_name(&self, rarity_id: Option<&str>) -> Option<&str> {
        self.rarities.get(rarity_id?)?.name.as_deref()
    }

    /// Name of the type with the given id, if both exist
    pub fn type_name(&self, type_id: Option<&str>) -> Option<&str> {
        self.types.get(type_id?)?.name.as_deref()
    }

    /// Rarity label for display: the rarity name, else the raw rarity id
    pub fn rarity_label<'a>(&'a self, card: &'a Card) -> &'a str {
        self.rarity_name(card.rarity.as_deref())
            .or(card.rarity.as_deref())
            .unwrap_or("")
    }

    /// Type column for a card: pokemon type name, or the trainer sub-type
    pub fn card_type_label<'a>(&'a self, card: &'a Card) -> &'a str {
        if card.is_pokemon() {
            self.type_name(card.pokemon_type.as_deref()).unwrap_or("")
        } else {
            card.trainer_type.as_ref().map(|t| t.as_str()).unwrap_or("")
        }
    }
}

#[cfg(test)]
#[path = "reference_tests.rs"]
mod tests;
