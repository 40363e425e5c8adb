//! Per-expansion views over the reference data and the owned collection

use crate::store::OwnedCollectionStore;
use std::collections::{HashMap, HashSet};
use tcgp_common::{Card, Expansion, Pack, PackCard, ReferenceData};

/// Rarity names counted towards the regular (non-rare) completion
pub const NON_RARE_RARITIES: [&str; 4] = ["C", "U", "R", "RR"];

/// The promo expansion only reports a total
pub const PROMO_EXPANSION_ID: &str = "PROMO-A";

/// An expansion with its resolved cards, pack rates and packs
#[derive(Debug, Clone)]
pub struct ExpansionView<'a> {
    pub expansion: &'a Expansion,
    /// Cards in the expansion's own order; ids without a card record are dropped
    pub cards: Vec<&'a Card>,
    /// Pack rate rows of packs belonging to this expansion
    pub pack_cards: Vec<&'a PackCard>,
    /// Packs of this expansion that have a logo
    pub packs: Vec<&'a Pack>,
}

/// Owned-card counts of one expansion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpansionProgress {
    pub owned_normal: usize,
    pub owned_rare: usize,
}

impl ExpansionProgress {
    pub fn total_owned(&self) -> usize {
        self.owned_normal + self.owned_rare
    }
}

/// Build views for all expansions in display order
///
/// Expansions with packs come first, then by release date (oldest first).
pub fn build_expansion_views(reference: &ReferenceData) -> Vec<ExpansionView<'_>> {
    let mut expansions: Vec<&Expansion> = reference.expansions.iter().collect();
    expansions.sort_by(|a, b| {
        b.has_packs().cmp(&a.has_packs()).then_with(|| {
            let date_a = a.release_date.as_deref().unwrap_or("");
            let date_b = b.release_date.as_deref().unwrap_or("");
            date_a.cmp(date_b)
        })
    });

    expansions
        .into_iter()
        .map(|expansion| ExpansionView {
            expansion,
            cards: expansion
                .cards
                .iter()
                .flatten()
                .filter_map(|id| reference.card(id))
                .collect(),
            pack_cards: reference
                .pack_cards
                .iter()
                .filter(|pc| {
                    pc.pack
                        .as_deref()
                        .is_some_and(|pack| expansion.contains_pack(pack))
                })
                .collect(),
            packs: reference
                .packs
                .iter()
                .filter(|pack| expansion.contains_pack(&pack.id) && pack.has_logo())
                .collect(),
        })
        .collect()
}

/// Whether a card counts as rare, judged by rarity name or raw rarity id
pub fn is_rare(reference: &ReferenceData, card: &Card) -> bool {
    !NON_RARE_RARITIES.contains(&reference.rarity_label(card))
}

impl<'a> ExpansionView<'a> {
    /// Heading shown for the expansion
    pub fn display_name(&self) -> &'a str {
        match self.expansion.id.as_str() {
            PROMO_EXPANSION_ID => self.expansion.id.as_str(),
            "A2" => "Space-Time Smackdown",
            _ => self
                .expansion
                .name
                .as_deref()
                .unwrap_or(self.expansion.id.as_str()),
        }
    }

    pub fn card_ids(&self) -> Vec<String> {
        self.cards.iter().map(|card| card.id.clone()).collect()
    }

    /// Count owned cards, split into regular and rare
    pub fn progress(
        &self,
        reference: &ReferenceData,
        store: &OwnedCollectionStore,
    ) -> ExpansionProgress {
        let mut progress = ExpansionProgress::default();
        for card in self.cards.iter().filter(|card| store.has(&card.id)) {
            if is_rare(reference, card) {
                progress.owned_rare += 1;
            } else {
                progress.owned_normal += 1;
            }
        }
        progress
    }

    /// Completion line, e.g. "12 / 286 - Rare: 3"
    pub fn summary(&self, progress: &ExpansionProgress) -> String {
        if self.expansion.id == PROMO_EXPANSION_ID {
            return progress.total_owned().to_string();
        }
        format!(
            "{} / {} - Rare: {}",
            progress.owned_normal,
            self.expansion.card_count.as_deref().unwrap_or("?"),
            progress.owned_rare
        )
    }

    /// Packs a card can be pulled from, via the last pack rate row naming it
    pub fn card_packs(&self, card_id: &str) -> Vec<&'a Pack> {
        let card_to_pack: HashMap<&str, &str> = self
            .pack_cards
            .iter()
            .filter_map(|pc| Some((pc.card.as_deref()?, pc.pack.as_deref()?)))
            .collect();
        match card_to_pack.get(card_id) {
            Some(pack_id) => self
                .packs
                .iter()
                .copied()
                .filter(|pack| pack.id == *pack_id)
                .collect(),
            None => Vec::new(),
        }
    }
}

/// An owned card with the expansion it is listed under
#[derive(Debug, Clone, Copy)]
pub struct MyCard<'a> {
    pub card: &'a Card,
    pub expansion: &'a Expansion,
}

/// All owned cards across expansions
///
/// A card listed in several expansions (a reprint) appears once, under the
/// last expansion that lists it, at that position.
pub fn my_cards<'a>(views: &[ExpansionView<'a>], store: &OwnedCollectionStore) -> Vec<MyCard<'a>> {
    let mut owned = Vec::new();
    for view in views {
        for &card in &view.cards {
            if store.has(&card.id) {
                owned.push(MyCard {
                    card,
                    expansion: view.expansion,
                });
            }
        }
    }

    let mut seen = HashSet::new();
    let mut deduped: Vec<MyCard<'a>> = owned
        .into_iter()
        .rev()
        .filter(|mine| seen.insert(mine.card.id.as_str()))
        .collect();
    deduped.reverse();
    deduped
}

#[cfg(test)]
#[path = "expansions_tests.rs"]
mod tests;
