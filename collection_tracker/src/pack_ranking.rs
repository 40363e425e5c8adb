//! "Which pack to open next?" ranking
//!
//! For every pack, the normal-pool draw weight (percent times covered slots)
//! is split into weight landing on owned cards and weight landing on cards
//! not owned yet. Packs are ranked by the share of weight that yields a new card.

use crate::store::OwnedCollectionStore;
use std::collections::HashMap;
use tcgp_common::{Pack, PackCard, Pool, ReferenceData};

/// Normal-pool draw weight of one pack
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PackWeights {
    pub owned: f64,
    pub unowned: f64,
}

impl PackWeights {
    pub fn total(&self) -> f64 {
        self.owned + self.unowned
    }

    /// Percentage of the weight that would yield a new card, `None` without any weight
    pub fn new_card_percent(&self) -> Option<f64> {
        let total = self.total();
        if total > 0.0 && total.is_finite() {
            Some(100.0 * self.unowned / total)
        } else {
            None
        }
    }
}

/// A ranked pack
#[derive(Debug, Clone, Copy)]
pub struct PackRecommendation<'a> {
    pub pack: &'a Pack,
    pub new_card_percent: f64,
}

impl PackRecommendation<'_> {
    /// Display line, e.g. "6.8966% - Genetic Apex: Pikachu"
    pub fn line(&self) -> String {
        format!(
            "{}% - {}",
            format_percent(self.new_card_percent),
            self.pack.name.as_deref().unwrap_or(self.pack.id.as_str())
        )
    }
}

/// Accumulate owned / unowned weights per pack id over normal-pool rows
pub fn pack_weights<'a>(
    pack_cards: impl IntoIterator<Item = &'a PackCard>,
    store: &OwnedCollectionStore,
) -> HashMap<String, PackWeights> {
    let mut weights: HashMap<String, PackWeights> = HashMap::new();
    for row in pack_cards {
        if row.pool != Some(Pool::Normal) {
            continue;
        }
        let Some(pack_id) = row.pack.as_deref() else {
            continue;
        };
        let entry = weights.entry(pack_id.to_string()).or_default();
        let owned = row.card.as_deref().is_some_and(|card| store.has(card));
        if owned {
            entry.owned += row.weight();
        } else {
            entry.unowned += row.weight();
        }
    }
    weights
}

/// Rank all packs with a logo by chance of a new card, best first
///
/// Packs without any normal-pool weight are left out.
pub fn rank_packs<'a>(
    reference: &'a ReferenceData,
    store: &OwnedCollectionStore,
) -> Vec<PackRecommendation<'a>> {
    let weights = pack_weights(reference.pack_cards.iter(), store);

    let mut ranking: Vec<PackRecommendation<'a>> = reference
        .packs
        .iter()
        .filter(|pack| pack.has_logo())
        .filter_map(|pack| {
            let new_card_percent = weights.get(&pack.id)?.new_card_percent()?;
            Some(PackRecommendation {
                pack,
                new_card_percent,
            })
        })
        .collect();

    let excluded = reference.packs.iter().filter(|p| p.has_logo()).count() - ranking.len();
    if excluded > 0 {
        log::debug!("{} packs without draw weight left out of the ranking", excluded);
    }

    ranking.sort_by(|a, b| b.new_card_percent.total_cmp(&a.new_card_percent));
    ranking
}

/// Format a percentage with at most four decimals
///
/// Values that already fit are shown as-is ("50", "12.5"); longer ones are
/// rounded to four decimals ("6.8966").
pub fn format_percent(value: f64) -> String {
    let plain = value.to_string();
    match plain.split_once('.') {
        Some((_, decimals)) if decimals.len() > 4 => format!("{:.4}", value),
        _ => plain,
    }
}

#[cfg(test)]
#[path = "pack_ranking_tests.rs"]
mod tests;
