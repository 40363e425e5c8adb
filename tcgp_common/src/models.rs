use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Whether a card is a pokemon or a trainer card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Pokemon,
    Trainer,
    #[serde(other)]
    Other,
}

/// Trainer card sub-type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainerType {
    Supporter,
    Item,
    Fossil,
    PokemonTool,
    #[serde(other)]
    Other,
}

impl TrainerType {
    /// Returns the dataset spelling (e.g. "supporter", "pokemontool")
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainerType::Supporter => "supporter",
            TrainerType::Item => "item",
            TrainerType::Fossil => "fossil",
            TrainerType::PokemonTool => "pokemontool",
            TrainerType::Other => "",
        }
    }
}

/// Draw pool a pack rate applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pool {
    /// Regular draw slots
    Normal,
    /// Guaranteed-rare slot
    Rare,
    #[serde(other)]
    Other,
}

/// Which of the five pack positions a probability row covers, e.g. "12345" or "4"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotSpec(String);

impl SlotSpec {
    pub fn new(spec: impl Into<String>) -> Self {
        Self(spec.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Slot positions encoded by this specifier
    pub fn positions(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.chars().filter_map(|c| c.to_digit(10))
    }

    /// Number of slot positions this row's probability applies to
    pub fn slot_count(&self) -> usize {
        self.positions().count()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub slug: Option<String>,
    pub name: Option<String>,
    pub desc: Option<String>,
    pub rarity: Option<String>,
    pub obtain: Option<String>,
    pub expansion: Option<String>,
    pub set_num: Option<u32>,
    pub card_type: Option<CardType>,
    pub trainer_type: Option<TrainerType>,
    pub pokemon_type: Option<String>,
    pub weakness_type: Option<String>,
    pub stage: Option<u32>,
    pub hp: Option<u32>,
    pub retreat_cost: Option<u32>,
    #[serde(rename = "isEX")]
    pub is_ex: Option<bool>,
    pub packs: Option<Vec<String>>,
    pub pack_rates: Option<Vec<String>>,
}

impl Card {
    /// Card name without the " - variant" suffix
    pub fn short_name(&self) -> &str {
        let name = self.name.as_deref().unwrap_or("");
        name.split(" - ").next().unwrap_or(name)
    }

    pub fn is_pokemon(&self) -> bool {
        self.card_type == Some(CardType::Pokemon)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expansion {
    pub id: String,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub release_date: Option<String>,
    pub is_promo: Option<bool>,
    pub logo: Option<String>,
    pub packs: Option<Vec<String>>,
    pub cards: Option<Vec<String>>,
    pub card_count: Option<String>,
}

impl Expansion {
    pub fn has_packs(&self) -> bool {
        self.packs.as_ref().is_some_and(|p| !p.is_empty())
    }

    pub fn contains_pack(&self, pack_id: &str) -> bool {
        self.packs
            .as_ref()
            .is_some_and(|p| p.iter().any(|id| id == pack_id))
    }

    /// Release date as YYYY-MM-DD
    ///
    /// Falls back to the first ten characters when the timestamp is not RFC 3339.
    pub fn release_date_display(&self) -> Option<String> {
        let raw = self.release_date.as_deref()?;
        match DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => Some(dt.date_naive().format("%Y-%m-%d").to_string()),
            Err(_) => Some(raw.chars().take(10).collect()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pack {
    pub id: String,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub logo: Option<String>,
    pub expansion: Option<String>,
    pub cards: Option<Vec<String>>,
}

impl Pack {
    /// Packs without a logo are the odd "1 rare card guaranteed" packs
    pub fn has_logo(&self) -> bool {
        self.logo.as_ref().is_some_and(|l| !l.is_empty())
    }
}

/// Probability of pulling a card from a pack
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackCard {
    pub id: String,
    pub card: Option<String>,
    pub pack: Option<String>,
    pub pool: Option<Pool>,
    pub slot: Option<SlotSpec>,
    pub percent: Option<f64>,
}

impl PackCard {
    /// Expected draw weight: per-slot percent times the number of slots covered
    pub fn weight(&self) -> f64 {
        let slots = self.slot.as_ref().map(SlotSpec::slot_count).unwrap_or(0);
        self.percent.unwrap_or(0.0) * slots as f64
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rarity {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Type {
    pub id: String,
    pub name: Option<String>,
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
