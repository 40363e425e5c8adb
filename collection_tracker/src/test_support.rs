//! Shared fixtures for unit tests

use tcgp_common::{
    Card, CardType, Expansion, Pack, PackCard, Pool, Rarity, ReferenceData, SlotSpec, TrainerType,
    Type,
};

pub fn pokemon(id: &str, name: &str, rarity: &str, pokemon_type: &str) -> Card {
    Card {
        id: id.to_string(),
        name: Some(name.to_string()),
        rarity: Some(rarity.to_string()),
        card_type: Some(CardType::Pokemon),
        pokemon_type: Some(pokemon_type.to_string()),
        ..Default::default()
    }
}

pub fn trainer(id: &str, name: &str, rarity: &str, trainer_type: TrainerType) -> Card {
    Card {
        id: id.to_string(),
        name: Some(name.to_string()),
        rarity: Some(rarity.to_string()),
        card_type: Some(CardType::Trainer),
        trainer_type: Some(trainer_type),
        ..Default::default()
    }
}

pub fn expansion(id: &str, name: &str, release_date: &str, packs: &[&str], cards: &[&str]) -> Expansion {
    Expansion {
        id: id.to_string(),
        name: Some(name.to_string()),
        release_date: Some(release_date.to_string()),
        packs: Some(packs.iter().map(|s| s.to_string()).collect()),
        cards: Some(cards.iter().map(|s| s.to_string()).collect()),
        card_count: Some(cards.len().to_string()),
        ..Default::default()
    }
}

pub fn pack(id: &str, name: &str, expansion: &str, logo: bool) -> Pack {
    Pack {
        id: id.to_string(),
        name: Some(name.to_string()),
        expansion: Some(expansion.to_string()),
        logo: logo.then(|| format!("{}-logo", id)),
        ..Default::default()
    }
}

pub fn pack_card(id: &str, card: &str, pack: &str, pool: Pool, slot: &str, percent: f64) -> PackCard {
    PackCard {
        id: id.to_string(),
        card: Some(card.to_string()),
        pack: Some(pack.to_string()),
        pool: Some(pool),
        slot: Some(SlotSpec::new(slot)),
        percent: Some(percent),
    }
}

pub fn rarity(id: &str, name: &str) -> Rarity {
    Rarity {
        id: id.to_string(),
        name: Some(name.to_string()),
    }
}

pub fn card_type(id: &str, name: &str) -> Type {
    Type {
        id: id.to_string(),
        name: Some(name.to_string()),
    }
}

/// Two pack expansions sharing a reprinted card, plus a promo set
///
/// Expansions are listed out of display order on purpose.
pub fn sample_reference() -> ReferenceData {
    ReferenceData::from_records(
        vec![
            pokemon("A1-001", "Bulbasaur", "r-c", "t-grass"),
            pokemon("A1-002", "Charmander", "r-c", "t-fire"),
            pokemon("A1-003", "Charizard ex", "r-rr", "t-fire"),
            pokemon("A1-004", "Charizard ex - Full Art", "r-ar", "t-fire"),
            trainer("A1-005", "Professor's Research", "r-unknown", TrainerType::Supporter),
            trainer("OLD-AMBER", "Old Amber", "r-c", TrainerType::Fossil),
            pokemon("A2-001", "Dialga", "r-c", "t-missing"),
            pokemon("P-001", "Pikachu", "r-promo", "t-lightning"),
        ],
        vec![
            expansion("PROMO-A", "Promo-A", "2024-10-30T00:00:00.000Z", &[], &["P-001"]),
            expansion(
                "A2",
                "Space-Time",
                "2025-01-29T00:00:00.000Z",
                &["p-dialga"],
                &["A2-001", "OLD-AMBER"],
            ),
            expansion(
                "A1",
                "Genetic Apex",
                "2024-10-30T00:00:00.000Z",
                &["p-pika", "p-mewtwo", "p-rare"],
                &["A1-001", "A1-002", "A1-003", "A1-004", "A1-005", "OLD-AMBER", "A1-404"],
            ),
        ],
        vec![
            pack("p-pika", "Genetic Apex: Pikachu", "A1", true),
            pack("p-mewtwo", "Genetic Apex: Mewtwo", "A1", true),
            pack("p-rare", "Rare pack", "A1", false),
            pack("p-dialga", "Space-Time: Dialga", "A2", true),
            pack("p-empty", "Empty", "A2", true),
        ],
        vec![
            pack_card("pc1", "A1-001", "p-pika", Pool::Normal, "123", 10.0),
            pack_card("pc2", "A1-002", "p-pika", Pool::Normal, "12345", 5.0),
            pack_card("pc3", "A1-003", "p-pika", Pool::Rare, "5", 1.0),
            pack_card("pc4", "A1-003", "p-mewtwo", Pool::Normal, "4", 2.0),
            pack_card("pc5", "A1-002", "p-mewtwo", Pool::Normal, "123", 6.0),
            pack_card("pc6", "A2-001", "p-dialga", Pool::Normal, "12345", 4.0),
            pack_card("pc7", "A1-004", "p-rare", Pool::Normal, "12345", 1.0),
        ],
        vec![
            rarity("r-c", "C"),
            rarity("r-rr", "RR"),
            rarity("r-ar", "AR"),
        ],
        vec![card_type("t-fire", "Fire"), card_type("t-grass", "Grass")],
    )
}
