//! Unit tests for reference record models

use super::*;

#[test]
fn test_slot_spec_counts_positions() {
    assert_eq!(SlotSpec::new("12345").slot_count(), 5);
    assert_eq!(SlotSpec::new("123").slot_count(), 3);
    assert_eq!(SlotSpec::new("4").slot_count(), 1);
    assert_eq!(SlotSpec::new("").slot_count(), 0);
}

#[test]
fn test_slot_spec_positions() {
    let positions: Vec<u32> = SlotSpec::new("45").positions().collect();
    assert_eq!(positions, vec![4, 5]);
}

#[test]
fn test_pack_card_weight() {
    let row = PackCard {
        id: "pc1".to_string(),
        percent: Some(2.5),
        slot: Some(SlotSpec::new("123")),
        ..Default::default()
    };
    assert!((row.weight() - 7.5).abs() < 1e-9);
}

#[test]
fn test_pack_card_weight_missing_fields() {
    let row = PackCard {
        id: "pc1".to_string(),
        ..Default::default()
    };
    assert_eq!(row.weight(), 0.0);
}

#[test]
fn test_card_deserializes_camel_case_fields() {
    let json = r#"{
        "id": "A1-001",
        "name": "Bulbasaur",
        "rarity": "r1",
        "setNum": 1,
        "cardType": "pokemon",
        "pokemonType": "grass",
        "isEX": false,
        "checksum": "abc",
        "updatedAt": "2024-10-30T00:00:00.000Z"
    }"#;

    let card: Card = serde_json::from_str(json).unwrap();
    assert_eq!(card.id, "A1-001");
    assert_eq!(card.set_num, Some(1));
    assert_eq!(card.card_type, Some(CardType::Pokemon));
    assert_eq!(card.pokemon_type.as_deref(), Some("grass"));
    assert_eq!(card.is_ex, Some(false));
    assert!(card.is_pokemon());
}

#[test]
fn test_card_accepts_nulls_and_unknown_enum_values() {
    let json = r#"{
        "id": "A1-219",
        "name": null,
        "cardType": "trainer",
        "trainerType": "stadium"
    }"#;

    let card: Card = serde_json::from_str(json).unwrap();
    assert_eq!(card.name, None);
    assert_eq!(card.trainer_type, Some(TrainerType::Other));
    assert!(!card.is_pokemon());
}

#[test]
fn test_trainer_type_spelling() {
    let t: TrainerType = serde_json::from_str(r#""pokemontool""#).unwrap();
    assert_eq!(t, TrainerType::PokemonTool);
    assert_eq!(t.as_str(), "pokemontool");
}

#[test]
fn test_pool_deserialization() {
    let row: PackCard =
        serde_json::from_str(r#"{"id": "x", "pool": "rare", "slot": "5", "percent": 0.5}"#)
            .unwrap();
    assert_eq!(row.pool, Some(Pool::Rare));
    assert_eq!(row.slot.as_ref().map(SlotSpec::as_str), Some("5"));
}

#[test]
fn test_short_name_strips_variant_suffix() {
    let card = Card {
        id: "c".to_string(),
        name: Some("Pikachu ex - Full Art".to_string()),
        ..Default::default()
    };
    assert_eq!(card.short_name(), "Pikachu ex");

    let unnamed = Card {
        id: "d".to_string(),
        ..Default::default()
    };
    assert_eq!(unnamed.short_name(), "");
}

#[test]
fn test_release_date_display() {
    let expansion = Expansion {
        id: "A1".to_string(),
        release_date: Some("2024-10-30T00:00:00.000Z".to_string()),
        ..Default::default()
    };
    assert_eq!(expansion.release_date_display().as_deref(), Some("2024-10-30"));

    let odd = Expansion {
        id: "A2".to_string(),
        release_date: Some("2025-01-29 sometime".to_string()),
        ..Default::default()
    };
    assert_eq!(odd.release_date_display().as_deref(), Some("2025-01-29"));

    let missing = Expansion::default();
    assert_eq!(missing.release_date_display(), None);
}

#[test]
fn test_expansion_pack_membership() {
    let expansion = Expansion {
        id: "A1".to_string(),
        packs: Some(vec!["p1".to_string(), "p2".to_string()]),
        ..Default::default()
    };
    assert!(expansion.has_packs());
    assert!(expansion.contains_pack("p2"));
    assert!(!expansion.contains_pack("p3"));

    let empty = Expansion {
        id: "P".to_string(),
        packs: Some(Vec::new()),
        ..Default::default()
    };
    assert!(!empty.has_packs());
}

#[test]
fn test_pack_has_logo() {
    let with_logo = Pack {
        id: "p1".to_string(),
        logo: Some("img1".to_string()),
        ..Default::default()
    };
    let without = Pack {
        id: "p2".to_string(),
        ..Default::default()
    };
    assert!(with_logo.has_logo());
    assert!(!without.has_logo());
}
