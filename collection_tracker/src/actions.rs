//! User actions applied to the owned collection

use crate::store::{OwnedCollectionStore, OwnedEntry, MAX_DUPLICATES};

/// Toggle ownership of the cards resolved by one activation
///
/// The direction follows the clicked card: if it is owned, every target is
/// removed; otherwise every target not yet owned is added with an untracked
/// duplicate count. Already-owned targets keep their entry.
pub fn toggle_owned(store: &mut OwnedCollectionStore, clicked_id: &str, targets: &[String]) {
    let clicked_owned = store.has(clicked_id);
    for card_id in targets {
        if clicked_owned {
            store.delete(card_id);
        } else if !store.has(card_id) {
            store.set(card_id, OwnedEntry::default());
        }
    }
    log::debug!(
        "{} {} card(s) from {}",
        if clicked_owned { "Removed" } else { "Added" },
        targets.len(),
        clicked_id
    );
}

/// Mark cards as owned, leaving already-owned cards untouched
pub fn mark_owned(store: &mut OwnedCollectionStore, card_ids: &[String]) {
    for card_id in card_ids {
        if !store.has(card_id) {
            store.set(card_id, OwnedEntry::default());
        }
    }
}

/// Mark cards as not owned
pub fn mark_unowned(store: &mut OwnedCollectionStore, card_ids: &[String]) {
    for card_id in card_ids {
        store.delete(card_id);
    }
}

/// A validated duplicate-count edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateEdit {
    /// Stop tracking the count (the card stays owned)
    Clear,
    Set(u32),
}

/// Parse duplicate-count input
///
/// Blank input clears the count. Numbers must be whole and within 0..=1000;
/// anything else is rejected.
pub fn parse_duplicates(input: &str) -> Option<DuplicateEdit> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(DuplicateEdit::Clear);
    }
    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if !(0.0..=MAX_DUPLICATES as f64).contains(&value) {
        return None;
    }
    Some(DuplicateEdit::Set(value as u32))
}

/// Apply duplicate-count input to a card
///
/// Editing marks the card as owned. Invalid input is discarded and the
/// collection is left unchanged; returns whether the edit was applied.
pub fn edit_duplicates(store: &mut OwnedCollectionStore, card_id: &str, input: &str) -> bool {
    let Some(edit) = parse_duplicates(input) else {
        log::debug!("Ignoring invalid duplicate count {:?} for {}", input, card_id);
        return false;
    };
    let mut entry = store.get(card_id).cloned().unwrap_or_default();
    entry.duplicates = match edit {
        DuplicateEdit::Clear => None,
        DuplicateEdit::Set(count) => Some(count),
    };
    store.set(card_id, entry);
    true
}

#[cfg(test)]
#[path = "actions_tests.rs"]
mod tests;
