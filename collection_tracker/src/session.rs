//! A collection tracking session
//!
//! Ties the owned collection (with persistence attached), the expansion views
//! and one selection engine per expansion together, so a front end only has
//! to forward input events.

use crate::actions;
use crate::expansions::{build_expansion_views, my_cards, ExpansionProgress, ExpansionView, MyCard};
use crate::export::export_csv;
use crate::pack_ranking::{rank_packs, PackRecommendation};
use crate::persistence::{open_store, DurableSlot};
use crate::selection::{InteractionEvent, NavKey, SelectionEngine};
use crate::store::OwnedCollectionStore;
use std::rc::Rc;
use tcgp_common::{ReferenceData, Result};

const SHIFT_KEY: &str = "Shift";

pub struct CollectionSession<'a> {
    reference: &'a ReferenceData,
    views: Vec<ExpansionView<'a>>,
    engines: Vec<SelectionEngine<String>>,
    store: OwnedCollectionStore,
    shift_held: bool,
}

impl<'a> CollectionSession<'a> {
    pub fn new(reference: &'a ReferenceData, store: OwnedCollectionStore) -> Self {
        let views = build_expansion_views(reference);
        let engines = views
            .iter()
            .map(|view| SelectionEngine::new(view.card_ids()))
            .collect();
        log::info!(
            "Session started with {} expansions and {} owned cards",
            views.len(),
            store.len()
        );
        Self {
            reference,
            views,
            engines,
            store,
            shift_held: false,
        }
    }

    /// Start a session whose collection is loaded from and saved to `slot`
    pub fn open(reference: &'a ReferenceData, slot: Rc<dyn DurableSlot>) -> Self {
        Self::new(reference, open_store(slot))
    }

    pub fn reference(&self) -> &'a ReferenceData {
        self.reference
    }

    pub fn store(&self) -> &OwnedCollectionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut OwnedCollectionStore {
        &mut self.store
    }

    pub fn views(&self) -> &[ExpansionView<'a>] {
        &self.views
    }

    /// Index of the view showing an expansion
    pub fn view_index(&self, expansion_id: &str) -> Option<usize> {
        self.views
            .iter()
            .position(|view| view.expansion.id == expansion_id)
    }

    pub fn engine(&self, view: usize) -> Option<&SelectionEngine<String>> {
        self.engines.get(view)
    }

    pub fn engine_mut(&mut self, view: usize) -> Option<&mut SelectionEngine<String>> {
        self.engines.get_mut(view)
    }

    pub fn key_down(&mut self, key: &str) {
        if key == SHIFT_KEY {
            self.shift_held = true;
        }
    }

    pub fn key_up(&mut self, key: &str) {
        if key == SHIFT_KEY {
            self.shift_held = false;
        }
    }

    pub fn shift_held(&self) -> bool {
        self.shift_held
    }

    /// Whether a card is drawn as part of the pending shift range
    pub fn is_highlight_visible(&self, view: usize, index: usize) -> bool {
        self.shift_held
            && self
                .engines
                .get(view)
                .is_some_and(|engine| engine.is_shift_highlighted(index))
    }

    /// Activate (click) a card and toggle ownership of every card it resolves to
    ///
    /// Returns the ids of the resolved cards.
    pub fn activate_card(
        &mut self,
        view: usize,
        index: usize,
        event: InteractionEvent,
    ) -> Vec<String> {
        let Some(engine) = self.engines.get_mut(view) else {
            return Vec::new();
        };
        let Some(clicked_id) = engine.items().get(index).cloned() else {
            return Vec::new();
        };
        let targets = engine.on_activate(index, event);
        actions::toggle_owned(&mut self.store, &clicked_id, &targets);
        targets
    }

    /// Index keyboard focus moves to from a card
    pub fn focus_target(&self, view: usize, index: usize, key: NavKey) -> Option<usize> {
        self.engines.get(view)?.focus_target(index, key)
    }

    /// Apply duplicate-count input; invalid input is ignored
    pub fn edit_duplicates(&mut self, card_id: &str, input: &str) -> bool {
        actions::edit_duplicates(&mut self.store, card_id, input)
    }

    pub fn progress(&self, view: usize) -> Option<ExpansionProgress> {
        self.views
            .get(view)
            .map(|v| v.progress(self.reference, &self.store))
    }

    pub fn recommendations(&self) -> Vec<PackRecommendation<'a>> {
        rank_packs(self.reference, &self.store)
    }

    pub fn my_cards(&self) -> Vec<MyCard<'a>> {
        my_cards(&self.views, &self.store)
    }

    pub fn export_csv(&self) -> Result<String> {
        export_csv(&self.views, self.reference, &self.store)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
