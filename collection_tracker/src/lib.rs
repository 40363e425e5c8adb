//! TCG Pocket collection tracker
//!
//! Tracks owned cards (with duplicate counts) against the static reference
//! data and derives completion counts, pack recommendations and a CSV export.

pub mod actions;
pub mod expansions;
pub mod export;
pub mod pack_ranking;
pub mod persistence;
pub mod selection;
pub mod session;
pub mod store;

// Re-export commonly used items
pub use actions::{edit_duplicates, parse_duplicates, toggle_owned, DuplicateEdit};
pub use expansions::{build_expansion_views, my_cards, ExpansionProgress, ExpansionView, MyCard};
pub use export::{export_csv, write_export, EXPORT_FILE_NAME};
pub use pack_ranking::{format_percent, rank_packs, PackRecommendation, PackWeights};
pub use persistence::{load_store, open_store, DurableSlot, FileSlot, MemorySlot, STORAGE_KEY};
pub use selection::{InteractionEvent, NavKey, SelectionEngine, SelectionState, GRID_COLUMNS};
pub use session::CollectionSession;
pub use store::{OwnedCollectionStore, OwnedEntry, StoreChange};

#[cfg(test)]
mod test_support;
