//! CSV export of the whole collection

use crate::expansions::ExpansionView;
use crate::store::OwnedCollectionStore;
use csv::{Terminator, WriterBuilder};
use std::path::Path;
use tcgp_common::{CollectionError, ReferenceData, Result};

/// File name offered for the export download
pub const EXPORT_FILE_NAME: &str = "pokemoncollection.csv";

pub const EXPORT_HEADER: [&str; 6] = ["id", "name", "rarity", "type", "owned", "duplicates"];

/// Render every card of every expansion, in display order, as CSV
///
/// Cards are listed whether owned or not; `owned` is "1" or empty and
/// `duplicates` is empty when untracked.
pub fn export_csv(
    views: &[ExpansionView<'_>],
    reference: &ReferenceData,
    store: &OwnedCollectionStore,
) -> Result<String> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(vec![]);

    wtr.write_record(EXPORT_HEADER)?;

    let mut rows = 0;
    for view in views {
        for card in &view.cards {
            let entry = store.get(&card.id);
            let duplicates = entry
                .and_then(|e| e.duplicates)
                .map(|d| d.to_string())
                .unwrap_or_default();
            wtr.write_record([
                card.id.as_str(),
                card.name.as_deref().unwrap_or(""),
                reference.rarity_name(card.rarity.as_deref()).unwrap_or(""),
                reference.card_type_label(card),
                if entry.is_some() { "1" } else { "" },
                duplicates.as_str(),
            ])?;
            rows += 1;
        }
    }

    let data = wtr
        .into_inner()
        .map_err(|e| CollectionError::Export(e.to_string()))?;
    log::info!("Exported {} cards ({} owned)", rows, store.len());
    String::from_utf8(data).map_err(|e| CollectionError::Export(e.to_string()))
}

/// Write the export to a file
pub fn write_export(
    path: &Path,
    views: &[ExpansionView<'_>],
    reference: &ReferenceData,
    store: &OwnedCollectionStore,
) -> Result<()> {
    let content = export_csv(views, reference, store)?;
    std::fs::write(path, content)?;
    log::info!("Wrote collection export to {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
