//! TCG Pocket collection tracker
//!
//! Command line front end: shows expansion progress and pack recommendations,
//! edits the owned collection and exports it as CSV.

use clap::{Parser, Subcommand};
use collection_tracker::{actions, write_export, CollectionSession, FileSlot, EXPORT_FILE_NAME};
use std::path::PathBuf;
use std::rc::Rc;
use tcgp_common::{ReferenceData, Result};

/// Track a TCG Pocket card collection
#[derive(Parser, Debug)]
#[command(name = "collection_tracker")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing the reference data exports (cards.json, packs.json, ...)
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Directory holding the saved collection [default: ~/.local/share/tcgp_collection]
    #[arg(short, long)]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show owned / total counts per expansion
    Progress,
    /// Rank packs by chance of pulling a card you do not own yet
    Recommend,
    /// List owned cards across all expansions
    MyCards,
    /// Export the collection as CSV
    Export {
        /// Output file
        #[arg(short, long, default_value = EXPORT_FILE_NAME)]
        out: PathBuf,
    },
    /// Mark cards as owned
    Mark { card_ids: Vec<String> },
    /// Mark cards as not owned
    Unmark { card_ids: Vec<String> },
    /// Set the duplicate count of a card (empty value stops tracking it)
    Duplicates { card_id: String, value: String },
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=collection_tracker=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        log::error!("Application error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let reference = ReferenceData::load(&args.data_dir)?;
    let state_dir = args.state_dir.unwrap_or_else(FileSlot::default_dir);
    log::info!("State directory: {}", state_dir.display());

    let mut session = CollectionSession::open(&reference, Rc::new(FileSlot::new(state_dir)));

    match args.command {
        Command::Progress => {
            for (i, view) in session.views().iter().enumerate() {
                let Some(progress) = session.progress(i) else {
                    continue;
                };
                let released = view.expansion.release_date_display().unwrap_or_default();
                println!(
                    "{} (released {}): {}",
                    view.display_name(),
                    released,
                    view.summary(&progress)
                );
            }
        }
        Command::Recommend => {
            println!("Which pack to open next?");
            for recommendation in session.recommendations() {
                println!("{}", recommendation.line());
            }
        }
        Command::MyCards => {
            for mine in session.my_cards() {
                let entry = session.store().get(&mine.card.id);
                let duplicates = entry
                    .and_then(|e| e.duplicates)
                    .map(|d| format!(" x{}", d))
                    .unwrap_or_default();
                println!(
                    "{} {} {} [{}]{}",
                    mine.card.set_num.map(|n| n.to_string()).unwrap_or_default(),
                    reference.rarity_label(mine.card),
                    mine.card.short_name(),
                    mine.expansion.id,
                    duplicates
                );
            }
        }
        Command::Export { out } => {
            write_export(&out, session.views(), &reference, session.store())?;
            println!("Exported collection to {}", out.display());
        }
        Command::Mark { card_ids } => {
            let known = known_cards(&reference, card_ids);
            actions::mark_owned(session.store_mut(), &known);
            println!("{} cards owned", session.store().len());
        }
        Command::Unmark { card_ids } => {
            actions::mark_unowned(session.store_mut(), &card_ids);
            println!("{} cards owned", session.store().len());
        }
        Command::Duplicates { card_id, value } => {
            if session.edit_duplicates(&card_id, &value) {
                println!("Updated {}", card_id);
            } else {
                log::warn!("Ignored duplicate count {:?} for {}", value, card_id);
            }
        }
    }

    Ok(())
}

/// Drop ids that are not in the card dataset
fn known_cards(reference: &ReferenceData, card_ids: Vec<String>) -> Vec<String> {
    card_ids
        .into_iter()
        .filter(|id| {
            let known = reference.card(id).is_some();
            if !known {
                log::warn!("Unknown card id {}, skipping", id);
            }
            known
        })
        .collect()
}
