//! Builders module - normalization, merge and output of the card dataset

use std::path::PathBuf;
use thiserror::Error;

use crate::providers::ProviderError;

pub mod card_fields;
pub mod card_merger;
pub mod output_generator;
pub mod pipeline;

pub use card_fields::{capitalize_first, get_image_url, get_mana_cost, get_rarity};
pub use card_merger::{build_merged_card, merge_cards, MergeOutcome, MergeSummary, EXCLUDED_LAYOUTS};
pub use output_generator::write_cards;

/// Errors that stop a run
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to fetch Scryfall data: {0}")]
    Catalog(#[source] ProviderError),
    #[error("Scryfall returned no cards for set {0}")]
    EmptyCatalog(String),
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
