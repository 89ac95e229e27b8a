//! Merge Scryfall card data for one set with 17Lands games-in-hand win rates
//! and write the result as a JSON dataset for the draft front-end.

pub mod builders;
pub mod classes;
pub mod config;
pub mod providers;
pub mod utils;

pub use builders::{merge_cards, pipeline, write_cards, MergeOutcome, MergeSummary, PipelineError};
pub use classes::{MergedCard, MergedCardList, ScryfallCard, WinRateMap};
pub use crate::config::DraftStatsConfig;
pub use providers::{
    CardCatalog, ProviderError, ProviderResult, ScryfallProvider, SeventeenLandsProvider,
    WinRateSource,
};
pub use utils::DateRange;
