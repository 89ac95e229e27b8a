use async_trait::async_trait;
use thiserror::Error;

use crate::classes::{ScryfallCard, WinRateMap};
use crate::utils::DateRange;

/// Provider error types
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("HTTP error {status} from {url}")]
    HttpStatus { status: u16, url: String },
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

// Core provider modules
pub mod provider_base;
pub mod third_party;

// Subdirectory provider modules
pub mod scryfall;

pub use provider_base::{BaseProvider, RateLimiter};
pub use scryfall::monolith::ScryfallProvider;
pub use third_party::seventeen_lands::SeventeenLandsProvider;

/// Source of the card catalog for a set
#[async_trait]
pub trait CardCatalog: Send + Sync {
    /// Fetch every card of `set_code`, following pagination to the last page
    async fn fetch_set_cards(&self, set_code: &str) -> ProviderResult<Vec<ScryfallCard>>;
}

/// Source of per-card win rate statistics
#[async_trait]
pub trait WinRateSource: Send + Sync {
    /// Fetch the games-in-hand win rate (percentage) per card name
    async fn fetch_win_rates(
        &self,
        set_code: &str,
        date_range: &DateRange,
    ) -> ProviderResult<WinRateMap>;
}
