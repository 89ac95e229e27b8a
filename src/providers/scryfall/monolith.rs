use async_trait::async_trait;
use log::{debug, info};

use super::sf_utils;
use crate::classes::{ScryfallCard, ScryfallListPage};
use crate::config::DraftStatsConfig;
use crate::providers::{BaseProvider, CardCatalog, ProviderResult, RateLimiter};

/// Card catalog backed by the Scryfall search API
pub struct ScryfallProvider {
    base: BaseProvider,
    rate_limiter: RateLimiter,
    api_url: String,
}

impl ScryfallProvider {
    const CLASS_ID: &'static str = "sf";
    const CARDS_SEARCH_PATH: &'static str = "/cards/search";

    pub fn new(config: &DraftStatsConfig) -> Self {
        let headers = sf_utils::build_http_header(config);
        let base = BaseProvider::new(Self::CLASS_ID.to_string(), headers, config.request_timeout());

        Self {
            base,
            rate_limiter: RateLimiter::new(config.page_delay()),
            api_url: config.scryfall_api.trim_end_matches('/').to_string(),
        }
    }

    pub fn search_url(&self) -> String {
        format!("{}{}", self.api_url, Self::CARDS_SEARCH_PATH)
    }

    /// Download every page of a paginated list endpoint.
    ///
    /// `params` only apply to the first request: each `next_page` URL already
    /// carries the full query. Any failed page aborts the whole download.
    pub async fn download_all_pages(
        &self,
        starting_url: &str,
        params: Option<&[(&str, &str)]>,
    ) -> ProviderResult<Vec<ScryfallCard>> {
        let mut all_cards = Vec::new();
        let mut next_url = Some(starting_url.to_string());
        let mut params = params;
        let mut pages_downloaded = 0usize;

        while let Some(url) = next_url.take() {
            self.rate_limiter.wait_if_needed().await;

            let page: ScryfallListPage = self.base.download_json(&url, params.take()).await?;
            pages_downloaded += 1;
            debug!(
                "Scryfall page {} returned {} cards (has_more: {})",
                pages_downloaded,
                page.data.len(),
                page.has_more
            );

            all_cards.extend(page.data);

            // Go to the next page, if it exists
            next_url = page.next_page;
        }

        Ok(all_cards)
    }

    /// Download every print of `set_code`, in the order Scryfall returns them
    pub async fn download_cards(&self, set_code: &str) -> ProviderResult<Vec<ScryfallCard>> {
        info!("Fetching cards from Scryfall for set {}...", set_code);

        let query = sf_utils::set_search_query(set_code);
        let params = [("q", query.as_str()), ("unique", "prints")];
        let cards = self.download_all_pages(&self.search_url(), Some(&params[..])).await?;

        info!("Found {} cards from Scryfall", cards.len());
        Ok(cards)
    }
}

#[async_trait]
impl CardCatalog for ScryfallProvider {
    async fn fetch_set_cards(&self, set_code: &str) -> ProviderResult<Vec<ScryfallCard>> {
        self.download_cards(set_code).await
    }
}
