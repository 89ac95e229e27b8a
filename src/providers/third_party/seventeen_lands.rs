use async_trait::async_trait;
use log::info;
use std::collections::HashMap;

use crate::classes::{CardRatingRow, WinRateMap};
use crate::config::DraftStatsConfig;
use crate::providers::{BaseProvider, ProviderResult, WinRateSource};
use crate::utils::DateRange;

/// Win rate statistics from the 17Lands card ratings endpoint
pub struct SeventeenLandsProvider {
    base: BaseProvider,
    api_url: String,
    event_type: String,
}

impl SeventeenLandsProvider {
    const CLASS_ID: &'static str = "17l";

    pub fn new(config: &DraftStatsConfig) -> Self {
        let mut headers = HashMap::new();
        headers.insert("User-Agent".to_string(), config.user_agent.clone());
        let base = BaseProvider::new(Self::CLASS_ID.to_string(), headers, config.request_timeout());

        Self {
            base,
            api_url: config.seventeen_lands_api.clone(),
            event_type: config.event_type.clone(),
        }
    }

    /// Download card ratings for one set and date window and fold them into a
    /// name to win rate map
    pub async fn download_win_rates(
        &self,
        set_code: &str,
        date_range: &DateRange,
    ) -> ProviderResult<WinRateMap> {
        info!(
            "Fetching 17Lands data for {} from {}...",
            set_code, date_range
        );

        let start_date = date_range.start_str();
        let end_date = date_range.end_str();
        let params = [
            ("expansion", set_code),
            ("event_type", self.event_type.as_str()),
            ("start_date", start_date.as_str()),
            ("end_date", end_date.as_str()),
        ];

        let rows: Vec<CardRatingRow> = self.base.download_json(&self.api_url, Some(&params[..])).await?;
        let win_rates = build_win_rate_map(rows);

        info!("Found winrate data for {} cards", win_rates.len());
        Ok(win_rates)
    }
}

/// Keep rows that carry both a name and a GIH win rate, rescaled to a
/// percentage. A repeated name keeps the last row.
pub fn build_win_rate_map<I>(rows: I) -> WinRateMap
where
    I: IntoIterator<Item = CardRatingRow>,
{
    rows.into_iter()
        .filter_map(|row| {
            row.gih_win_rate_percent()
                .map(|(name, rate)| (name.to_string(), rate))
        })
        .collect()
}

#[async_trait]
impl WinRateSource for SeventeenLandsProvider {
    async fn fetch_win_rates(
        &self,
        set_code: &str,
        date_range: &DateRange,
    ) -> ProviderResult<WinRateMap> {
        self.download_win_rates(set_code, date_range).await
    }
}
