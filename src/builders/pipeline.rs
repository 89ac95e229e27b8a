use log::{info, warn};

use super::card_merger::{merge_cards, MergeSummary};
use super::output_generator::write_cards;
use super::PipelineError;
use crate::classes::{MergedCardList, WinRateMap};
use crate::config::DraftStatsConfig;
use crate::providers::{CardCatalog, WinRateSource};
use crate::utils::DateRange;

/// Fetch the catalog and win rates, merge them and write the dataset.
///
/// A catalog failure (or an empty catalog) aborts the run before anything is
/// written. A win rate failure is logged and every card is written without a
/// win rate.
pub async fn run<C, W>(
    config: &DraftStatsConfig,
    catalog: &C,
    win_rate_source: &W,
    date_range: &DateRange,
) -> Result<MergeSummary, PipelineError>
where
    C: CardCatalog + ?Sized,
    W: WinRateSource + ?Sized,
{
    info!(
        "Fetching {} data for date range: {}",
        config.set_code, date_range
    );

    let cards = catalog
        .fetch_set_cards(&config.set_code)
        .await
        .map_err(PipelineError::Catalog)?;
    if cards.is_empty() {
        return Err(PipelineError::EmptyCatalog(config.set_code.clone()));
    }

    let win_rates = match win_rate_source
        .fetch_win_rates(&config.set_code, date_range)
        .await
    {
        Ok(win_rates) => win_rates,
        Err(e) => {
            warn!("Error fetching from 17Lands: {}; continuing without winrate data", e);
            WinRateMap::new()
        }
    };

    let outcome = merge_cards(&cards, &win_rates, &config.set_code);
    let summary = outcome.summary;
    write_cards(
        &config.output_file,
        &MergedCardList {
            cards: outcome.cards,
        },
    )?;

    info!("Cards with winrate data: {}", summary.with_win_rate);
    info!("Cards without winrate data: {}", summary.without_win_rate);

    Ok(summary)
}
