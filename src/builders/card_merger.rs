use log::{debug, info};
use std::collections::HashSet;

use super::card_fields::{get_image_url, get_mana_cost, get_rarity};
use crate::classes::{MergedCard, ScryfallCard, WinRateMap};

/// Layouts that are not draftable cards
pub const EXCLUDED_LAYOUTS: &[&str] = &["token", "emblem", "art_series"];

/// Counts reported after a merge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub total: usize,
    pub with_win_rate: usize,
    pub without_win_rate: usize,
    pub duplicates_skipped: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeOutcome {
    pub cards: Vec<MergedCard>,
    pub summary: MergeSummary,
}

pub fn is_excluded_layout(card: &ScryfallCard) -> bool {
    card.layout
        .as_deref()
        .is_some_and(|layout| EXCLUDED_LAYOUTS.contains(&layout))
}

/// Build the output entry for a single catalog card
pub fn build_merged_card(card: &ScryfallCard, win_rates: &WinRateMap, set_code: &str) -> MergedCard {
    let cost = get_mana_cost(card);
    MergedCard {
        name: card.name.clone(),
        rarity: get_rarity(card),
        cost: cost.clone(),
        gih_winrate: win_rates.get(&card.name).copied(),
        expansion: set_code.to_string(),
        casting_cost: cost,
        image_url: get_image_url(card),
    }
}

/// Join catalog cards with win rates by name.
///
/// Cards keep fetch order until the final stable sort by name. When several
/// prints share a name, the first one fetched is kept.
pub fn merge_cards(cards: &[ScryfallCard], win_rates: &WinRateMap, set_code: &str) -> MergeOutcome {
    info!("Merging data...");

    let mut seen: HashSet<&str> = HashSet::new();
    let mut merged = Vec::with_capacity(cards.len());
    let mut summary = MergeSummary::default();

    for card in cards {
        if is_excluded_layout(card) {
            continue;
        }
        if !seen.insert(card.name.as_str()) {
            summary.duplicates_skipped += 1;
            debug!("Skipping duplicate print of {}", card.name);
            continue;
        }
        merged.push(build_merged_card(card, win_rates, set_code));
    }

    merged.sort_by(|a, b| a.name.cmp(&b.name));

    summary.total = merged.len();
    summary.with_win_rate = merged.iter().filter(|card| card.has_win_rate()).count();
    summary.without_win_rate = summary.total - summary.with_win_rate;

    info!(
        "Merged {} cards ({} with winrate data)",
        summary.total, summary.with_win_rate
    );
    if summary.duplicates_skipped > 0 {
        info!("Skipped {} duplicate prints", summary.duplicates_skipped);
    }

    MergeOutcome {
        cards: merged,
        summary,
    }
}
