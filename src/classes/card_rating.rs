use serde::Deserialize;
use std::collections::HashMap;

/// Card name to games-in-hand win rate, as a percentage in [0, 100]
pub type WinRateMap = HashMap<String, f64>;

/// A single row of the 17Lands card ratings response.
///
/// The endpoint returns many more metrics per card; only the name and the
/// "ever drawn" (games in hand) win rate are read.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CardRatingRow {
    pub name: Option<String>,
    pub ever_drawn_win_rate: Option<f64>,
}

impl CardRatingRow {
    /// Name and win rate percentage, or `None` when either is missing
    pub fn gih_win_rate_percent(&self) -> Option<(&str, f64)> {
        let name = self.name.as_deref().filter(|name| !name.is_empty())?;
        let rate = self.ever_drawn_win_rate?;
        Some((name, rate * 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_with_metric() {
        let row: CardRatingRow = serde_json::from_value(json!({
            "name": "Brine Golem",
            "color": "U",
            "rarity": "uncommon",
            "ever_drawn_win_rate": 0.55,
            "ever_drawn_game_count": 1200
        }))
        .unwrap();

        let (name, rate) = row.gih_win_rate_percent().unwrap();
        assert_eq!(name, "Brine Golem");
        assert!((rate - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_row_missing_metric_or_name() {
        let no_metric: CardRatingRow =
            serde_json::from_value(json!({ "name": "Aether Sprite", "ever_drawn_win_rate": null }))
                .unwrap();
        assert!(no_metric.gih_win_rate_percent().is_none());

        let no_name: CardRatingRow =
            serde_json::from_value(json!({ "ever_drawn_win_rate": 0.6 })).unwrap();
        assert!(no_name.gih_win_rate_percent().is_none());
    }

    #[test]
    fn test_zero_win_rate_is_kept() {
        let row = CardRatingRow {
            name: Some("Dud".to_string()),
            ever_drawn_win_rate: Some(0.0),
        };
        assert_eq!(row.gih_win_rate_percent(), Some(("Dud", 0.0)));
    }
}
