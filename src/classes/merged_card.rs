use serde::{Deserialize, Serialize};

/// Card entry of the merged dataset consumed by the web front-end.
///
/// `Cost` and `CastingCost` always carry the same value; the front-end reads
/// both keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MergedCard {
    pub name: String,
    pub rarity: String,
    pub cost: String,
    pub gih_winrate: Option<f64>,
    pub expansion: String,
    pub casting_cost: String,
    pub image_url: String,
}

impl MergedCard {
    pub fn has_win_rate(&self) -> bool {
        self.gih_winrate.is_some()
    }
}

/// Top level document written to disk: `{"cards": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergedCardList {
    pub cards: Vec<MergedCard>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(gih_winrate: Option<f64>) -> MergedCard {
        MergedCard {
            name: "Brine Golem".to_string(),
            rarity: "Uncommon".to_string(),
            cost: "{3}{U}".to_string(),
            gih_winrate,
            expansion: "ECL".to_string(),
            casting_cost: "{3}{U}".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_serialized_key_order() {
        let json = serde_json::to_string(&sample(Some(55.0))).unwrap();
        assert_eq!(
            json,
            r#"{"Name":"Brine Golem","Rarity":"Uncommon","Cost":"{3}{U}","GihWinrate":55.0,"Expansion":"ECL","CastingCost":"{3}{U}","ImageUrl":""}"#
        );
    }

    #[test]
    fn test_absent_win_rate_serializes_as_null() {
        let value = serde_json::to_value(sample(None)).unwrap();
        assert!(value["GihWinrate"].is_null());
        assert!(!sample(None).has_win_rate());
    }

    #[test]
    fn test_zero_win_rate_is_not_null() {
        let value = serde_json::to_value(sample(Some(0.0))).unwrap();
        assert_eq!(value["GihWinrate"], serde_json::json!(0.0));
        assert!(sample(Some(0.0)).has_win_rate());
    }
}
