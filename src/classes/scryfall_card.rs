use serde::Deserialize;

/// Image URIs attached to a Scryfall card or card face
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScryfallImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
}

/// One face of a multi-faced card (split, adventure, transform, modal DFC)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScryfallCardFace {
    pub name: Option<String>,
    pub mana_cost: Option<String>,
    pub image_uris: Option<ScryfallImageUris>,
}

/// Card record as returned by the Scryfall search endpoint.
///
/// Only the fields the merge reads are modelled; everything else in the
/// payload is ignored during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScryfallCard {
    pub name: String,
    pub rarity: Option<String>,
    pub mana_cost: Option<String>,
    pub layout: Option<String>,
    pub card_faces: Option<Vec<ScryfallCardFace>>,
    pub image_uris: Option<ScryfallImageUris>,
}

impl ScryfallCard {
    /// First face of a multi-faced card, if the card has any faces
    pub fn front_face(&self) -> Option<&ScryfallCardFace> {
        self.card_faces.as_ref().and_then(|faces| faces.first())
    }
}

/// One page of a Scryfall list response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScryfallListPage {
    #[serde(default)]
    pub data: Vec<ScryfallCard>,

    #[serde(default)]
    pub has_more: bool,

    pub next_page: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_single_faced_card() {
        let card: ScryfallCard = serde_json::from_value(json!({
            "object": "card",
            "name": "Brine Golem",
            "rarity": "uncommon",
            "mana_cost": "{3}{U}",
            "layout": "normal",
            "image_uris": {
                "small": "https://cards.example/small/brine.jpg",
                "normal": "https://cards.example/normal/brine.jpg"
            },
            "collector_number": "42"
        }))
        .unwrap();

        assert_eq!(card.name, "Brine Golem");
        assert_eq!(card.rarity.as_deref(), Some("uncommon"));
        assert_eq!(card.mana_cost.as_deref(), Some("{3}{U}"));
        assert!(card.card_faces.is_none());
        assert_eq!(
            card.image_uris.unwrap().normal.as_deref(),
            Some("https://cards.example/normal/brine.jpg")
        );
    }

    #[test]
    fn test_deserialize_multi_faced_card() {
        let card: ScryfallCard = serde_json::from_value(json!({
            "name": "Tide Caller // Undertow",
            "layout": "transform",
            "rarity": "rare",
            "card_faces": [
                { "name": "Tide Caller", "mana_cost": "{1}{U}", "image_uris": { "normal": "http://x/front.png" } },
                { "name": "Undertow", "mana_cost": "" }
            ]
        }))
        .unwrap();

        let front = card.front_face().unwrap();
        assert_eq!(front.mana_cost.as_deref(), Some("{1}{U}"));
        assert!(card.image_uris.is_none());
        assert_eq!(card.card_faces.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_unread_image_sizes_are_ignored() {
        let uris: ScryfallImageUris = serde_json::from_value(json!({
            "small": "http://x/s.jpg",
            "large": "http://x/l.jpg",
            "png": "http://x/p.png",
            "art_crop": "http://x/a.jpg"
        }))
        .unwrap();
        assert_eq!(
            uris,
            ScryfallImageUris {
                small: Some("http://x/s.jpg".to_string()),
                normal: None,
            }
        );
    }

    #[test]
    fn test_null_fields_are_absent() {
        let card: ScryfallCard =
            serde_json::from_value(json!({ "name": "Plains", "mana_cost": null })).unwrap();
        assert!(card.mana_cost.is_none());
        assert!(card.front_face().is_none());
    }

    #[test]
    fn test_deserialize_list_page() {
        let page: ScryfallListPage = serde_json::from_value(json!({
            "object": "list",
            "total_cards": 2,
            "has_more": true,
            "next_page": "https://api.scryfall.com/cards/search?page=2",
            "data": [{ "name": "A" }, { "name": "B" }]
        }))
        .unwrap();

        assert!(page.has_more);
        assert_eq!(page.data.len(), 2);
        assert!(page.next_page.is_some());

        let last: ScryfallListPage =
            serde_json::from_value(json!({ "object": "list", "has_more": false, "data": [] }))
                .unwrap();
        assert!(last.next_page.is_none());
    }
}
