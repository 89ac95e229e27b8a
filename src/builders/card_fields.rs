// Field extraction for Scryfall card records, single- and multi-faced alike
use crate::classes::ScryfallCard;

/// Rarity assumed when a record carries none
pub const DEFAULT_RARITY: &str = "common";

/// Mana cost of a card. Multi-faced cards use the front face.
pub fn get_mana_cost(card: &ScryfallCard) -> String {
    if let Some(faces) = &card.card_faces {
        return faces
            .first()
            .and_then(|face| face.mana_cost.clone())
            .unwrap_or_default();
    }
    card.mana_cost.clone().unwrap_or_default()
}

/// Display rarity: first letter upper-cased, the rest untouched
pub fn get_rarity(card: &ScryfallCard) -> String {
    capitalize_first(card.rarity.as_deref().unwrap_or(DEFAULT_RARITY))
}

/// Image URL, preferring the card's own `normal` then `small` image, then the
/// front face's `normal` image. Empty when none is available.
pub fn get_image_url(card: &ScryfallCard) -> String {
    if let Some(uris) = &card.image_uris {
        return uris
            .normal
            .clone()
            .or_else(|| uris.small.clone())
            .unwrap_or_default();
    }

    if card.card_faces.is_some() {
        return card
            .front_face()
            .and_then(|face| face.image_uris.as_ref())
            .and_then(|uris| uris.normal.clone())
            .unwrap_or_default();
    }

    String::new()
}

pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
