// Data classes for the records read from the remote services and the merged output
pub mod card_rating;
pub mod merged_card;
pub mod scryfall_card;

pub use card_rating::{CardRatingRow, WinRateMap};
pub use merged_card::{MergedCard, MergedCardList};
pub use scryfall_card::{ScryfallCard, ScryfallCardFace, ScryfallImageUris, ScryfallListPage};
