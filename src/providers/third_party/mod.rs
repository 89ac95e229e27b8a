// Third-party data providers
pub mod seventeen_lands;

pub use seventeen_lands::SeventeenLandsProvider;
