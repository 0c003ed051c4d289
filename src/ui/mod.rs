/// User interface module
///
/// - Item cards, grids and headers (card.rs)
/// - Decoded photo handles (photos.rs)
/// - The four screens (screens.rs)

pub mod card;
pub mod photos;
pub mod screens;
