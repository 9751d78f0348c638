/// UI module
///
/// View construction for the two screens and their shared pieces:
/// - Catalog entry cards (card.rs)
/// - The lightbox overlay and its owned-resource handle (lightbox.rs)
/// - Home screen with the latest-items strip (home.rs)
/// - Gallery screen with pills and filtered grid (gallery.rs)
/// - Loading / error / empty placeholders (status.rs)

pub mod card;
pub mod gallery;
pub mod home;
pub mod lightbox;
pub mod status;
