/// Catalog data module
///
/// This module handles everything between the manifest file on disk and the
/// item lists the views render:
/// - Loading and parsing the manifest (loader.rs)
/// - The manifest data model and top-level validation (manifest.rs)
/// - Flattening into a category-tagged item index (index.rs)
/// - The shared error taxonomy (error.rs)

pub mod error;
pub mod index;
pub mod loader;
pub mod manifest;
