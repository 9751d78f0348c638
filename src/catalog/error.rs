use thiserror::Error;

/// Errors from loading and validating the catalog manifest.
///
/// Variants carry plain `String` payloads so the error stays `Clone` and can
/// travel inside iced messages across task boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The manifest resource could not be read at all.
    #[error("failed to fetch manifest: {0}")]
    Fetch(String),

    /// The manifest body is not well-formed JSON.
    #[error("manifest is not valid JSON: {0}")]
    Parse(String),

    /// The manifest parsed, but `categories` is missing or not a mapping.
    #[error("manifest has no usable `categories` mapping")]
    InvalidManifest,

    /// The catalog survived validation but contains nothing to show.
    #[error("catalog is empty: {0}")]
    EmptyCatalog(String),
}

impl CatalogError {
    /// Message shown inside the per-view error state.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Fetch(_) => {
                "Unable to load the gallery. Please check the catalog location and try again."
                    .to_owned()
            }
            CatalogError::Parse(_) | CatalogError::InvalidManifest => {
                "The gallery data is in an unexpected format.".to_owned()
            }
            CatalogError::EmptyCatalog(what) => format!("Nothing to show yet: {what}."),
        }
    }
}
