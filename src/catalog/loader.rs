/// Manifest loader
///
/// Reads the catalog manifest from disk, freshly on every call — there is no
/// caching layer, so a reload always observes the newest copy. Loading is
/// idempotent and safe to retry; the retry button in the error state simply
/// reruns it.
use std::path::PathBuf;

use tokio::fs;

use crate::catalog::error::CatalogError;
use crate::catalog::manifest::Manifest;

/// Well-known relative location of the manifest, used when no path is given.
pub const DEFAULT_MANIFEST_PATH: &str = "assets/data/manifest.json";

/// Fetch and parse the manifest.
///
/// Transport failures map to [`CatalogError::Fetch`]; a body that is not
/// valid JSON maps to [`CatalogError::Parse`]; a wrong top-level shape maps
/// to [`CatalogError::InvalidManifest`].
pub async fn load(path: PathBuf) -> Result<Manifest, CatalogError> {
    let body = fs::read_to_string(&path)
        .await
        .map_err(|e| CatalogError::Fetch(format!("{}: {e}", path.display())))?;

    let manifest = Manifest::from_json(&body)?;
    tracing::debug!(
        path = %path.display(),
        categories = manifest.categories.len(),
        "manifest loaded"
    );
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("art-catalog-test-{name}"));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[tokio::test]
    async fn test_missing_file_is_fetch_error() {
        let result = load(PathBuf::from("/nonexistent/manifest.json")).await;
        assert!(matches!(result, Err(CatalogError::Fetch(_))));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let path = scratch_file("malformed.json", "{ this is not json");
        let result = load(path.clone()).await;
        std::fs::remove_file(path).ok();
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[tokio::test]
    async fn test_well_formed_manifest_loads() {
        let path = scratch_file(
            "good.json",
            r#"{"categories":{"Paintings":[{"src":"p.jpg","title":"P"}]}}"#,
        );
        let manifest = load(path.clone()).await.unwrap();
        std::fs::remove_file(path).ok();

        assert_eq!(manifest.categories.len(), 1);
        assert_eq!(manifest.categories[0].0, "Paintings");
    }
}
