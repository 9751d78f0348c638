/// Manifest data model
///
/// The manifest is a single JSON document shaped as:
///
/// ```json
/// { "categories": { "<name>": [ { "src": "...", "title": "...", ... } ] } }
/// ```
///
/// Category names are mapping keys, so the manifest is dynamic in shape.
/// Here it becomes an explicit ordered association (a list of
/// `(name, items)` pairs) so declared order never depends on map iteration
/// guarantees. serde_json's `preserve_order` feature keeps the key order
/// as written in the file.
use serde::Deserialize;
use serde_json::Value;

use crate::catalog::error::CatalogError;

/// One artwork entry exactly as it appears in the manifest.
///
/// `src` and `title` are required for an entry to be usable; everything else
/// is optional. Missing fields default to empty so a structurally odd entry
/// still parses and can be filtered out later instead of failing the load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawItem {
    /// Path to the full-size image.
    #[serde(default)]
    pub src: String,
    /// Path to a smaller thumbnail; falls back to `src` when absent.
    #[serde(default)]
    pub thumb: Option<String>,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Optional longer caption.
    #[serde(default)]
    pub caption: Option<String>,
    /// ISO 8601 date the artwork was added, used for the "latest" strip.
    #[serde(default)]
    pub added: Option<String>,
}

impl RawItem {
    /// An item is valid iff both `src` and `title` are non-empty.
    /// Invalid items are dropped silently during index construction.
    pub fn is_valid(&self) -> bool {
        !self.src.is_empty() && !self.title.is_empty()
    }
}

/// The parsed catalog manifest: categories in declared order, each with its
/// item sequence in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub categories: Vec<(String, Vec<RawItem>)>,
}

impl Manifest {
    /// Parse a manifest from its JSON body.
    ///
    /// A body that is not JSON at all is a [`CatalogError::Parse`]; a JSON
    /// document whose `categories` field is missing or not a mapping is a
    /// [`CatalogError::InvalidManifest`]. Malformed individual entries are
    /// dropped, not surfaced — a catalog degraded by a few bad entries is
    /// still useful, a malformed top level is not.
    pub fn from_json(body: &str) -> Result<Self, CatalogError> {
        let root: Value =
            serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_value(&root)
    }

    /// Validate the top-level structure and extract the ordered categories.
    pub fn from_value(root: &Value) -> Result<Self, CatalogError> {
        let mapping = root
            .get("categories")
            .and_then(Value::as_object)
            .ok_or(CatalogError::InvalidManifest)?;

        let categories = mapping
            .iter()
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, entries)| {
                let items = match entries.as_array() {
                    Some(list) => list
                        .iter()
                        .filter_map(|entry| serde_json::from_value::<RawItem>(entry.clone()).ok())
                        .collect(),
                    // A category whose value is not a list keeps its name
                    // (and therefore its filter pill) but holds no items.
                    None => Vec::new(),
                };
                (name.clone(), items)
            })
            .collect();

        Ok(Manifest { categories })
    }
}
