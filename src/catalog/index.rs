/// Catalog index
///
/// Flattens the manifest's category → items mapping into a single validated,
/// category-tagged item list. The index exclusively owns `CatalogItem`
/// creation for the lifetime of one manifest load; views only read from it.
/// Rebuilt from scratch on every load, never updated incrementally.
use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, Utc};

use crate::catalog::error::CatalogError;
use crate::catalog::manifest::Manifest;

/// A validated manifest entry annotated with its owning category.
/// This is the unit the renderer and the lightbox consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub src: String,
    pub thumb: Option<String>,
    pub title: String,
    pub caption: Option<String>,
    /// Parsed `added` timestamp. Missing or unparseable dates are `None`
    /// and sort as the earliest possible value in the "latest" ordering.
    pub added: Option<DateTime<Utc>>,
    /// Name of the category this item was declared under.
    pub category: String,
}

impl CatalogItem {
    /// Image used in grid cards: the thumbnail when present, else the full
    /// image.
    pub fn grid_src(&self) -> &str {
        self.thumb.as_deref().unwrap_or(&self.src)
    }
}

/// The flat, ordered view over one loaded manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogIndex {
    categories: Vec<String>,
    items: Vec<CatalogItem>,
}

impl CatalogIndex {
    /// Flatten a manifest: categories in declared order, items in declared
    /// order within each category, invalid items (missing `src` or `title`)
    /// silently dropped. Pure transform, no side effects.
    pub fn build(manifest: &Manifest) -> Self {
        let categories: Vec<String> =
            manifest.categories.iter().map(|(name, _)| name.clone()).collect();

        let items: Vec<CatalogItem> = manifest
            .categories
            .iter()
            .flat_map(|(category, raw_items)| {
                raw_items
                    .iter()
                    .filter(|raw| raw.is_valid())
                    .map(|raw| CatalogItem {
                        src: raw.src.clone(),
                        thumb: raw.thumb.clone(),
                        title: raw.title.clone(),
                        caption: raw.caption.clone(),
                        added: raw.added.as_deref().and_then(parse_added),
                        category: category.clone(),
                    })
            })
            .collect();

        CatalogIndex { categories, items }
    }

    /// Category names in declared order. This order drives pill display.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// All valid items, in (category order, intra-category order).
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// The items belonging to one category, in declared order.
    pub fn items_in(&self, category: &str) -> Vec<CatalogItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .cloned()
            .collect()
    }

    /// The newest `limit` items, descending by `added`. Items without a
    /// usable date sort as earliest; ties keep declared order.
    pub fn latest(&self, limit: usize) -> Vec<CatalogItem> {
        let mut latest = self.items.clone();
        latest.sort_by_key(|item| Reverse(item.added));
        latest.truncate(limit);
        latest
    }

    /// The Home view needs at least one valid item overall.
    pub fn require_items(&self) -> Result<(), CatalogError> {
        if self.items.is_empty() {
            Err(CatalogError::EmptyCatalog("no gallery items found".into()))
        } else {
            Ok(())
        }
    }

    /// The Gallery view needs at least one category.
    pub fn require_categories(&self) -> Result<(), CatalogError> {
        if self.categories.is_empty() {
            Err(CatalogError::EmptyCatalog("no gallery categories found".into()))
        } else {
            Ok(())
        }
    }
}

/// Parse an `added` value: RFC 3339 first, then a bare `YYYY-MM-DD` taken as
/// midnight UTC. Anything else is treated as absent.
fn parse_added(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::manifest::Manifest;

    fn index_of(body: &str) -> CatalogIndex {
        CatalogIndex::build(&Manifest::from_json(body).unwrap())
    }

    #[test]
    fn test_flatten_preserves_declared_order_and_drops_invalid() {
        // Scenario straight from the manifest format: "B" declared before
        // "A", and A's second entry has no title.
        let index = index_of(
            r#"{"categories":{"B":[{"src":"b.jpg","title":"B1"}],
                              "A":[{"src":"a.jpg","title":"A1"},{"src":"bad"}]}}"#,
        );

        assert_eq!(index.categories(), ["B", "A"]);

        let titles: Vec<&str> = index.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["B1", "A1"]);
        assert_eq!(index.items()[0].category, "B");
        assert_eq!(index.items()[1].category, "A");
    }

    #[test]
    fn test_item_count_matches_valid_entries() {
        let index = index_of(
            r#"{"categories":{
                 "X":[{"src":"1.jpg","title":"1"},{"title":"no src"},{"src":"no title"}],
                 "Y":[{"src":"2.jpg","title":"2"}]}}"#,
        );
        assert_eq!(index.items().len(), 2);
    }

    #[test]
    fn test_items_in_filters_by_category() {
        let index = index_of(
            r#"{"categories":{"X":[{"src":"1.jpg","title":"1"}],
                              "Y":[{"src":"2.jpg","title":"2"},{"src":"3.jpg","title":"3"}]}}"#,
        );

        let y_items = index.items_in("Y");
        assert_eq!(y_items.len(), 2);
        assert!(y_items.iter().all(|i| i.category == "Y"));
        assert!(index.items_in("Z").is_empty());
    }

    #[test]
    fn test_latest_sorts_descending_with_missing_dates_earliest() {
        let index = index_of(
            r#"{"categories":{"A":[
                 {"src":"1.jpg","title":"mid","added":"2024-01-01"},
                 {"src":"2.jpg","title":"old","added":"2023-06-01"},
                 {"src":"3.jpg","title":"new","added":"2025-02-01"},
                 {"src":"4.jpg","title":"undated"}]}}"#,
        );

        let latest = index.latest(8);
        let titles: Vec<&str> = latest.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["new", "mid", "old", "undated"]);
    }

    #[test]
    fn test_latest_applies_the_cap() {
        let index = index_of(
            r#"{"categories":{"A":[
                 {"src":"1.jpg","title":"a","added":"2024-01-01"},
                 {"src":"2.jpg","title":"b","added":"2024-01-02"},
                 {"src":"3.jpg","title":"c","added":"2024-01-03"}]}}"#,
        );
        assert_eq!(index.latest(2).len(), 2);
        assert_eq!(index.latest(2)[0].title, "c");
    }

    #[test]
    fn test_latest_keeps_declared_order_for_ties() {
        let index = index_of(
            r#"{"categories":{"A":[{"src":"1.jpg","title":"first"},
                                   {"src":"2.jpg","title":"second"}]}}"#,
        );
        let latest = index.latest(8);
        let titles: Vec<&str> = latest.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["first", "second"]);
    }

    #[test]
    fn test_grid_src_prefers_thumbnail() {
        let index = index_of(
            r#"{"categories":{"A":[{"src":"full.jpg","thumb":"small.jpg","title":"T"},
                                   {"src":"only.jpg","title":"U"}]}}"#,
        );
        assert_eq!(index.items()[0].grid_src(), "small.jpg");
        assert_eq!(index.items()[1].grid_src(), "only.jpg");
    }

    #[test]
    fn test_empty_checks() {
        let empty = index_of(r#"{"categories":{}}"#);
        assert!(empty.require_items().is_err());
        assert!(empty.require_categories().is_err());

        // Categories exist but every entry is invalid: empty for Home,
        // fine for Gallery.
        let no_items = index_of(r#"{"categories":{"A":[{"src":"no title"}]}}"#);
        assert!(no_items.require_items().is_err());
        assert!(no_items.require_categories().is_ok());
    }

    #[test]
    fn test_parse_added_accepts_rfc3339_and_bare_dates() {
        assert!(parse_added("2024-01-01").is_some());
        assert!(parse_added("2024-01-01T10:30:00Z").is_some());
        assert!(parse_added("January 1st").is_none());
        assert!(parse_added("").is_none());
    }
}
