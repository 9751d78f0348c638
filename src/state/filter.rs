/// Category filter selection
///
/// One instance per Gallery view. Owns "which category is active" and the
/// roving-focus arithmetic for the pill row. The category list is fixed at
/// construction; `active` always names a member of it.
use crate::state::location::{decode_fragment, encode_fragment};

/// Direction for roving keyboard focus across the pill row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Next,
    Previous,
    First,
    Last,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelector {
    categories: Vec<String>,
    active: usize,
}

impl FilterSelector {
    /// Build a selector over the declared category order. The first category
    /// starts active. Callers validate non-emptiness beforehand (the Gallery
    /// treats zero categories as a fatal load error).
    pub fn new(categories: Vec<String>) -> Self {
        debug_assert!(!categories.is_empty());
        FilterSelector { categories, active: 0 }
    }

    /// Initialize the active category from a stored location fragment.
    ///
    /// Total and idempotent: the token is percent-decoded (unencoded input
    /// decodes to itself), a leading `#` is ignored, and anything that does
    /// not name a member falls back to the first declared category.
    pub fn init_from_fragment(&mut self, fragment: &str) -> &str {
        let wanted = decode_fragment(fragment.trim_start_matches('#'));
        self.active = self
            .categories
            .iter()
            .position(|category| *category == wanted)
            .unwrap_or(0);
        self.active_category()
    }

    /// Activate `category`. Returns false (and changes nothing) when the
    /// name is not a member. The caller persists `fragment()` and
    /// repopulates the grid after a successful select.
    pub fn select(&mut self, category: &str) -> bool {
        match self.categories.iter().position(|c| c == category) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    pub fn active_category(&self) -> &str {
        &self.categories[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The percent-encoded token to write back into the location.
    pub fn fragment(&self) -> String {
        encode_fragment(self.active_category())
    }

    /// Exactly one pill is in the default tab sequence at a time: the active
    /// one. Kept in sync with `active` by construction.
    pub fn is_tab_stop(&self, index: usize) -> bool {
        index == self.active
    }

    /// Next focus index for a keyboard move, with wraparound. Focus and
    /// selection are coupled: the caller activates whatever this returns.
    pub fn move_focus(&self, direction: FocusMove, current: usize) -> usize {
        let n = self.categories.len();
        match direction {
            FocusMove::Next => (current + 1) % n,
            FocusMove::Previous => (current + n - 1) % n,
            FocusMove::First => 0,
            FocusMove::Last => n - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(names: &[&str]) -> FilterSelector {
        FilterSelector::new(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_unknown_fragment_falls_back_to_first() {
        let mut filter = selector(&["A", "B"]);
        assert_eq!(filter.init_from_fragment("#C"), "A");
        assert_eq!(filter.active_category(), "A");
    }

    #[test]
    fn test_fragment_matches_member_with_and_without_encoding() {
        let mut filter = selector(&["Oil & Ink", "Sketches"]);
        assert_eq!(filter.init_from_fragment("Oil%20%26%20Ink"), "Oil & Ink");
        assert_eq!(filter.init_from_fragment("#Sketches"), "Sketches");
        assert_eq!(filter.init_from_fragment("Oil & Ink"), "Oil & Ink");
    }

    #[test]
    fn test_init_from_fragment_is_idempotent() {
        let mut filter = selector(&["A", "B"]);
        filter.init_from_fragment("B");
        let first = filter.active_index();
        filter.init_from_fragment("B");
        assert_eq!(filter.active_index(), first);
    }

    #[test]
    fn test_select_requires_membership() {
        let mut filter = selector(&["A", "B"]);
        assert!(filter.select("B"));
        assert_eq!(filter.active_category(), "B");
        assert!(!filter.select("C"));
        assert_eq!(filter.active_category(), "B");
    }

    #[test]
    fn test_move_focus_wraps_around() {
        let filter = selector(&["A", "B", "C"]);
        assert_eq!(filter.move_focus(FocusMove::Next, 2), 0);
        assert_eq!(filter.move_focus(FocusMove::Previous, 0), 2);
        assert_eq!(filter.move_focus(FocusMove::Next, 0), 1);
        assert_eq!(filter.move_focus(FocusMove::First, 2), 0);
        assert_eq!(filter.move_focus(FocusMove::Last, 0), 2);
    }

    #[test]
    fn test_move_focus_on_single_category() {
        let filter = selector(&["Only"]);
        assert_eq!(filter.move_focus(FocusMove::Next, 0), 0);
        assert_eq!(filter.move_focus(FocusMove::Previous, 0), 0);
        assert_eq!(filter.move_focus(FocusMove::Last, 0), 0);
    }

    #[test]
    fn test_exactly_one_tab_stop_tracks_active() {
        let mut filter = selector(&["A", "B", "C"]);
        filter.select("B");

        let stops: Vec<usize> = (0..3).filter(|&i| filter.is_tab_stop(i)).collect();
        assert_eq!(stops, [1]);
    }

    #[test]
    fn test_fragment_is_encoded_active_category() {
        let mut filter = selector(&["Oil & Ink"]);
        filter.select("Oil & Ink");
        assert_eq!(filter.fragment(), "Oil%20%26%20Ink");
    }
}
