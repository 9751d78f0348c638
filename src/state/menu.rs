/// Dropdown menu group
///
/// An explicit finite-state model for the navigation dropdowns: a fixed
/// number of widgets, one `open` flag each, with the group invariant that at
/// most one widget is open at any time. Rendering is a pure projection of
/// this state; the struct knows nothing about widgets or layout.
///
/// Transient UI state: rebuilt whenever the page's interactive elements are
/// rebound, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    open: Vec<bool>,
}

impl MenuGroup {
    pub fn new(count: usize) -> Self {
        MenuGroup { open: vec![false; count] }
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Click (or activation key) on a trigger: a closed widget opens and
    /// closes every sibling in the same step; an open widget closes.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.open.len() {
            return;
        }
        let was_open = self.open[index];
        self.open.iter_mut().for_each(|flag| *flag = false);
        self.open[index] = !was_open;
    }

    /// Close every widget: outside activation, Escape anywhere, or choosing
    /// an item inside an open menu. Returns the widget that was open, so the
    /// caller can hand focus back to its trigger.
    pub fn close_all(&mut self) -> Option<usize> {
        let was_open = self.open_menu();
        self.open.iter_mut().for_each(|flag| *flag = false);
        was_open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// The trigger's exposed expanded state mirrors `open` on every
    /// transition; assistive tech reads this, not the visual state.
    pub fn expanded(&self, index: usize) -> bool {
        self.is_open(index)
    }

    pub fn open_menu(&self) -> Option<usize> {
        self.open.iter().position(|&flag| flag)
    }

    pub fn any_open(&self) -> bool {
        self.open_menu().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_count(group: &MenuGroup) -> usize {
        (0..group.len()).filter(|&i| group.is_open(i)).count()
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut group = MenuGroup::new(2);
        group.toggle(0);
        assert!(group.is_open(0));
        group.toggle(0);
        assert!(!group.is_open(0));
    }

    #[test]
    fn test_opening_one_closes_siblings() {
        let mut group = MenuGroup::new(3);
        group.toggle(0);
        group.toggle(2);
        assert!(!group.is_open(0));
        assert!(group.is_open(2));
        assert_eq!(open_count(&group), 1);
    }

    #[test]
    fn test_at_most_one_open_after_any_toggle_sequence() {
        let mut group = MenuGroup::new(4);
        for &index in &[0, 1, 1, 3, 2, 2, 0, 3, 3, 1] {
            group.toggle(index);
            assert!(open_count(&group) <= 1);
        }
    }

    #[test]
    fn test_close_all_yields_all_closed_and_reports_prior() {
        let mut group = MenuGroup::new(3);
        assert_eq!(group.close_all(), None);

        group.toggle(1);
        assert_eq!(group.close_all(), Some(1));
        assert_eq!(open_count(&group), 0);
        assert!(!group.any_open());
    }

    #[test]
    fn test_expanded_mirrors_open() {
        let mut group = MenuGroup::new(2);
        group.toggle(1);
        assert!(group.expanded(1));
        assert!(!group.expanded(0));
        group.close_all();
        assert!(!group.expanded(1));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut group = MenuGroup::new(1);
        group.toggle(5);
        assert!(!group.any_open());
        assert!(!group.is_open(5));
    }
}
