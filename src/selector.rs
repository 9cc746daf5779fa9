//! Labeled-option selector state.
//!
//! Each toolbar dropdown owns one of these: the option set delivered by
//! the host, the committed selection, and the sentinel substituted when no
//! options exist. The selector never fails; the only recognized edge case
//! is an empty option set, which surfaces the sentinel instead.

use crate::spec::OptionSet;

/// Reserved identifier and placeholder label for an empty option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentinel {
    pub id: &'static str,
    pub label: &'static str,
}

/// Sentinel for the kernel dropdown.
pub const NO_KERNEL: Sentinel = Sentinel {
    id: "no-kernel",
    label: "No Kernel",
};

/// Sentinel for the cluster dropdown.
pub const NO_CLUSTER: Sentinel = Sentinel {
    id: "no-cluster",
    label: "No Cluster",
};

/// An entry as the dropdown popup presents it. Disabled entries are
/// placeholders that cannot be committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub enabled: bool,
}

/// Selection state over a fixed option set.
///
/// The initial selection is the first entry in delivery order, or the
/// sentinel when the set is empty. Only the interaction handlers mutate
/// the selection.
#[derive(Debug, Clone)]
pub struct SelectorState {
    options: OptionSet,
    selected: usize,
    sentinel: Sentinel,
}

impl SelectorState {
    pub fn new(options: OptionSet, sentinel: Sentinel) -> Self {
        Self {
            options,
            selected: 0,
            sentinel,
        }
    }

    /// Identifier of the committed selection at the time of call.
    pub fn selection(&self) -> &str {
        self.options
            .get(self.selected)
            .map(|entry| entry.id.as_str())
            .unwrap_or(self.sentinel.id)
    }

    /// Display label of the committed selection.
    pub fn selection_label(&self) -> &str {
        self.options
            .get(self.selected)
            .map(|entry| entry.display_label())
            .unwrap_or(self.sentinel.label)
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Entries for the dropdown popup: the option set itself, or a single
    /// disabled placeholder when the set is empty.
    pub fn display_entries(&self) -> Vec<DisplayEntry<'_>> {
        if self.options.is_empty() {
            return vec![DisplayEntry {
                id: self.sentinel.id,
                label: self.sentinel.label,
                enabled: false,
            }];
        }

        self.options
            .entries()
            .iter()
            .map(|entry| DisplayEntry {
                id: &entry.id,
                label: entry.display_label(),
                enabled: true,
            })
            .collect()
    }

    /// Commit a selection by identifier.
    ///
    /// The identifier is expected to be one the set offers (the popup only
    /// presents valid ids); unknown identifiers leave the selection as is.
    pub fn select_id(&mut self, id: &str) {
        if let Some(index) = self.options.index_of(id) {
            self.selected = index;
        }
    }

    /// Select the next option (wraps around).
    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    /// Select the previous option (wraps around).
    pub fn select_prev(&mut self) {
        if !self.options.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.options.len() - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::OptionEntry;

    fn options(ids: &[&str]) -> OptionSet {
        OptionSet::new(ids.iter().map(|id| OptionEntry::new(*id, None)).collect())
    }

    #[test]
    fn test_initial_selection_is_first_entry() {
        let selector = SelectorState::new(options(&["python3", "julia", "r"]), NO_KERNEL);
        assert_eq!(selector.selection(), "python3");
    }

    #[test]
    fn test_empty_set_surfaces_sentinel() {
        let selector = SelectorState::new(OptionSet::default(), NO_KERNEL);
        assert_eq!(selector.selection(), "no-kernel");
        assert_eq!(selector.selection_label(), "No Kernel");

        let entries = selector.display_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "no-kernel");
        assert!(!entries[0].enabled);
    }

    #[test]
    fn test_select_id_is_observable() {
        let mut selector = SelectorState::new(options(&["1", "2", "3"]), NO_CLUSTER);
        for id in ["2", "3", "1", "1"] {
            selector.select_id(id);
            assert_eq!(selector.selection(), id);
        }
    }

    #[test]
    fn test_select_id_unknown_leaves_selection() {
        let mut selector = SelectorState::new(options(&["1", "2"]), NO_CLUSTER);
        selector.select_id("2");
        selector.select_id("nope");
        assert_eq!(selector.selection(), "2");
    }

    #[test]
    fn test_next_prev_wrap_around() {
        let mut selector = SelectorState::new(options(&["a", "b", "c"]), NO_KERNEL);
        selector.select_next();
        assert_eq!(selector.selection(), "b");
        selector.select_next();
        selector.select_next();
        assert_eq!(selector.selection(), "a");
        selector.select_prev();
        assert_eq!(selector.selection(), "c");
    }

    #[test]
    fn test_navigation_is_noop_on_empty_set() {
        let mut selector = SelectorState::new(OptionSet::default(), NO_CLUSTER);
        selector.select_next();
        selector.select_prev();
        assert_eq!(selector.selection(), "no-cluster");
    }

    #[test]
    fn test_selection_label_fallback() {
        let set = OptionSet::new(vec![
            OptionEntry::new("x", None),
            OptionEntry::new("y", Some("Why".to_string())),
        ]);
        let mut selector = SelectorState::new(set, NO_KERNEL);
        assert_eq!(selector.selection_label(), "x");
        selector.select_id("y");
        assert_eq!(selector.selection_label(), "Why");
    }
}
