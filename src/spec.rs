//! Host-supplied option specifications.
//!
//! The toolbar dropdowns are populated from (identifier, display label)
//! pairs delivered by the host configuration. The shapes here mirror what
//! the config file provides; widgets read them and never modify them.

use serde::Deserialize;

/// A single selectable entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OptionEntry {
    /// Identifier, unique within one option set.
    pub id: String,

    /// Display label; the identifier stands in when absent.
    #[serde(default)]
    pub label: Option<String>,
}

impl OptionEntry {
    pub fn new(id: impl Into<String>, label: Option<String>) -> Self {
        Self {
            id: id.into(),
            label,
        }
    }

    /// Label shown to the user.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// Ordered set of options, fixed for the lifetime of a widget.
///
/// Iteration order is whatever order the host delivered; no sorting, no
/// display priority.
#[derive(Debug, Clone, Default)]
pub struct OptionSet {
    entries: Vec<OptionEntry>,
}

impl OptionSet {
    pub fn new(entries: Vec<OptionEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&OptionEntry> {
        self.entries.get(index)
    }

    /// Position of an identifier in delivery order.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_falls_back_to_id() {
        let entry = OptionEntry::new("x", None);
        assert_eq!(entry.display_label(), "x");

        let entry = OptionEntry::new("x", Some("Extra Large".to_string()));
        assert_eq!(entry.display_label(), "Extra Large");
    }

    #[test]
    fn test_index_of_preserves_delivery_order() {
        let set = OptionSet::new(vec![
            OptionEntry::new("b", None),
            OptionEntry::new("a", None),
            OptionEntry::new("c", None),
        ]);

        assert_eq!(set.index_of("b"), Some(0));
        assert_eq!(set.index_of("a"), Some(1));
        assert_eq!(set.index_of("missing"), None);
    }

    #[test]
    fn test_parse_entry_without_label() {
        let entry: OptionEntry = toml::from_str(r#"id = "julia-1.10""#).unwrap();
        assert_eq!(entry.id, "julia-1.10");
        assert!(entry.label.is_none());
    }
}
