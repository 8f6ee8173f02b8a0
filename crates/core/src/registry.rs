//! Named-entry registry over the two store sections.

use serde_json::{Map, Value};
use tracing::info;

use crate::store::{DataStore, Section, Store};

/// Add/list operations for section entries.
///
/// Every operation re-reads the document from disk; nothing is cached
/// between calls, so the registry always reflects the file's last state.
pub struct EntryRegistry {
    data: DataStore,
}

impl EntryRegistry {
    /// Create a registry over the given store.
    pub fn new(data: DataStore) -> Self {
        Self { data }
    }

    /// Insert `name` into the section and persist, returning the resulting
    /// document. Blank and duplicate names leave the document untouched.
    pub fn add(&self, section: Section, name: &str) -> Store {
        let name = name.trim();
        let mut store = self.data.load();
        if name.is_empty() || store.section(section).contains_key(name) {
            return store;
        }
        store
            .section_mut(section)
            .insert(name.to_string(), Value::Object(Map::new()));
        self.data.save(&store);
        info!(section = section.label(), name, "entry added");
        store
    }

    /// Entry names of the section, in stored order.
    pub fn entries(&self, section: Section) -> Vec<String> {
        self.data.load().section(section).keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DATA_FILE_NAME;
    use tempfile::tempdir;

    fn registry_in(dir: &std::path::Path) -> EntryRegistry {
        EntryRegistry::new(DataStore::new(dir.join(DATA_FILE_NAME)))
    }

    #[test]
    fn add_trims_and_persists() {
        let dir = tempdir().unwrap();
        let registry = registry_in(dir.path());

        let store = registry.add(Section::Inventory, "  main  ");
        assert!(store.inventory.contains_key("main"));
        assert_eq!(registry.entries(Section::Inventory), vec!["main"]);
    }

    #[test]
    fn duplicate_add_is_idempotent() {
        let dir = tempdir().unwrap();
        let registry = registry_in(dir.path());

        registry.add(Section::Cards, "alpha");
        let store = registry.add(Section::Cards, "alpha");
        assert_eq!(store.cards.len(), 1);
        assert_eq!(registry.entries(Section::Cards), vec!["alpha"]);
    }

    #[test]
    fn whitespace_name_is_a_no_op() {
        let dir = tempdir().unwrap();
        let registry = registry_in(dir.path());

        let store = registry.add(Section::Inventory, "   ");
        assert_eq!(store, Store::default());
        assert!(registry.entries(Section::Inventory).is_empty());
    }

    #[test]
    fn sections_are_independent_namespaces() {
        let dir = tempdir().unwrap();
        let registry = registry_in(dir.path());

        registry.add(Section::Inventory, "shared");
        let store = registry.add(Section::Cards, "shared");
        assert_eq!(store.inventory.len(), 1);
        assert_eq!(store.cards.len(), 1);
    }

    #[test]
    fn entries_keep_insertion_order() {
        let dir = tempdir().unwrap();
        let registry = registry_in(dir.path());

        registry.add(Section::Inventory, "zulu");
        registry.add(Section::Inventory, "alpha");
        registry.add(Section::Inventory, "mike");
        assert_eq!(
            registry.entries(Section::Inventory),
            vec!["zulu", "alpha", "mike"]
        );
    }

    #[test]
    fn empty_section_lists_nothing() {
        let dir = tempdir().unwrap();
        let registry = registry_in(dir.path());
        assert!(registry.entries(Section::Cards).is_empty());
    }
}
