//! JSON-backed account store.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, warn};

/// Directory under the platform data dir holding the persisted document.
pub const DEFAULT_DATA_DIR: &str = "raidkit";
/// File name of the persisted document.
pub const DATA_FILE_NAME: &str = "data.json";

/// The persisted document: two independent named-entry sections.
///
/// Section values are opaque per-entry records (currently always empty
/// objects). Unknown top-level keys from older files are retained in
/// `extra` and written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    /// Inventory accounts, keyed by unique name.
    #[serde(default)]
    pub inventory: Map<String, Value>,
    /// Card accounts, keyed by unique name.
    #[serde(default)]
    pub cards: Map<String, Value>,
    /// Unrecognised top-level keys, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One of the two named-entry namespaces within the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The `inventory` section.
    Inventory,
    /// The `cards` section.
    Cards,
}

impl Section {
    /// Key of the section in the persisted document.
    pub fn label(self) -> &'static str {
        match self {
            Section::Inventory => "inventory",
            Section::Cards => "cards",
        }
    }
}

impl Store {
    /// Borrow the entries of a section.
    pub fn section(&self, section: Section) -> &Map<String, Value> {
        match section {
            Section::Inventory => &self.inventory,
            Section::Cards => &self.cards,
        }
    }

    /// Mutably borrow the entries of a section.
    pub fn section_mut(&mut self, section: Section) -> &mut Map<String, Value> {
        match section {
            Section::Inventory => &mut self.inventory,
            Section::Cards => &mut self.cards,
        }
    }
}

/// Failures raised by the storage layer.
///
/// Callers of [`DataStore::load`], [`DataStore::save`] and
/// [`DataStore::reset`] never see these; the `try_` variants expose them
/// for logging and tests.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The document exists but could not be read.
    #[error("failed to read {path}")]
    Read {
        /// Location of the document.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },
    /// The document is not valid JSON with an object root.
    #[error("failed to parse {path}")]
    Parse {
        /// Location of the document.
        path: PathBuf,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// The document could not be serialized.
    #[error("failed to serialize store")]
    Serialize(#[source] serde_json::Error),
    /// The document could not be written.
    #[error("failed to write {path}")]
    Write {
        /// Location of the document.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },
    /// The document could not be removed.
    #[error("failed to remove {path}")]
    Remove {
        /// Location of the document.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },
}

/// Reads and writes the persisted document at a fixed path.
///
/// The path is injected at construction; platform directory resolution
/// belongs to the caller (see [`DataStore::default_path`]).
#[derive(Debug, Clone)]
pub struct DataStore {
    path: PathBuf,
}

impl DataStore {
    /// Create a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location under the user's data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DATA_DIR)
            .join(DATA_FILE_NAME)
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document. Any failure yields the canonical empty store.
    pub fn load(&self) -> Store {
        match self.try_load() {
            Ok(store) => store,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "store read failed; starting empty");
                Store::default()
            }
        }
    }

    /// Read the document, surfacing failures. A missing file is not a
    /// failure and yields the canonical empty store.
    pub fn try_load(&self) -> Result<Store, StoreError> {
        if !self.path.exists() {
            return Ok(Store::default());
        }
        let contents = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Write the full document, replacing any prior content. Failures are
    /// logged and dropped.
    pub fn save(&self, store: &Store) {
        if let Err(err) = self.try_save(store) {
            warn!(path = %self.path.display(), error = %err, "store write failed; changes dropped");
        }
    }

    /// Write the full document, surfacing failures.
    pub fn try_save(&self, store: &Store) -> Result<(), StoreError> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        let serialized = serde_json::to_vec_pretty(store).map_err(StoreError::Serialize)?;

        // Temp-then-rename so a failed write never truncates the document.
        let tmp = NamedTempFile::new_in(parent).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        fs::write(tmp.path(), &serialized).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        tmp.persist(&self.path).map_err(|err| StoreError::Write {
            path: self.path.clone(),
            source: err.error,
        })?;
        debug!(path = %self.path.display(), "store written");
        Ok(())
    }

    /// Delete the document if present. Failures are logged and dropped.
    pub fn reset(&self) {
        if let Err(err) = self.try_reset() {
            warn!(path = %self.path.display(), error = %err, "store reset failed");
        }
    }

    /// Delete the document if present, surfacing failures.
    pub fn try_reset(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "store removed");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn store_in(dir: &Path) -> DataStore {
        DataStore::new(dir.join(DATA_FILE_NAME))
    }

    #[test]
    fn load_missing_file_returns_empty_store() {
        let dir = tempdir().unwrap();
        let data = store_in(dir.path());
        assert_eq!(data.load(), Store::default());
    }

    #[test]
    fn load_fills_missing_sections() {
        let dir = tempdir().unwrap();
        let data = store_in(dir.path());
        fs::write(data.path(), r#"{"inventory":{"a":{}}}"#).unwrap();

        let store = data.load();
        assert_eq!(store.inventory.len(), 1);
        assert!(store.inventory.contains_key("a"));
        assert!(store.cards.is_empty());
    }

    #[test]
    fn load_malformed_json_returns_empty_store() {
        let dir = tempdir().unwrap();
        let data = store_in(dir.path());
        fs::write(data.path(), "{not json").unwrap();

        assert_eq!(data.load(), Store::default());
        assert!(matches!(data.try_load(), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn load_non_object_root_returns_empty_store() {
        let dir = tempdir().unwrap();
        let data = store_in(dir.path());
        fs::write(data.path(), "[1, 2, 3]").unwrap();

        assert_eq!(data.load(), Store::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let data = store_in(dir.path());

        let mut store = Store::default();
        store
            .inventory
            .insert("main".to_string(), Value::Object(Map::new()));
        store.cards.insert("alt".to_string(), Value::Object(Map::new()));
        data.try_save(&store).unwrap();

        assert_eq!(data.load(), store);
    }

    #[test]
    fn unknown_top_level_keys_survive_round_trip() {
        let dir = tempdir().unwrap();
        let data = store_in(dir.path());
        fs::write(
            data.path(),
            r#"{"inventory":{},"cards":{},"schema":"v0"}"#,
        )
        .unwrap();

        let store = data.load();
        assert_eq!(store.extra.get("schema"), Some(&json!("v0")));

        data.try_save(&store).unwrap();
        let raw: Value = serde_json::from_str(&fs::read_to_string(data.path()).unwrap()).unwrap();
        assert_eq!(raw["schema"], json!("v0"));
    }

    #[test]
    fn reset_removes_the_document() {
        let dir = tempdir().unwrap();
        let data = store_in(dir.path());

        let mut store = Store::default();
        store
            .inventory
            .insert("main".to_string(), Value::Object(Map::new()));
        data.save(&store);
        assert!(data.path().exists());

        data.reset();
        assert!(!data.path().exists());
        assert_eq!(data.load(), Store::default());
    }

    #[test]
    fn reset_on_missing_file_is_a_no_op() {
        let dir = tempdir().unwrap();
        let data = store_in(dir.path());
        data.try_reset().unwrap();
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let data = DataStore::new(dir.path().join("nested").join(DATA_FILE_NAME));
        data.try_save(&Store::default()).unwrap();
        assert!(data.path().exists());
    }
}
