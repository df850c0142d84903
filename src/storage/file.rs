use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use super::KeyValueStore;

/// Write-through JSON file store. The map stays small (one entry per
/// dismissed banner), so every mutation rewrites the whole file.
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Loads the file if it exists. A corrupted file starts the store empty
    /// rather than failing; an unreadable one is an error so the caller can
    /// fall back to a throwaway store.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let entries = match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    log::warn!("dismissal store file {} is corrupted ({err}), starting empty", path.display());
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path: path.to_owned(),
            entries: RwLock::new(entries),
        })
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        let encoded = match serde_json::to_string(entries) {
            Ok(encoded) => encoded,
            Err(err) => {
                log::warn!("couldn't encode the dismissal store: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, encoded) {
            log::warn!("couldn't write the dismissal store to {}: {err}", self.path.display());
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.entries.read() {
            Ok(entries) => entries.get(key).cloned(),
            Err(_) => None,
        }
    }

    fn set(&self, key: &str, value: String) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_owned(), value);
            self.persist(&entries);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            if entries.remove(key).is_some() {
                self.persist(&entries);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;
    use super::*;

    #[test]
    fn survives_reopen() {
        let dir = tempdir().expect("couldn't create a temp dir");
        let path = dir.path().join("store.json");

        let store = FileStore::open(&path).expect("couldn't open a fresh store");
        store.set("a", "1".to_owned());
        store.set("b", "2".to_owned());
        store.remove("b");
        drop(store);

        let store = FileStore::open(&path).expect("couldn't reopen the store");
        assert_eq!(store.get("a"), Some("1".to_owned()));
        assert_eq!(store.get("b"), None);
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempdir().expect("couldn't create a temp dir");
        let store = FileStore::open(&dir.path().join("absent.json"))
            .expect("a missing file must not be an error");
        assert_eq!(store.get("a"), None);
    }

    #[test]
    fn corrupted_file_starts_empty() {
        let dir = tempdir().expect("couldn't create a temp dir");
        let path = dir.path().join("store.json");
        fs::write(&path, "definitely not json").expect("couldn't write the fixture");

        let store = FileStore::open(&path).expect("a corrupted file must not be an error");
        assert_eq!(store.get("a"), None);

        // and the store is usable again afterwards
        store.set("a", "1".to_owned());
        drop(store);
        let store = FileStore::open(&path).expect("couldn't reopen the store");
        assert_eq!(store.get("a"), Some("1".to_owned()));
    }
}
