//! JSON snapshot file store.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument, warn};

use prontuario_core::{
    application::{ApplicationError, ports::RecordStore},
    domain::{Record, RecordEntry, RecordId, RecordKind},
    error::{Context as _, ProntuarioError, ProntuarioResult},
};

use super::memory::{InMemoryStore, Snapshot};

/// Record store persisted as one JSON document.
///
/// All constraints are enforced by the wrapped [`InMemoryStore`]. After each
/// successful mutation the whole snapshot is written to a sibling temp file
/// and renamed over the data file, so readers never see a half-written file.
pub struct JsonFileStore {
    path: PathBuf,
    memory: InMemoryStore,
}

impl JsonFileStore {
    /// Open the data file at `path`. A missing file is an empty store.
    #[instrument(skip(path), fields(file = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> ProntuarioResult<Self> {
        let path = path.as_ref().to_path_buf();

        let memory = match fs::read_to_string(&path) {
            Ok(raw) => {
                let snapshot: Snapshot = serde_json::from_str(&raw)
                    .map_err(|e| storage_error(&path, format!("invalid data file: {e}")))?;
                debug!(records = snapshot.records.len(), "data file loaded");
                InMemoryStore::from_snapshot(snapshot)?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no data file yet, starting empty");
                InMemoryStore::new()
            }
            Err(e) => return Err(map_io_error(&path, e, "read data file")),
        };

        Ok(Self { path, memory })
    }

    /// Location of the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current contents to disk.
    pub fn persist(&self) -> ProntuarioResult<()> {
        let snapshot = self.memory.snapshot()?;
        let json = serde_json::to_string_pretty(&snapshot).context("failed to encode snapshot")?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| map_io_error(parent, e, "create directory"))?;
        }

        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(|e| map_io_error(&tmp, e, "write file"))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(map_io_error(&self.path, e, "replace file"));
        }

        info!(path = %self.path.display(), records = snapshot.records.len(), "data file saved");
        Ok(())
    }

    /// Apply `change` in memory and save it. A failed save undoes the change.
    fn commit<T>(
        &self,
        change: impl FnOnce(&InMemoryStore) -> ProntuarioResult<T>,
    ) -> ProntuarioResult<T> {
        let before = self.memory.snapshot()?;
        let value = change(&self.memory)?;

        if let Err(e) = self.persist() {
            warn!(path = %self.path.display(), error = %e, "save failed, change rolled back");
            self.memory.restore(before)?;
            return Err(e);
        }
        Ok(value)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "prontuario.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RecordStore for JsonFileStore {
    fn insert(&self, record: Record) -> ProntuarioResult<RecordId> {
        self.commit(|memory| memory.insert(record))
    }

    fn update(&self, id: RecordId, record: Record) -> ProntuarioResult<()> {
        self.commit(|memory| memory.update(id, record))
    }

    fn get(&self, kind: RecordKind, id: RecordId) -> ProntuarioResult<Record> {
        self.memory.get(kind, id)
    }

    fn list(&self, kind: RecordKind) -> ProntuarioResult<Vec<RecordEntry>> {
        self.memory.list(kind)
    }

    fn remove(&self, kind: RecordKind, id: RecordId) -> ProntuarioResult<()> {
        self.commit(|memory| memory.remove(kind, id))
    }
}

fn storage_error(path: &Path, reason: String) -> ProntuarioError {
    ApplicationError::StorageFailed {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ProntuarioError {
    storage_error(path, format!("Failed to {}: {}", operation, e))
}

#[cfg(test)]
mod tests {
    use prontuario_core::{domain::Department, error::ErrorCategory};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_opens_empty() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::open(temp.path().join("data.json")).unwrap();
        assert!(store.list(RecordKind::Department).unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn mutations_survive_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.json");

        let store = JsonFileStore::open(&path).unwrap();
        let id = store.insert(Department::new("UTI").into()).unwrap();
        store
            .update(id, Department::new("UTI Adulto").into())
            .unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get(RecordKind::Department, id).unwrap().name(),
            "UTI Adulto"
        );
    }

    #[test]
    fn parent_directories_are_created() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/dir/data.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.insert(Department::new("UTI").into()).unwrap();
        assert!(path.exists());
        assert!(!path.with_file_name("data.json.tmp").exists());
    }

    #[test]
    fn failed_mutation_does_not_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.json");

        let store = JsonFileStore::open(&path).unwrap();
        assert!(
            store
                .remove(RecordKind::Department, RecordId::new(1))
                .is_err()
        );
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::open(&path).err().unwrap();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.to_string().contains("invalid data file"));
    }

    #[test]
    fn saved_file_is_a_readable_snapshot() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.insert(Department::new("UTI").into()).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let snapshot: Snapshot = serde_json::from_str(&raw).unwrap();
        assert_eq!(snapshot.next_id, 2);
        assert_eq!(snapshot.records[0].record.kind(), RecordKind::Department);
    }

    /// Turn the data file into a non-empty directory so the rename fails.
    fn block(path: &Path) {
        if path.is_file() {
            fs::remove_file(path).unwrap();
        }
        fs::create_dir(path).unwrap();
        fs::write(path.join("occupied"), "x").unwrap();
    }

    fn unblock(path: &Path) {
        fs::remove_dir_all(path).unwrap();
    }

    #[test]
    fn failed_save_leaves_store_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.json");
        let store = JsonFileStore::open(&path).unwrap();

        block(&path);
        assert!(store.insert(Department::new("UTI").into()).is_err());
        assert!(store.list(RecordKind::Department).unwrap().is_empty());
        assert!(!path.with_file_name("data.json.tmp").exists());

        unblock(&path);
        let id = store.insert(Department::new("UTI").into()).unwrap();
        assert_eq!(id, RecordId::new(1));

        block(&path);
        assert!(
            store
                .update(id, Department::new("UTI Adulto").into())
                .is_err()
        );
        assert!(store.remove(RecordKind::Department, id).is_err());
        assert_eq!(
            store.get(RecordKind::Department, id).unwrap().name(),
            "UTI"
        );

        unblock(&path);
        store.insert(Department::new("Pediatria").into()).unwrap();
        let reopened = JsonFileStore::open(&path).unwrap();
        let names: Vec<String> = reopened
            .list(RecordKind::Department)
            .unwrap()
            .into_iter()
            .map(|e| e.record.name().to_string())
            .collect();
        assert_eq!(names, ["UTI", "Pediatria"]);
    }
}
