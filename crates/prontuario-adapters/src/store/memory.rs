//! In-memory record store.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use prontuario_core::{
    application::{ApplicationError, ports::RecordStore},
    domain::{Record, RecordEntry, RecordId, RecordKind},
    error::{ProntuarioError, ProntuarioResult},
};

/// Serializable image of a store.
///
/// `next_id` is kept so ids of deleted records are never handed out again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub next_id: u64,
    pub records: Vec<RecordEntry>,
}

#[derive(Debug)]
struct Tables {
    next_id: u64,
    records: BTreeMap<RecordId, Record>,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            next_id: 1,
            records: BTreeMap::new(),
        }
    }
}

impl Tables {
    /// Tables holding `snapshot`, with `next_id` past the largest stored id.
    fn from_snapshot(snapshot: Snapshot) -> ProntuarioResult<Self> {
        let mut tables = Self::default();

        for entry in snapshot.records {
            if !entry.id.is_set() || tables.records.contains_key(&entry.id) {
                return Err(ProntuarioError::Internal {
                    message: format!("snapshot has an invalid or repeated id {}", entry.id),
                });
            }
            tables.records.insert(entry.id, entry.record);
        }

        let after_last = tables
            .records
            .keys()
            .next_back()
            .map_or(1, |id| id.get() + 1);
        tables.next_id = snapshot.next_id.max(after_last);

        Ok(tables)
    }

    fn of_kind(&self, kind: RecordKind) -> impl Iterator<Item = (&RecordId, &Record)> {
        self.records.iter().filter(move |(_, r)| r.kind() == kind)
    }

    /// Uniqueness among records of the same kind, ignoring `skip`.
    fn check_unique(&self, record: &Record, skip: Option<RecordId>) -> ProntuarioResult<()> {
        let kind = record.kind();

        for (field, value) in record.unique_fields() {
            let taken = self
                .of_kind(kind)
                .filter(|(id, _)| Some(**id) != skip)
                .any(|(_, other)| {
                    other
                        .unique_fields()
                        .iter()
                        .any(|(f, v)| *f == field && *v == value)
                });

            if taken {
                return Err(ApplicationError::UniqueViolation {
                    kind,
                    field,
                    value: value.to_string(),
                }
                .into());
            }
        }

        Ok(())
    }

    fn check_department(&self, record: &Record) -> ProntuarioResult<()> {
        let Some(id) = record.department_ref() else {
            return Ok(());
        };

        match self.records.get(&id) {
            Some(r) if r.kind() == RecordKind::Department => Ok(()),
            _ => Err(ApplicationError::UnknownDepartment { id }.into()),
        }
    }

    fn nurses_in(&self, department: RecordId) -> usize {
        self.of_kind(RecordKind::Nurse)
            .filter(|(_, r)| r.department_ref() == Some(department))
            .count()
    }
}

/// Thread-safe in-memory record store.
///
/// Ids are sequential from 1 and shared by all kinds, like a single
/// sequence feeding every table.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a snapshot.
    ///
    /// The snapshot is trusted to satisfy the store constraints except for
    /// id bookkeeping: duplicate ids are rejected and `next_id` is raised
    /// past the largest stored id.
    pub fn from_snapshot(snapshot: Snapshot) -> ProntuarioResult<Self> {
        Ok(Self {
            inner: Arc::new(RwLock::new(Tables::from_snapshot(snapshot)?)),
        })
    }

    /// Replace the whole contents with `snapshot`, id counter included.
    pub fn restore(&self, snapshot: Snapshot) -> ProntuarioResult<()> {
        let tables = Tables::from_snapshot(snapshot)?;
        *self.write()? = tables;
        Ok(())
    }

    /// Copy the current contents out.
    pub fn snapshot(&self) -> ProntuarioResult<Snapshot> {
        let tables = self.read()?;
        Ok(Snapshot {
            next_id: tables.next_id,
            records: tables
                .records
                .iter()
                .map(|(id, r)| RecordEntry::new(*id, r.clone()))
                .collect(),
        })
    }

    /// Total number of stored records, all kinds.
    pub fn len(&self) -> ProntuarioResult<usize> {
        Ok(self.read()?.records.len())
    }

    pub fn is_empty(&self) -> ProntuarioResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> ProntuarioResult<RwLockReadGuard<'_, Tables>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }

    fn write(&self) -> ProntuarioResult<RwLockWriteGuard<'_, Tables>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }
}

impl RecordStore for InMemoryStore {
    #[instrument(skip_all, fields(kind = %record.kind()))]
    fn insert(&self, record: Record) -> ProntuarioResult<RecordId> {
        let mut tables = self.write()?;

        tables.check_unique(&record, None)?;
        tables.check_department(&record)?;

        let id = RecordId::new(tables.next_id);
        tables.next_id += 1;
        tables.records.insert(id, record);

        debug!(%id, "inserted");
        Ok(id)
    }

    #[instrument(skip_all, fields(kind = %record.kind(), %id))]
    fn update(&self, id: RecordId, record: Record) -> ProntuarioResult<()> {
        let mut tables = self.write()?;
        let given = record.kind();

        let stored = match tables.records.get(&id) {
            Some(existing) => existing.kind(),
            None => {
                return Err(ApplicationError::RecordNotFound { kind: given, id }.into());
            }
        };
        if stored != given {
            return Err(ApplicationError::KindMismatch { id, stored, given }.into());
        }

        tables.check_unique(&record, Some(id))?;
        tables.check_department(&record)?;

        tables.records.insert(id, record);
        debug!("updated");
        Ok(())
    }

    fn get(&self, kind: RecordKind, id: RecordId) -> ProntuarioResult<Record> {
        let tables = self.read()?;

        tables
            .records
            .get(&id)
            .filter(|r| r.kind() == kind)
            .cloned()
            .ok_or_else(|| ApplicationError::RecordNotFound { kind, id }.into())
    }

    fn list(&self, kind: RecordKind) -> ProntuarioResult<Vec<RecordEntry>> {
        let tables = self.read()?;

        Ok(tables
            .of_kind(kind)
            .map(|(id, r)| RecordEntry::new(*id, r.clone()))
            .collect())
    }

    #[instrument(skip(self))]
    fn remove(&self, kind: RecordKind, id: RecordId) -> ProntuarioResult<()> {
        let mut tables = self.write()?;

        if !tables.records.get(&id).is_some_and(|r| r.kind() == kind) {
            return Err(ApplicationError::RecordNotFound { kind, id }.into());
        }

        if kind == RecordKind::Department {
            let nurses = tables.nurses_in(id);
            if nurses > 0 {
                return Err(ApplicationError::ProtectedDepartment { id, nurses }.into());
            }
        }

        tables.records.remove(&id);
        debug!("removed");
        Ok(())
    }
}
