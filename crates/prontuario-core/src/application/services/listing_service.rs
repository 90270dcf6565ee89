//! Listing Service - the administrative table view.
//!
//! Each record kind declares the columns it shows in listings
//! (`Entity::LIST_DISPLAY`). This service turns stored records into rows
//! for those columns; the CLI decides how to render them.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::ports::RecordStore,
    domain::{Record, RecordId, RecordKind},
    error::ProntuarioResult,
};

/// One listed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow {
    pub id: RecordId,
    /// Values for [`ListTable::columns`], in the same order.
    pub cells: Vec<String>,
}

/// A listing of every stored record of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListTable {
    pub kind: RecordKind,
    pub columns: &'static [&'static str],
    pub rows: Vec<ListRow>,
}

impl ListTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Service for listing operations.
pub struct ListingService {
    store: Box<dyn RecordStore>,
}

impl ListingService {
    pub fn new(store: Box<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Build the listing for `kind`, ordered by id.
    #[instrument(skip(self))]
    pub fn table(&self, kind: RecordKind) -> ProntuarioResult<ListTable> {
        let mut entries = self.store.list(kind)?;
        entries.sort_by_key(|e| e.id);

        let rows: Vec<ListRow> = entries
            .into_iter()
            .map(|e| ListRow {
                id: e.id,
                cells: e.record.list_row(),
            })
            .collect();

        debug!(rows = rows.len(), "listing built");

        Ok(ListTable {
            kind,
            columns: Record::columns(kind),
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    use super::*;
    use crate::{
        application::{ApplicationError, ports::output::MockRecordStore},
        domain::{Department, Patient, RecordEntry, Sex},
    };

    fn patient(name: &str, cpf: &str) -> Patient {
        Patient {
            name: name.into(),
            birth_date: NaiveDate::from_ymd_opt(1988, 1, 30).unwrap(),
            sex: Sex::Female,
            cpf: cpf.into(),
            rg: "123456789".into(),
            mother_name: "Ana Costa".into(),
            father_name: None,
            primary_phone: "34912345678".into(),
            secondary_phone: None,
            email: "paciente@mail.com".into(),
            blood_type: "O+".into(),
        }
    }

    #[test]
    fn table_uses_list_display_columns() {
        let mut store = MockRecordStore::new();
        store
            .expect_list()
            .with(eq(RecordKind::Patient))
            .returning(|_| {
                Ok(vec![RecordEntry::new(
                    RecordId::new(1),
                    patient("Lia Costa", "11122233344").into(),
                )])
            });

        let table = ListingService::new(Box::new(store))
            .table(RecordKind::Patient)
            .unwrap();

        assert_eq!(table.columns, &["name", "cpf", "blood_type", "birth_date"]);
        assert_eq!(
            table.rows[0].cells,
            vec!["Lia Costa", "11122233344", "O+", "1988-01-30"]
        );
    }

    #[test]
    fn rows_are_ordered_by_id() {
        let mut store = MockRecordStore::new();
        store.expect_list().returning(|_| {
            Ok(vec![
                RecordEntry::new(RecordId::new(5), Department::new("Pediatria").into()),
                RecordEntry::new(RecordId::new(2), Department::new("UTI").into()),
            ])
        });

        let table = ListingService::new(Box::new(store))
            .table(RecordKind::Department)
            .unwrap();

        let ids: Vec<u64> = table.rows.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![2, 5]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn empty_store_gives_empty_table() {
        let mut store = MockRecordStore::new();
        store.expect_list().returning(|_| Ok(Vec::new()));

        let table = ListingService::new(Box::new(store))
            .table(RecordKind::Doctor)
            .unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns, &["name", "crm", "status"]);
    }

    #[test]
    fn store_errors_propagate() {
        let mut store = MockRecordStore::new();
        store
            .expect_list()
            .returning(|_| Err(ApplicationError::StoreLockError.into()));

        assert!(
            ListingService::new(Box::new(store))
                .table(RecordKind::Nurse)
                .is_err()
        );
    }
}
