// In memory implementation of the RecordStore port.
//
// Purpose
// - Support use case tests and local development without a database.
//
// Responsibilities
// - Keep records by id plus a composite (user_id, date) index.
// - Check uniqueness and apply the insert under one write lock so concurrent inserts for the
//   same day cannot both succeed.
// - Validate a whole patch batch before writing any of it, under the same write lock.

use crate::modules::attendance::adapters::outbound::record_store::{
    DateOrder, RecordStore, RecordStoreError,
};
use crate::modules::attendance::core::record::{
    AttendancePatch, AttendanceRecord, NewAttendanceRecord,
};
use crate::shared::core::primitives::{RecordId, UserId};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    records: HashMap<RecordId, AttendanceRecord>,
    by_user_and_date: HashMap<(UserId, NaiveDate), RecordId>,
}

#[derive(Default)]
pub struct InMemoryRecordStore {
    tables: RwLock<Tables>,
    is_offline: bool,
    delay_insert_ms: u64,
    delay_patch_ms: u64,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_insert_ms(&mut self, ms: u64) {
        self.delay_insert_ms = ms;
    }

    pub fn set_delay_patch_ms(&mut self, ms: u64) {
        self.delay_patch_ms = ms;
    }

    pub async fn len(&self) -> usize {
        self.tables.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn ensure_online(&self) -> Result<(), RecordStoreError> {
        if self.is_offline {
            return Err(RecordStoreError::Backend("Record store offline".into()));
        }
        Ok(())
    }

    async fn wait_before_patch(&self) {
        if self.delay_patch_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_patch_ms)).await;
        }
    }
}

fn check_patch(
    tables: &Tables,
    id: &RecordId,
    patch: &AttendancePatch,
) -> Result<(), RecordStoreError> {
    let record = tables
        .records
        .get(id)
        .ok_or_else(|| RecordStoreError::NotFound(id.clone()))?;
    if patch.check_out.is_some() && record.check_out.is_some() {
        return Err(RecordStoreError::CheckOutAlreadySet(id.clone()));
    }
    Ok(())
}

#[async_trait::async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn insert(&self, record: NewAttendanceRecord) -> Result<RecordId, RecordStoreError> {
        self.ensure_online()?;
        if self.delay_insert_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_insert_ms)).await;
        }

        let mut tables = self.tables.write().await;
        let key = (record.user_id.clone(), record.date);
        if tables.by_user_and_date.contains_key(&key) {
            return Err(RecordStoreError::Duplicate {
                user_id: record.user_id,
                date: record.date,
            });
        }

        let id = RecordId::generate();
        tables.by_user_and_date.insert(key, id.clone());
        tables
            .records
            .insert(id.clone(), AttendanceRecord::from_new(id.clone(), record));
        Ok(id)
    }

    async fn find_one(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<AttendanceRecord>, RecordStoreError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Ok(tables
            .by_user_and_date
            .get(&(user_id.clone(), date))
            .and_then(|id| tables.records.get(id))
            .cloned())
    }

    async fn patch(
        &self,
        id: &RecordId,
        patch: AttendancePatch,
    ) -> Result<AttendanceRecord, RecordStoreError> {
        self.ensure_online()?;
        self.wait_before_patch().await;

        let mut tables = self.tables.write().await;
        check_patch(&tables, id, &patch)?;
        let record = tables
            .records
            .get_mut(id)
            .ok_or_else(|| RecordStoreError::NotFound(id.clone()))?;
        patch.apply_to(record);
        Ok(record.clone())
    }

    async fn patch_many(
        &self,
        patches: Vec<(RecordId, AttendancePatch)>,
    ) -> Result<usize, RecordStoreError> {
        self.ensure_online()?;
        self.wait_before_patch().await;

        let mut tables = self.tables.write().await;
        for (id, patch) in &patches {
            check_patch(&tables, id, patch)?;
        }
        for (id, patch) in &patches {
            if let Some(record) = tables.records.get_mut(id) {
                patch.apply_to(record);
            }
        }
        Ok(patches.len())
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        order: DateOrder,
    ) -> Result<Vec<AttendanceRecord>, RecordStoreError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        let mut records: Vec<AttendanceRecord> = tables
            .records
            .values()
            .filter(|record| &record.user_id == user_id)
            .cloned()
            .collect();

        records.sort_by_key(|record| (record.date, record.check_in));
        if order == DateOrder::Desc {
            records.reverse();
        }
        Ok(records)
    }
}
