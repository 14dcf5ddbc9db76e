// Record store port: what the attendance use cases need from persistence.
//
// Responsibilities
// - Insert a record, failing when (user_id, date) already exists. The store, not the caller's
//   pre-check, is the source of truth for that uniqueness.
// - Point lookup by (user_id, date), partial update by id, ordered scan by user.
// - Refuse a patch that sets `check_out` on a record that already has one.
// - Apply a batch of patches all or nothing.

use crate::modules::attendance::core::record::{
    AttendancePatch, AttendanceRecord, NewAttendanceRecord,
};
use crate::shared::core::primitives::{RecordId, UserId};
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordStoreError {
    #[error("record already exists for user {user_id} on {date}")]
    Duplicate { user_id: UserId, date: NaiveDate },

    #[error("record {0} not found")]
    NotFound(RecordId),

    #[error("record {0} is already checked out")]
    CheckOutAlreadySet(RecordId),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateOrder {
    Asc,
    #[default]
    Desc,
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert(&self, record: NewAttendanceRecord) -> Result<RecordId, RecordStoreError>;

    async fn find_one(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<AttendanceRecord>, RecordStoreError>;

    async fn patch(
        &self,
        id: &RecordId,
        patch: AttendancePatch,
    ) -> Result<AttendanceRecord, RecordStoreError>;

    /// Applies every patch or none of them. Returns the number of records written.
    async fn patch_many(
        &self,
        patches: Vec<(RecordId, AttendancePatch)>,
    ) -> Result<usize, RecordStoreError>;

    async fn list_by_user(
        &self,
        user_id: &UserId,
        order: DateOrder,
    ) -> Result<Vec<AttendanceRecord>, RecordStoreError>;
}
