// Attendance record: one entry per user per calendar date.
//
// Lifecycle
// - Created by check in with only `check_in` set.
// - Patched once by check out (`check_out`, `working_hours`, `overtime` together).
// - Optionally patched again by an overtime reset (`overtime` only).
//
// Boundaries
// - This file must not perform input or output.

use crate::shared::core::primitives::{EpochMillis, RecordId, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: RecordId,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub check_in: EpochMillis,
    pub check_out: Option<EpochMillis>,
    pub working_hours: Option<f64>,
    pub overtime: Option<f64>,
}

/// Insert shape; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttendanceRecord {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub check_in: EpochMillis,
}

/// Partial update. `None` leaves the stored field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendancePatch {
    pub check_out: Option<EpochMillis>,
    pub working_hours: Option<f64>,
    pub overtime: Option<f64>,
}

impl AttendancePatch {
    pub fn check_out(check_out: EpochMillis, working_hours: f64, overtime: f64) -> Self {
        Self {
            check_out: Some(check_out),
            working_hours: Some(working_hours),
            overtime: Some(overtime),
        }
    }

    pub fn reset_overtime() -> Self {
        Self {
            overtime: Some(0.0),
            ..Self::default()
        }
    }

    pub fn apply_to(&self, record: &mut AttendanceRecord) {
        if let Some(check_out) = self.check_out {
            record.check_out = Some(check_out);
        }
        if let Some(working_hours) = self.working_hours {
            record.working_hours = Some(working_hours);
        }
        if let Some(overtime) = self.overtime {
            record.overtime = Some(overtime);
        }
    }
}

impl AttendanceRecord {
    pub fn from_new(id: RecordId, new: NewAttendanceRecord) -> Self {
        Self {
            id,
            user_id: new.user_id,
            date: new.date,
            check_in: new.check_in,
            check_out: None,
            working_hours: None,
            overtime: None,
        }
    }

    pub fn is_checked_out(&self) -> bool {
        self.check_out.is_some()
    }

    pub fn has_overtime(&self) -> bool {
        self.overtime.is_some_and(|overtime| overtime != 0.0)
    }
}
