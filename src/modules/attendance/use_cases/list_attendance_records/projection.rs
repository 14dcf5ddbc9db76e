use crate::modules::attendance::core::record::AttendanceRecord;
use crate::shared::core::primitives::EpochMillis;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Record as listed to its owner: no identifiers, only the day and its figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecordView {
    pub date: NaiveDate,
    pub check_in: EpochMillis,
    pub check_out: Option<EpochMillis>,
    pub working_hours: Option<f64>,
    pub overtime: Option<f64>,
}

impl From<AttendanceRecord> for AttendanceRecordView {
    fn from(record: AttendanceRecord) -> Self {
        Self {
            date: record.date,
            check_in: record.check_in,
            check_out: record.check_out,
            working_hours: record.working_hours,
            overtime: record.overtime,
        }
    }
}
