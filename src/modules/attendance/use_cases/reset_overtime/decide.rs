// Pure decision function for the overtime reset.
//
// Every record carrying a nonzero overtime gets `overtime = 0`. Working hours, check in and
// check out stay as they are, so the daily state is not affected.

use crate::modules::attendance::core::record::{AttendancePatch, AttendanceRecord};
use crate::shared::core::primitives::RecordId;

pub fn decide_overtime_resets(records: &[AttendanceRecord]) -> Vec<(RecordId, AttendancePatch)> {
    records
        .iter()
        .filter(|record| record.has_overtime())
        .map(|record| (record.id.clone(), AttendancePatch::reset_overtime()))
        .collect()
}
