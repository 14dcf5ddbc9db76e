// Daily attendance state for one user on one date.
//
// NoRecord -> CheckedIn -> CheckedOut. CheckedOut is terminal for the day; overtime resets do
// not move the state.

use crate::modules::attendance::core::record::AttendanceRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum AttendanceState {
    NoRecord,
    CheckedIn(AttendanceRecord),
    CheckedOut(AttendanceRecord),
}

impl AttendanceState {
    pub fn from_record(record: Option<AttendanceRecord>) -> Self {
        match record {
            None => AttendanceState::NoRecord,
            Some(record) if record.is_checked_out() => AttendanceState::CheckedOut(record),
            Some(record) => AttendanceState::CheckedIn(record),
        }
    }
}
