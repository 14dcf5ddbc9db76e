// Pure decision function for check in.
//
// - NoRecord: insert a record with only `check_in` set.
// - Any existing record for the date: reject with AlreadyCheckedIn.

use crate::modules::attendance::core::decision::{DecideError, Decision};
use crate::modules::attendance::core::record::NewAttendanceRecord;
use crate::modules::attendance::core::state::AttendanceState;
use crate::modules::attendance::use_cases::check_in::command::CheckIn;

pub fn decide_check_in(state: &AttendanceState, command: CheckIn) -> Decision<NewAttendanceRecord> {
    match state {
        AttendanceState::NoRecord => Decision::Accepted(NewAttendanceRecord {
            user_id: command.user_id,
            date: command.date,
            check_in: command.now,
        }),
        AttendanceState::CheckedIn(_) | AttendanceState::CheckedOut(_) => Decision::Rejected {
            reason: DecideError::AlreadyCheckedIn,
        },
    }
}
