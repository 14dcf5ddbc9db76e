// Pure decision function for check out.
//
// - NoRecord: reject with NoCheckInFound.
// - CheckedIn: patch check_out, working_hours and overtime together.
// - CheckedOut: reject with AlreadyCheckedOut.

use crate::modules::attendance::core::decision::{DecideError, Decision};
use crate::modules::attendance::core::record::AttendancePatch;
use crate::modules::attendance::core::rules::{compute_overtime, compute_working_hours};
use crate::modules::attendance::core::state::AttendanceState;
use crate::modules::attendance::use_cases::check_out::command::CheckOut;
use crate::shared::core::primitives::RecordId;

pub fn decide_check_out(
    state: &AttendanceState,
    command: CheckOut,
) -> Decision<(RecordId, AttendancePatch)> {
    match state {
        AttendanceState::NoRecord => Decision::Rejected {
            reason: DecideError::NoCheckInFound,
        },
        AttendanceState::CheckedIn(record) => {
            let working_hours = compute_working_hours(record.check_in, command.now);
            let overtime = compute_overtime(working_hours);
            Decision::Accepted((
                record.id.clone(),
                AttendancePatch::check_out(command.now, working_hours, overtime),
            ))
        }
        AttendanceState::CheckedOut(_) => Decision::Rejected {
            reason: DecideError::AlreadyCheckedOut,
        },
    }
}
