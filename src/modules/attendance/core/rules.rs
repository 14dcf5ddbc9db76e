// Attendance rules: derived fields at check out and aggregate statistics.
//
// Boundaries
// - Pure functions only. No input or output, no clock access.
// - Aggregates are recomputed from the full record set on every call.

use crate::modules::attendance::core::record::AttendanceRecord;
use crate::shared::core::primitives::{EpochMillis, MILLIS_PER_HOUR};
use serde::{Deserialize, Serialize};

/// Daily threshold after which worked hours count as overtime.
pub const OVERTIME_THRESHOLD_HOURS: f64 = 8.0;

/// Overtime hours that accrue one compensatory day.
pub const HOURS_PER_COMPENSATORY_DAY: f64 = 8.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStats {
    pub total_days: u64,
    pub average_hours: f64,
    pub total_overtime: f64,
    pub compensatory_days: u64,
}

/// Fractional hours between the two instants. Not validated: a check out before the check in
/// yields a negative value.
pub fn compute_working_hours(check_in: EpochMillis, check_out: EpochMillis) -> f64 {
    (check_out - check_in) as f64 / MILLIS_PER_HOUR
}

pub fn compute_overtime(working_hours: f64) -> f64 {
    (working_hours - OVERTIME_THRESHOLD_HOURS).max(0.0)
}

pub fn aggregate_stats<'a>(
    records: impl IntoIterator<Item = &'a AttendanceRecord>,
) -> AttendanceStats {
    let (total_days, total_working_hours, total_overtime) = records.into_iter().fold(
        (0u64, 0.0f64, 0.0f64),
        |(days, hours, overtime), record| {
            (
                days + 1,
                hours + record.working_hours.unwrap_or(0.0),
                overtime + record.overtime.unwrap_or(0.0),
            )
        },
    );

    let average_hours = if total_days > 0 {
        total_working_hours / total_days as f64
    } else {
        0.0
    };

    AttendanceStats {
        total_days,
        average_hours,
        total_overtime,
        compensatory_days: (total_overtime / HOURS_PER_COMPENSATORY_DAY).floor().max(0.0) as u64,
    }
}
