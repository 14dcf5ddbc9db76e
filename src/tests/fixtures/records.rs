use crate::modules::attendance::adapters::outbound::record_store_in_memory::InMemoryRecordStore;
use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::attendance::core::rules::compute_overtime;
use crate::modules::attendance::use_cases::check_in::handler::CheckInHandler;
use crate::modules::attendance::use_cases::check_out::handler::CheckOutHandler;
use crate::shared::core::primitives::{EpochMillis, MILLIS_PER_HOUR, RecordId, UserId};
use crate::tests::fixtures::commands::{CALLER, NOW, today};
use chrono::{Days, Duration};
use std::sync::Arc;

const DAY: EpochMillis = 86_400_000;

pub struct AttendanceRecordBuilder {
    inner: AttendanceRecord,
}

impl Default for AttendanceRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendanceRecordBuilder {
    pub fn new() -> Self {
        Self {
            inner: AttendanceRecord {
                id: RecordId::from("rec-fixed-0001"),
                user_id: UserId::new(CALLER),
                date: today(),
                check_in: NOW,
                check_out: None,
                working_hours: None,
                overtime: None,
            },
        }
    }

    pub fn id(mut self, v: &str) -> Self {
        self.inner.id = RecordId::from(v);
        self
    }

    /// Moves the record `days` calendar days away, timestamps included.
    pub fn day_offset(mut self, days: i64) -> Self {
        self.inner.date += Duration::days(days);
        self.inner.check_in += days * DAY;
        self.inner.check_out = self.inner.check_out.map(|out| out + days * DAY);
        self
    }

    pub fn check_in(mut self, v: EpochMillis) -> Self {
        self.inner.check_in = v;
        self
    }

    pub fn checked_out_after_hours(mut self, hours: f64) -> Self {
        self.inner.check_out = Some(self.inner.check_in + (hours * MILLIS_PER_HOUR).round() as i64);
        self.inner.working_hours = Some(hours);
        self.inner.overtime = Some(compute_overtime(hours));
        self
    }

    pub fn overtime(mut self, v: f64) -> Self {
        self.inner.overtime = Some(v);
        self
    }

    pub fn build(self) -> AttendanceRecord {
        self.inner
    }
}

/// Checks `user_id` in and out through the real handlers, one day per entry in `hours`,
/// starting on `today()`.
pub async fn seed_worked_days(store: &Arc<InMemoryRecordStore>, user_id: &UserId, hours: &[f64]) {
    let check_in = CheckInHandler::new(store.clone());
    let check_out = CheckOutHandler::new(store.clone());
    for (offset, worked) in hours.iter().enumerate() {
        let date = today() + Days::new(offset as u64);
        let start = NOW + offset as i64 * DAY;
        check_in
            .handle(Some(user_id), date, start)
            .await
            .expect("seed check in failed");
        check_out
            .handle(
                Some(user_id),
                date,
                start + (worked * MILLIS_PER_HOUR).round() as i64,
            )
            .await
            .expect("seed check out failed");
    }
}

#[cfg(test)]
mod attendance_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_shift_dates_and_timestamps_together() {
        let record = AttendanceRecordBuilder::new()
            .checked_out_after_hours(9.0)
            .day_offset(2)
            .build();
        assert_eq!(record.date.to_string(), "2023-11-16");
        assert_eq!(record.check_in, NOW + 2 * DAY);
        assert_eq!(record.check_out, Some(NOW + 2 * DAY + 9 * 3_600_000));
        assert_eq!(record.working_hours, Some(9.0));
        assert_eq!(record.overtime, Some(1.0));
    }
}
