// Shared test inputs: the fixed caller, the fixed instant and command builders.

use crate::modules::attendance::use_cases::check_in::command::CheckIn;
use crate::modules::attendance::use_cases::check_out::command::CheckOut;
use crate::shared::core::primitives::{EpochMillis, UserId};
use chrono::NaiveDate;
use rstest::fixture;

/// 2023-11-14T08:00:00Z, early enough that a working day stays on the same date.
pub const NOW: EpochMillis = 1_699_948_800_000;

pub const CALLER: &str = "user-fixed-0001";

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 11, 14).unwrap()
}

#[fixture]
pub fn caller() -> UserId {
    UserId::new(CALLER)
}

#[fixture]
pub fn check_in_command() -> CheckIn {
    CheckIn {
        user_id: UserId::new(CALLER),
        date: today(),
        now: NOW,
    }
}

pub struct CheckOutBuilder {
    inner: CheckOut,
}

impl Default for CheckOutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CheckOutBuilder {
    pub fn new() -> Self {
        Self {
            inner: CheckOut {
                user_id: UserId::new(CALLER),
                date: today(),
                now: NOW + 8 * 3_600_000,
            },
        }
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = UserId::new(v);
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn now(mut self, v: EpochMillis) -> Self {
        self.inner.now = v;
        self
    }

    pub fn build(self) -> CheckOut {
        self.inner
    }
}

#[cfg(test)]
mod check_out_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = CheckOutBuilder::default().build();
        assert_eq!(built.user_id, UserId::new(CALLER));
        assert_eq!(built.date, today());
        assert_eq!(built.now, NOW + 8 * 3_600_000);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = CheckOutBuilder::new()
            .user_id("uid-456")
            .date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
            .now(3333)
            .build();
        assert_eq!(custom.user_id, UserId::new("uid-456"));
        assert_eq!(custom.date.to_string(), "2024-01-02");
        assert_eq!(custom.now, 3333);
    }
}
