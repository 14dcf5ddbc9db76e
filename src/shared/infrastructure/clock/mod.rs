// Wall clock port.
//
// Purpose
// - Resolve "now" and "today" once per request, in the inbound adapters, so use case handlers
//   receive them as explicit inputs.
//
// Notes
// - `SystemClock` uses the UTC calendar date. Users whose local midnight differs from UTC see
//   the day boundary at UTC midnight.

pub mod fixed;

use crate::shared::core::primitives::EpochMillis;
use chrono::{DateTime, NaiveDate, Utc};

pub trait Clock: Send + Sync {
    fn now_millis(&self) -> EpochMillis;

    fn today(&self) -> NaiveDate {
        date_of(self.now_millis())
    }

    /// One reading for both values, so "now" always falls on "today".
    fn read(&self) -> (EpochMillis, NaiveDate) {
        let now = self.now_millis();
        (now, date_of(now))
    }
}

pub fn date_of(millis: EpochMillis) -> NaiveDate {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|instant| instant.date_naive())
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> EpochMillis {
        Utc::now().timestamp_millis()
    }
}
