use chrono::Utc;

use super::date::SECONDS_PER_DAY;
use crate::time::Date;

/// An instant, counted in whole seconds since 1970-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnixTime(i64);

impl UnixTime {
    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// Reads the system clock.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    #[must_use]
    pub const fn as_secs(&self) -> i64 {
        self.0
    }

    /// The number of seconds between `earlier` and `self`, negative if `earlier`
    /// is after `self`.
    #[must_use]
    pub const fn secs_since(&self, earlier: Self) -> i64 {
        self.0 - earlier.0
    }

    /// The calendar day (in UTC) on which this instant lies.
    ///
    /// Instants before 0000-01-01 are mapped to that day.
    #[must_use]
    pub fn date(&self) -> Date {
        Date::from_days_since_unix_epoch(self.0.div_euclid(SECONDS_PER_DAY))
            .unwrap_or(crate::date!(0000:01:01))
    }
}
