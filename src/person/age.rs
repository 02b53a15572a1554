use core::fmt;

use crate::time::{Date, UnixTime};

/// The length of a year in seconds, assuming 365.25 days per year.
pub const SECONDS_PER_YEAR: i64 = 31_557_600;

/// The word following a number of years. Numbers below 15 are looked up
/// directly, all other numbers by their last digit.
static YEAR_WORDS: [&str; 15] = [
    "лет", "год", "года", "года", "года", "лет", "лет", "лет", "лет", "лет", "лет", "лет", "лет",
    "лет", "лет",
];

/// A number of whole years, displayed with the matching russian word (`21 год`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Age {
    years: u64,
}

impl Age {
    #[must_use]
    pub const fn new(years: u64) -> Self {
        Self { years }
    }

    /// The number of years between the start of `birthdate` (in UTC) and `now`.
    ///
    /// A year is always 365.25 days long, so the result can be off by one
    /// close to a birthday. If `now` is before the birthdate, the age is zero.
    #[must_use]
    pub fn between(birthdate: Date, now: UnixTime) -> Self {
        let years = now.secs_since(birthdate.midnight_utc()) / SECONDS_PER_YEAR;

        Self::new(u64::try_from(years).unwrap_or(0))
    }

    #[must_use]
    pub const fn years(&self) -> u64 {
        self.years
    }

    #[must_use]
    pub fn word(&self) -> &'static str {
        let index = if self.years < YEAR_WORDS.len() as u64 {
            self.years
        } else {
            self.years % 10
        };

        YEAR_WORDS[index as usize]
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.years, self.word())
    }
}
