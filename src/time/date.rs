use core::fmt;
use core::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

use crate::time::{Month, UnixTime, Year};
use crate::utils::StrExt;

#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        static_assertions::const_assert!($month >= 1 && $month <= 12);

        const _MONTH: $crate::time::Month = $crate::time::Month::new($month);

        // validate the day
        static_assertions::const_assert!($day != 0);
        static_assertions::const_assert!($day <= _YEAR.number_of_days_in_month(_MONTH));

        unsafe { $crate::time::Date::new_unchecked(_YEAR, _MONTH, $day) }
    }};
}

/// The number of days between 0000-01-01 and 1970-01-01.
const UNIX_EPOCH_DAYS: usize = 719_528;

pub(super) const SECONDS_PER_DAY: i64 = 86_400;

/// A day in the proleptic gregorian calendar.
///
/// The textual form is `dd.mm.yyyy`, which is used by both [`FromStr`] and [`fmt::Display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

impl Date {
    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();
        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    /// # Safety
    ///
    /// The `day` must exist in the `month` of the `year`.
    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    #[must_use]
    fn from_ordinal(year: Year, ordinal: usize) -> Self {
        debug_assert!(ordinal != 0 && ordinal <= year.days());

        let month = Month::months()
            .into_iter()
            .rev()
            .find(|month| year.days_before_month(*month) < ordinal)
            .unwrap_or(Month::January);

        Self {
            year,
            month,
            day: ordinal - year.days_before_month(month),
        }
    }

    #[must_use]
    fn from_days_since_base_date(days: usize) -> Self {
        let year = Year::from_days_since_base_date(days);
        // NOTE: +1 because the ordinal of the first day of the year is 1 and not 0
        let ordinal = (days - year.days_since_base_date()) + 1;
        Self::from_ordinal(year, ordinal)
    }

    /// Returns the date that is `days` after 1970-01-01, or `None` if the date
    /// would be before 0000-01-01.
    #[must_use]
    pub fn from_days_since_unix_epoch(days: i64) -> Option<Self> {
        let days = usize::try_from(days + UNIX_EPOCH_DAYS as i64).ok()?;

        Some(Self::from_days_since_base_date(days))
    }

    /// The current date in the local time zone of the system.
    #[must_use]
    pub fn today() -> Self {
        Self::try_from(Local::now().date_naive()).unwrap_or_else(|_| UnixTime::now().date())
    }
}

impl Date {
    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> usize {
        self.day
    }

    #[must_use]
    const fn ordinal(&self) -> usize {
        self.year().days_before_month(self.month()) + self.day()
    }

    #[must_use]
    const fn days_since_base_date(&self) -> usize {
        // the ordinal of the first day of the year is 1, so it has to be subtracted
        self.year.days_since_base_date() + self.ordinal() - 1
    }

    /// The number of days that passed between 1970-01-01 and `self`.
    ///
    /// This is negative for dates before 1970.
    #[must_use]
    pub const fn days_since_unix_epoch(&self) -> i64 {
        self.days_since_base_date() as i64 - UNIX_EPOCH_DAYS as i64
    }

    /// The instant at which this day starts in UTC.
    #[must_use]
    pub const fn midnight_utc(&self) -> UnixTime {
        UnixTime::from_secs(self.days_since_unix_epoch() * SECONDS_PER_DAY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("\"{input}\" is not valid date. Expected format: \"dd.mm.yyyy\"")]
    ParseDateError { input: String },
    #[error("{day:02} is not a valid day for {month:02}.{year:04}")]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
    },
    #[error("the year {year:04} does not exist")]
    InvalidYear { year: Year },
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}.{:02}.{:04}",
            self.day,
            self.month.as_usize(),
            self.year.as_usize(),
        )
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = InvalidDate;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = usize::try_from(date.year()).map_err(|_| InvalidDate::ParseDateError {
            input: date.to_string(),
        })?;
        let month = Month::try_from(date.month() as usize).map_err(|_| {
            InvalidDate::ParseDateError {
                input: date.to_string(),
            }
        })?;

        Self::new(Year::new(year), month, date.day() as usize)
    }
}

/// Parses a field that must consist of exactly `width` ascii digits.
fn parse_field(field: Option<&str>, width: usize, input: &str) -> Result<usize, InvalidDate> {
    let err = || InvalidDate::ParseDateError {
        input: input.to_string(),
    };

    let field = field.ok_or_else(err)?;
    if field.len() != width || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err());
    }

    field.parse::<usize>().map_err(|_| err())
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let [day, month, year] = string.split_exact::<3>(".");

        let day = parse_field(day, 2, string)?;
        let month = parse_field(month, 2, string)?;
        let year = Year::new(parse_field(year, 4, string)?);

        let month = Month::try_from(month).map_err(|_| InvalidDate::ParseDateError {
            input: string.to_string(),
        })?;

        // years are counted from 1 in the textual form
        if year.as_usize() == 0 {
            return Err(InvalidDate::InvalidYear { year });
        }

        Self::new(year, month, day)
    }
}
