use core::fmt;

use crate::time::Month;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Year(usize);

impl Year {
    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A leap year is a calendar year that contains an additional day added to February, so
    /// it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        // https://en.wikipedia.org/wiki/Leap_year#Algorithm
        self.as_usize() % 4 == 0 && (self.as_usize() % 100 != 0 || self.as_usize() % 400 == 0)
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::January => 31,
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }

    /// Returns the number of days in this year.
    #[must_use]
    pub const fn days(&self) -> usize {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// The number of days that passed in this year before the first day of `month`.
    #[must_use]
    pub const fn days_before_month(&self, month: Month) -> usize {
        let mut result = 0;
        let mut current = Month::January;

        while current.as_usize() < month.as_usize() {
            result += self.number_of_days_in_month(current);
            current = current.next();
        }

        result
    }

    /// The number of days between 0000-01-01 and the first day of this year.
    ///
    /// The proleptic gregorian calendar is assumed, so the year 0 is a leap year.
    #[must_use]
    pub(super) const fn days_since_base_date(&self) -> usize {
        let year = self.as_usize();
        // leap years in the range 0..year
        let leap_years = (year + 3) / 4 - (year + 99) / 100 + (year + 399) / 400;

        365 * year + leap_years
    }

    #[must_use]
    pub(super) fn from_days_since_base_date(days: usize) -> Self {
        // every year has either 365 or 366 days, so the year is somewhere in between
        let lower_year = days / 366;
        let upper_year = days / 365;

        (lower_year..=upper_year)
            .map(Self::new)
            .find(|year| {
                year.days_since_base_date() <= days && year.next().days_since_base_date() > days
            })
            .unwrap_or(Self::new(upper_year))
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_usize(), f)
    }
}

impl From<usize> for Year {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}
