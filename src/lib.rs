mod utils;

pub mod input;
pub mod person;
pub mod time;

use crate::input::Report;
use crate::person::{Person, PersonError};
use crate::time::{Date, UnixTime};

/// Validates the raw input and derives the attributes that are shown to the user.
///
/// The birthdate must not be after the local date, the age is counted up to
/// the current instant.
pub fn make_report(full_name: &str, birthdate: &str) -> Result<Report, PersonError> {
    make_report_at(full_name, birthdate, Date::today(), UnixTime::now())
}

/// Like [`make_report`], but with an explicit `today` for the future date check
/// and `now` for the age.
pub fn make_report_at(
    full_name: &str,
    birthdate: &str,
    today: Date,
    now: UnixTime,
) -> Result<Report, PersonError> {
    let person = Person::new_at(full_name, birthdate, today)?;

    Ok(Report::new(&person, now))
}
