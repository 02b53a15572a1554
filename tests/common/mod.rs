use person_card::date;
use person_card::person::{Person, SECONDS_PER_YEAR};
use person_card::time::{Date, UnixTime};

/// The day all tests are evaluated on, unless they use the system clock.
pub const TODAY: Date = date!(2024:06:15);

#[must_use]
pub fn make_person(full_name: &str, birthdate: &str) -> Person {
    Person::new_at(full_name, birthdate, TODAY).expect("person should be valid")
}

/// The instant exactly `years` fixed-length years after the start of `birthdate`.
#[must_use]
#[allow(dead_code)]
pub fn years_after(birthdate: Date, years: i64) -> UnixTime {
    UnixTime::from_secs(birthdate.midnight_utc().as_secs() + years * SECONDS_PER_YEAR)
}

#[allow(dead_code)]
pub fn debug_setup() {
    std::env::set_var("RUST_BACKTRACE", "1");
    std::env::set_var("RUST_APP_LOG", "trace");
    color_backtrace::install();
    let _ = pretty_env_logger::try_init_custom_env("RUST_APP_LOG");
}
