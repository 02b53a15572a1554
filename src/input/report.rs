use core::fmt;

use serde::Serialize;

use crate::person::Person;
use crate::time::UnixTime;

/// The derived attributes of a [`Person`], in the form they are presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    initials: String,
    gender: String,
    age: String,
}

impl Report {
    #[must_use]
    pub fn new(person: &Person, now: UnixTime) -> Self {
        Self {
            initials: person.initials(),
            gender: person.gender().to_string(),
            age: person.age_at(now).to_string(),
        }
    }

    #[must_use]
    pub fn initials(&self) -> &str {
        &self.initials
    }

    #[must_use]
    pub fn gender(&self) -> &str {
        &self.gender
    }

    #[must_use]
    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// One attribute per line: initials, gender and age.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.initials)?;
        writeln!(f, "{}", self.gender)?;
        write!(f, "{}", self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;
    use crate::person::SECONDS_PER_YEAR;

    fn report() -> Report {
        let person = Person::new_at("Петров Пётр", "01.01.2000", date!(2024:01:01)).unwrap();
        let now = UnixTime::from_secs(
            date!(2000:01:01).midnight_utc().as_secs() + 11 * SECONDS_PER_YEAR,
        );

        Report::new(&person, now)
    }

    #[test]
    fn test_display() {
        assert_eq!(
            report().to_string(),
            "Петров П.\nОПРЕДЕЛИТЬ_НЕ_УДАЛОСЬ\n11 лет".to_string()
        );
    }

    #[test]
    fn test_json() {
        let json: serde_json::Value =
            serde_json::from_str(&report().to_json().unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "initials": "Петров П.",
                "gender": "ОПРЕДЕЛИТЬ_НЕ_УДАЛОСЬ",
                "age": "11 лет",
            })
        );
    }
}
