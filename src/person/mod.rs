mod age;
mod error;
mod full_name;
mod gender;

pub use age::*;
pub use error::*;
pub use full_name::*;
pub use gender::*;

use crate::time::{Date, UnixTime};

/// A person with a validated name and birthdate.
///
/// A `Person` can only be created through [`Person::new`] or [`Person::new_at`],
/// which validate all inputs, so every existing value is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: FullName,
    birthdate: Date,
    gender: Gender,
}

impl Person {
    /// Creates a new person, using the local date of the system to decide
    /// whether the birthdate is in the future.
    ///
    /// # Errors
    ///
    /// See [`Person::new_at`].
    pub fn new(full_name: &str, birthdate: &str) -> Result<Self, PersonError> {
        Self::new_at(full_name, birthdate, Date::today())
    }

    /// Creates a new person from a full name like `Иванов Иван Иванович` and a
    /// birthdate in the form `dd.mm.yyyy` or `dd/mm/yyyy`.
    ///
    /// # Errors
    ///
    /// - [`PersonError::InvalidNameFormat`] if the name does not consist of two or three parts
    /// - [`PersonError::InvalidDateFormat`] if the birthdate is not a valid date
    /// - [`PersonError::FutureDateNotAllowed`] if the birthdate is after `today`
    pub fn new_at(full_name: &str, birthdate: &str, today: Date) -> Result<Self, PersonError> {
        let name = full_name.parse::<FullName>()?;
        let gender = Gender::from_patronymic(name.patronymic());
        let birthdate = parse_birthdate(birthdate, today)?;

        Ok(Self {
            name,
            birthdate,
            gender,
        })
    }
}

fn parse_birthdate(input: &str, today: Date) -> Result<Date, PersonError> {
    let normalized = input.replace('/', ".");

    let date = normalized
        .parse::<Date>()
        .map_err(|source| PersonError::InvalidDateFormat {
            input: input.to_string(),
            source,
        })?;

    if date > today {
        return Err(PersonError::FutureDateNotAllowed { date });
    }

    Ok(date)
}

impl Person {
    #[must_use]
    pub fn name(&self) -> &FullName {
        &self.name
    }

    #[must_use]
    pub fn surname(&self) -> &str {
        self.name.surname()
    }

    #[must_use]
    pub fn given_name(&self) -> &str {
        self.name.given_name()
    }

    #[must_use]
    pub fn patronymic(&self) -> Option<&str> {
        self.name.patronymic()
    }

    /// The parts of the name separated by a single space.
    #[must_use]
    pub fn full_name(&self) -> String {
        self.name.to_string()
    }

    #[must_use]
    pub fn birthdate(&self) -> Date {
        self.birthdate
    }

    #[must_use]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    #[must_use]
    pub fn initials(&self) -> String {
        self.name.initials()
    }

    #[must_use]
    pub fn age(&self) -> Age {
        self.age_at(UnixTime::now())
    }

    #[must_use]
    pub fn age_at(&self, now: UnixTime) -> Age {
        Age::between(self.birthdate, now)
    }
}
