use core::fmt;
use core::str::FromStr;

use crate::person::{NameArity, PersonError};

/// A surname, a given name and an optional patronymic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullName {
    surname: String,
    given_name: String,
    patronymic: Option<String>,
}

impl FullName {
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    #[must_use]
    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    #[must_use]
    pub fn patronymic(&self) -> Option<&str> {
        self.patronymic.as_deref()
    }

    /// Returns the surname followed by the initials of the given name and the
    /// patronymic, for example `Иванов И.И.`.
    #[must_use]
    pub fn initials(&self) -> String {
        let mut result = format!("{} ", self.surname);

        for part in [Some(self.given_name()), self.patronymic()]
            .into_iter()
            .flatten()
        {
            if let Some(initial) = part.chars().next() {
                result.push(initial);
                result.push('.');
            }
        }

        result
    }
}

impl FromStr for FullName {
    type Err = PersonError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let parts = string.split_whitespace().collect::<Vec<_>>();

        match parts[..] {
            [surname, given_name] => Ok(Self {
                surname: surname.to_string(),
                given_name: given_name.to_string(),
                patronymic: None,
            }),
            [surname, given_name, patronymic] => Ok(Self {
                surname: surname.to_string(),
                given_name: given_name.to_string(),
                patronymic: Some(patronymic.to_string()),
            }),
            [] | [_] => Err(PersonError::InvalidNameFormat(NameArity::TooFew)),
            _ => Err(PersonError::InvalidNameFormat(NameArity::TooMany)),
        }
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.surname, self.given_name)?;

        if let Some(patronymic) = &self.patronymic {
            write!(f, " {}", patronymic)?;
        }

        Ok(())
    }
}
