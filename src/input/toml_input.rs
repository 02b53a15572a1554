use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::utils;

/// A toml file that describes a single person:
///
/// ```toml
/// [person]
/// full_name = "Иванов Иван Иванович"
/// birthdate = "01.02.2000"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonFile {
    person: PersonEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonEntry {
    full_name: String,
    birthdate: String,
}

impl PersonEntry {
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub fn birthdate(&self) -> &str {
        &self.birthdate
    }
}

impl PersonFile {
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = utils::read_to_string(path)
            .with_context(|| format!("failed to read \"{}\"", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse \"{}\"", path.display()))
    }

    #[must_use]
    pub fn person(&self) -> &PersonEntry {
        &self.person
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::person::Person;

    #[test]
    fn test_parse() {
        let file: PersonFile = toml::from_str(concat!(
            //
            "[person]\n",
            "full_name = \"Сидорова Мария Петровна\"\n",
            "birthdate = \"15/03/1990\"\n",
        ))
        .expect("toml should be valid");

        assert_eq!(file.person().full_name(), "Сидорова Мария Петровна");
        assert_eq!(file.person().birthdate(), "15/03/1990");
        assert_eq!(
            Person::new(file.person().full_name(), file.person().birthdate())
                .map(|person| person.initials()),
            Ok("Сидорова М.П.".to_string())
        );
    }

    #[test]
    fn test_missing_field() {
        let result = toml::from_str::<PersonFile>(concat!(
            //
            "[person]\n",
            "full_name = \"Сидорова Мария Петровна\"\n",
        ));

        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field() {
        let result = toml::from_str::<PersonFile>(concat!(
            //
            "[person]\n",
            "full_name = \"Сидорова Мария Петровна\"\n",
            "birthdate = \"15.03.1990\"\n",
            "gender = \"Ж\"\n",
        ));

        assert!(result.is_err());
    }
}
