use derive_more::Display;

const MALE_SUFFIX: &str = "ич";
const FEMALE_SUFFIXES: [&str; 4] = ["овна", "евна", "ична", "инична"];

/// The grammatical gender, inferred from the ending of a patronymic.
///
/// The [`Display`](core::fmt::Display) implementation produces the tokens
/// `М`, `Ж` and `ОПРЕДЕЛИТЬ_НЕ_УДАЛОСЬ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Gender {
    #[display("М")]
    Male,
    #[display("Ж")]
    Female,
    #[display("ОПРЕДЕЛИТЬ_НЕ_УДАЛОСЬ")]
    Unknown,
}

impl Gender {
    #[must_use]
    pub fn from_patronymic(patronymic: Option<&str>) -> Self {
        let Some(patronymic) = patronymic else {
            return Self::Unknown;
        };

        if patronymic.ends_with(MALE_SUFFIX) {
            Self::Male
        } else if FEMALE_SUFFIXES
            .iter()
            .any(|suffix| patronymic.ends_with(suffix))
        {
            Self::Female
        } else {
            Self::Unknown
        }
    }
}
