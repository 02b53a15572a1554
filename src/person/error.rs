use derive_more::Display;
use thiserror::Error;

use crate::time::{Date, InvalidDate};

/// Which bound of the allowed number of name elements was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NameArity {
    #[display("Меньше двух элементов")]
    TooFew,
    #[display("Больше трех элементов")]
    TooMany,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonError {
    #[error("Неверный формат ФИО. {0}")]
    InvalidNameFormat(NameArity),
    #[error("Неверный формат даты рождения. Должно быть dd.mm.yyyy или dd/mm/yyyy")]
    InvalidDateFormat { input: String, source: InvalidDate },
    #[error("Дата ещё не наступила")]
    FutureDateNotAllowed { date: Date },
}
