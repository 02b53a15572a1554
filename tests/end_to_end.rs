//! Tests that go from the raw user input to the printed output.

use std::fs;

use person_card::input::{PersonFile, Report};
use person_card::date;
use person_card::{make_report, make_report_at};
use person_card::person::PersonError;
use person_card::time::UnixTime;

use pretty_assertions::assert_eq;

mod common;

use common::{make_person, years_after};

#[test]
fn test_report() {
    common::debug_setup();

    let person = make_person("Сидорова Мария Петровна", "15.03.1990");
    let report = Report::new(&person, years_after(person.birthdate(), 34));

    assert_eq!(report.initials(), "Сидорова М.П.");
    assert_eq!(report.gender(), "Ж");
    assert_eq!(report.age(), "34 года");
    assert_eq!(
        report.to_string(),
        "Сидорова М.П.\nЖ\n34 года".to_string()
    );
}

#[test]
fn test_make_report() {
    let report = make_report("Сидорова Мария Петровна", "15/03/1990").unwrap();
    let person = make_person("Сидорова Мария Петровна", "15.03.1990");

    assert_eq!(report.initials(), "Сидорова М.П.");
    assert_eq!(report.gender(), "Ж");

    // the age could change between the two clock reads
    let now = UnixTime::now();
    let expected = [
        person.age_at(UnixTime::from_secs(now.as_secs() - 60)).to_string(),
        person.age_at(now).to_string(),
    ];
    assert!(
        expected.iter().any(|age| age == report.age()),
        "{} is not one of {:?}",
        report.age(),
        expected
    );
}

#[test]
fn test_make_report_at() {
    let now = years_after(date!(1990:03:15), 34);
    let report = make_report_at("Сидорова Мария Петровна", "15.03.1990", now.date(), now)
        .expect("person should be valid");

    assert_eq!(
        report.to_string(),
        "Сидорова М.П.\nЖ\n34 года".to_string()
    );
    assert_eq!(
        make_report_at("Сидорова Мария Петровна", "15/03/1990", now.date(), now),
        Ok(report)
    );
}

#[test]
fn test_make_report_at_rejects_dates_after_today() {
    let now = years_after(date!(1990:03:15), 34);

    assert_eq!(
        make_report_at("Сидорова Мария Петровна", "15.03.1990", date!(1990:03:14), now),
        Err(PersonError::FutureDateNotAllowed {
            date: date!(1990:03:15)
        })
    );
}

#[test]
fn test_make_report_errors() {
    assert!(matches!(
        make_report("Сидорова", "15.03.1990"),
        Err(PersonError::InvalidNameFormat(_))
    ));
    assert!(matches!(
        make_report("Сидорова Мария", "15.3.1990"),
        Err(PersonError::InvalidDateFormat { .. })
    ));
    assert!(matches!(
        make_report("Сидорова Мария", "01.01.9999"),
        Err(PersonError::FutureDateNotAllowed { .. })
    ));
}

#[test]
fn test_unknown_gender_report() {
    let person = make_person("Петров Пётр", "01.02.2000");
    let report = Report::new(&person, years_after(person.birthdate(), 21));

    assert_eq!(
        report.to_string(),
        "Петров П.\nОПРЕДЕЛИТЬ_НЕ_УДАЛОСЬ\n21 год".to_string()
    );
}

#[test]
fn test_person_file_from_path() {
    let dir = tempfile::tempdir().expect("should be able to create a temporary directory");
    let path = dir.path().join("person.toml");

    fs::write(
        &path,
        concat!(
            //
            "[person]\n",
            "full_name = \"Иванов Иван Иванович\"\n",
            "birthdate = \"01/02/2000\"\n",
        ),
    )
    .expect("should be able to write the file");

    let file = PersonFile::from_path(&path).expect("file should be valid");
    let report = make_report(file.person().full_name(), file.person().birthdate())
        .expect("person should be valid");

    assert_eq!(report.initials(), "Иванов И.И.");
    assert_eq!(report.gender(), "М");
}

#[test]
fn test_person_file_missing() {
    let dir = tempfile::tempdir().expect("should be able to create a temporary directory");
    let error = PersonFile::from_path(dir.path().join("missing.toml")).unwrap_err();

    assert!(error.to_string().starts_with("failed to read"), "{}", error);
}
