mod common;
use common::draft;

use rplanner::core::validate::{EntryDraft, validate};
use rplanner::errors::ValidationError;

#[test]
fn test_rejects_blank_names() {
    let d = draft(&[""], "Site", "09:00", "17:00");
    assert_eq!(validate(&d).unwrap_err(), ValidationError::NoNames);

    let d = draft(&["   ", "\t"], "Site", "09:00", "17:00");
    assert_eq!(validate(&d).unwrap_err(), ValidationError::NoNames);
}

#[test]
fn test_rejects_blank_location() {
    let d = draft(&["Alice"], "   ", "09:00", "17:00");
    assert_eq!(validate(&d).unwrap_err(), ValidationError::NoLocation);
}

#[test]
fn test_rejects_missing_times() {
    let d = EntryDraft {
        names: vec!["Alice".to_string()],
        location: "Office".to_string(),
        start: None,
        end: Some("17:00".to_string()),
    };
    assert_eq!(validate(&d).unwrap_err(), ValidationError::MissingTime);

    let d = EntryDraft {
        names: vec!["Alice".to_string()],
        location: "Office".to_string(),
        start: Some("09:00".to_string()),
        end: None,
    };
    assert_eq!(validate(&d).unwrap_err(), ValidationError::MissingTime);
}

#[test]
fn test_rejects_malformed_times() {
    let d = draft(&["Alice"], "Office", "9:5", "17:00");
    assert!(matches!(
        validate(&d).unwrap_err(),
        ValidationError::InvalidTime(_)
    ));

    let d = draft(&["Alice"], "Office", "09:00", "24:00");
    assert!(matches!(
        validate(&d).unwrap_err(),
        ValidationError::InvalidTime(_)
    ));
}

#[test]
fn test_rejects_end_before_start() {
    let d = draft(&["Alice"], "Office", "17:00", "09:00");
    assert_eq!(
        validate(&d).unwrap_err(),
        ValidationError::NonPositiveDuration
    );
}

#[test]
fn test_rejects_zero_duration() {
    let d = draft(&["Alice"], "Office", "09:00", "09:00");
    assert_eq!(
        validate(&d).unwrap_err(),
        ValidationError::NonPositiveDuration
    );
}

#[test]
fn test_accepts_and_normalizes() {
    let d = draft(&["Alice", "  "], "Office", "09:00", "17:30");
    let valid = validate(&d).expect("valid draft");

    assert_eq!(valid.names, vec!["Alice".to_string()]);
    assert_eq!(valid.location, "Office");
    assert_eq!(valid.hours.total, 8.5);
    assert_eq!(valid.hours.start_str(), "09:00");
    assert_eq!(valid.hours.end_str(), "17:30");
}

#[test]
fn test_trims_names_and_location() {
    let d = draft(&["  Alice  ", "Bob"], "  Yard 3  ", "08:00", "12:00");
    let valid = validate(&d).expect("valid draft");

    assert_eq!(
        valid.names,
        vec!["Alice".to_string(), "Bob".to_string()]
    );
    assert_eq!(valid.location, "Yard 3");
    assert_eq!(valid.hours.total, 4.0);
}

#[test]
fn test_first_failure_wins() {
    // Both names and location are bad; names are checked first.
    let d = draft(&["   "], "", "nope", "17:00");
    assert_eq!(validate(&d).unwrap_err(), ValidationError::NoNames);
}
