use rplanner::errors::AppError;
use rplanner::utils::date::{format_display_date, month_bounds, month_name, parse_date, today};

#[test]
fn test_parse_date() {
    let d = parse_date("2024-02-29").expect("leap day");
    assert_eq!(d.to_string(), "2024-02-29");

    assert!(parse_date("2023-02-29").is_none());
    assert!(parse_date("2024-13-01").is_none());
    assert!(parse_date("not-a-date").is_none());
}

#[test]
fn test_month_bounds_by_month_length() {
    let cases = [
        (2024, 1, "2024-01-01", "2024-01-31"),
        (2024, 2, "2024-02-01", "2024-02-29"), // leap
        (2023, 2, "2023-02-01", "2023-02-28"),
        (1900, 2, "1900-02-01", "1900-02-28"), // divisible by 100, not 400
        (2000, 2, "2000-02-01", "2000-02-29"), // divisible by 400
        (2024, 4, "2024-04-01", "2024-04-30"),
        (2024, 12, "2024-12-01", "2024-12-31"),
    ];

    for (year, month, first, last) in cases {
        let (f, l) = month_bounds(year, month).expect("bounds");
        assert_eq!(f.to_string(), first);
        assert_eq!(l.to_string(), last);
    }
}

#[test]
fn test_month_bounds_rejects_invalid_month() {
    assert!(matches!(month_bounds(2024, 0), Err(AppError::InvalidDate(_))));
    assert!(matches!(month_bounds(2024, 13), Err(AppError::InvalidDate(_))));
}

#[test]
fn test_month_name() {
    assert_eq!(month_name(1), "January");
    assert_eq!(month_name(2), "February");
    assert_eq!(month_name(12), "December");
    assert_eq!(month_name(0), "Unknown");
}

#[test]
fn test_format_display_date() {
    let d = parse_date("2024-02-10").expect("date"); // a Saturday

    assert_eq!(format_display_date(d, "None"), "2024-02-10");
    assert_eq!(format_display_date(d, "Short"), "Sat 2024-02-10");
    assert_eq!(format_display_date(d, "Full"), "Saturday 2024-02-10");
    assert_eq!(format_display_date(d, "anything-else"), "2024-02-10");
}

#[test]
fn test_today_is_a_plain_calendar_date() {
    let t = today();
    assert!(parse_date(&t.to_string()).is_some());
}
