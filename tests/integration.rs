//! Integration tests for the schema formats library

use chrono::{Datelike, NaiveDate};
use schema_formats::batch::{check_file, check_files, expand_patterns};
use schema_formats::date::{
    find_date, format_date, parse_date, parse_date_with_pivot, DateFormatOptions,
};
use schema_formats::{check_format, matcher_for, validate_format, Error, FormatName};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_validate_by_name() {
    let matcher = matcher_for("uuid").expect("uuid has a matcher");
    assert!(matcher.is_match("550e8400-e29b-41d4-a716-446655440000"));
    assert!(matcher.is_match("550E8400-E29B-41D4-A716-446655440000"));

    assert!(matcher_for("credit-card").is_none());
}

#[test]
fn test_documented_examples() {
    assert!(!validate_format(FormatName::Ipv4, "256.1.1.1"));
    assert!(validate_format(FormatName::Ipv4, "255.255.255.255"));
    assert!(!validate_format(FormatName::Regex, "a\\Zb"));
    assert!(validate_format(FormatName::Regex, "a+b*"));

    assert_eq!(find_date("Order placed 2023-11-05 by user"), Some("2023-11-05"));
    assert_eq!(parse_date("2023-11-05"), NaiveDate::from_ymd_opt(2023, 11, 5));
    assert_eq!(parse_date("11-05-2023"), NaiveDate::from_ymd_opt(2023, 11, 5));
    assert_eq!(
        parse_date_with_pivot("05-11-23", 2024),
        NaiveDate::from_ymd_opt(2023, 5, 11)
    );

    let date = NaiveDate::from_ymd_opt(2023, 11, 5).unwrap();
    assert_eq!(
        format_date(date, &DateFormatOptions::default()).as_deref(),
        Some("2023-11-05")
    );
    assert_eq!(
        format_date(date, &DateFormatOptions::with_format("MMMM D, YYYY")).as_deref(),
        Some("November 5, 2023")
    );
}

#[test]
fn test_iso_round_trip() {
    let options = DateFormatOptions::with_format("YYYY-MM-DD");
    let mut date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2099, 12, 31).unwrap();

    while date <= end {
        let rendered = format_date(date, &options).unwrap();
        assert_eq!(parse_date(&rendered), Some(date), "round trip of {}", rendered);
        date += chrono::Duration::days(37);
    }
}

#[test]
fn test_round_trip_stops_outside_1900_to_2099() {
    let options = DateFormatOptions::with_format("YYYY-MM-DD");
    for (y, m, d) in [(2100, 1, 1), (1899, 12, 31), (500, 1, 1)] {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let rendered = format_date(date, &options).unwrap();
        assert_eq!(parse_date(&rendered), None, "{} should not be read back", rendered);
    }
    assert_eq!(parse_date("2100-01-01"), None);
}

#[test]
fn test_day_first_input_is_absent() {
    let options = DateFormatOptions::default();
    assert_eq!(find_date("31/12/2023"), None);
    assert_eq!(parse_date("31/12/2023"), None);
    assert_eq!(parse_date_with_pivot("25/12/2023", 2024), None);
    assert_eq!(format_date("31/12/2023", &options), None);
}

#[test]
fn test_month_ends_round_trip() {
    let options = DateFormatOptions::with_format("YYYY/M/D");
    for year in [1999, 2000, 2023, 2024] {
        for month in 1..=12u32 {
            let next = if month == 12 {
                NaiveDate::from_ymd_opt(year + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(year, month + 1, 1)
            }
            .unwrap();
            let last = next.pred_opt().unwrap();
            assert_eq!(last.month(), month);

            let rendered = format_date(last, &options).unwrap();
            assert_eq!(parse_date(&rendered), Some(last));
        }
    }
}

#[test]
fn test_form_value_flow() {
    // A date typed into a form field in US order is stored as a date and
    // shown back in the form's display template.
    let typed = "12/25/2023";
    let stored = format_date(typed, &DateFormatOptions::default()).unwrap();
    assert!(validate_format(FormatName::Date, &stored));
    assert_eq!(stored, "2023-12-25");

    let options = DateFormatOptions::from_json(r#"{"dateFormat":"DDDD, MMMM DS"}"#).unwrap();
    assert_eq!(
        format_date(stored.as_str(), &options).as_deref(),
        Some("Monday, December 25th")
    );
}

#[test]
fn test_check_format_violation() {
    assert!(check_format(FormatName::Hostname, "").is_ok());
    let violation = check_format(FormatName::Hostname, "bad_host").unwrap_err();
    assert_eq!(violation.required_format, "hostname");
    assert_eq!(violation.actual_value, "bad_host");
}

#[test]
fn test_check_file_reports_failing_lines() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("emails.txt");
    fs::write(&path, "user@example.com\n\nnot-an-email\n  \nadmin@localhost\n@nope\n").unwrap();

    let report = check_file(&path, FormatName::Email).expect("Failed to check file");

    assert_eq!(report.checked, 4);
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.failures[0].line, 3);
    assert_eq!(report.failures[0].value, "not-an-email");
    assert_eq!(report.failures[1].line, 6);
    assert_eq!(report.failures[1].value, "@nope");
    assert!(!report.is_clean());
}

#[test]
fn test_check_files_with_glob() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("b.txt"), "10.0.0.1\n300.0.0.1\n").unwrap();
    fs::write(temp_dir.path().join("a.txt"), "127.0.0.1\r\n8.8.8.8\r\n").unwrap();
    fs::write(temp_dir.path().join("c.csv"), "not,checked\n").unwrap();

    let pattern = temp_dir.path().join("*.txt").display().to_string();
    let paths = expand_patterns(&[pattern]).expect("Failed to expand pattern");
    assert_eq!(paths.len(), 2);
    assert!(paths[0].ends_with("a.txt"));

    let report = check_files(&paths, FormatName::Ipv4).expect("Failed to check files");
    assert_eq!(report.checked, 4);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].path.ends_with("b.txt"));
    assert_eq!(report.failures[0].line, 2);
}

#[test]
fn test_check_nonexistent_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("missing.txt");

    let result = check_files(&[missing], FormatName::Uri);
    assert!(result.is_err(), "Should fail with nonexistent file");

    if let Err(e) = result {
        assert!(matches!(e, Error::FileNotFound(_)));
        assert!(
            e.to_string().contains("not found"),
            "Error should mention file not found: {}",
            e
        );
    }
}

#[test]
fn test_concurrent_use() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                for _ in 0..50 {
                    assert!(validate_format(FormatName::Color, "#abcdef"));
                    assert!(validate_format(FormatName::Url, "https://example.com"));
                    let text = format!("2023-11-0{}", i + 1);
                    assert_eq!(
                        parse_date(&text),
                        NaiveDate::from_ymd_opt(2023, 11, i + 1)
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }
}
