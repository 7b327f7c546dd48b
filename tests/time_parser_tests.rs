use rschedule::errors::{AppError, TimeField};
use rschedule::parse_time;

fn minutes(s: &str) -> u16 {
    parse_time(s)
        .unwrap_or_else(|e| panic!("'{s}' should parse: {e}"))
        .minutes()
}

fn failing_field(s: &str) -> TimeField {
    match parse_time(s) {
        Err(AppError::InvalidTimeFormat { field, .. }) => field,
        other => panic!("'{s}' should fail with InvalidTimeFormat, got {other:?}"),
    }
}

#[test]
fn test_parse_meridiem_forms() {
    assert_eq!(minutes("9:30 AM"), 570);
    assert_eq!(minutes("2:15 PM"), 855);
    assert_eq!(minutes("9 AM"), 540);
    assert_eq!(minutes("12 AM"), 0);
    assert_eq!(minutes("12 PM"), 720);
    assert_eq!(minutes("12:55 AM"), 55);
    assert_eq!(minutes("11:59 PM"), 1439);
}

#[test]
fn test_parse_24h_forms() {
    assert_eq!(minutes("09:30"), 570);
    assert_eq!(minutes("14:15"), 855);
    assert_eq!(minutes("14"), 840);
    assert_eq!(minutes("0"), 0);
    assert_eq!(minutes("00:00"), 0);
    assert_eq!(minutes("23:59"), 1439);
}

#[test]
fn test_parse_is_whitespace_and_case_insensitive() {
    assert_eq!(minutes("  9:30am "), 570);
    assert_eq!(minutes("2:15pm"), 855);
    assert_eq!(minutes("9 : 30 Am"), 570);
    assert_eq!(minutes("09 PM"), 1260);
    assert_eq!(minutes("\t14:15\n"), 855);
}

#[test]
fn test_blanks_never_join_digits() {
    assert_eq!(failing_field("1 4"), TimeField::Minute);
    assert_eq!(failing_field("1 2 PM"), TimeField::Minute);
    assert_eq!(failing_field("9:3 0"), TimeField::Minute);
    assert_eq!(failing_field("9 :30 p m"), TimeField::Minute);
}

#[test]
fn test_parse_accepts_dot_separator() {
    assert_eq!(minutes("12.55"), 775);
    assert_eq!(minutes("2.30 PM"), 870);
}

#[test]
fn test_hour_out_of_range() {
    assert_eq!(failing_field("13 AM"), TimeField::Hour);
    assert_eq!(failing_field("0 PM"), TimeField::Hour);
    assert_eq!(failing_field("24"), TimeField::Hour);
    assert_eq!(failing_field("24:00"), TimeField::Hour);
    assert_eq!(failing_field("123"), TimeField::Hour);
    assert_eq!(failing_field(""), TimeField::Hour);
    assert_eq!(failing_field("noon"), TimeField::Hour);
}

#[test]
fn test_minute_out_of_range() {
    assert_eq!(failing_field("9:60"), TimeField::Minute);
    assert_eq!(failing_field("9:5"), TimeField::Minute);
    assert_eq!(failing_field("9:005"), TimeField::Minute);
    assert_eq!(failing_field("9:"), TimeField::Minute);
    assert_eq!(failing_field("10:75 PM"), TimeField::Minute);
}

#[test]
fn test_bad_meridiem() {
    assert_eq!(failing_field("9 XM"), TimeField::Meridiem);
    assert_eq!(failing_field("9:30 A"), TimeField::Meridiem);
    assert_eq!(failing_field("9 pmm"), TimeField::Meridiem);
}

#[test]
fn test_error_message_names_the_field() {
    let err = parse_time("13 AM").unwrap_err().to_string();
    assert!(err.contains("hour"), "{err}");
    assert!(err.contains("13 AM"), "{err}");

    let err = parse_time("9:61").unwrap_err().to_string();
    assert!(err.contains("minute"), "{err}");

    let err = parse_time("9 ZZ").unwrap_err().to_string();
    assert!(err.contains("meridiem"), "{err}");
}

#[test]
fn test_canonical_time_labels() {
    let t = parse_time("14:05").unwrap();
    assert_eq!(t.to_string(), "14:05");
    assert_eq!(t.to_12h(), "2:05 PM");
    assert_eq!(parse_time("0:00").unwrap().to_12h(), "12:00 AM");
    assert_eq!(parse_time("8").unwrap().to_12h(), "8:00 AM");
}
