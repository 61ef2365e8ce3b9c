//! Tests for `HH:mm` parsing, rendering and minute arithmetic.

use table_planner::{minutes_to_time, time_to_minutes, TimeOfDay, ValidationError};

#[test]
fn parses_to_minutes_since_midnight() {
    assert_eq!(time_to_minutes("00:00"), Ok(0));
    assert_eq!(time_to_minutes("09:00"), Ok(540));
    assert_eq!(time_to_minutes("12:34"), Ok(754));
    assert_eq!(time_to_minutes("23:59"), Ok(1439));
    assert_eq!(time_to_minutes("24:00"), Ok(1440));
}

#[test]
fn renders_zero_padded() {
    assert_eq!(minutes_to_time(0).as_deref(), Some("00:00"));
    assert_eq!(minutes_to_time(65).as_deref(), Some("01:05"));
    assert_eq!(minutes_to_time(600).as_deref(), Some("10:00"));
    assert_eq!(minutes_to_time(1440).as_deref(), Some("24:00"));
}

#[test]
fn rendering_past_end_of_day_is_none() {
    assert_eq!(minutes_to_time(1441), None);
    assert_eq!(minutes_to_time(1500), None);
}

#[test]
fn malformed_times_are_validation_errors() {
    for bad in ["", "9", "9:00", "09:0", "09-00", "ab:cd", "12:60", "24:30", "99:99", "09:00:00"] {
        assert_eq!(
            time_to_minutes(bad),
            Err(ValidationError::MalformedTime(bad.to_string())),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn ordering_follows_the_clock() {
    let early: TimeOfDay = "08:59".parse().unwrap();
    let late: TimeOfDay = "09:00".parse().unwrap();
    assert!(early < late);
    assert_eq!(early.minutes_until(late), 1);
    assert_eq!(late.minutes_until(early), -1);
}

#[test]
fn adding_an_hour() {
    let start: TimeOfDay = "22:15".parse().unwrap();
    assert_eq!(start.checked_add_minutes(60).unwrap().to_string(), "23:15");
}

#[test]
fn serializes_as_hh_mm_string() {
    let t: TimeOfDay = "09:05".parse().unwrap();
    assert_eq!(serde_json::to_string(&t).unwrap(), r#""09:05""#);

    let back: TimeOfDay = serde_json::from_str(r#""09:05""#).unwrap();
    assert_eq!(back, t);
}

#[test]
fn deserializing_malformed_time_fails() {
    assert!(serde_json::from_str::<TimeOfDay>(r#""9:5""#).is_err());
    assert!(serde_json::from_str::<TimeOfDay>("540").is_err());
}
