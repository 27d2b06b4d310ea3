// Unit tests for stored time strings and end-time projection

use playlist_scheduler::services::projection::end_time;
use playlist_scheduler::utils::time::{normalize_time, same_time, ClockTime};
use test_case::test_case;

#[test_case("09:00", 60, "10:00" ; "one hour")]
#[test_case("09:00", 90, "10:30" ; "ninety minutes")]
#[test_case("23:30", 60, "00:30" ; "wraps past midnight")]
#[test_case("23:00", 60, "00:00" ; "ends exactly at midnight")]
#[test_case("00:00", 1440, "00:00" ; "full day")]
#[test_case("22:00", 1500, "23:00" ; "longer than a day")]
fn test_end_time(start: &str, duration: u32, expected: &str) {
    let start = ClockTime::parse(start).unwrap();
    assert_eq!(end_time(start, duration).to_string(), expected);
}

#[test_case("09:00:00", "09:00" ; "backend seconds dropped")]
#[test_case(" 07:05 ", "07:05" ; "surrounding whitespace trimmed")]
#[test_case("24:00", "24:00" ; "end of day kept")]
fn test_normalize_time(stored: &str, expected: &str) {
    assert_eq!(normalize_time(stored).unwrap(), expected);
}

#[test_case("25:00" ; "hour out of range")]
#[test_case("09:60" ; "minute out of range")]
#[test_case("09:00:30" ; "nonzero seconds")]
#[test_case("nine" ; "not a time")]
fn test_normalize_time_rejects(stored: &str) {
    assert!(normalize_time(stored).is_err());
}

#[test_case("09:00", "09:00:00", true ; "seconds suffix")]
#[test_case("09:00", "09:30", false ; "different minutes")]
#[test_case("late", "late", true ; "unparseable but identical")]
fn test_same_time(a: &str, b: &str, expected: bool) {
    assert_eq!(same_time(a, b), expected);
}
