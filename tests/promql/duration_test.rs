//! Integration tests for range-vector duration literals.

use std::time::Duration;

use burnrate::promql::{format_duration, parse_duration, DurationError};

const HOUR: u64 = 60 * 60;
const DAY: u64 = 24 * HOUR;

#[test]
fn test_format_contract_examples() {
    assert_eq!(format_duration(Duration::from_secs(24 * HOUR)), "1d");
    assert_eq!(format_duration(Duration::from_secs(14 * DAY)), "2w");
    assert_eq!(format_duration(Duration::from_secs(28 * DAY)), "4w");
}

#[test]
fn test_format_falls_back_to_smaller_units() {
    assert_eq!(format_duration(Duration::from_secs(30 * DAY)), "30d");
    assert_eq!(format_duration(Duration::from_secs(DAY + HOUR)), "25h");
    assert_eq!(format_duration(Duration::from_secs(HOUR + 60)), "61m");
    assert_eq!(format_duration(Duration::from_secs(HOUR + 1)), "3601s");
}

#[test]
fn test_round_trip_every_unit() {
    let samples = [
        1,
        45,
        120,
        7 * 60 + 30,
        HOUR,
        6 * HOUR,
        DAY,
        3 * DAY,
        7 * DAY,
        28 * DAY,
        365 * DAY,
    ];

    for secs in samples {
        let duration = Duration::from_secs(secs);
        let literal = format_duration(duration);
        assert_eq!(
            parse_duration(&literal),
            Ok(duration),
            "literal {} did not round-trip",
            literal
        );
    }
}

#[test]
fn test_parse_prometheus_literals() {
    assert_eq!(parse_duration("2h45m"), Ok(Duration::from_secs(2 * HOUR + 45 * 60)));
    assert_eq!(parse_duration("1w1d"), Ok(Duration::from_secs(8 * DAY)));
    assert_eq!(parse_duration("0s"), Ok(Duration::ZERO));
}

#[test]
fn test_parse_errors() {
    assert_eq!(parse_duration(""), Err(DurationError::Empty));
    assert_eq!(parse_duration("-1d"), Err(DurationError::Invalid("-1d".to_string())));
    assert_eq!(parse_duration("1.5h"), Err(DurationError::Invalid("1.5h".to_string())));
    assert_eq!(parse_duration("1d1d"), Err(DurationError::Invalid("1d1d".to_string())));
    assert_eq!(
        parse_duration("1s250ms"),
        Err(DurationError::SubSecond("1s250ms".to_string()))
    );
}
