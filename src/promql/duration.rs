//! Range-vector duration literals (`5m`, `1d`, `4w`).
//!
//! Formatting picks the largest unit that divides the duration exactly, so
//! `24h` becomes `1d` and `28d` becomes `4w`. Parsing accepts the
//! Prometheus grammar: one or more `<number><unit>` groups in decreasing
//! unit order, e.g. `1d12h` or `90s`.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

/// Errors from [`parse_duration`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    #[error("Empty duration literal")]
    Empty,

    #[error("Invalid duration literal: {0:?}")]
    Invalid(String),

    #[error("Duration literal out of range: {0:?}")]
    Overflow(String),

    #[error("Duration literal is not a whole number of seconds: {0:?}")]
    SubSecond(String),
}

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;
const YEAR: u64 = 365 * DAY;

/// Units tried by the formatter, largest first.
const FORMAT_UNITS: [(u64, &str); 5] = [(WEEK, "w"), (DAY, "d"), (HOUR, "h"), (MINUTE, "m"), (1, "s")];

/// Capture groups of [`LITERAL`], paired with their size in milliseconds.
const PARSE_UNITS: [(u64, &str); 7] = [
    (YEAR * 1000, "y"),
    (WEEK * 1000, "w"),
    (DAY * 1000, "d"),
    (HOUR * 1000, "h"),
    (MINUTE * 1000, "m"),
    (1000, "s"),
    (1, "ms"),
];

static LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?P<y>\d+)y)?(?:(?P<w>\d+)w)?(?:(?P<d>\d+)d)?(?:(?P<h>\d+)h)?(?:(?P<m>\d+)m)?(?:(?P<s>\d+)s)?(?:(?P<ms>\d+)ms)?$",
    )
    .expect("duration literal pattern is valid")
});

/// Format a duration as the shortest exact range-vector literal.
///
/// Sub-second precision is dropped. A zero duration formats as `0s`.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs == 0 {
        return "0s".to_string();
    }

    FORMAT_UNITS
        .iter()
        .find(|(size, _)| secs % size == 0)
        .map(|(size, suffix)| format!("{}{}", secs / size, suffix))
        .unwrap_or_else(|| format!("{}s", secs))
}

/// Parse a range-vector literal back into a duration.
pub fn parse_duration(literal: &str) -> Result<Duration, DurationError> {
    if literal.is_empty() {
        return Err(DurationError::Empty);
    }

    let captures = LITERAL
        .captures(literal)
        .ok_or_else(|| DurationError::Invalid(literal.to_string()))?;

    let overflow = || DurationError::Overflow(literal.to_string());
    let mut millis: u64 = 0;

    for (size, group) in PARSE_UNITS {
        let Some(value) = captures.name(group) else {
            continue;
        };
        let count: u64 = value.as_str().parse().map_err(|_| overflow())?;
        let part = count.checked_mul(size).ok_or_else(overflow)?;
        millis = millis.checked_add(part).ok_or_else(overflow)?;
    }

    if millis % 1000 != 0 {
        return Err(DurationError::SubSecond(literal.to_string()));
    }

    Ok(Duration::from_secs(millis / 1000))
}

/// Serde adapter storing a window [`Duration`] as its range-vector literal.
///
/// Zero is rejected when deserializing.
pub mod serde_literal {
    use std::time::Duration;

    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_duration(*duration))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let literal = String::deserialize(deserializer)?;
        let duration = super::parse_duration(&literal).map_err(de::Error::custom)?;
        if duration.is_zero() {
            return Err(de::Error::custom(format!(
                "window must be greater than zero, got {:?}",
                literal
            )));
        }
        Ok(duration)
    }
}
