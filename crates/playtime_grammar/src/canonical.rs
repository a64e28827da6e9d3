//! Duration canonicalization.
//!
//! Every response mode ends here. Rules are tried in order and the first
//! match wins:
//!
//! 1. a rendered `N/A (...)` string → that reason; any other `n/a` → `NotFound`
//! 2. `<num>-<num>h` or `<num> to <num>h` range → mean, approximate
//! 3. `<N>h <M>m` → kept as hours and minutes
//! 4. `<N>h` → hours (approximate if marked `approx`)
//! 5. `<M>m` → `0h <M>m`
//! 6. bare number → hours
//! 7. anything else → `ParseError`

use playtime_core::{DurationValue, UnavailableReason};
use regex::Regex;
use std::sync::LazyLock;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

// Numbers must not be the tail of a larger number ("45.5h" is not "5h",
// "1,200h" is not "200h").
const NUM_START: &str = r"(?:^|[^\d.,])";
// Whole number, optionally with thousands separators.
const INT: &str = r"(?:\d{1,3}(?:,\d{3})+|\d+)";
const RANGE_SEP: &str = r"(?:\s*[-–—]\s*|\s+to\s+)";
const HOUR_UNIT: &str = r"(?:hours|hour|hrs|hr|h)\b";
const MINUTE_UNIT: &str = r"(?:minutes|minute|mins|min|m)\b";

static RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i){NUM_START}({INT}(?:\.\d+)?){RANGE_SEP}({INT}(?:\.\d+)?)\s*{HOUR_UNIT}"
    ))
    .expect("Valid range regex")
});

// No word boundary after the hour unit so "1h30m" matches.
static HOURS_MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i){NUM_START}({INT})\s*(?:hours|hour|hrs|hr|h)\s*(\d+)\s*{MINUTE_UNIT}"
    ))
    .expect("Valid hours-minutes regex")
});

static HOURS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i){NUM_START}({INT}(?:\.\d+)?)\s*{HOUR_UNIT}"))
        .expect("Valid hours regex")
});

static MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i){NUM_START}(\d+)\s*{MINUTE_UNIT}"))
        .expect("Valid minutes regex")
});

static BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^{INT}(?:\.\d+)?$")).expect("Valid number regex"));

/// Reduce a candidate duration string to its canonical value.
///
/// Pure and idempotent: rendering the result and canonicalizing again yields
/// a value that renders identically.
///
/// # Examples
///
/// ```
/// use playtime_grammar::canonicalize;
///
/// assert_eq!(canonicalize("70-75h (approx.)").to_string(), "73h (approx.)");
/// assert_eq!(canonicalize("45h 30m").to_string(), "45h 30m");
/// assert_eq!(canonicalize("30").to_string(), "30h");
/// assert_eq!(canonicalize("N/A (No data yet)").to_string(), "N/A (No data yet)");
/// ```
#[instrument(level = "trace")]
pub fn canonicalize(candidate: &str) -> DurationValue {
    let candidate = candidate.trim();
    let value = canonicalize_inner(candidate);
    debug!(candidate, canonical = %value, "Canonicalized duration");
    value
}

fn canonicalize_inner(candidate: &str) -> DurationValue {
    if candidate.to_lowercase().contains("n/a") {
        let reason = UnavailableReason::iter()
            .find(|reason| reason.to_string().eq_ignore_ascii_case(candidate))
            .unwrap_or(UnavailableReason::NotFound);
        return DurationValue::unavailable(reason);
    }

    if let Some(caps) = RANGE.captures(candidate) {
        return match (parse_number::<f64>(&caps[1]), parse_number::<f64>(&caps[2])) {
            (Ok(low), Ok(high)) => DurationValue::approximate((low + high) / 2.0),
            _ => DurationValue::unavailable(UnavailableReason::ParseError),
        };
    }

    if let Some(caps) = HOURS_MINUTES.captures(candidate) {
        return match (parse_number::<u32>(&caps[1]), caps[2].parse::<u32>()) {
            (Ok(hours), Ok(minutes)) => {
                DurationValue::hours_minutes_padded(hours, minutes, digits(&caps[2]))
            }
            _ => DurationValue::unavailable(UnavailableReason::ParseError),
        };
    }

    if let Some(caps) = HOURS.captures(candidate) {
        return match parse_number::<f64>(&caps[1]) {
            Ok(hours) if is_marked_approximate(candidate) => DurationValue::approximate(hours),
            Ok(hours) => DurationValue::exact_hours(hours),
            Err(_) => DurationValue::unavailable(UnavailableReason::ParseError),
        };
    }

    if let Some(caps) = MINUTES.captures(candidate) {
        return match caps[1].parse::<u32>() {
            Ok(minutes) => DurationValue::hours_minutes_padded(0, minutes, digits(&caps[1])),
            Err(_) => DurationValue::unavailable(UnavailableReason::ParseError),
        };
    }

    if BARE_NUMBER.is_match(candidate) {
        return match parse_number::<f64>(candidate) {
            Ok(hours) => DurationValue::exact_hours(hours),
            Err(_) => DurationValue::unavailable(UnavailableReason::ParseError),
        };
    }

    DurationValue::unavailable(UnavailableReason::ParseError)
}

/// Parse a matched number, dropping thousands separators.
fn parse_number<T: std::str::FromStr>(text: &str) -> Result<T, T::Err> {
    text.replace(',', "").parse()
}

fn digits(text: &str) -> u8 {
    u8::try_from(text.len()).unwrap_or(u8::MAX)
}

fn is_marked_approximate(candidate: &str) -> bool {
    candidate.to_lowercase().contains("approx")
}
