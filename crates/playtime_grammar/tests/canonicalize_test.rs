//! Canonicalization properties over realistic model answers.

use playtime_core::UnavailableReason;
use playtime_grammar::canonicalize;

const SAMPLES: &[&str] = &[
    "70-75h (approx.)",
    "30-40h",
    "45h 30m",
    "30h 05m",
    "1,200h",
    "70 to 75 hours",
    "12.5h",
    "30.0 hours",
    "30",
    "45m",
    "73h (approx.)",
    "N/A (No data yet)",
    "N/A (Unrecognized format)",
    "Roughly 20 hrs",
    "no idea, sorry",
    "",
];

#[test]
fn test_canonicalization_is_idempotent_on_rendered_form() {
    for sample in SAMPLES {
        let once = canonicalize(sample).to_string();
        let twice = canonicalize(&once).to_string();
        assert_eq!(once, twice, "not idempotent for {sample:?}");
    }
}

#[test]
fn test_range_uses_mean() {
    let value = canonicalize("70-75h (approx.)");
    assert_eq!(value.hours(), Some(72.5));
    assert_eq!(value.to_string(), "73h (approx.)");
    assert_eq!(canonicalize("30-40h").to_string(), "35h (approx.)");
}

#[test]
fn test_hours_minutes_preserved_exactly() {
    assert_eq!(canonicalize("45h 30m").to_string(), "45h 30m");
    assert_eq!(canonicalize("45h 30m").hours(), Some(45.5));
}

#[test]
fn test_hours_drop_needless_decimals() {
    assert_eq!(canonicalize("12.5h").to_string(), "12.5h");
    assert_eq!(canonicalize("30.0h").to_string(), "30h");
    assert_eq!(canonicalize("30").to_string(), "30h");
}

#[test]
fn test_thousands_separator_keeps_full_value() {
    assert_eq!(canonicalize("1,200h").to_string(), "1200h");
    assert_eq!(canonicalize("1,200 hours").hours(), Some(1200.0));
    assert_eq!(canonicalize("All Styles: 1,050h 15m").to_string(), "1050h 15m");
    assert_eq!(canonicalize("1,200").to_string(), "1200h");
}

#[test]
fn test_range_written_with_to() {
    let value = canonicalize("70 to 75 hours");
    assert_eq!(value.hours(), Some(72.5));
    assert_eq!(value.to_string(), "73h (approx.)");
}

#[test]
fn test_zero_padded_minutes_are_reproduced() {
    assert_eq!(canonicalize("30h 05m").to_string(), "30h 05m");
    assert_eq!(canonicalize("30h 05m").hours(), canonicalize("30h 5m").hours());
}

#[test]
fn test_surrounding_text_is_tolerated() {
    assert_eq!(canonicalize("Main + Extras: 38h 30m").to_string(), "38h 30m");
    assert_eq!(canonicalize("about 40-50 Hours").to_string(), "45h (approx.)");
}

#[test]
fn test_unknown_shapes() {
    assert_eq!(
        canonicalize("no idea, sorry").reason(),
        Some(UnavailableReason::ParseError)
    );
    assert_eq!(
        canonicalize("N/A").reason(),
        Some(UnavailableReason::NotFound)
    );
}
