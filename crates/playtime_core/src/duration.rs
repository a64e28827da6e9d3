//! Canonical durations and the reasons a duration may be unavailable.

use std::fmt;

/// Why no completion time could be produced.
///
/// These are content, not faults: each renders to a short `N/A (...)` string
/// that callers display as-is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, strum::EnumIter,
)]
pub enum UnavailableReason {
    /// The model says there is no data, or answered with prose
    #[display("N/A (No data yet)")]
    NotFound,
    /// The service returned no candidate content
    #[display("N/A (API issue)")]
    ApiIssue,
    /// The candidate was not a recognizable duration
    #[display("N/A (Unrecognized format)")]
    ParseError,
    /// JSON mode output was not a JSON object
    #[display("N/A (Invalid JSON)")]
    InvalidJson,
    /// JSON mode output lacked the requested key
    #[display("N/A (Key missing)")]
    KeyMissing,
}

/// How a known duration is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationShape {
    /// `<N>h`, or `<N>h (approx.)` when approximate
    Hours,
    /// `<N>h <M>m`, reproduced from the original components
    HoursMinutes {
        /// Whole hours
        hours: u32,
        /// Minutes value
        minutes: u32,
        /// Digits the minutes were written with, so "05m" stays "05m"
        minute_digits: u8,
    },
}

/// A completion time, or the reason there isn't one.
///
/// `hours` is always in hours, with minutes as the fractional part. Display
/// goes through [`fmt::Display`], which is the only place the agreed string
/// forms are produced.
///
/// # Examples
///
/// ```
/// use playtime_core::{DurationValue, UnavailableReason};
///
/// assert_eq!(DurationValue::approximate(72.5).to_string(), "73h (approx.)");
/// assert_eq!(DurationValue::hours_minutes(45, 30).to_string(), "45h 30m");
/// assert_eq!(DurationValue::exact_hours(30.0).to_string(), "30h");
/// assert_eq!(
///     DurationValue::unavailable(UnavailableReason::KeyMissing).to_string(),
///     "N/A (Key missing)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DurationValue {
    /// A usable time
    Known {
        /// Total hours, fractional for minutes
        hours: f64,
        /// Derived from a range or marked approximate by the model
        approx: bool,
        /// Display form
        shape: DurationShape,
    },
    /// No usable time
    Unavailable {
        /// Why
        reason: UnavailableReason,
    },
}

impl DurationValue {
    /// A whole or fractional hour count, displayed as `<N>h`.
    pub fn exact_hours(hours: f64) -> Self {
        DurationValue::Known {
            hours,
            approx: false,
            shape: DurationShape::Hours,
        }
    }

    /// An approximate hour count, displayed rounded as `<N>h (approx.)`.
    pub fn approximate(hours: f64) -> Self {
        DurationValue::Known {
            hours,
            approx: true,
            shape: DurationShape::Hours,
        }
    }

    /// An hours-and-minutes pair, displayed as `<N>h <M>m`.
    pub fn hours_minutes(hours: u32, minutes: u32) -> Self {
        Self::hours_minutes_padded(hours, minutes, 1)
    }

    /// Like [`hours_minutes`](Self::hours_minutes), zero-padding the minutes
    /// to `minute_digits`.
    pub fn hours_minutes_padded(hours: u32, minutes: u32, minute_digits: u8) -> Self {
        DurationValue::Known {
            hours: f64::from(hours) + f64::from(minutes) / 60.0,
            approx: false,
            shape: DurationShape::HoursMinutes {
                hours,
                minutes,
                minute_digits,
            },
        }
    }

    /// No usable time, for the given reason.
    pub fn unavailable(reason: UnavailableReason) -> Self {
        DurationValue::Unavailable { reason }
    }

    /// Whether a usable time is present.
    pub fn is_known(&self) -> bool {
        matches!(self, DurationValue::Known { .. })
    }

    /// Total hours, if known.
    pub fn hours(&self) -> Option<f64> {
        match self {
            DurationValue::Known { hours, .. } => Some(*hours),
            DurationValue::Unavailable { .. } => None,
        }
    }

    /// Unavailability reason, if any.
    pub fn reason(&self) -> Option<UnavailableReason> {
        match self {
            DurationValue::Known { .. } => None,
            DurationValue::Unavailable { reason } => Some(*reason),
        }
    }
}

impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationValue::Known {
                hours, approx: true, ..
            } => write!(f, "{}h (approx.)", hours.round()),
            DurationValue::Known {
                shape:
                    DurationShape::HoursMinutes {
                        hours,
                        minutes,
                        minute_digits,
                    },
                ..
            } => write!(
                f,
                "{}h {:0width$}m",
                hours,
                minutes,
                width = usize::from(*minute_digits)
            ),
            // f64's Display already drops a trailing ".0"
            DurationValue::Known { hours, .. } => write!(f, "{}h", hours),
            DurationValue::Unavailable { reason } => write!(f, "{}", reason),
        }
    }
}
