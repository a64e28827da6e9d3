//! Response normalization: one extraction strategy per response mode.

use crate::canonicalize;
use crate::fence::strip_code_fence;
use playtime_core::{DurationValue, FieldName, RawCompletion, ResponseMode, UnavailableReason};
use tracing::{debug, instrument, warn};

/// Normalize a completion into the `Main + Extras` duration.
///
/// # Examples
///
/// ```
/// use playtime_core::{RawCompletion, ResponseMode, UnavailableReason};
/// use playtime_grammar::normalize;
///
/// let raw = RawCompletion::Text("{not json".to_string());
/// assert_eq!(
///     normalize(&raw, ResponseMode::Json).reason(),
///     Some(UnavailableReason::InvalidJson)
/// );
/// ```
pub fn normalize(raw: &RawCompletion, mode: ResponseMode) -> DurationValue {
    normalize_field(raw, mode, FieldName::MainExtras)
}

/// Normalize a completion into the duration for `field`.
///
/// An empty completion is `ApiIssue` in every mode. Otherwise the mode picks
/// a candidate string (or an unavailability reason) and the candidate is
/// canonicalized.
#[instrument(skip_all, fields(mode = %mode, field = %field))]
pub fn normalize_field(raw: &RawCompletion, mode: ResponseMode, field: FieldName) -> DurationValue {
    let Some(text) = raw.text() else {
        warn!("Completion had no candidate content");
        return DurationValue::unavailable(UnavailableReason::ApiIssue);
    };

    let candidate = match mode {
        ResponseMode::PlainText => plain_text_candidate(text),
        ResponseMode::LabeledLine => labeled_line_candidate(text, field),
        ResponseMode::Json => json_candidate(text, field),
    };

    match candidate {
        Ok(candidate) => {
            debug!(candidate = %candidate, "Extracted candidate");
            canonicalize(&candidate)
        }
        Err(reason) => {
            debug!(?reason, "No candidate extracted");
            DurationValue::unavailable(reason)
        }
    }
}

/// The whole answer is the candidate, unless it is prose or an explicit N/A.
fn plain_text_candidate(text: &str) -> Result<String, UnavailableReason> {
    let trimmed = text.trim();
    if !trimmed.chars().any(|c| c.is_ascii_digit()) || trimmed.to_lowercase().contains("n/a") {
        return Err(UnavailableReason::NotFound);
    }
    Ok(trimmed.to_string())
}

/// Capture from `<Label>:` to the next comma, newline or end of text.
fn labeled_line_candidate(text: &str, field: FieldName) -> Result<String, UnavailableReason> {
    let needle = format!("{}:", field.line_label());

    let start = text
        .match_indices(&needle)
        .map(|(idx, _)| idx)
        .find(|&idx| starts_label(text, idx))
        .ok_or(UnavailableReason::NotFound)?;

    let value_start = start + needle.len();
    let rest = &text[value_start..];
    let value_end = rest.find([',', '\n']).unwrap_or(rest.len());
    let value = rest[..value_end].trim();

    if value.is_empty() {
        return Err(UnavailableReason::NotFound);
    }
    Ok(value.to_string())
}

/// A label starts at the beginning of the text or after a non-alphanumeric
/// character, so `All:` does not match inside `Overall:`.
fn starts_label(text: &str, idx: usize) -> bool {
    text[..idx]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_alphanumeric())
}

/// Look up the field's display label as a key in a JSON object.
fn json_candidate(text: &str, field: FieldName) -> Result<String, UnavailableReason> {
    let body = strip_code_fence(text.trim());

    let parsed: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "Completion was not valid JSON");
        UnavailableReason::InvalidJson
    })?;
    let object = parsed.as_object().ok_or_else(|| {
        warn!("Completion JSON was not an object");
        UnavailableReason::InvalidJson
    })?;

    let value = match object.get(field.json_key()) {
        Some(serde_json::Value::String(s)) => s.trim().to_string(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };

    if value.is_empty() {
        warn!(key = field.json_key(), "Completion JSON lacked the requested key");
        return Err(UnavailableReason::KeyMissing);
    }
    Ok(value)
}
