//! Response modes.

use serde::{Deserialize, Serialize};

/// Output grammar requested from the model and used to parse its answer.
///
/// The prompt wording and the extraction strategy are keyed on the same
/// variant, so they change together.
///
/// # Examples
///
/// ```
/// use playtime_core::ResponseMode;
/// use std::str::FromStr;
///
/// assert_eq!(ResponseMode::from_str("labeled_line").unwrap(), ResponseMode::LabeledLine);
/// assert_eq!(ResponseMode::Json.to_string(), "json");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResponseMode {
    /// A single bare duration for `Main + Extras`
    #[display("plain_text")]
    PlainText,
    /// `Main: .., Extras: .., 100%: .., All: ..` on one line
    #[display("labeled_line")]
    LabeledLine,
    /// JSON object keyed by field display labels
    #[default]
    #[display("json")]
    Json,
}

impl ResponseMode {
    /// Whether the completion service should be asked for native JSON output.
    pub fn wants_json_output(&self) -> bool {
        matches!(self, ResponseMode::Json)
    }
}
