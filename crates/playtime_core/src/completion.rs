//! Raw model output.

/// Unparsed output from the completion service.
///
/// `Empty` means the service answered but its candidate/content/parts chain
/// held nothing. That is distinct from a transport failure and from text that
/// happens to be blank.
///
/// # Examples
///
/// ```
/// use playtime_core::RawCompletion;
///
/// let raw = RawCompletion::Text("30h 15m".to_string());
/// assert_eq!(raw.text(), Some("30h 15m"));
/// assert_eq!(RawCompletion::Empty.text(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawCompletion {
    /// Text of the first part of the first candidate
    Text(String),
    /// No usable candidate content
    Empty,
}

impl RawCompletion {
    /// Borrow the completion text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            RawCompletion::Text(text) => Some(text),
            RawCompletion::Empty => None,
        }
    }
}
