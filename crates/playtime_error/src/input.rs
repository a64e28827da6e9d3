//! Caller input errors.

/// Input error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum InputErrorKind {
    /// No game title supplied, or only whitespace
    #[display("Missing gameTitle parameter")]
    MissingTitle,
}

/// Input error with source location tracking.
///
/// # Examples
///
/// ```
/// use playtime_error::{InputError, InputErrorKind};
///
/// let err = InputError::new(InputErrorKind::MissingTitle);
/// assert!(format!("{}", err).contains("gameTitle"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Input Error: {} at line {} in {}", kind, line, file)]
pub struct InputError {
    /// The kind of error that occurred
    pub kind: InputErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl InputError {
    /// Create a new InputError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InputErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
