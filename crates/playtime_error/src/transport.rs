//! Completion-service transport errors.

/// Transport failure conditions when calling the completion service.
///
/// Every variant is terminal for the lookup: the pipeline does not retry and
/// produces no partial output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TransportErrorKind {
    /// The request could not be sent or the connection dropped
    #[display("Request failed: {}", _0)]
    Request(String),
    /// The service answered with a non-2xx status
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Response body, if any
        message: String,
    },
    /// The request exceeded the configured timeout
    #[display("Request timed out")]
    Timeout,
    /// The body was not a decodable response envelope
    #[display("Failed to decode response: {}", _0)]
    Decode(String),
}

/// Transport error with source location tracking.
///
/// # Examples
///
/// ```
/// use playtime_error::{TransportError, TransportErrorKind};
///
/// let err = TransportError::new(TransportErrorKind::HttpStatus {
///     status_code: 503,
///     message: "overloaded".to_string(),
/// });
/// assert!(format!("{}", err).contains("HTTP 503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} at line {} in {}", kind, line, file)]
pub struct TransportError {
    /// The kind of error that occurred
    pub kind: TransportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TransportError {
    /// Create a new TransportError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
