//! Error types for the Playtime service.
//!
//! Only genuine faults live here. A lookup whose answer cannot be produced or
//! trusted is not an error: it is an `Unavailable` duration delivered through
//! the normal success path (see `playtime_core::DurationValue`).
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use playtime_error::{PlaytimeResult, TransportError, TransportErrorKind};
//!
//! fn call_service() -> PlaytimeResult<String> {
//!     Err(TransportError::new(TransportErrorKind::Timeout))?
//! }
//!
//! match call_service() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod input;
mod transport;

pub use config::ConfigError;
pub use error::{PlaytimeError, PlaytimeErrorKind, PlaytimeResult};
pub use input::{InputError, InputErrorKind};
pub use transport::{TransportError, TransportErrorKind};
