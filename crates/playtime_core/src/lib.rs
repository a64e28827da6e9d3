//! Core data types for the Playtime service.
//!
//! Everything here is request-scoped: a lookup creates these values, pushes
//! them through the pipeline and drops them. Nothing is cached or persisted.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod completion;
mod duration;
mod field;
mod mode;
mod request;

pub use completion::RawCompletion;
pub use duration::{DurationShape, DurationValue, UnavailableReason};
pub use field::FieldName;
pub use mode::ResponseMode;
pub use request::{LookupRequest, LookupResult};
