//! Trait definitions for the Playtime service.
//!
//! The lookup pipeline talks to the completion service only through
//! [`CompletionDriver`], so the HTTP boundary and tests can swap the real
//! client for a mock.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::CompletionDriver;
