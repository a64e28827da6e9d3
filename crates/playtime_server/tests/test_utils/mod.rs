//! Test utilities for Playtime server tests.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockCompletionDriver};
