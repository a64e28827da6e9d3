//! Command-line interface for the playtime binary.

mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{run_lookup, run_serve};
