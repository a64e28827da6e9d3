//! CLI command definitions.

use clap::{Parser, Subcommand};
use playtime_core::ResponseMode;

/// Playtime - look up HowLongToBeat completion times through a language model
#[derive(Parser, Debug)]
#[command(name = "playtime")]
#[command(about = "Look up HowLongToBeat completion times through a language model", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP lookup server
    Serve {
        /// Address to listen on (overrides server.bind)
        #[arg(long)]
        bind: Option<String>,

        /// Response mode: plain_text, labeled_line or json
        #[arg(long)]
        mode: Option<ResponseMode>,
    },

    /// Look up one title and print the result as JSON
    Lookup {
        /// Game title
        title: String,

        /// Response mode: plain_text, labeled_line or json
        #[arg(long)]
        mode: Option<ResponseMode>,
    },
}
