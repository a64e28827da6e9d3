//! Playtime CLI binary.
//!
//! - Serve the lookup API over HTTP
//! - Run a single lookup from the command line

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use cli::{Cli, Commands, run_lookup, run_serve};

    // A missing .env is fine; the key may come from the real environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    playtime_server::init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { bind, mode } => {
            run_serve(bind, mode).await?;
        }
        Commands::Lookup { title, mode } => {
            run_lookup(&title, mode).await?;
        }
    }

    Ok(())
}
