//! Logging initialization.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console logging.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `info,playtime=debug` with
/// `verbose`.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "info,playtime=debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
