//! HTTP server and lookup pipeline for Playtime.
//!
//! [`LookupService`] wires the prompt grammar to a
//! [`CompletionDriver`](playtime_interface::CompletionDriver);
//! [`create_router`] exposes it over HTTP. Configuration is layered by
//! [`PlaytimeConfig`].
//!
//! # Example
//!
//! ```no_run
//! use playtime_server::{ApiState, LookupService, PlaytimeConfig, create_router, driver_from_config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PlaytimeConfig::load()?;
//! let driver = driver_from_config(&config.model);
//! let service = LookupService::new(driver, config.pipeline.response_mode);
//! let router = create_router(ApiState::new(service), &config.server)?;
//!
//! let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
//! axum::serve(listener, router).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod driver;
mod lookup;
mod telemetry;

pub use api::{ApiError, ApiState, LOOKUP_PATH, LookupParams, cors_layer, create_router};
pub use config::{ModelConfig, PipelineConfig, PlaytimeConfig, ServerConfig};
pub use driver::{MissingCredential, driver_from_config};
pub use lookup::LookupService;
pub use telemetry::init_tracing;
