pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::ServerConfig;

pub use adapters::NasaClient;
pub use api::{create_router, AppState};
pub use core::{ApodService, MarsRoverService, NasaApi, NeoService};
pub use utils::error::{ExplorerError, Result};
