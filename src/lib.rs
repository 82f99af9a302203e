pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use app::server::{build_router, ApiServer};
pub use config::cli::LocalStorage;
pub use config::toml_config::ServiceConfig;
pub use crate::core::{
    clock::{FixedClock, SystemClock},
    engine::CampaignEngine,
    pipeline::CampaignPipeline,
};
pub use utils::error::{GeneratorError, Result};
