pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HtmlDocument, HttpFetcher};
pub use config::toml_config::TomlConfig;
pub use crate::core::{engine::ScoreEngine, registry::AspectRegistry, report::OutputFormat};
pub use domain::model::{Aspect, AspectScore, ScoreReport};
pub use utils::error::{Result, ScoreError};
