pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::{ConvertSettings, SettingsOverrides};
pub use crate::core::{etl::ConversionEngine, pipeline::BloggerPipeline, timestamp::DisplayZone};
pub use domain::model::{ConversionSummary, Post};
pub use utils::error::{ConvertError, Result};

/// Loads, sorts, renders and writes in one call.
pub fn convert(settings: ConvertSettings) -> Result<ConversionSummary> {
    let pipeline = BloggerPipeline::new(LocalStorage::new(), settings);
    ConversionEngine::new(pipeline).run()
}
