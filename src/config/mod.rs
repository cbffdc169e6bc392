#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::timestamp::DisplayZone;
use crate::core::ConfigProvider;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{
    validate_distinct_paths, validate_non_empty_string, validate_path, Validate,
};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

pub const DEFAULT_INPUT_FILE: &str = "blogger.json";
pub const DEFAULT_OUTPUT_FILE: &str = "blogger.html";

/// Values supplied on the command line; each wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub timezone: Option<String>,
    pub config_file: Option<PathBuf>,
}

/// Fully resolved settings for one conversion run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertSettings {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub zone: DisplayZone,
}

impl ConvertSettings {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>, zone: DisplayZone) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            zone,
        }
    }

    /// Resolves settings with defaults placed next to the running executable.
    pub fn resolve(overrides: &SettingsOverrides) -> Result<Self> {
        let base_dir = executable_dir()?;
        Self::resolve_with_base(overrides, &base_dir)
    }

    /// Precedence: overrides, then the config file, then defaults under `base_dir`.
    pub fn resolve_with_base(overrides: &SettingsOverrides, base_dir: &Path) -> Result<Self> {
        let file = match &overrides.config_file {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                let file_dir = path.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
                Some((config, file_dir))
            }
            None => None,
        };

        let input_path = overrides
            .input
            .clone()
            .or_else(|| file.as_ref().and_then(|(c, dir)| c.input_path(dir)))
            .unwrap_or_else(|| base_dir.join(DEFAULT_INPUT_FILE));

        let output_path = overrides
            .output
            .clone()
            .or_else(|| file.as_ref().and_then(|(c, dir)| c.output_path(dir)))
            .unwrap_or_else(|| base_dir.join(DEFAULT_OUTPUT_FILE));

        let zone = match (&overrides.timezone, file.as_ref().and_then(|(c, _)| c.timezone())) {
            (Some(timezone), _) => parse_zone("--timezone", timezone)?,
            (None, Some(timezone)) => parse_zone("render.timezone", timezone)?,
            (None, None) => DisplayZone::default(),
        };

        let settings = Self {
            input_path,
            output_path,
            zone,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for ConvertSettings {
    fn validate(&self) -> Result<()> {
        validate_path("input.path", &self.input_path)?;
        validate_path("output.path", &self.output_path)?;
        validate_distinct_paths(&self.input_path, &self.output_path)?;
        Ok(())
    }
}

impl ConfigProvider for ConvertSettings {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn display_zone(&self) -> &DisplayZone {
        &self.zone
    }
}

pub fn parse_zone(field_name: &str, value: &str) -> Result<DisplayZone> {
    validate_non_empty_string(field_name, value)?;
    value
        .parse()
        .map_err(|reason| ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason,
        })
}

/// Directory holding the running executable.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| ConvertError::ConfigError {
        message: format!("Cannot locate the running executable: {}", e),
    })?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| ConvertError::ConfigError {
            message: format!("Executable {} has no parent directory", exe.display()),
        })
}
