use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_required_field, Validate};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional configuration file:
///
/// ```toml
/// [input]
/// path = "blogger.json"
///
/// [output]
/// path = "public/index.html"
///
/// [render]
/// timezone = "Asia/Taipei"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
    pub render: Option<RenderConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub timezone: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| ConvertError::io(path.as_ref(), e))?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConvertError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Input path, relative paths resolved against `base_dir`.
    pub fn input_path(&self, base_dir: &Path) -> Option<PathBuf> {
        self.input
            .as_ref()
            .and_then(|input| input.path.as_ref())
            .map(|path| base_dir.join(path))
    }

    /// Output path, relative paths resolved against `base_dir`.
    pub fn output_path(&self, base_dir: &Path) -> Option<PathBuf> {
        self.output
            .as_ref()
            .and_then(|output| output.path.as_ref())
            .map(|path| base_dir.join(path))
    }

    pub fn timezone(&self) -> Option<&str> {
        self.render
            .as_ref()
            .and_then(|render| render.timezone.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        // 有宣告區段就必須提供對應欄位
        if let Some(input) = &self.input {
            validate_required_field("input.path", &input.path)?;
        }
        if let Some(output) = &self.output {
            validate_required_field("output.path", &output.path)?;
        }
        if let Some(render) = &self.render {
            let timezone = validate_required_field("render.timezone", &render.timezone)?;
            validate_non_empty_string("render.timezone", timezone)?;
        }
        Ok(())
    }
}
