use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error on {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse posts from {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parse,
    Config,
}

impl ConvertError {
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        ConvertError::IoError {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    pub fn parse(path: impl Into<String>, source: serde_json::Error) -> Self {
        ConvertError::ParseError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::IoError { .. } => ErrorCategory::Io,
            ConvertError::ParseError { .. } => ErrorCategory::Parse,
            ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. }
            | ConvertError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    /// True when the underlying IO failure was a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConvertError::IoError { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::IoError { path, .. } if self.is_not_found() => {
                format!("File not found: {}", path)
            }
            ConvertError::IoError { path, source } => {
                format!("Could not access {}: {}", path, source)
            }
            ConvertError::ParseError { path, source } => {
                format!("{} is not a valid list of posts: {}", path, source)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::IoError { .. } if self.is_not_found() => {
                "Check the input path or pass --input explicitly"
            }
            ConvertError::IoError { .. } => {
                "Check file permissions and free disk space for the target directory"
            }
            ConvertError::ParseError { .. } => {
                "Every post needs metadata.published.timestamp and content; labels must be a list of strings"
            }
            ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. }
            | ConvertError::MissingConfigError { .. } => {
                "Review the command line flags and the TOML config file"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Parse => 1,
            ErrorCategory::Config => 2,
            ErrorCategory::Io => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
