use crate::utils::error::{ConvertError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let as_text = path.to_string_lossy();

    if as_text.is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: as_text.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if as_text.contains('\0') {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: as_text.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Resolves symlinks and `.` components; a missing file resolves through its parent.
fn comparable_path(path: &Path) -> PathBuf {
    if let Ok(real) = fs::canonicalize(path) {
        return real;
    }
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let through_parent = absolute
        .parent()
        .zip(absolute.file_name())
        .and_then(|(parent, name)| fs::canonicalize(parent).ok().map(|real| real.join(name)));
    through_parent.unwrap_or(absolute)
}

/// The output must never overwrite the export it was generated from.
pub fn validate_distinct_paths(input: &Path, output: &Path) -> Result<()> {
    if comparable_path(input) == comparable_path(output) {
        return Err(ConvertError::InvalidConfigValueError {
            field: "output.path".to_string(),
            value: output.display().to_string(),
            reason: "Output path must differ from the input path".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ConvertError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
