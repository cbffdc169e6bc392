use crate::core::Storage;
use crate::utils::error::{ConvertError, Result};
use std::fs;
use std::path::Path;

/// Reads and writes whole files on the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| ConvertError::io(path, e))
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ConvertError::io(parent, e))?;
        }

        fs::write(path, data).map_err(|e| ConvertError::io(path, e))
    }
}
