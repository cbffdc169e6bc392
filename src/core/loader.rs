use crate::core::Storage;
use crate::domain::model::Post;
use crate::utils::error::{ConvertError, Result};
use std::path::Path;

/// Parses an export into posts in file order. `source` only labels errors.
pub fn parse_posts(data: &[u8], source: &str) -> Result<Vec<Post>> {
    serde_json::from_slice(data).map_err(|e| ConvertError::parse(source, e))
}

pub fn load<S: Storage>(storage: &S, path: &Path) -> Result<Vec<Post>> {
    let data = storage.read_file(path)?;
    tracing::debug!("Read {} bytes from {}", data.len(), path.display());

    let posts = parse_posts(&data, &path.display().to_string())?;
    tracing::debug!("Parsed {} posts", posts.len());
    Ok(posts)
}
