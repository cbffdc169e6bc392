use crate::core::timestamp::DisplayZone;
use crate::domain::model::{Post, RenderResult};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn output_path(&self) -> &Path;
    fn display_zone(&self) -> &DisplayZone;
}

/// Loader, sorter + renderer, writer.
pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Post>>;
    fn transform(&self, posts: Vec<Post>) -> Result<RenderResult>;
    fn load(&self, result: RenderResult) -> Result<PathBuf>;
}
