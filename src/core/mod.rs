pub mod etl;
pub mod loader;
pub mod pipeline;
pub mod renderer;
pub mod sorter;
pub mod timestamp;

pub use crate::domain::model::{ConversionSummary, Post, RenderResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
