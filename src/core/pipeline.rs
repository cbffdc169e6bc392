use crate::core::renderer::HtmlRenderer;
use crate::core::{loader, sorter, ConfigProvider, Pipeline, Post, RenderResult, Storage};
use crate::utils::error::Result;
use std::path::PathBuf;

pub struct BloggerPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    renderer: HtmlRenderer,
}

impl<S: Storage, C: ConfigProvider> BloggerPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let renderer = HtmlRenderer::new(*config.display_zone());
        Self {
            storage,
            config,
            renderer,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for BloggerPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Post>> {
        tracing::debug!("Loading posts from {}", self.config.input_path().display());
        loader::load(&self.storage, self.config.input_path())
    }

    fn transform(&self, posts: Vec<Post>) -> Result<RenderResult> {
        tracing::debug!(
            "Sorting {} posts, display zone: {}",
            posts.len(),
            self.renderer.zone()
        );
        let sorted = sorter::sort_posts(posts, self.config.display_zone());
        Ok(self.renderer.render(&sorted))
    }

    fn load(&self, result: RenderResult) -> Result<PathBuf> {
        let output_path = self.config.output_path().to_path_buf();

        tracing::debug!(
            "Writing HTML ({} bytes) to {}",
            result.html.len(),
            output_path.display()
        );
        self.storage.write_file(&output_path, result.html.as_bytes())?;

        Ok(output_path)
    }
}
