use crate::core::Pipeline;
use crate::domain::model::ConversionSummary;
use crate::utils::error::Result;

pub struct ConversionEngine<P: Pipeline> {
    pipeline: P,
    dry_run: bool,
}

impl<P: Pipeline> ConversionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            dry_run: false,
        }
    }

    /// Runs every stage except the write.
    pub fn new_dry_run(pipeline: P) -> Self {
        Self {
            pipeline,
            dry_run: true,
        }
    }

    pub fn run(&self) -> Result<ConversionSummary> {
        tracing::info!("🚀 Starting conversion");

        // Extract
        let posts = self.pipeline.extract()?;
        tracing::info!("📥 Loaded {} posts", posts.len());

        // Transform
        let rendered = self.pipeline.transform(posts)?;
        tracing::info!(
            "🛠️ Rendered {} posts ({} bytes of HTML)",
            rendered.post_count,
            rendered.html.len()
        );
        if rendered.invalid_timestamps > 0 {
            tracing::warn!(
                "⚠️ {} posts have timestamps that could not be formatted",
                rendered.invalid_timestamps
            );
        }

        let post_count = rendered.post_count;
        let invalid_timestamps = rendered.invalid_timestamps;

        if self.dry_run {
            tracing::info!("🔍 Dry run, skipping write");
            return Ok(ConversionSummary {
                post_count,
                invalid_timestamps,
                output_path: None,
            });
        }

        // Load
        let output_path = self.pipeline.load(rendered)?;
        tracing::info!("📁 Output saved to: {}", output_path.display());

        Ok(ConversionSummary {
            post_count,
            invalid_timestamps,
            output_path: Some(output_path),
        })
    }
}
