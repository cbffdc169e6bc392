use blogger_html::utils::logger;
use blogger_html::{BloggerPipeline, CliConfig, ConversionEngine, ConvertSettings, LocalStorage};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting blogger-html");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 解析並驗證配置
    let settings = match ConvertSettings::resolve(&config.overrides()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    tracing::info!(
        "📄 {} -> {} (timestamps shown in {} time)",
        settings.input_path.display(),
        settings.output_path.display(),
        settings.zone
    );

    let pipeline = BloggerPipeline::new(LocalStorage::new(), settings);
    let engine = if config.dry_run {
        ConversionEngine::new_dry_run(pipeline)
    } else {
        ConversionEngine::new(pipeline)
    };

    match engine.run() {
        Ok(summary) => {
            tracing::info!("✅ Conversion completed: {} posts", summary.post_count);
            if let Some(path) = summary.output_path {
                println!("✅ Wrote {} posts to {}", summary.post_count, path.display());
            } else {
                println!("✅ Dry run: {} posts rendered, nothing written", summary.post_count);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?})",
                e,
                e.category()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
