use crate::config::SettingsOverrides;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "blogger-html")]
#[command(about = "Convert a Blogger JSON export into a single static HTML page")]
pub struct CliConfig {
    /// Path to the JSON export [default: blogger.json next to the executable]
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Path of the generated page [default: blogger.html next to the executable]
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Time zone for displayed timestamps: "local" or an IANA name such as Asia/Taipei
    #[arg(long)]
    pub timezone: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Load, sort and render without writing the output file
    #[arg(long)]
    pub dry_run: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            input: self.input.clone(),
            output: self.output.clone(),
            timezone: self.timezone.clone(),
            config_file: self.config.clone(),
        }
    }
}
