// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{error, info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::sync::Arc;

use blog_translate::app_config::Config;
use blog_translate::app_controller::Controller;
use blog_translate::providers::deepl::DeepL;
use blog_translate::providers::Provider;

/// Environment variable holding the DeepL API key
const API_KEY_VAR: &str = "DEEPL_API_KEY";

/// blog-translate - Translate Portuguese blog articles into English and Spanish
///
/// Reads every article of the source locale, translates its frontmatter and
/// body through DeepL, and writes one file per target locale.
#[derive(Parser, Debug)]
#[command(name = "blog-translate")]
#[command(version)]
#[command(about = "Translate MDX blog articles with DeepL")]
#[command(long_about = "Translates every article under <content_root>/<source> into each target locale.

CONFIGURATION:
    Settings are read from blog-translate.json in the working directory when
    present; built-in defaults are used otherwise. The DeepL API key is read
    from DEEPL_API_KEY, which may also be set in a .env file.")]
struct CommandLineOptions {
    /// Parse and list the documents without calling DeepL or writing files
    #[arg(long)]
    dry_run: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let _ = writeln!(
                std::io::stderr(),
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Accept everything here; the configured level is applied with set_max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();
    dotenv::dotenv().ok();

    let config = Config::load_or_default(Config::DEFAULT_PATH)?;
    config
        .validate()
        .context("Configuration validation failed")?;
    log::set_max_level(config.log_level.to_level_filter());

    let controller = if cli.dry_run {
        info!("Dry run: no requests will be sent and no files written");
        Controller::dry_run(config)
    } else {
        let provider = connect(&config).await?;
        Controller::with_provider(config, provider)
    };

    let report = controller.with_progress(true).run(cli.dry_run).await?;

    if report.no_input {
        println!("No articles to translate.");
        return Ok(());
    }

    if report.dry_run {
        for preview in &report.previews {
            println!("{}", preview);
        }
    }

    for failure in &report.failed {
        warn!("{}: {}", failure.path.display(), failure.message);
    }
    println!("{}", report.summary());

    Ok(())
}

/// Build the DeepL client and check the key against the usage endpoint
async fn connect(config: &Config) -> Result<Arc<dyn Provider>> {
    let api_key = std::env::var(API_KEY_VAR)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| anyhow!("{} is not set; add it to the environment or a .env file", API_KEY_VAR))?;

    let translation = &config.translation;
    let client = DeepL::new(api_key, translation.endpoint.as_deref(), translation.timeout_secs)
        .context("Failed to initialize the DeepL client")?;

    let usage = client.usage().await.map_err(|e| {
        error!("DeepL usage check failed: {}", e);
        anyhow!(e)
    })?;
    info!(
        "DeepL usage: {} of {} characters",
        usage.character_count, usage.character_limit
    );

    Ok(Arc::new(client))
}
