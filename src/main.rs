use clap::Parser;
use nature_ai::logger::{self, LogLevel, LoggerConfig};
use nature_ai::{Config, NatureStudio, Preset};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "nature-ai", version, about = "Create nature-inspired images with AI")]
struct Cli {
    /// Port for the web front end
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Directory downloaded images are saved into
    #[arg(long, env = "NATURE_AI_DOWNLOAD_DIR")]
    download_dir: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, env = "NATURE_AI_LOG", value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Start from a preset, e.g. "🌲 Forest"
    #[arg(long, value_parser = parse_preset, conflicts_with = "prompt")]
    preset: Option<Preset>,

    /// Prompt words
    prompt: Vec<String>,
}

impl Cli {
    fn apply_to_config(&self, mut config: Config) -> Config {
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if let Some(dir) = &self.download_dir {
            config = config.with_download_dir(dir.clone());
        }
        if let Some(level) = self.log_level {
            config = config.with_log_level(level);
        }
        config
    }

    /// Pre-fills the studio prompt from the preset or the prompt words.
    fn apply_to_studio(&self, studio: &mut NatureStudio) {
        match self.preset {
            Some(preset) => studio.apply_preset(preset),
            None => studio.set_prompt_text(self.prompt.join(" ")),
        }
    }
}

fn parse_preset(label: &str) -> Result<Preset, String> {
    Preset::from_label(label).ok_or_else(|| {
        let known: Vec<_> = Preset::ALL.iter().map(|p| p.label()).collect();
        format!("expected one of: {}", known.join(", "))
    })
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    LogLevel::parse(value).ok_or_else(|| "expected trace, debug, info, warn or error".to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let cli = Cli::parse();
    let config = cli.apply_to_config(Config::from_env());
    logger::init_with_config(LoggerConfig::for_app(&config))?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("No .env file found, using system environment variables");
    }

    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), &config);
    logger::log_config_info(&config);

    let mut studio = match NatureStudio::from_config(&config) {
        Ok(studio) => studio,
        Err(e) => {
            log::error!("❌ {}", e);
            return Err(e.into());
        }
    };
    cli.apply_to_studio(&mut studio);

    run(config, studio).await?;
    Ok(())
}

#[cfg(feature = "server")]
async fn run(config: Config, studio: NatureStudio) -> nature_ai::Result<()> {
    nature_ai::server::run(config, studio).await
}

/// Without the web front end: one generation cycle, then save the image.
#[cfg(not(feature = "server"))]
async fn run(config: Config, mut studio: NatureStudio) -> nature_ai::Result<()> {
    let Some(record) = studio.generate().cloned() else {
        log::warn!("⚠️  Nothing to generate: the prompt is empty");
        return Ok(());
    };

    println!("{}", record.url);

    nature_ai::Downloader::default()
        .download_to_dir(&record.url, &record.prompt, &config.download_dir)
        .await;
    Ok(())
}
