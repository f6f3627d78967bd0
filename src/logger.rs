use crate::config::Config;
use crate::error::{NatureError, Result};
use chrono::{DateTime, Utc};
use colored::*;
use log::{Level, LevelFilter, Metadata, Record};
use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use uuid::Uuid;

static NATURE_LOGGER: Lazy<NatureLogger> = Lazy::new(NatureLogger::new);
static INSTALLED: OnceCell<()> = OnceCell::new();

pub fn init() -> Result<()> {
    init_with_config(LoggerConfig::default())
}

pub fn init_with_config(config: LoggerConfig) -> Result<()> {
    let level = config.min_level;
    NATURE_LOGGER.update_config(config);

    // Installed once per process; later calls only reconfigure.
    INSTALLED.get_or_try_init(|| {
        log::set_logger(&*NATURE_LOGGER)
            .map_err(|e| NatureError::ConfigError(format!("Failed to set logger: {}", e)))
    })?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}

#[cfg(test)]
thread_local! {
    static CAPTURED: std::cell::RefCell<Vec<(LogLevel, String)>> =
        std::cell::RefCell::new(Vec::new());
}

#[cfg(test)]
fn capture(entry: &LogEntry) {
    CAPTURED.with(|lines| lines.borrow_mut().push((entry.level, entry.message.clone())));
}

#[cfg(not(test))]
fn capture(_entry: &LogEntry) {}

/// Installs the logger for unit tests and clears this thread's captured lines.
#[cfg(test)]
pub(crate) fn init_for_tests() {
    let _ = init_with_config(LoggerConfig::new().with_colors(false));
    let _ = take_captured();
}

/// Lines logged on the current thread since the last call.
#[cfg(test)]
pub(crate) fn take_captured() -> Vec<(LogLevel, String)> {
    CAPTURED.with(|lines| std::mem::take(&mut *lines.borrow_mut()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn color(&self) -> Color {
        match self {
            LogLevel::Trace => Color::Cyan,
            LogLevel::Debug => Color::Blue,
            LogLevel::Info => Color::Green,
            LogLevel::Warn => Color::Yellow,
            LogLevel::Error => Color::Red,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            LogLevel::Trace => "🔍",
            LogLevel::Debug => "🐛",
            LogLevel::Info => "🌿",
            LogLevel::Warn => "⚠️",
            LogLevel::Error => "❌",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn to_level(&self) -> Level {
        match self {
            LogLevel::Trace => Level::Trace,
            LogLevel::Debug => Level::Debug,
            LogLevel::Info => Level::Info,
            LogLevel::Warn => Level::Warn,
            LogLevel::Error => Level::Error,
        }
    }

    pub fn to_level_filter(&self) -> LevelFilter {
        self.to_level().to_level_filter()
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => LogLevel::Trace,
            Level::Debug => LogLevel::Debug,
            Level::Info => LogLevel::Info,
            Level::Warn => LogLevel::Warn,
            Level::Error => LogLevel::Error,
        }
    }
}

/// One formatted log line, also the JSON shape in production.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub target: String,
    pub location: Option<String>,
}

impl LogEntry {
    fn from_record(record: &Record) -> Self {
        let location = match (record.file(), record.line()) {
            (Some(file), Some(line)) => Some(format!("{}:{}", file, line)),
            _ => None,
        };
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            level: record.level().into(),
            message: record.args().to_string(),
            target: record.target().to_string(),
            location,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    pub show_colors: bool,
    pub show_emojis: bool,
    pub show_target: bool,
    pub show_file_location: bool,
    pub timestamp_format: String,
    pub output_json: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            show_colors: true,
            show_emojis: true,
            show_target: true,
            show_file_location: false,
            timestamp_format: "%Y-%m-%d %H:%M:%S%.3f".to_string(),
            output_json: false,
            log_file: None,
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.show_colors = enabled;
        self
    }

    pub fn with_json_output(mut self, enabled: bool) -> Self {
        self.output_json = enabled;
        self
    }

    pub fn with_file_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn production() -> Self {
        Self {
            min_level: LogLevel::Info,
            show_colors: false,
            show_emojis: false,
            output_json: true,
            ..Default::default()
        }
    }

    pub fn development() -> Self {
        Self {
            min_level: LogLevel::Debug,
            show_file_location: true,
            ..Default::default()
        }
    }

    /// Picks the preset from app config; `Config::log_level` overrides its level.
    pub fn for_app(config: &Config) -> Self {
        let base = if config.production {
            Self::production()
        } else {
            Self::development()
        };
        match config.log_level {
            Some(level) => base.with_level(level),
            None => base,
        }
    }
}

pub struct NatureLogger {
    config: Mutex<LoggerConfig>,
    file: Mutex<Option<File>>,
}

impl NatureLogger {
    fn new() -> Self {
        Self {
            config: Mutex::new(LoggerConfig::default()),
            file: Mutex::new(None),
        }
    }

    fn update_config(&self, new_config: LoggerConfig) {
        if let Some(path) = &new_config.log_file {
            match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => {
                    if let Ok(mut slot) = self.file.lock() {
                        *slot = Some(file);
                    }
                }
                Err(e) => eprintln!("Could not open log file {}: {}", path.display(), e),
            }
        }
        if let Ok(mut config) = self.config.lock() {
            *config = new_config;
        }
    }

    fn render(entry: &LogEntry, config: &LoggerConfig) -> String {
        if config.output_json {
            return serde_json::to_string(entry).unwrap_or_default();
        }

        let paint = |text: String, color: Color| -> String {
            if config.show_colors {
                text.color(color).to_string()
            } else {
                text
            }
        };

        let mut parts = Vec::with_capacity(5);
        parts.push(paint(
            entry.timestamp.format(&config.timestamp_format).to_string(),
            Color::BrightBlack,
        ));

        let level = if config.show_emojis {
            format!("[{} {}]", entry.level.emoji(), entry.level.as_str())
        } else {
            format!("[{}]", entry.level.as_str())
        };
        parts.push(if config.show_colors {
            level.color(entry.level.color()).bold().to_string()
        } else {
            level
        });

        if config.show_target && !entry.target.is_empty() {
            parts.push(paint(format!("{}:", entry.target), Color::BrightBlue));
        }

        parts.push(entry.message.clone());

        if config.show_file_location {
            if let Some(location) = &entry.location {
                parts.push(paint(format!("({})", location), Color::BrightBlack));
            }
        }

        parts.join(" ")
    }
}

impl log::Log for NatureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.config
            .lock()
            .map(|config| metadata.level() <= config.min_level.to_level())
            .unwrap_or(true)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry::from_record(record);
        capture(&entry);
        let Ok(config) = self.config.lock() else {
            return;
        };

        let line = Self::render(&entry, &config);
        if entry.level >= LogLevel::Warn {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }

        if config.log_file.is_some() {
            if let Ok(mut slot) = self.file.lock() {
                if let Some(file) = slot.as_mut() {
                    let plain = LoggerConfig {
                        show_colors: false,
                        ..config.clone()
                    };
                    let _ = writeln!(file, "{}", Self::render(&entry, &plain));
                }
            }
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        if let Ok(mut slot) = self.file.lock() {
            if let Some(file) = slot.as_mut() {
                let _ = file.flush();
            }
        }
    }
}

/// Logs how long an operation took when dropped.
pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn new(name: &str) -> Self {
        log::debug!("⏱️  Starting: {}", name);
        Self {
            start: Instant::now(),
            name: name.to_string(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        log::debug!(
            "⏱️  '{}' finished in {}ms",
            self.name,
            self.elapsed().as_millis()
        );
    }
}

pub fn timer(name: &str) -> Timer {
    Timer::new(name)
}

pub fn log_startup_info(app_name: &str, version: &str, config: &Config) {
    log::info!("🚀 Starting {} v{}", app_name, version);
    if cfg!(feature = "server") {
        log::info!(
            "🌐 Serving on http://{}:{}",
            config.host,
            config.port_or_default()
        );
    }
}

pub fn log_config_info(config: &Config) {
    log::info!("⚙️  Configuration loaded:");
    log::info!("   Endpoint: {}", config.endpoint);
    log::info!("   Size: {}x{}", config.width, config.height);
    log::info!("   Downloads: {}", config.download_dir.display());
    log::info!(
        "   Mode: {}",
        if config.production { "production" } else { "development" }
    );
}
