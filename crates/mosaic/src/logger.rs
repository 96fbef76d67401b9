//! File-based logging that writes one log file per run under the platform
//! data directory at mosaic/logs/{run_id}.log.

use anyhow::{anyhow, Context as _, Result};
use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use uuid::Uuid;

pub struct MosaicLogger {
    level: LevelFilter,
    file: Mutex<File>,
    log_path: PathBuf,
}

impl MosaicLogger {
    /// Log level from `MOSAIC_LOG`, defaulting to `info`.
    fn level_from_env() -> LevelFilter {
        std::env::var("MOSAIC_LOG")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(LevelFilter::Info)
    }

    fn log_dir() -> Result<PathBuf> {
        let data = dirs::data_dir().ok_or_else(|| anyhow!("no platform data directory"))?;
        Ok(data.join("mosaic").join("logs"))
    }

    pub fn new(level: LevelFilter) -> Result<Self> {
        let dir = Self::log_dir()?;
        create_dir_all(&dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let uuid_string = Uuid::new_v4().to_string();
        let uuid = uuid_string.split('-').next().unwrap_or("unknown");
        let log_path = dir.join(format!("{timestamp}_{uuid}.log"));

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("failed to open log file {}", log_path.display()))?;

        Ok(Self {
            level,
            file: Mutex::new(file),
            log_path,
        })
    }

    /// Installs the logger as the global `log` backend.
    pub fn init() -> Result<()> {
        let level = Self::level_from_env();
        let logger = Self::new(level)?;
        let log_path = logger.log_path.clone();

        log::set_boxed_logger(Box::new(logger))
            .map(|()| log::set_max_level(level))
            .map_err(|error| anyhow!("failed to set logger: {error}"))?;

        log::info!("logging at {level} to {}", log_path.display());
        Ok(())
    }
}

impl Log for MosaicLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let message = format!(
            "{} {} [{}] {}",
            timestamp,
            record.level(),
            record.target(),
            record.args()
        );

        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{message}");
            let _ = file.flush();
        }

        // Mirror to stderr for visibility during development.
        eprintln!("{message}");
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}
