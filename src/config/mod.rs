//! Runtime configuration
//!
//! Settings come from the environment (optionally seeded from a `.env` file)
//! and can be overridden on the command line:
//!
//! | Variable             | Flag          | Default          |
//! |----------------------|---------------|------------------|
//! | `SEAT_COUNT`         | `--seats`     | `30`             |
//! | `SEATS_PER_ROW`      | `--per-row`   | `5`              |
//! | `SEATBOARD_UI`       | `--tui`       | `plain`          |
//! | `SEATBOARD_COLOR`    | `--no-color`  | `true`           |
//! | `SEATBOARD_LOG_FILE` | `--log-file`  | unset            |
//! | `RUST_LOG`           |               | `seatboard=warn` |
//!
//! `NO_COLOR`, when set to anything non-empty, also turns colors off.

use clap::Parser;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_SEAT_COUNT: usize = 30;
pub const DEFAULT_SEATS_PER_ROW: usize = 5;
pub const DEFAULT_LOG_FILTER: &str = "seatboard=warn";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}='{value}' is invalid: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: impl ToString, reason: &'static str) -> Self {
        ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason,
        }
    }
}

/// Which front end to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Line-by-line prompts on stdin/stdout
    Plain,
    /// Full-screen ratatui interface
    Tui,
}

impl FromStr for UiMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "console" => Ok(UiMode::Plain),
            "tui" => Ok(UiMode::Tui),
            _ => Err(ConfigError::invalid("SEATBOARD_UI", s, "expected 'plain' or 'tui'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub board: BoardConfig,
    pub app: AppConfig,
}

// Board size and layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub seat_count: usize,
    pub seats_per_row: usize,
}

// Front end and logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub ui: UiMode,
    pub color: bool,
    pub log_file: Option<PathBuf>,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            board: BoardConfig {
                seat_count: DEFAULT_SEAT_COUNT,
                seats_per_row: DEFAULT_SEATS_PER_ROW,
            },
            app: AppConfig {
                ui: UiMode::Plain,
                color: true,
                log_file: None,
                rust_log: DEFAULT_LOG_FILTER.to_string(),
            },
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; missing keys take their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup("SEAT_COUNT") {
            config.board.seat_count = parse_count("SEAT_COUNT", &value)?;
        }
        if let Some(value) = lookup("SEATS_PER_ROW") {
            config.board.seats_per_row = parse_count("SEATS_PER_ROW", &value)?;
        }
        if let Some(value) = lookup("SEATBOARD_UI") {
            config.app.ui = value.parse()?;
        }
        if let Some(value) = lookup("SEATBOARD_COLOR") {
            config.app.color = value.trim().parse().map_err(|_| {
                ConfigError::invalid("SEATBOARD_COLOR", &value, "expected true or false")
            })?;
        }
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.app.color = false;
        }
        if let Some(value) = lookup("SEATBOARD_LOG_FILE").filter(|v| !v.trim().is_empty()) {
            config.app.log_file = Some(PathBuf::from(value));
        }
        if let Some(value) = lookup("RUST_LOG").filter(|v| !v.trim().is_empty()) {
            config.app.rust_log = value;
        }

        Ok(config)
    }
}

fn parse_count(key: &'static str, value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err(ConfigError::invalid(key, value, "must be at least 1")),
        Ok(n) => Ok(n),
        Err(_) => Err(ConfigError::invalid(key, value, "expected a positive integer")),
    }
}

/// Command-line overrides for [`Config`]
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of seats on the board
    #[clap(short, long)]
    pub seats: Option<usize>,

    /// Seats shown per grid row
    #[clap(short, long)]
    pub per_row: Option<usize>,

    /// Use the full-screen interface
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub tui: bool,

    /// Disable colored seat markers
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub no_color: bool,

    /// Write logs to this file
    #[clap(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply the flags on top of `config`
    pub fn apply(self, mut config: Config) -> Result<Config, ConfigError> {
        if let Some(seats) = self.seats {
            if seats == 0 {
                return Err(ConfigError::invalid("--seats", seats, "must be at least 1"));
            }
            config.board.seat_count = seats;
        }
        if let Some(per_row) = self.per_row {
            if per_row == 0 {
                return Err(ConfigError::invalid("--per-row", per_row, "must be at least 1"));
            }
            config.board.seats_per_row = per_row;
        }
        if self.tui {
            config.app.ui = UiMode::Tui;
        }
        if self.no_color {
            config.app.color = false;
        }
        if self.log_file.is_some() {
            config.app.log_file = self.log_file;
        }
        Ok(config)
    }
}
