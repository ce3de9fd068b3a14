// Configuration loading and parsing (luckydraw.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Name of the single config file under `config/` and `defaults/`.
pub const CONFIG_FILE: &str = "luckydraw.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub draw: DrawConfig,
    pub auto_shuffle: AutoShuffleConfig,
    pub session: SessionConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DrawConfig {
    /// Default number of winners per pick.
    pub pick_amount: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AutoShuffleConfig {
    pub enabled: bool,
    pub period_ms: u64,
}

impl AutoShuffleConfig {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub check_interval_ms: u64,
}

impl SessionConfig {
    pub fn check_interval(&self) -> Duration {
        Duration::from_millis(self.check_interval_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            draw: DrawConfig { pick_amount: 5 },
            auto_shuffle: AutoShuffleConfig {
                enabled: true,
                period_ms: 2000,
            },
            session: SessionConfig {
                check_interval_ms: 1000,
            },
            database: DatabaseConfig {
                path: "luckydraw.db".into(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/luckydraw.toml` relative to `base_dir`.
///
/// Does not copy defaults; `load_config()` does that first.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Ensure all config files exist by copying missing ones from `defaults/`.
/// Returns the list of files that were copied. Skips `.example` files.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.exists() {
        if !config_dir.exists() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "neither defaults/ nor config/ directory found in {}; \
                     run from the crate root or ensure defaults/ is present",
                    base_dir.display()
                ),
            });
        }
        return Ok(vec![]);
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let mut copied = Vec::new();

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read defaults entry: {e}"),
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };
        if file_name.to_str().is_some_and(|n| n.ends_with(".example")) {
            continue;
        }
        let target = config_dir.join(file_name);

        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
        {
            Ok(mut dest) => {
                let content = std::fs::read(&path).map_err(|e| ConfigError::DefaultsCopyError {
                    message: format!("failed to read {}: {e}", path.display()),
                })?;
                std::io::Write::write_all(&mut dest, &content).map_err(|e| {
                    ConfigError::DefaultsCopyError {
                        message: format!("failed to write {}: {e}", target.display()),
                    }
                })?;
                copied.push(target);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {}
            Err(e) => {
                return Err(ConfigError::DefaultsCopyError {
                    message: format!("failed to create {}: {e}", target.display()),
                });
            }
        }
    }

    Ok(copied)
}

/// Load config relative to the current working directory, copying defaults
/// first.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.draw.pick_amount == 0 {
        return Err(ConfigError::ValidationError {
            field: "draw.pick_amount".into(),
            message: "must be at least 1".into(),
        });
    }

    let durations: &[(&str, u64)] = &[
        ("auto_shuffle.period_ms", config.auto_shuffle.period_ms),
        ("session.check_interval_ms", config.session.check_interval_ms),
    ];
    for (name, val) in durations {
        if *val == 0 {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must be > 0".into(),
            });
        }
    }

    if config.database.path.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "database.path".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
