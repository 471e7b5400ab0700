//! Configuration for lapify-web
//!
//! Sources, highest priority first:
//! 1. Command-line arguments
//! 2. Environment variables (`LAPIFY_*`, read by clap)
//! 3. TOML file (`--config`, else `~/.config/lapify/config.toml`)
//! 4. Compiled defaults
//!
//! A missing TOML file is not an error: defaults apply and the caller logs a
//! warning once tracing is up. A TOML file that exists but does not parse is
//! an error.

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use clap::Parser;
use lapify_common::source::{DEFAULT_SHEET_ID, DEFAULT_TAB_NAME};
use lapify_common::{Error, Result, SourceLocator};
use serde::Deserialize;

use crate::services::recommender::{DEFAULT_GENAI_BASE_URL, DEFAULT_GENAI_MODEL};
use crate::services::sheet_client::DEFAULT_SHEETS_BASE_URL;
use crate::services::RecommenderConfig;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5730;

/// Default bind address (loopback only)
pub const DEFAULT_BIND: &str = "127.0.0.1";

/// Command-line arguments
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "lapify-web", version, about = "Lapify laptop catalog service")]
pub struct Args {
    /// Path to TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long, env = "LAPIFY_PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, env = "LAPIFY_BIND")]
    pub bind: Option<String>,

    /// Published sheet id
    #[arg(long, env = "LAPIFY_SHEET_ID")]
    pub sheet_id: Option<String>,

    /// Sheet tab name
    #[arg(long, env = "LAPIFY_TAB_NAME")]
    pub tab_name: Option<String>,

    /// Admin key; empty disables the admin gate
    #[arg(long, env = "LAPIFY_ADMIN_KEY", hide_env_values = true)]
    pub admin_key: Option<String>,

    /// Text-generation API key; unset disables remote recommendation text
    #[arg(long, env = "LAPIFY_GENAI_API_KEY", hide_env_values = true)]
    pub genai_api_key: Option<String>,
}

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub bind: Option<String>,
    pub sheet_id: Option<String>,
    pub tab_name: Option<String>,
    pub admin_key: Option<String>,

    /// Override for the sheet export host (tests, proxies)
    pub sheets_base_url: Option<String>,

    pub logging: LoggingConfig,
    pub recommender: RecommenderToml,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` overrides it
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// `[recommender]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecommenderToml {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

/// Outcome of looking for the TOML file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigFile {
    Loaded(PathBuf),
    Missing(PathBuf),
    /// No platform config directory
    Unresolved,
}

/// Fully resolved service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub file: ConfigFile,
    pub bind: IpAddr,
    pub port: u16,
    pub source: SourceLocator,
    pub admin_key: String,
    pub sheets_base_url: String,
    pub recommender: RecommenderConfig,
    pub log_level: String,
}

impl Config {
    /// Load the TOML file named by `args` (or the default path) and merge
    pub fn load(args: &Args) -> Result<Self> {
        let path = args.config.clone().or_else(default_config_path);
        let (toml, file) = match path {
            Some(path) => match load_toml(&path)? {
                Some(toml) => (toml, ConfigFile::Loaded(path)),
                None => (TomlConfig::default(), ConfigFile::Missing(path)),
            },
            None => (TomlConfig::default(), ConfigFile::Unresolved),
        };

        let mut config = Self::resolve(args, toml)?;
        config.file = file;
        Ok(config)
    }

    /// Merge arguments over TOML values over compiled defaults
    pub fn resolve(args: &Args, toml: TomlConfig) -> Result<Self> {
        let bind_str = pick(args.bind.clone(), toml.bind, DEFAULT_BIND);
        let bind: IpAddr = bind_str
            .parse()
            .map_err(|e| Error::Config(format!("Invalid bind address {:?}: {}", bind_str, e)))?;

        let source = SourceLocator::new(
            pick(args.sheet_id.clone(), toml.sheet_id, DEFAULT_SHEET_ID),
            pick(args.tab_name.clone(), toml.tab_name, DEFAULT_TAB_NAME),
        )
        .validated()
        .map_err(|e| Error::Config(e.to_string()))?;

        let api_key = args
            .genai_api_key
            .clone()
            .or(toml.recommender.api_key)
            .filter(|k| !k.trim().is_empty());

        Ok(Self {
            file: ConfigFile::Unresolved,
            bind,
            port: args.port.or(toml.port).unwrap_or(DEFAULT_PORT),
            source,
            admin_key: pick(args.admin_key.clone(), toml.admin_key, ""),
            sheets_base_url: toml
                .sheets_base_url
                .unwrap_or_else(|| DEFAULT_SHEETS_BASE_URL.to_string()),
            recommender: RecommenderConfig {
                api_key,
                model: toml
                    .recommender
                    .model
                    .unwrap_or_else(|| DEFAULT_GENAI_MODEL.to_string()),
                base_url: toml
                    .recommender
                    .base_url
                    .unwrap_or_else(|| DEFAULT_GENAI_BASE_URL.to_string()),
            },
            log_level: toml.logging.level,
        })
    }
}

fn pick(arg: Option<String>, toml: Option<String>, default: &str) -> String {
    arg.or(toml).unwrap_or_else(|| default.to_string())
}

/// `~/.config/lapify/config.toml` (platform config dir)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("lapify").join("config.toml"))
}

/// Read a TOML config file; `None` when the file does not exist
pub fn load_toml(path: &Path) -> Result<Option<TomlConfig>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    let config: TomlConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse TOML {:?}: {}", path, e)))?;
    Ok(Some(config))
}
