//! Configuration loader
//!
//! Loads SuiteLink configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Reads `.env` from the working directory, if present (existing
//!    variables are never overridden)
//! 2. Attempts to load from environment variables
//! 3. If a required variable is missing, falls back to a config file
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `NETSUITE_ACCOUNT_ID`: Account id, e.g. `1234567` or `1234567_SB1`
//! - `NETSUITE_CONSUMER_KEY` / `NETSUITE_CONSUMER_SECRET`: Integration record
//! - `NETSUITE_TOKEN_ID` / `NETSUITE_TOKEN_SECRET`: Access token
//! - `NETSUITE_API_HOST`: API host suffix (default `suitetalk.api.netsuite.com`)
//! - `NETSUITE_BASE_URL`: Full base URL override (proxies, test servers)
//! - `NETSUITE_TIMEOUT_SECS`: Per-request timeout in seconds (default 30)
//! - `SUITELINK_LOG_LEVEL`: Default log level (default `info`)
//! - `SUITELINK_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes `suitelink.{json,toml}` and `config.{json,toml}` in the
//! working directory, its two parents, and next to the executable.

use std::path::{Path, PathBuf};

use suitelink_domain::constants::{DEFAULT_API_HOST, DEFAULT_TIMEOUT_SECS};
use suitelink_domain::{Config, LoggingConfig, NetSuiteConfig, Result, SuiteLinkError};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["suitelink.json", "suitelink.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `SuiteLinkError::Config` if:
/// - A required variable is missing and no config file exists (the error
///   names the missing variable)
/// - A variable or file has an invalid value or format
pub fn load() -> Result<Config> {
    load_dotenv();

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(env_err) => {
            tracing::debug!(error = %env_err, "Environment incomplete, probing config files");
            match probe_config_paths() {
                Some(path) => load_from_file(Some(path)),
                None => Err(env_err),
            }
        }
    }
}

/// Read `.env` into the process environment. Missing files are ignored.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "Ignoring unreadable .env file"),
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `SuiteLinkError::Config` if a required variable is missing or a
/// numeric variable does not parse.
pub fn load_from_env() -> Result<Config> {
    let account_id = env_var("NETSUITE_ACCOUNT_ID")?;
    let consumer_key = env_var("NETSUITE_CONSUMER_KEY")?;
    let consumer_secret = env_var("NETSUITE_CONSUMER_SECRET")?;
    let token_id = env_var("NETSUITE_TOKEN_ID")?;
    let token_secret = env_var("NETSUITE_TOKEN_SECRET")?;

    let api_host = env_opt("NETSUITE_API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_string());
    let base_url = env_opt("NETSUITE_BASE_URL");
    let timeout_secs = match env_opt("NETSUITE_TIMEOUT_SECS") {
        Some(raw) => raw.parse::<u64>().map_err(|e| {
            SuiteLinkError::Config(format!("Invalid NETSUITE_TIMEOUT_SECS '{raw}': {e}"))
        })?,
        None => DEFAULT_TIMEOUT_SECS,
    };

    let logging = LoggingConfig {
        level: env_opt("SUITELINK_LOG_LEVEL").unwrap_or_else(|| LoggingConfig::default().level),
        json: env_bool("SUITELINK_LOG_JSON", false),
    };

    Ok(Config {
        netsuite: NetSuiteConfig {
            account_id,
            consumer_key,
            consumer_secret,
            token_id,
            token_secret,
            api_host,
            base_url,
            timeout_secs,
        },
        logging,
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
///
/// # Errors
/// Returns `SuiteLinkError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SuiteLinkError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SuiteLinkError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SuiteLinkError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SuiteLinkError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SuiteLinkError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(SuiteLinkError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing config file in the standard locations, if any.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        roots.push(exe_dir);
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        SuiteLinkError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Non-blank variable value, trimmed.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    env_opt(key)
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
