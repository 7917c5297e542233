use suitelink_domain::{LoggingConfig, Result, SuiteLinkError};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `config.level` when set. Calling this after a
/// subscriber is already installed (a host application, a second `init`) is a
/// no-op.
///
/// # Errors
/// `SuiteLinkError::Config` when `config.level` is not a valid filter
/// directive.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let env_filter = build_filter(config)?;

    let installed = if config.json {
        tracing_subscriber::fmt().json().with_env_filter(env_filter).with_target(true).try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).with_target(false).try_init()
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed, keeping it");
    }

    Ok(())
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(config.level.trim()).map_err(|err| {
        SuiteLinkError::Config(format!("invalid log level '{}': {err}", config.level))
    })
}
