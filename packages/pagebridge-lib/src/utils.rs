use crate::config::{EnvVar, GatewayConfig};
use anyhow::anyhow;
use std::{env, str::FromStr};
use tracing_subscriber::filter::EnvFilter;

/// Trim the leading `$` or the surrounding `${`/`}` from an env var key.
pub fn trim_opt_env_key(key: &str) -> &str {
    // Ambiguous key: $FOO, non-ambiguous key: ${FOO}
    key.strip_prefix("${")
        .and_then(|k| k.strip_suffix('}'))
        .or_else(|| key.strip_prefix('$'))
        .unwrap_or(key)
}

/// Whether a config value refers to an environment variable.
pub fn is_opt_env_var(k: &str) -> bool {
    k.starts_with('$') || (k.starts_with("${") && k.ends_with('}'))
}

/// Initialize the logging context for the gateway.
pub fn init_logging(config: &GatewayConfig) -> anyhow::Result<()> {
    let filter = match env::var_os(EnvVar::RustLog.as_ref()) {
        Some(_) => EnvFilter::try_from_default_env()
            .map_err(|e| anyhow!("Invalid `RUST_LOG` provided: {e}"))?,
        None if config.verbose => EnvFilter::new("debug"),
        None => EnvFilter::new(&config.log_level),
    };

    let human_logging = match env::var(EnvVar::HumanLogging.as_ref()) {
        Ok(s) => bool::from_str(&s).map_err(|_| {
            anyhow!("Expected `true` or `false` to be provided for `HUMAN_LOGGING`")
        })?,
        Err(_) => true,
    };

    let sub = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter);

    let result = if human_logging {
        sub.with_ansi(true)
            .with_level(true)
            .with_line_number(true)
            .try_init()
    } else {
        sub.with_ansi(false)
            .with_level(true)
            .with_line_number(true)
            .json()
            .try_init()
    };

    result.map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
