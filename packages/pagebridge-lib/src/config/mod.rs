pub mod paging;

pub use crate::{config::paging::PagingConfig, defaults};
pub use clap::{Args, Parser};
use crate::utils::{is_opt_env_var, trim_opt_env_key};
use serde::Deserialize;
use std::{fs::File, io::Error, path::Path, path::PathBuf};
use strum::{AsRefStr, EnumString};
use thiserror::Error;
use tracing::debug;

/// Error type returned by configuration operations.
#[derive(Error, Debug)]
pub enum GatewayConfigError {
    #[error("Error parsing env variables from config")]
    EnvVarParseError(#[from] std::env::VarError),
    #[error("Error processing file: {0:?}")]
    ConfigFileError(#[from] Error),
    #[error("Error processing YAML file: {0:?}")]
    SerdeYamlError(#[from] serde_yaml::Error),
    #[error("Invalid paging configuration: {0}")]
    InvalidPagingConfig(String),
}

/// Result type returned by configuration operations.
pub type GatewayConfigResult<T> = core::result::Result<T, GatewayConfigError>;

/// Environment variables read by the gateway.
#[derive(Debug, EnumString, AsRefStr)]
pub enum EnvVar {
    #[strum(serialize = "RUST_LOG")]
    RustLog,
    #[strum(serialize = "HUMAN_LOGGING")]
    HumanLogging,
}

/// Resolve `$VAR`/`${VAR}` placeholders in a config section.
pub trait Env {
    fn inject_opt_env_vars(&mut self) -> GatewayConfigResult<()>;
}

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "Pagebridge",
    about = "Cursor connection paging over page/size backends.",
    version
)]
pub struct GatewayArgs {
    /// Log level.
    #[clap(long, default_value = defaults::LOG_LEVEL, value_parser(["info", "debug", "error", "warn"]), help = "Log level.")]
    pub log_level: String,

    /// Gateway config file.
    #[clap(short, long, value_name = "FILE", help = "Gateway config file.")]
    pub config: Option<PathBuf>,

    /// Page size used when no `first`, `last` or `size` is given.
    #[clap(
        long,
        default_value_t = defaults::DEFAULT_PAGE_SIZE,
        help = "Page size used when no `first`, `last` or `size` is given."
    )]
    pub default_page_size: u64,

    /// Number of leading results the backends reliably return.
    #[clap(
        long,
        default_value_t = defaults::MAX_WINDOW,
        help = "Number of leading results the backends reliably return."
    )]
    pub max_window: u64,

    /// Width of the `around` page cursor list.
    #[clap(
        long,
        default_value_t = defaults::PAGE_CURSOR_WINDOW,
        help = "Width of the `around` page cursor list."
    )]
    pub page_cursor_window: u64,

    /// Enable verbose logging.
    #[clap(short, long, help = "Enable verbose logging.")]
    pub verbose: bool,
}

impl Default for GatewayArgs {
    fn default() -> Self {
        Self {
            log_level: defaults::LOG_LEVEL.to_string(),
            config: None,
            default_page_size: defaults::DEFAULT_PAGE_SIZE,
            max_window: defaults::MAX_WINDOW,
            page_cursor_window: defaults::PAGE_CURSOR_WINDOW,
            verbose: defaults::VERBOSE_LOGGING,
        }
    }
}

/// Gateway configuration.
#[derive(Clone, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GatewayConfig {
    pub log_level: String,
    pub verbose: bool,
    pub paging: PagingConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::LOG_LEVEL.to_string(),
            verbose: defaults::VERBOSE_LOGGING,
            paging: PagingConfig::default(),
        }
    }
}

impl From<GatewayArgs> for GatewayConfig {
    fn from(args: GatewayArgs) -> Self {
        GatewayConfig {
            log_level: args.log_level,
            verbose: args.verbose,
            paging: PagingConfig {
                default_page_size: args.default_page_size,
                max_window: args.max_window,
                page_cursor_window: args.page_cursor_window,
            },
        }
    }
}

impl Env for GatewayConfig {
    fn inject_opt_env_vars(&mut self) -> GatewayConfigResult<()> {
        if is_opt_env_var(&self.log_level) {
            self.log_level = std::env::var(trim_opt_env_key(&self.log_level))?;
        }
        Ok(())
    }
}

impl GatewayConfig {
    /// Build the config from a YAML file. Any section or setting missing from
    /// the file keeps its default value.
    pub fn from_file(path: impl AsRef<Path>) -> GatewayConfigResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let mut config: GatewayConfig = serde_yaml::from_reader(file)?;
        config.inject_opt_env_vars()?;
        config.paging.validate()?;

        debug!("Loaded gateway configuration from {}", path.display());

        Ok(config)
    }

    /// Build the config from command line arguments, preferring `--config`
    /// when one was given.
    pub fn from_args(args: GatewayArgs) -> GatewayConfigResult<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => {
                let config = GatewayConfig::from(args);
                config.paging.validate()?;
                Ok(config)
            }
        }
    }
}
