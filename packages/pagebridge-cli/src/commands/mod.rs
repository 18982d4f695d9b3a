use pagebridge_lib::{
    config::{GatewayArgs, GatewayConfig},
    utils::init_logging,
};
use tracing::debug;

pub mod cursors;
pub mod decode;
pub mod encode;
pub mod normalize;

/// Resolve the gateway config for a command and start logging.
pub(crate) fn init(args: GatewayArgs) -> anyhow::Result<GatewayConfig> {
    let config = GatewayConfig::from_args(args)?;
    init_logging(&config)?;

    debug!("Configuration: {:?}", config);

    Ok(config)
}

pub(crate) fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
