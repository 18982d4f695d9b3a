use super::{init, print_json};
use clap::Parser;
use pagebridge::{ArgumentNormalizer, ConnectionArgs};
use pagebridge_lib::config::GatewayArgs;
use serde_json::json;
use tracing::info;

#[derive(Debug, Parser)]
pub struct Command {
    #[clap(long, allow_hyphen_values = true)]
    pub first: Option<i64>,
    #[clap(long)]
    pub after: Option<String>,
    #[clap(long, allow_hyphen_values = true)]
    pub last: Option<i64>,
    #[clap(long)]
    pub before: Option<String>,
    #[clap(long, allow_hyphen_values = true)]
    pub page: Option<i64>,
    #[clap(long, allow_hyphen_values = true)]
    pub size: Option<i64>,

    #[clap(flatten)]
    pub gateway: GatewayArgs,
}

impl Command {
    fn connection_args(&self) -> ConnectionArgs {
        ConnectionArgs {
            first: self.first,
            after: self.after.clone(),
            last: self.last,
            before: self.before.clone(),
            page: self.page,
            size: self.size,
            ..Default::default()
        }
    }
}

pub fn exec(command: Command) -> anyhow::Result<()> {
    let args = command.connection_args();
    let config = init(command.gateway)?;
    let normalizer = ArgumentNormalizer::new(config.paging.into());

    let (state, _) = normalizer.normalize(&args)?;
    info!(
        "Page {} of size {} starts at offset {}",
        state.page, state.size, state.offset
    );

    print_json(&json!({
        "state": state,
        "explicitPage": state.has_explicit_page(),
        "connectionArgs": normalizer.denormalize(&state),
    }))
}
