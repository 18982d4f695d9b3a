use super::{init, print_json};
use clap::Parser;
use pagebridge::cursor;
use pagebridge_lib::config::GatewayArgs;
use serde_json::json;

#[derive(Debug, Parser)]
pub struct Command {
    /// Zero-based array indexes.
    #[clap(required = true)]
    pub index: Vec<u64>,

    #[clap(flatten)]
    pub gateway: GatewayArgs,
}

pub fn exec(command: Command) -> anyhow::Result<()> {
    init(command.gateway)?;

    let cursors = command
        .index
        .iter()
        .map(|&index| json!({ "index": index, "cursor": cursor::encode(index) }))
        .collect::<Vec<_>>();

    print_json(&cursors)
}
