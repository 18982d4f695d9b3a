use super::{init, print_json};
use clap::Parser;
use pagebridge::{total_pages, ArgumentNormalizer, ConnectionArgs, PageCursorNavigator};
use pagebridge_lib::config::GatewayArgs;
use serde_json::json;

#[derive(Debug, Parser)]
pub struct Command {
    /// One-based page.
    #[clap(long, default_value_t = 1)]
    pub page: i64,

    /// Page size. Falls back to the configured default page size.
    #[clap(long)]
    pub size: Option<i64>,

    /// Total count reported by the backend.
    #[clap(long)]
    pub total_count: u64,

    #[clap(flatten)]
    pub gateway: GatewayArgs,
}

pub fn exec(command: Command) -> anyhow::Result<()> {
    let config = init(command.gateway)?;
    let args = ConnectionArgs {
        page: Some(command.page),
        size: command.size,
        ..Default::default()
    };
    let (state, _) = ArgumentNormalizer::new(config.paging.into()).normalize(&args)?;

    let effective_length = command.total_count.min(config.paging.max_window);
    let navigator = PageCursorNavigator::new(config.paging.page_cursor_window);

    print_json(&json!({
        "totalPages": total_pages(effective_length, state.size),
        "pageCursors": navigator.build(&state, effective_length),
    }))
}
