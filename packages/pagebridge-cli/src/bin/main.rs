use pagebridge_cli::cli::run_cli;

pub fn main() -> anyhow::Result<()> {
    run_cli()
}
