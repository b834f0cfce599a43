use anyhow::Context;
use clap::Parser;
use vaxdesk::cli::Cli;
use vaxdesk::gateway::RecordGateway;
use vaxdesk::logging::init_tracing;
use vaxdesk::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.load_config()?;
    let gateway = RecordGateway::new(&config.gateway)?;
    tracing::info!(base_url = gateway.base_url(), "starting inventory screen");

    runtime::run(gateway, &config.ui).context("Terminal session failed")?;
    Ok(())
}
