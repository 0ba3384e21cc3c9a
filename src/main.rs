use clap::Parser;
use wallet_onboarding_lib::bootstrap::tracing::init_tracing_subscriber;
use wallet_onboarding_lib::cli::{run, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let log_dir = (!config.log_dir.as_os_str().is_empty()).then_some(config.log_dir.as_path());
    init_tracing_subscriber(log_dir)?;

    let report = run(cli.command, &config).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
