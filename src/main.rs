use anyhow::Result;
use clap::Parser;
use storefront_cart::{cli::args::Args, cli::commands::CliApp, utils::Config};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(config.filter_directive(args.verbose))
            }),
        )
        .init();

    tracing::info!("🦀 Storefront cart starting...");
    tracing::info!(
        "Configuration loaded for {} environment",
        config.environment
    );

    let mut app = CliApp::new(&config, &args)?;
    app.run()?;

    tracing::info!("🦀 Storefront cart stopped");
    Ok(())
}
