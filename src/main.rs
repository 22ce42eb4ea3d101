use clap::Parser;
use evotrade::cli::{check, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // Config-load warnings (missing credentials file and the like) should be
    // visible even before a full logging config exists.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Check(args) => check::execute(&args)?,
    }
    Ok(())
}
