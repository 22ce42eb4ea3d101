use std::path::Path;

use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::Result;

/// Validate configuration without starting the platform.
pub fn execute(args: &CheckArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            println!("Checking configuration: {}", path.display());
            Config::load(path)?
        }
        None => {
            println!("Checking configuration from environment");
            Config::from_env()?
        }
    };
    println!();
    println!("✓ Configuration is valid");
    println!();
    println!("Summary:");
    println!("  Project: {}", config.firestore.project_id);
    println!("  Credentials file: {}", config.firestore.credentials_path);
    println!("  Initial capital: {}", config.trading.initial_capital);
    println!(
        "  Evolution: {} strategies x {} generations",
        config.evolution.population_size, config.evolution.generations
    );
    println!("  Store retries: {} attempts", config.retry.max_attempts);
    println!();

    if Path::new(&config.firestore.credentials_path).exists() {
        println!("✓ Credentials file found");
    } else {
        println!("⚠ Credentials file not found");
        println!("  Document-store initialization will fail without it");
    }

    if config.exchanges.is_empty() {
        println!("⚠ No exchanges configured");
        println!("  Set BINANCE_API_KEY/BINANCE_API_SECRET (or the Coinbase pair) to trade");
    } else {
        for name in config.exchanges.names() {
            // Lookup cannot fail for names the config itself reported.
            let creds = config.exchanges.get(name)?;
            let mode = if creds.sandbox { "sandbox" } else { "live" };
            println!("✓ {name} configured ({mode})");
        }
    }

    println!();
    println!("Configuration is ready to use.");
    Ok(())
}
