//! The stagedoor CLI
//!
//! Headless driver for the site core: run diagnostic scenarios, seed the
//! compiled-in default content, inspect or clear the durable records.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stagedoor_app::{
    seed, Scenario, ScenarioRunner, SiteConfig, SiteContext,
};
use stagedoor_core::storage::{FileStorage, SharedStorage};

#[derive(Parser)]
#[command(name = "stagedoor", version, about = "Headless driver for the stagedoor site core")]
struct Cli {
    /// Site directory (holds stagedoor.toml and the storage root)
    #[arg(long, default_value = ".")]
    site: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Execute a scenario file against the site's storage
    Run {
        /// Path to a scenario JSON file
        scenario: PathBuf,
    },
    /// Write the compiled-in default content into storage
    Seed,
    /// Report stored content, theme, and admin state
    Status,
    /// Clear all three durable records
    Reset,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = SiteConfig::load_or_default(&cli.site)?;
    let storage: SharedStorage = Arc::new(
        FileStorage::open(cli.site.join(&config.storage.root))
            .context("Failed to open storage root")?,
    );

    match cli.command {
        Command::Run { scenario } => {
            let scenario = Scenario::from_path(&scenario)
                .with_context(|| format!("Failed to load scenario {}", scenario.display()))?;
            let mut runner = ScenarioRunner::new(storage, config.records.clone());
            let outcome = runner.run(&scenario)?;

            let report = outcome.report();
            match &report.failure {
                None => println!("PASSED ({} steps)", report.steps_executed),
                Some(failure) => {
                    println!(
                        "FAILED at step {} ({}): {}",
                        failure.step_index, failure.step, failure.message
                    );
                    std::process::exit(1);
                }
            }
        }
        Command::Seed => {
            let ctx = SiteContext::new(storage.clone(), &config.records);
            let count = seed::seed_defaults(&ctx);
            println!("seeded {count} content entries");
            if !seed::verify_seed(&storage, &config.records) {
                anyhow::bail!("seed verification failed");
            }
        }
        Command::Status => {
            let status = seed::seed_status(&storage, &config.records);
            println!("content entries: {}", status.content_count);
            println!("theme: {}", status.theme);
            println!(
                "admin: {} (edit mode: {})",
                status.is_admin, status.is_edit_mode
            );
        }
        Command::Reset => {
            seed::reset(&storage, &config.records)?;
            println!("storage cleared");
        }
    }

    Ok(())
}
