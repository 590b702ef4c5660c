//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `utm_links` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use strum::IntoEnumIterator;

use utm_links::initialization::init_logger_with;
use utm_links::{run_generate, Config, UtmField, Vocabulary};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting PRODUCT_LIST_URL in .env without exporting it manually
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        // If .env not found in current dir, try next to the executable
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Listing the vocabulary is a standalone mode; nothing is generated
    if config.show_vocabulary {
        let vocabulary = Vocabulary::resolve(config.vocabulary.as_deref())
            .context("Failed to load vocabulary")?;
        for field in UtmField::iter() {
            println!("{}:", field.as_str());
            for value in vocabulary.options(field) {
                println!("  {value}");
            }
        }
        return Ok(());
    }

    // Run the generation using the library
    match run_generate(config).await {
        Ok(report) => {
            // Print user-friendly summary
            println!(
                "✅ Generated {} link{} in {:.1}s",
                report.links.len(),
                if report.links.len() == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            if let Some(path) = &report.exported {
                println!("Links saved in {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("utm_links error: {:#}", e);
            process::exit(1);
        }
    }
}
