//! Catalog command - manage the product-catalog configuration.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;

use romaneio_core::RomaneioConfig;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    command: CatalogCommand,
}

#[derive(Subcommand)]
enum CatalogCommand {
    /// Show the current configuration
    Show,

    /// Initialize a configuration file with the built-in catalog
    Init(InitArgs),

    /// Show the configuration file path
    Path,

    /// Validate a configuration file
    Validate {
        /// Path to JSON config file
        file: PathBuf,
    },
}

#[derive(Args)]
struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,
}

pub fn run(args: CatalogArgs) -> anyhow::Result<()> {
    match args.command {
        CatalogCommand::Show => show_config(),
        CatalogCommand::Init(init_args) => init_config(init_args),
        CatalogCommand::Path => show_path(),
        CatalogCommand::Validate { file } => validate_config(&file),
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("romaneio")
        .join("config.json")
}

fn show_config() -> anyhow::Result<()> {
    let config_path = default_config_path();

    let config = if config_path.exists() {
        RomaneioConfig::from_file(&config_path)?
    } else {
        println!(
            "{} No config file found, showing defaults.",
            style("ℹ").blue()
        );
        RomaneioConfig::default()
    };

    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

fn init_config(args: InitArgs) -> anyhow::Result<()> {
    let output_path = args.output.unwrap_or_else(default_config_path);

    if output_path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let config = RomaneioConfig::default();
    config.save(&output_path)?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        output_path.display()
    );

    Ok(())
}

fn show_path() -> anyhow::Result<()> {
    let config_path = default_config_path();

    println!("Configuration file: {}", config_path.display());

    if config_path.exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
        println!();
        println!("Run 'romaneio catalog init' to create a configuration file.");
    }

    Ok(())
}

fn validate_config(file: &Path) -> anyhow::Result<()> {
    let config = RomaneioConfig::from_file(file)?;

    println!(
        "{} {} is valid: {} products, {} weight entries",
        style("✓").green(),
        file.display(),
        config.catalog.products.len(),
        config.catalog.weights.len()
    );

    Ok(())
}
