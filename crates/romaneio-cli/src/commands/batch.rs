//! Batch command - run extraction over many order PDFs.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use glob::glob;
use tracing::warn;

use romaneio_core::extract_report;

use super::Backend;
use super::extract::{OutputFormat, format_report};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file reports (default: print to stdout)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// PDF text extraction backend
    #[arg(short, long, value_enum, default_value = "embedded")]
    backend: Backend,

    /// Keep going when a document fails completely
    #[arg(long)]
    continue_on_error: bool,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let source = args.backend.source()?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let mut failed = 0usize;

    for path in &files {
        let report = extract_report(path, source.as_ref(), &config);

        if report.is_total_failure() {
            failed += 1;
            if args.continue_on_error {
                warn!("failed to process {}", path.display());
            } else {
                anyhow::bail!("processing failed for {}", path.display());
            }
        }

        let rendered = format_report(&report, args.format)?;

        if let Some(ref output_dir) = args.output_dir {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("report");
            let extension = match args.format {
                OutputFormat::Json => "json",
                OutputFormat::Csv => "csv",
                OutputFormat::Text => "txt",
            };
            fs::write(output_dir.join(format!("{}.{}", stem, extension)), &rendered)?;
        } else {
            println!("{}", style(path.display().to_string()).bold());
            print!("{}", rendered);
            println!();
        }
    }

    println!(
        "{} Processed {} files, {} failed",
        style("✓").green(),
        files.len(),
        failed
    );

    Ok(())
}
