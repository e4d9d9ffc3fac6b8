//! Extract command - run both extractions over a single order PDF.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use romaneio_core::{CompanyOutcome, ExtractionReport, QuantityOutcome, extract_report};

use super::Backend;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input order PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// PDF text extraction backend
    #[arg(short, long, value_enum, default_value = "embedded")]
    backend: Backend,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text summary
    Text,
    /// JSON report
    Json,
    /// CSV rows (label,quantity)
    Csv,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let source = args.backend.source()?;

    let report = extract_report(&args.input, source.as_ref(), &config);

    let rendered = format_report(&report, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &rendered)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", rendered);
    }

    if report.is_total_failure() {
        anyhow::bail!("extraction failed for {}", args.input.display());
    }

    Ok(())
}

pub fn format_report(report: &ExtractionReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(report)?)),
        OutputFormat::Csv => format_csv(report),
        OutputFormat::Text => Ok(format_text(report)),
    }
}

fn format_text(report: &ExtractionReport) -> String {
    let mut output = String::new();

    match &report.company {
        CompanyOutcome::Found { name } => {
            output.push_str(&format!("Razão Social: {}\n", name));
        }
        CompanyOutcome::NotFound => {
            output.push_str(&format!(
                "{} Razão Social não encontrada na seção 'Dados para Faturamento'.\n",
                style("⚠").yellow()
            ));
        }
        CompanyOutcome::Failed { reason } => {
            output.push_str(&format!(
                "{} Razão Social: erro ao processar o arquivo: {}\n",
                style("✗").red(),
                reason
            ));
        }
    }

    output.push_str("\nQuantidades de Produtos:\n");
    match &report.quantities {
        QuantityOutcome::Extracted { quantities } if quantities.is_empty() => {
            output.push_str(&format!(
                "{} nenhum código de produto localizado no documento.\n",
                style("⚠").yellow()
            ));
        }
        QuantityOutcome::Extracted { quantities } => {
            for (label, quantity) in quantities {
                output.push_str(&format!("- {}: {}\n", label, quantity));
            }
        }
        QuantityOutcome::Failed { reason } => {
            output.push_str(&format!(
                "{} erro ao processar o arquivo: {}\n",
                style("✗").red(),
                reason
            ));
        }
    }

    output
}

fn format_csv(report: &ExtractionReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["label", "quantity"])?;

    if let QuantityOutcome::Extracted { quantities } = &report.quantities {
        for (label, quantity) in quantities {
            wtr.write_record([label.as_str(), &quantity.to_string()])?;
        }
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
