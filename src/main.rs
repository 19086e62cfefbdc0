use anyhow::Context;
use clap::{Parser, Subcommand};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use csv_sweeper::config::CleanConfig;
use csv_sweeper::logging::init_logging;
use csv_sweeper::pipeline::normalize::normalize_name;
use csv_sweeper::pipeline::{self, CleanOutcome};

#[derive(Parser)]
#[command(name = "csv_sweeper")]
#[command(about = "CSV cleaning utility: normalize headers, drop duplicates, fill missing values")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean a CSV file and write the cleaned table plus a summary report
    Clean {
        /// Input CSV file
        input: PathBuf,
        /// Where to write the cleaned CSV (defaults to <stem>_cleaned.csv)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Write the summary report to this file instead of stdout
        #[arg(long)]
        report: Option<PathBuf>,
        /// Extra columns to drop (comma-separated, matched after normalization)
        #[arg(long)]
        drop: Option<String>,
        /// TOML config file with a drop_columns list
        #[arg(long)]
        config: Option<PathBuf>,
        /// Render the report as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Run the pipeline and print the summary report without writing files
    Inspect {
        /// Input CSV file
        input: PathBuf,
        /// Extra columns to drop (comma-separated, matched after normalization)
        #[arg(long)]
        drop: Option<String>,
        /// TOML config file with a drop_columns list
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Builds the normalized drop set from the config file (or defaults)
/// plus any --drop extras.
fn build_drop_set(config: Option<&Path>, extra: Option<&str>) -> anyhow::Result<HashSet<String>> {
    let config = match config {
        Some(path) => CleanConfig::load(path)?,
        None => CleanConfig::default(),
    };
    let mut set = config.drop_set();
    if let Some(extra) = extra {
        set.extend(
            extra
                .split(',')
                .map(normalize_name)
                .filter(|name| !name.is_empty()),
        );
    }
    Ok(set)
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}_cleaned.csv"))
}

fn run_pipeline(input: &Path, drops: &HashSet<String>) -> anyhow::Result<CleanOutcome> {
    let raw = fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    info!(input = %input.display(), bytes = raw.len(), "cleaning file");
    Ok(pipeline::clean(&raw, drops)?)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Clean {
            input,
            output,
            report,
            drop,
            config,
            json,
        } => {
            let drops = build_drop_set(config.as_deref(), drop.as_deref())?;
            let outcome = run_pipeline(&input, &drops)?;

            let output = output.unwrap_or_else(|| default_output_path(&input));
            fs::write(&output, &outcome.cleaned)
                .with_context(|| format!("failed to write {}", output.display()))?;

            let rendered = if json {
                let mut text = serde_json::to_string_pretty(&outcome.report)?;
                text.push('\n');
                text
            } else {
                outcome.report.to_string()
            };

            println!("✅ Cleaning complete!");
            println!("   Original shape: {}", outcome.report.original_shape);
            println!("   Cleaned shape: {}", outcome.report.cleaned_shape);
            println!("   Output file: {}", output.display());
            match report {
                Some(path) => {
                    fs::write(&path, rendered)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("   Report file: {}", path.display());
                }
                None => {
                    println!();
                    print!("{rendered}");
                }
            }
        }
        Commands::Inspect {
            input,
            drop,
            config,
        } => {
            let drops = build_drop_set(config.as_deref(), drop.as_deref())?;
            let outcome = run_pipeline(&input, &drops)?;
            print!("{}", outcome.report);
        }
    }

    Ok(())
}
