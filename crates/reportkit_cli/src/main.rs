//! Report generation CLI.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

mod conf;
mod generate;

use conf::load_run_config;
use generate::{GenerateError, generate};

#[derive(Parser)]
#[command(name = "reportkit")]
#[command(version)]
#[command(
    about = "Merge report values into a spreadsheet grid and render the report table",
    long_about = None
)]
struct Cli {
    /// Run configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report-values XML path (overrides the config file)
    #[arg(long)]
    values: Option<PathBuf>,

    /// Template workbook path (overrides the config file)
    #[arg(long)]
    template: Option<PathBuf>,

    /// Worksheet name (overrides the config file)
    #[arg(long)]
    sheet: Option<String>,

    /// Merged workbook output path (overrides the config file)
    #[arg(long)]
    merged: Option<PathBuf>,

    /// Artifact output path (stdout if not provided here or in the config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum scan workers
    #[arg(long)]
    workers: Option<usize>,

    /// Suppress the run-report summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), GenerateError> {
    let mut config = load_run_config(cli.config.as_deref())?;
    if let Some(values) = &cli.values {
        config.values_file = values.clone();
    }
    if let Some(template) = &cli.template {
        config.template_file = template.clone();
    }
    if let Some(sheet) = &cli.sheet {
        config.sheet_name = sheet.clone();
    }
    if let Some(merged) = &cli.merged {
        config.merged_file = merged.clone();
    }
    if let Some(output) = &cli.output {
        config.html_file = Some(output.clone());
    }
    if cli.workers.is_some() {
        config.scan_workers = cli.workers;
    }

    let (final_report, report_run) = generate(&config)?;

    match &config.html_file {
        Some(path_html) => {
            fs::write(path_html, &final_report.raw_html).map_err(|err| {
                GenerateError::ArtifactWrite {
                    path: path_html.clone(),
                    message: err.to_string(),
                }
            })?;
        }
        None => println!("{}", final_report.raw_html),
    }

    if !cli.quiet {
        eprintln!("{report_run}");
    }
    Ok(())
}
