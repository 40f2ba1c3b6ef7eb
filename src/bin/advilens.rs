// src/bin/advilens.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rayon::prelude::*;

use advilens_core::analysis::ReportType;
use advilens_core::config::Config;
use advilens_core::pipeline::{self, ReportBundle};
use advilens_core::reporting::{console, html};
use advilens_core::serialize;

#[derive(Parser)]
#[command(
    name = "advilens",
    version,
    about = "Analyze Azure Advisor recommendation exports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one or more CSV exports
    Analyze {
        /// CSV files to analyze
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Report type: security, performance, cost or comprehensive
        #[arg(short = 't', long, default_value = "comprehensive")]
        report_type: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Console)]
        format: OutputFormat,

        /// Directory for json/html output (defaults next to each input)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Policy config file (defaults to ./advilens.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Console,
    Json,
    Html,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            inputs,
            report_type,
            format,
            out_dir,
            config,
        } => analyze(&inputs, &report_type, format, out_dir.as_deref(), config.as_deref()),
    }
}

fn analyze(
    inputs: &[PathBuf],
    report_type: &str,
    format: OutputFormat,
    out_dir: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<()> {
    let report_type: ReportType = report_type.parse()?;
    let config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default()?,
    };

    let bundles: Vec<(PathBuf, Result<ReportBundle>)> = inputs
        .par_iter()
        .map(|path| {
            let bundle = pipeline::analyze_csv_path(path, report_type, &config.policy)
                .with_context(|| format!("analyzing {}", path.display()));
            (path.clone(), bundle)
        })
        .collect();

    let mut failed = false;
    for (path, bundle) in bundles {
        match bundle {
            Ok(bundle) => emit(&path, &bundle, format, out_dir)?,
            Err(e) => {
                eprintln!("{} {e:#}", "error:".red().bold());
                failed = true;
            }
        }
    }
    if failed {
        process::exit(1);
    }
    Ok(())
}

fn emit(
    input: &Path,
    bundle: &ReportBundle,
    format: OutputFormat,
    out_dir: Option<&Path>,
) -> Result<()> {
    match format {
        OutputFormat::Console => console::print_report(bundle),
        OutputFormat::Json => {
            let value = serialize::to_normalized_json(bundle)?;
            let path = output_path(input, out_dir, "json");
            fs::write(&path, serde_json::to_string_pretty(&value)?)?;
            println!("{} {}", "wrote".green(), path.display());
        }
        OutputFormat::Html => {
            let path = output_path(input, out_dir, "html");
            fs::write(&path, html::render_html(bundle))?;
            println!("{} {}", "wrote".green(), path.display());
        }
    }
    Ok(())
}

fn output_path(input: &Path, out_dir: Option<&Path>, extension: &str) -> PathBuf {
    let mut path = match out_dir {
        Some(dir) => dir.join(input.file_name().unwrap_or_default()),
        None => input.to_path_buf(),
    };
    path.set_extension(extension);
    path
}
