//! csvprof - CSV profiling CLI
//!
//! Command-line interface for profiling CSV files into JSON, YAML and
//! Markdown reports.

use clap::{Parser, Subcommand, ValueEnum};
use csv_profiler::config::ProfileConfig;
use csv_profiler::data::Table;
use csv_profiler::error::{ProfilerError, Result};
use csv_profiler::profile::build_report_with;
use csv_profiler::render::{report_to_json, report_to_markdown, report_to_yaml};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Which report files to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// report.json only
    Json,
    /// report.md only
    #[value(alias = "markdown")]
    Md,
    /// report.yaml only
    Yaml,
    /// report.json and report.md
    Both,
}

impl OutputFormat {
    fn writes_json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }

    fn writes_markdown(self) -> bool {
        matches!(self, Self::Md | Self::Both)
    }

    fn writes_yaml(self) -> bool {
        self == Self::Yaml
    }
}

/// CSV Profiler - analyze and profile CSV files
#[derive(Parser)]
#[command(name = "csvprof")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile a CSV file and write reports
    Profile {
        /// Path to CSV file
        csv: PathBuf,

        /// Output directory (created if missing)
        #[arg(short, long, default_value = "outputs")]
        out_dir: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value = "both")]
        format: OutputFormat,

        /// Path to profiling configuration YAML
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of most frequent values listed for text columns
        #[arg(long)]
        top_k: Option<usize>,

        /// Field delimiter (default: ',')
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Also print a column summary table to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Show basic information about a CSV file
    Info {
        /// Path to CSV file
        csv: PathBuf,

        /// Field delimiter (default: ',')
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },

    /// Generate an example profiling configuration
    ExampleConfig {
        /// Output path for the example YAML
        #[arg(short, long, default_value = "profiler.yaml")]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Profile {
            csv,
            out_dir,
            format,
            config,
            top_k,
            delimiter,
            summary,
        } => cmd_profile(
            &csv,
            &out_dir,
            format,
            config.as_deref(),
            top_k,
            delimiter,
            summary,
        ),

        Commands::Info { csv, delimiter } => cmd_info(&csv, delimiter),

        Commands::ExampleConfig { output } => cmd_example_config(&output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install a stderr log subscriber filtered by RUST_LOG or the -v count.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

/// Profile a CSV file
fn cmd_profile(
    csv_path: &Path,
    out_dir: &Path,
    format: OutputFormat,
    config_path: Option<&Path>,
    top_k: Option<usize>,
    delimiter: Option<char>,
    summary: bool,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            ProfileConfig::from_path(path)?
        }
        None => ProfileConfig::default(),
    };
    if let Some(k) = top_k {
        config.top_k = k;
    }
    if let Some(d) = delimiter {
        config.delimiter = d;
    }

    let table = Table::from_csv_path(csv_path, config.delimiter_byte()?)?;
    let report = build_report_with(&table, &config);

    std::fs::create_dir_all(out_dir)?;

    if format.writes_json() {
        let path = out_dir.join("report.json");
        std::fs::write(&path, report_to_json(&report)?)?;
        println!("Saved: {}", path.display());
    }

    if format.writes_markdown() {
        let path = out_dir.join("report.md");
        std::fs::write(&path, report_to_markdown(&report, config.column_order))?;
        println!("Saved: {}", path.display());
    }

    if format.writes_yaml() {
        let path = out_dir.join("report.yaml");
        std::fs::write(&path, report_to_yaml(&report)?)?;
        println!("Saved: {}", path.display());
    }

    if summary {
        println!();
        print!("{}", report.to_profile());
    }

    println!(
        "\nProfiled {} rows, {} columns",
        report.row_count, report.column_count
    );

    Ok(())
}

/// Show basic information about a CSV file
fn cmd_info(csv_path: &Path, delimiter: char) -> Result<()> {
    let config = ProfileConfig::default().with_delimiter(delimiter);
    let table = Table::from_csv_path(csv_path, config.delimiter_byte()?)?;

    if table.is_empty() {
        return Err(ProfilerError::EmptyData("CSV has no data rows".to_string()));
    }

    println!("Rows: {}", table.row_count());
    println!("Columns: {}", table.column_count());
    println!("Column names: {}", table.column_names().join(", "));

    Ok(())
}

/// Generate example profiling configuration
fn cmd_example_config(output_path: &Path) -> Result<()> {
    let yaml = ProfileConfig::default().to_yaml()?;

    std::fs::write(output_path, &yaml)?;
    eprintln!("Wrote example configuration to {:?}", output_path);
    eprintln!();
    eprintln!("Contents:");
    println!("{}", yaml);

    Ok(())
}
