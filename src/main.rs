//! inventory-tools: software-inventory deduplication and bundle detection.

use anyhow::Result;
use clap::{Parser, Subcommand};
use inventory_tools::cli::{run_analyze, run_normalize, AnalyzeOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "inventory-tools")]
#[command(version)]
#[command(about = "Software-inventory deduplication and bundle detection", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Analysis completed, no publisher conflicts
    1  Publisher conflicts detected (review problematic_apps.csv)
    3  Error occurred

EXAMPLES:
    # Full analysis over a directory of exports
    inventory-tools analyze data/*.csv -o reports/

    # Loosen the clustering window for a small fleet
    inventory-tools analyze export.json --min-install-count 25 --window-pct 0.2

    # Preview name normalization only
    inventory-tools normalize data/*.csv")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full dedup + bundling analysis and write the CSV report set
    Analyze {
        /// Inventory export files (.csv, .json, .jsonl)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Config file (default: discover .inventory-tools.yaml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory for reports (default: current directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Installation floor for clustering and conflict reporting
        #[arg(long)]
        min_install_count: Option<usize>,

        /// Workstation overlap floor in percent (0-100)
        #[arg(long)]
        min_workstation_overlap: Option<f64>,

        /// Fuzzy similarity floor (0-100)
        #[arg(long)]
        min_fuzzy_score: Option<u32>,

        /// Clustering window as a fraction of the anchor count (0-1)
        #[arg(long)]
        window_pct: Option<f64>,

        /// Publisher markers to exclude as first-party software
        #[arg(long = "exclude-publisher")]
        exclude_publishers: Vec<String>,

        /// Keep rows from server operating systems
        #[arg(long)]
        include_servers: bool,
    },

    /// Preview display-name normalization without running the engine
    Normalize {
        /// Inventory export files (.csv, .json, .jsonl)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Config file (default: discover .inventory-tools.yaml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

mod exit_codes {
    /// Analysis completed without publisher conflicts
    pub const SUCCESS: i32 = 0;
    /// Publisher conflicts were detected
    pub const CONFLICTS_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("inventory_tools={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Analyze {
            inputs,
            config,
            output_dir,
            min_install_count,
            min_workstation_overlap,
            min_fuzzy_score,
            window_pct,
            exclude_publishers,
            include_servers,
        } => {
            let options = AnalyzeOptions {
                config_file: config,
                output_dir,
                min_install_count,
                min_workstation_overlap_pct: min_workstation_overlap,
                min_fuzzy_score,
                window_pct,
                first_party_publishers: exclude_publishers,
                include_servers,
            };
            let summary = run_analyze(&inputs, &options)?;

            if !cli.quiet {
                println!("Records analyzed:        {}", summary.records);
                println!("Distinct applications:   {}", summary.distinct_applications);
                println!("Duplicate installations: {}", summary.total_duplicates);
                println!("Bundles identified:      {}", summary.bundles);
                println!("Publisher conflicts:     {}", summary.conflicts);
                for path in &summary.reports {
                    println!("  wrote {}", path.display());
                }
            }

            Ok(if summary.has_conflicts() {
                exit_codes::CONFLICTS_DETECTED
            } else {
                exit_codes::SUCCESS
            })
        }
        Commands::Normalize { inputs, config } => {
            let (csv, raw, normalized) = run_normalize(&inputs, config.as_deref())?;
            print!("{csv}");
            if !cli.quiet {
                eprintln!("{raw} raw names -> {normalized} normalized names");
            }
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}
