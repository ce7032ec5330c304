use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use value_formats::{
    default_registry, display_text, format_csv, AppConfig, BatchOptions, DecimalCount, Error,
    FormatCategory,
};

#[derive(Parser)]
#[command(name = "value-formats")]
#[command(about = "Look up and apply dashboard unit formats")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List format categories and their ids
    List {
        /// Only show this category
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Print the unit picker menu as JSON
        #[arg(long)]
        json: bool,
    },

    /// Format a single value
    Format {
        /// Format id, e.g. `bytes` or `ms`
        id: String,

        /// Value to format
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Fixed number of decimals (derived from the value when omitted)
        #[arg(short, long)]
        decimals: Option<i32>,
    },

    /// Append a formatted column to a CSV file
    Batch {
        /// Input CSV with a header row
        input: PathBuf,

        /// Column holding the format id
        #[arg(long, default_value = "unit")]
        unit_column: String,

        /// Column holding the raw value
        #[arg(long, default_value = "value")]
        value_column: String,

        #[arg(short, long)]
        decimals: Option<i32>,

        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the registry fingerprint
    Fingerprint,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.command {
        Commands::List { category, json } => run_list(category.as_deref(), json),
        Commands::Format { id, value, decimals } => {
            run_format(&id, &value, decimals.or(config.display.decimals))
        }
        Commands::Batch {
            input,
            unit_column,
            value_column,
            decimals,
            output,
        } => {
            let options = BatchOptions {
                unit_column,
                value_column,
                decimals: decimals.or(config.display.decimals),
                ..BatchOptions::default()
            };
            run_batch(&input, output.as_deref(), &options)
        }
        Commands::Fingerprint => {
            println!("{}", default_registry().fingerprint());
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    // RUST_LOG wins over --verbose
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_list(category: Option<&str>, json: bool) -> Result<()> {
    let registry = default_registry();

    if json {
        let menu = registry.menu();
        let menu: Vec<_> = match category {
            Some(name) => menu.into_iter().filter(|c| c.text == name).collect(),
            None => menu,
        };
        if menu.is_empty() {
            bail!("no category named '{}'", category.unwrap_or_default());
        }
        println!("{}", serde_json::to_string_pretty(&menu)?);
        return Ok(());
    }

    match category {
        Some(name) => {
            let found = registry
                .category(name)
                .with_context(|| format!("no category named '{}'", name))?;
            print_category(found);
        }
        None => {
            for found in registry.categories() {
                print_category(found);
                println!();
            }
            println!("{} formats in {} categories", registry.count(), registry.categories().len());
        }
    }
    Ok(())
}

fn print_category(category: &FormatCategory) {
    println!("📂 {}", category.name);
    for format in &category.formats {
        println!("   {:<20} {:<28} {}", format.id, format.name, format.formatter.kind());
    }
}

fn run_format(id: &str, value: &str, decimals: DecimalCount) -> Result<()> {
    match display_text(default_registry(), id, value, decimals) {
        Ok(text) => {
            println!("{}", text);
            Ok(())
        }
        Err(Error::UnknownFormat(id)) => {
            bail!("unknown format '{}' (run `value-formats list` to see the ids)", id)
        }
        Err(e) => Err(e.into()),
    }
}

fn run_batch(input: &Path, output: Option<&Path>, options: &BatchOptions) -> Result<()> {
    let reader = File::open(input)
        .map(BufReader::new)
        .with_context(|| format!("cannot open {}", input.display()))?;

    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let summary = format_csv(default_registry(), reader, writer, options)
        .with_context(|| format!("batch formatting of {} failed", input.display()))?;

    if let Some(path) = output {
        eprintln!("✓ Wrote {} rows to {}", summary.rows, path.display());
    }
    if summary.unknown_units > 0 {
        eprintln!("⚠️  {} rows had an unknown unit", summary.unknown_units);
    }
    Ok(())
}
