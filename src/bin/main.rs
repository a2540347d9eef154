//! Tabular Command Line Interface
//!
//! Loads a CSV dataset and reports on it. With no subcommand the default
//! dataset is loaded and its row count printed.

use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;
use std::process;
use tabular::api::{DatasetLoader, DEFAULT_DATASET_PATH};
use tabular::{DatasetError, LabelColumn, Result};

#[derive(Parser)]
#[command(name = "tabular")]
#[command(about = "Load a CSV dataset and report on its rows")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Tabular Contributors")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(flatten)]
    load: LoadArgs,
}

#[derive(Args)]
struct LoadArgs {
    /// Field delimiter (single ASCII character)
    #[arg(long, global = true, default_value = ",")]
    delimiter: char,

    /// Treat the first record as a header row
    #[arg(long, global = true)]
    header: bool,

    /// Reject rows whose field count differs from the first row
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the number of rows
    Count(PathArgs),
    /// Display dataset shape and headers
    Info(InfoArgs),
    /// Display one row split into features and label
    Show(ShowArgs),
}

#[derive(Args)]
struct PathArgs {
    /// CSV file
    #[arg(default_value = DEFAULT_DATASET_PATH)]
    data: PathBuf,
}

#[derive(Args)]
struct InfoArgs {
    /// CSV file
    #[arg(default_value = DEFAULT_DATASET_PATH)]
    data: PathBuf,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ShowArgs {
    /// CSV file
    #[arg(default_value = DEFAULT_DATASET_PATH)]
    data: PathBuf,

    /// Row index (zero-based)
    #[arg(short, long)]
    index: usize,

    /// Label column: first, last, or a zero-based index
    #[arg(short, long)]
    label_column: Option<LabelColumn>,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = build_loader(&cli.load).and_then(|loader| match cli.command {
        None => count_command(&loader, PathArgs {
            data: PathBuf::from(DEFAULT_DATASET_PATH),
        }),
        Some(Commands::Count(args)) => count_command(&loader, args),
        Some(Commands::Info(args)) => info_command(&loader, args),
        Some(Commands::Show(args)) => show_command(loader, args),
    });

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn build_loader(args: &LoadArgs) -> Result<DatasetLoader> {
    if !args.delimiter.is_ascii() {
        return Err(DatasetError::InvalidParameter(format!(
            "Delimiter must be a single ASCII character, got '{}'",
            args.delimiter
        )));
    }

    Ok(DatasetLoader::new()
        .with_delimiter(args.delimiter as u8)
        .with_header(args.header)
        .with_flexible(!args.strict))
}

fn count_command(loader: &DatasetLoader, args: PathArgs) -> Result<()> {
    info!("Loading dataset from: {:?}", args.data);
    let dataset = loader.load(&args.data)?;

    println!("{}", dataset.row_count());

    Ok(())
}

fn info_command(loader: &DatasetLoader, args: InfoArgs) -> Result<()> {
    info!("Loading dataset from: {:?}", args.data);
    let dataset = loader.load(&args.data)?;
    let summary = dataset.summary();

    if args.json {
        println!("{}", summary.to_json()?);
    } else {
        summary.print_summary();
    }

    Ok(())
}

fn show_command(loader: DatasetLoader, args: ShowArgs) -> Result<()> {
    info!("Loading dataset from: {:?}", args.data);
    let loader = match args.label_column {
        Some(label_column) => loader.with_label_column(label_column),
        None => loader,
    };
    let dataset = loader.load(&args.data)?;

    let sample = dataset.get(args.index)?;

    println!("Row {}:", args.index);
    if let Some(headers) = dataset.headers() {
        println!("  Headers:  {}", headers.join(", "));
    }
    println!("  Features: {}", sample.features.join(", "));
    println!("  Label:    {}", sample.label);

    Ok(())
}
