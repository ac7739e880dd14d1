use anyhow::Result;
use benchtable::commands::generate;
use benchtable::config::{CliOptions, FileConfig, ReportConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "benchtable")]
#[command(about = "Merge verification benchmark results into HTML and CSV tables", long_about = None)]
#[command(version)]
struct Cli {
    /// Result files to compare (wildcards allowed); defaults to all
    /// result files in the output directory
    result_files: Vec<String>,

    /// Table-definition file listing result files and columns
    #[arg(short = 'x', long = "xml", value_name = "FILE")]
    xml: Option<PathBuf>,

    /// Output directory for the tables; created if it does not exist
    #[arg(short = 'o', long = "outputpath", value_name = "DIR")]
    output_path: Option<PathBuf>,

    /// Print the correct, wrong and unknown counts of every run
    #[arg(short, long)]
    dump: bool,

    /// Use the union of the source files of all result files
    #[arg(short, long)]
    merge: bool,

    /// Use only the source files present in all result files
    #[arg(short, long)]
    common: bool,

    /// Clear all values of results that are not correct
    #[arg(long)]
    correct_only: bool,

    /// Expect the JavaScript libraries in lib/javascript instead of linking
    /// to the hosted copies
    #[arg(long)]
    offline: bool,

    /// Name of the generated tables
    #[arg(short, long)]
    name: Option<String>,

    /// TOML file with default settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Show debug output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file_config = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let config = ReportConfig::resolve(
        CliOptions {
            definition: cli.xml,
            result_files: cli.result_files,
            output_dir: cli.output_path,
            merge: cli.merge,
            common: cli.common,
            correct_only: cli.correct_only,
            offline: cli.offline,
            dump_counts: cli.dump,
            name: cli.name,
        },
        file_config,
    )?;

    let outcome = generate::execute(&config)?;
    generate::print_outcome(&outcome, config.dump_counts);
    Ok(())
}
