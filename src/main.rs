use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use flood_risk_lib::cli::{run_query, OutputFormat};
use flood_risk_lib::config::{DatasetConfig, DATASET_ENV_VAR};
use flood_risk_lib::init_shared_service;

#[derive(Parser)]
#[command(name = "flood-risk")]
#[command(about = "Flood risk assessment for a six-digit postal code")]
#[command(version)]
struct Cli {
    /// Six-digit postal code to assess
    postal_code: String,

    /// Path to the (gzip) CSV dataset
    #[arg(short = 'd', long, env = DATASET_ENV_VAR)]
    dataset: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = DatasetConfig::resolve(cli.dataset);
    let service = init_shared_service(&config.dataset_path);
    if let Some(load) = service.load_report().filter(|load| !load.is_ok()) {
        eprintln!("Warning: {}", load.summary());
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let output = run_query(service, &cli.postal_code, format);
    print!("{}", output.stdout);
    eprint!("{}", output.stderr);
    ExitCode::from(output.status)
}
