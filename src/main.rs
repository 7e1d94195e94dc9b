mod analytics;
mod estimation;
mod geometry;
mod numeric;
mod telemetry;
mod twins;
mod validation;
mod web;

use clap::{Parser, Subcommand};
use std::fs;
use std::io;
use std::process::ExitCode;

use crate::telemetry::{generate, write_csv, ExportError, GenerationParams, Scenario};
use crate::web::Config;

#[derive(Parser)]
#[command(name = "vehicle-range")]
#[command(about = "EV range estimation, geospatial polygons and synthetic telemetry")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// YAML configuration file
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Generate a synthetic telemetry series as CSV
    Generate {
        #[arg(short, long, value_enum)]
        scenario: Scenario,
        #[arg(short, long, default_value_t = 60)]
        minutes: i64,
        #[arg(long)]
        seed: Option<i64>,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(config.as_deref()).await,
        Commands::Generate {
            scenario,
            minutes,
            seed,
            output,
        } => generate_csv(scenario, minutes, seed, output.as_deref()),
    }
}

fn init_logging(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

async fn serve(path: Option<&str>) -> ExitCode {
    let config = match path {
        Some(p) => match Config::from_file(p) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config {}: {}", p, e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    init_logging(&config.app.log_level);

    match web::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn generate_csv(
    scenario: Scenario,
    minutes: i64,
    seed: Option<i64>,
    output: Option<&str>,
) -> ExitCode {
    init_logging("warn");

    let params = match GenerationParams::new(scenario, minutes, seed) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Invalid arguments: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let samples = generate(&params);

    let result = match output {
        Some(path) => fs::File::create(path)
            .map_err(ExportError::from)
            .and_then(|f| write_csv(f, &samples)),
        None => write_csv(io::stdout().lock(), &samples),
    };

    match result {
        Ok(()) => {
            log::info!(
                "Generated {} {} samples (seed {})",
                samples.len(),
                params.scenario,
                params.seed
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error writing CSV: {}", e);
            ExitCode::FAILURE
        }
    }
}
