use crate::{
    commands::{Commands, FormatArgs},
    error::CliError,
};
use clap::Parser;
use connectors::file::csv::settings::{CsvSettings, RaggedRowPolicy};
use engine_config::settings::{
    config::SamplerConfig, request::SampleRequest, validated::ValidatedRequest,
};
use engine_processing::{
    inspect::inspect,
    pipeline::{self, PipelineSummary},
};
use std::{io::Write, path::PathBuf, process::ExitCode};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "csv-sampler",
    version,
    about = "Replace CSV files with a seeded random sample of their rows"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so JSON printed on stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Run {
        config: None,
        json: false,
    });

    match execute(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            report_failure(&err, &mut std::io::stderr().lock());
            ExitCode::FAILURE
        }
    }
}

/// Prints the error outside the log filter so `RUST_LOG=off` still shows it.
fn report_failure(err: &CliError, out: &mut impl Write) {
    // Nothing else to do if stderr itself is gone.
    let _ = writeln!(out, "Error: {err}");
}

async fn execute(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Run { config, json } => {
            let config = load_config(config.as_deref()).await?;
            let requests = config.validate()?;
            let summaries = run_jobs(requests).await?;

            if json {
                output::print_json(&summaries)?;
            } else {
                output::print_summary_table(&summaries);
            }
        }
        Commands::Sample {
            input,
            output: destination,
            size,
            seed,
            output_encoding,
            skip_ragged,
            row_index,
            format,
        } => {
            let mut request = format
                .apply(SampleRequest::new("sample", input, size))
                .seed(seed)
                .output_encoding(output_encoding)
                .include_row_index(row_index);
            if let Some(destination) = destination {
                request = request.output(destination);
            }
            if skip_ragged {
                request = request.on_ragged_row(RaggedRowPolicy::Skip);
            }

            let summaries = run_jobs(vec![request.validate()?]).await?;
            output::print_summary_table(&summaries);
        }
        Commands::Inspect { input, format } => {
            let settings = format.csv_settings(&input)?;
            let path = PathBuf::from(input);
            let meta = tokio::task::spawn_blocking(move || inspect(&path, &settings)).await??;
            output::print_json(&meta)?;
        }
        Commands::Config { config } => {
            let config = load_config(config.as_deref()).await?;
            config.validate()?;
            output::print_json(&config)?;
        }
    }

    Ok(())
}

async fn load_config(path: Option<&str>) -> Result<SamplerConfig, CliError> {
    match path {
        Some(path) => {
            let path = PathBuf::from(path);
            let config =
                tokio::task::spawn_blocking(move || SamplerConfig::from_file(&path)).await??;
            Ok(config)
        }
        None => {
            info!("No job file given, using the built-in jobs");
            Ok(SamplerConfig::default())
        }
    }
}

/// Runs the jobs one after another on the blocking pool.
async fn run_jobs(requests: Vec<ValidatedRequest>) -> Result<Vec<PipelineSummary>, CliError> {
    let mut summaries = Vec::with_capacity(requests.len());
    for request in requests {
        let summary =
            tokio::task::spawn_blocking(move || pipeline::run_request(&request)).await??;
        summaries.push(summary);
    }
    Ok(summaries)
}

impl FormatArgs {
    fn apply(&self, request: SampleRequest) -> SampleRequest {
        request
            .encoding(self.encoding.clone())
            .has_header(!self.no_header)
            .delimiter(self.delimiter.clone())
    }

    fn csv_settings(&self, input: &str) -> Result<CsvSettings, CliError> {
        let validated = self.apply(SampleRequest::new("inspect", input, 0)).validate()?;
        Ok(validated.csv)
    }
}
