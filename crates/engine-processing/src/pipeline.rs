use crate::{error::PipelineError, sampler::Sampler};
use connectors::file::csv::{reader, writer};
use engine_config::settings::{config::SamplerConfig, validated::ValidatedRequest};
use serde::Serialize;
use std::{path::PathBuf, time::Instant};
use tracing::info;

/// Outcome of one completed load -> sample -> save job.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    pub name: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub source_rows: usize,
    pub sampled_rows: usize,
    pub columns: usize,
    pub took_ms: u64,
}

/// Loads the request's input, samples it, and writes the sample to its output.
///
/// Nothing is written unless loading and sampling both succeed. A failure
/// while writing can leave the output truncated.
pub fn run_request(request: &ValidatedRequest) -> Result<PipelineSummary, PipelineError> {
    let start = Instant::now();
    let settings = request.csv_settings();

    info!(
        "[{}] Loading {} ({}, header: {})",
        request.name,
        request.input().display(),
        settings.encoding,
        settings.has_headers
    );
    let table = reader::load(request.input(), settings).map_err(|source| PipelineError::Load {
        job: request.name.clone(),
        path: request.input().display().to_string(),
        source,
    })?;

    let sampled = Sampler::new(request.seed)
        .sample(&table, request.sample_size)
        .map_err(|source| PipelineError::Sample {
            job: request.name.clone(),
            source,
        })?;
    info!(
        "[{}] Sampled {} of {} rows (seed {})",
        request.name,
        sampled.row_count(),
        table.row_count(),
        request.seed
    );

    writer::save(
        &sampled,
        request.output(),
        settings,
        request.include_row_index,
    )
    .map_err(|source| PipelineError::Save {
        job: request.name.clone(),
        path: request.output().display().to_string(),
        source,
    })?;

    let took_ms = start.elapsed().as_millis() as u64;
    info!(
        "[{}] Wrote {} rows to {} in {took_ms} ms",
        request.name,
        sampled.row_count(),
        request.output().display()
    );

    Ok(PipelineSummary {
        name: request.name.clone(),
        input: request.input.clone(),
        output: request.output.clone(),
        source_rows: table.row_count(),
        sampled_rows: sampled.row_count(),
        columns: sampled.column_count(),
        took_ms,
    })
}

/// Validates every job up front, then runs them in order, stopping at the first failure.
///
/// Jobs that already completed are not rolled back.
pub fn run_all(config: &SamplerConfig) -> Result<Vec<PipelineSummary>, PipelineError> {
    let requests = config.validate()?;
    requests.iter().map(run_request).collect()
}
