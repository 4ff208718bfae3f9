use connectors::file::csv::error::FileError;
use engine_config::error::ConfigError;
use model::records::table::TableError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SampleError {
    #[error(
        "Cannot take a sample of {requested} rows from a table of {available} rows without replacement"
    )]
    InvalidSampleSize { requested: usize, available: usize },

    #[error("Failed to build sampled table: {0}")]
    Table(#[from] TableError),
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Job '{job}' failed to load {path}: {source}")]
    Load {
        job: String,
        path: String,
        #[source]
        source: FileError,
    },

    #[error("Job '{job}' failed to sample: {source}")]
    Sample {
        job: String,
        #[source]
        source: SampleError,
    },

    #[error("Job '{job}' failed to save {path}: {source}")]
    Save {
        job: String,
        path: String,
        #[source]
        source: FileError,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl PipelineError {
    pub fn job(&self) -> Option<&str> {
        match self {
            PipelineError::Load { job, .. }
            | PipelineError::Sample { job, .. }
            | PipelineError::Save { job, .. } => Some(job),
            PipelineError::Config(_) => None,
        }
    }
}
