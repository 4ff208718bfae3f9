use connectors::file::csv::error::FileError;
use engine_config::error::ConfigError;
use engine_processing::error::PipelineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Pipeline(#[from] PipelineError),

    #[error("{0}")]
    File(#[from] FileError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// The blocking task running a job panicked or was cancelled.
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
