use model::core::encoding::EncodingError;
use thiserror::Error;

/// Errors raised while loading or validating sampling jobs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read the job file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse the configuration file {path} as JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Negative sizes can only arrive through configuration.
    #[error("Invalid sample size {size} for job '{job}'")]
    InvalidSampleSize { job: String, size: i64 },

    #[error("Job '{job}': {source}")]
    UnknownEncoding {
        job: String,
        #[source]
        source: EncodingError,
    },

    #[error("Job '{job}': {encoding} cannot be used as an output encoding")]
    UnsupportedOutputEncoding { job: String, encoding: String },

    #[error("Job '{job}': delimiter must be a single ASCII character, got {delimiter:?}")]
    InvalidDelimiter { job: String, delimiter: String },

    #[error("Duplicate job name: {0}")]
    DuplicateJob(String),

    #[error("Configuration contains no jobs")]
    NoJobs,
}
