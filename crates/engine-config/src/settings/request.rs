use super::DEFAULT_SEED;
use connectors::file::csv::settings::RaggedRowPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One load -> sample -> save job as written in a job file.
///
/// Values are kept as given; see [`ValidatedRequest`](super::validated::ValidatedRequest)
/// for the checked form the pipeline consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SampleRequest {
    pub name: String,
    pub input: PathBuf,
    /// Destination path; the input file is overwritten when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(default = "default_encoding")]
    pub encoding: String,
    #[serde(default = "default_encoding")]
    pub output_encoding: String,
    #[serde(default = "default_true")]
    pub has_header: bool,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    pub sample_size: i64,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub on_ragged_row: RaggedRowPolicy,
    #[serde(default)]
    pub include_row_index: bool,
}

fn default_encoding() -> String {
    "utf-8".to_string()
}

fn default_true() -> bool {
    true
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl SampleRequest {
    pub fn new(name: impl Into<String>, input: impl Into<PathBuf>, sample_size: i64) -> Self {
        SampleRequest {
            name: name.into(),
            input: input.into(),
            output: None,
            encoding: default_encoding(),
            output_encoding: default_encoding(),
            has_header: true,
            delimiter: default_delimiter(),
            sample_size,
            seed: DEFAULT_SEED,
            on_ragged_row: RaggedRowPolicy::Error,
            include_row_index: false,
        }
    }

    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = label.into();
        self
    }

    pub fn output_encoding(mut self, label: impl Into<String>) -> Self {
        self.output_encoding = label.into();
        self
    }

    pub fn has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn on_ragged_row(mut self, policy: RaggedRowPolicy) -> Self {
        self.on_ragged_row = policy;
        self
    }

    pub fn include_row_index(mut self, include: bool) -> Self {
        self.include_row_index = include;
        self
    }
}
