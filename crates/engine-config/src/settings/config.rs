use crate::{
    error::ConfigError,
    settings::{request::SampleRequest, validated::ValidatedRequest},
};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fs, path::Path};
use tracing::debug;

/// The set of jobs a run executes, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplerConfig {
    pub jobs: Vec<SampleRequest>,
}

impl Default for SamplerConfig {
    /// The reference datasets: product reviews (UTF-8, with header) and the
    /// Sentiment140 tweet dump (Latin-1, no header).
    fn default() -> Self {
        SamplerConfig {
            jobs: vec![
                SampleRequest::new("reviews", "Reviews.csv", 1000),
                SampleRequest::new("twitter", "training.1600000.processed.noemoticon.csv", 10_000)
                    .encoding("latin-1")
                    .has_header(false),
            ],
        }
    }
}

impl SamplerConfig {
    pub fn from_json(source: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: SamplerConfig =
            serde_json::from_str(source).map_err(|source| ConfigError::Parse {
                path: origin.to_string(),
                source,
            })?;
        debug!("Loaded {} job(s) from {origin}", config.jobs.len());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&source, &path.display().to_string())
    }

    /// Validates every job, rejecting empty configs and repeated job names.
    pub fn validate(&self) -> Result<Vec<ValidatedRequest>, ConfigError> {
        if self.jobs.is_empty() {
            return Err(ConfigError::NoJobs);
        }

        let mut seen = HashSet::with_capacity(self.jobs.len());
        self.jobs
            .iter()
            .map(|job| {
                if !seen.insert(job.name.as_str()) {
                    return Err(ConfigError::DuplicateJob(job.name.clone()));
                }
                job.validate()
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connectors::file::csv::settings::RaggedRowPolicy;
    use model::core::encoding::TextEncoding;
    use std::io::Write;

    #[test]
    fn test_default_jobs() {
        let jobs = SamplerConfig::default().validate().unwrap();
        assert_eq!(jobs.len(), 2);

        let reviews = &jobs[0];
        assert_eq!(reviews.sample_size, 1000);
        assert_eq!(reviews.seed, 42);
        assert!(reviews.csv.has_headers);
        assert_eq!(reviews.csv.encoding, TextEncoding::Utf8);
        assert!(reviews.overwrites_input());

        let twitter = &jobs[1];
        assert_eq!(twitter.sample_size, 10_000);
        assert_eq!(twitter.seed, 42);
        assert!(!twitter.csv.has_headers);
        assert_eq!(twitter.csv.encoding, TextEncoding::Latin1);
        assert_eq!(twitter.csv.output_encoding, TextEncoding::Utf8);
        assert!(!twitter.include_row_index);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let json = r#"{
            "jobs": [
                { "name": "a", "input": "a.csv", "sample_size": 3 },
                {
                    "name": "b",
                    "input": "b.csv",
                    "output": "b.sample.csv",
                    "encoding": "latin1",
                    "has_header": false,
                    "delimiter": ";",
                    "sample_size": 7,
                    "seed": 1,
                    "on_ragged_row": "skip",
                    "include_row_index": true
                }
            ]
        }"#;

        let config = SamplerConfig::from_json(json, "inline").unwrap();
        assert_eq!(config.jobs[0], SampleRequest::new("a", "a.csv", 3));

        let b = config.jobs[1].validate().unwrap();
        assert_eq!(b.output(), Path::new("b.sample.csv"));
        assert_eq!(b.csv.delimiter, b';');
        assert_eq!(b.csv.on_ragged_row, RaggedRowPolicy::Skip);
        assert_eq!(b.seed, 1);
        assert!(b.include_row_index);
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let json = r#"{ "jobs": [ { "name": "a", "input": "a.csv", "sample_size": 3, "frac": 0.5 } ] }"#;
        let err = SamplerConfig::from_json(json, "inline").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "jobs": [ {{ "name": "a", "input": "a.csv", "sample_size": 1 }} ] }}"#)
            .unwrap();

        let config = SamplerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.jobs.len(), 1);

        let missing = SamplerConfig::from_file(Path::new("/definitely/not/here.json"));
        assert!(matches!(missing, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_validate_rejects_duplicates_and_empty() {
        let config = SamplerConfig {
            jobs: vec![
                SampleRequest::new("dup", "a.csv", 1),
                SampleRequest::new("dup", "b.csv", 1),
            ],
        };
        assert!(matches!(config.validate(), Err(ConfigError::DuplicateJob(name)) if name == "dup"));

        let empty = SamplerConfig { jobs: Vec::new() };
        assert!(matches!(empty.validate(), Err(ConfigError::NoJobs)));
    }

    #[test]
    fn test_json_round_trip_of_defaults() {
        let config = SamplerConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(SamplerConfig::from_json(&json, "inline").unwrap(), config);
    }
}
