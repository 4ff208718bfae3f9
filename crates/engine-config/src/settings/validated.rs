use crate::{error::ConfigError, settings::request::SampleRequest};
use connectors::file::csv::settings::CsvSettings;
use model::core::encoding::TextEncoding;
use std::path::{Path, PathBuf};

/// Immutable, checked form of a [`SampleRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub name: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub csv: CsvSettings,
    pub sample_size: usize,
    pub seed: u64,
    pub include_row_index: bool,
}

impl ValidatedRequest {
    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn csv_settings(&self) -> &CsvSettings {
        &self.csv
    }

    pub fn overwrites_input(&self) -> bool {
        self.input == self.output
    }
}

impl SampleRequest {
    pub fn validate(&self) -> Result<ValidatedRequest, ConfigError> {
        let sample_size =
            usize::try_from(self.sample_size).map_err(|_| ConfigError::InvalidSampleSize {
                job: self.name.clone(),
                size: self.sample_size,
            })?;

        let encoding = self.parse_encoding(&self.encoding)?;
        let output_encoding = self.parse_encoding(&self.output_encoding)?;
        if !output_encoding.is_writable() {
            return Err(ConfigError::UnsupportedOutputEncoding {
                job: self.name.clone(),
                encoding: output_encoding.name().to_string(),
            });
        }
        let delimiter = self.parse_delimiter()?;

        let csv = CsvSettings::new(delimiter, self.has_header)
            .with_encoding(encoding)
            .with_output_encoding(output_encoding)
            .with_ragged_rows(self.on_ragged_row);

        Ok(ValidatedRequest {
            name: self.name.clone(),
            input: self.input.clone(),
            output: self.output.clone().unwrap_or_else(|| self.input.clone()),
            csv,
            sample_size,
            seed: self.seed,
            include_row_index: self.include_row_index,
        })
    }

    fn parse_encoding(&self, label: &str) -> Result<TextEncoding, ConfigError> {
        label
            .parse()
            .map_err(|source| ConfigError::UnknownEncoding {
                job: self.name.clone(),
                source,
            })
    }

    fn parse_delimiter(&self) -> Result<u8, ConfigError> {
        // `\t` is accepted as a spelled-out tab.
        let delimiter = match self.delimiter.as_str() {
            "\\t" => "\t",
            other => other,
        };
        match delimiter.as_bytes() {
            [b] if b.is_ascii() && *b != b'"' && *b != b'\n' && *b != b'\r' => Ok(*b),
            _ => Err(ConfigError::InvalidDelimiter {
                job: self.name.clone(),
                delimiter: self.delimiter.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connectors::file::csv::settings::RaggedRowPolicy;

    #[test]
    fn test_defaults_overwrite_input() {
        let validated = SampleRequest::new("reviews", "Reviews.csv", 1000)
            .validate()
            .unwrap();

        assert_eq!(validated.output(), Path::new("Reviews.csv"));
        assert!(validated.overwrites_input());
        assert_eq!(validated.sample_size, 1000);
        assert_eq!(validated.seed, 42);
        assert_eq!(validated.csv_settings(), &CsvSettings::default());
    }

    #[test]
    fn test_custom_settings() {
        let validated = SampleRequest::new("tweets", "in.tsv", 5)
            .output("out.tsv")
            .encoding("latin-1")
            .has_header(false)
            .delimiter("\\t")
            .on_ragged_row(RaggedRowPolicy::Skip)
            .validate()
            .unwrap();

        let csv = validated.csv_settings();
        assert_eq!(csv.delimiter, b'\t');
        assert_eq!(csv.encoding, TextEncoding::Latin1);
        assert_eq!(csv.output_encoding, TextEncoding::Utf8);
        assert!(!csv.has_headers);
        assert_eq!(csv.on_ragged_row, RaggedRowPolicy::Skip);
        assert!(!validated.overwrites_input());
    }

    #[test]
    fn test_negative_sample_size() {
        let err = SampleRequest::new("bad", "x.csv", -1).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSampleSize { size: -1, .. }));
    }

    #[test]
    fn test_unknown_encoding() {
        let err = SampleRequest::new("bad", "x.csv", 1)
            .encoding("ebcdic-ish")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEncoding { .. }));
    }

    #[test]
    fn test_utf16_only_as_input_encoding() {
        let validated = SampleRequest::new("wide", "x.csv", 1)
            .encoding("utf-16le")
            .validate()
            .unwrap();
        assert_eq!(validated.csv.encoding.name(), "UTF-16LE");

        for label in ["utf-16le", "utf-16be"] {
            let err = SampleRequest::new("wide", "x.csv", 1)
                .output_encoding(label)
                .validate()
                .unwrap_err();
            assert!(matches!(err, ConfigError::UnsupportedOutputEncoding { .. }));
        }
    }

    #[test]
    fn test_invalid_delimiter() {
        for delimiter in ["", ";;", "\"", "\u{e9}"] {
            let err = SampleRequest::new("bad", "x.csv", 1)
                .delimiter(delimiter)
                .validate()
                .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidDelimiter { .. }));
        }
    }
}
