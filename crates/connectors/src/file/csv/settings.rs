use model::core::encoding::TextEncoding;
use serde::{Deserialize, Serialize};

/// What to do with a record whose field count differs from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RaggedRowPolicy {
    #[default]
    Error,
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvSettings {
    pub delimiter: u8,
    pub has_headers: bool,
    pub encoding: TextEncoding,
    pub output_encoding: TextEncoding,
    pub on_ragged_row: RaggedRowPolicy,
}

impl CsvSettings {
    pub fn new(delimiter: u8, has_headers: bool) -> Self {
        CsvSettings {
            delimiter,
            has_headers,
            encoding: TextEncoding::Utf8,
            output_encoding: TextEncoding::Utf8,
            on_ragged_row: RaggedRowPolicy::Error,
        }
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_output_encoding(mut self, encoding: TextEncoding) -> Self {
        self.output_encoding = encoding;
        self
    }

    pub fn with_ragged_rows(mut self, policy: RaggedRowPolicy) -> Self {
        self.on_ragged_row = policy;
        self
    }
}

impl Default for CsvSettings {
    fn default() -> Self {
        CsvSettings::new(b',', true)
    }
}
