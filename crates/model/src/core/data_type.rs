use serde::{Deserialize, Serialize};
use std::fmt;

/// Inferred type of a text column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Empty,
    Integer,
    Float,
    Boolean,
    String,
}

/// The promotion sequence: start at the current type and widen until it fits.
const CHAIN: &[DataType] = &[
    DataType::Empty,
    DataType::Integer,
    DataType::Float,
    DataType::Boolean,
    DataType::String,
];

impl DataType {
    /// Check if type can parse the given string.
    fn can_parse(&self, value: &str) -> bool {
        if value.is_empty() {
            return true; // treat empty as null
        }
        match self {
            DataType::Empty => false,
            DataType::Integer => value.parse::<i64>().is_ok(),
            DataType::Float => value.parse::<f64>().is_ok(),
            DataType::Boolean => matches!(value.to_lowercase().as_str(), "true" | "false"),
            DataType::String => true,
        }
    }

    /// Widens `self` to the narrowest type that also accepts `value`.
    ///
    /// Numbers and booleans never share a column: once a column has seen an
    /// integer, a `true` pushes it past `Boolean` straight to `String`.
    pub fn promote(self, value: &str) -> DataType {
        let start = CHAIN.iter().position(|t| *t == self).unwrap_or(0);
        let candidate = CHAIN[start..]
            .iter()
            .find(|t| t.can_parse(value))
            .copied()
            .unwrap_or(DataType::String);

        let numeric = matches!(self, DataType::Integer | DataType::Float);
        if numeric && candidate == DataType::Boolean {
            DataType::String
        } else {
            candidate
        }
    }

    pub fn infer<'a, I>(values: I) -> DataType
    where
        I: IntoIterator<Item = &'a str>,
    {
        values
            .into_iter()
            .fold(DataType::Empty, |acc, value| acc.promote(value))
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Empty => "empty",
            DataType::Integer => "integer",
            DataType::Float => "float",
            DataType::Boolean => "boolean",
            DataType::String => "string",
        };
        f.write_str(name)
    }
}
