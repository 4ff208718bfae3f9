use crate::file::csv::settings::CsvSettings;
use model::{
    core::{data_type::DataType, encoding::TextEncoding},
    records::table::Table,
};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Serialize)]
pub struct CsvColumnMetadata {
    pub name: String,
    pub data_type: DataType,
    pub is_nullable: bool,
    pub ordinal: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CsvMetadata {
    pub name: String,
    pub rows: usize,
    pub columns: Vec<CsvColumnMetadata>,
    pub delimiter: char,
    pub has_header: bool,
    pub encoding: TextEncoding,
}

impl CsvMetadata {
    /// Describes a loaded table, inferring each column's type from every value.
    pub fn describe(name: &str, table: &Table, settings: &CsvSettings) -> Self {
        let columns = table
            .columns()
            .iter()
            .enumerate()
            .map(|(ordinal, col)| CsvColumnMetadata {
                name: col.clone(),
                data_type: DataType::infer(table.column_values(ordinal)),
                is_nullable: table.column_values(ordinal).any(str::is_empty),
                ordinal,
            })
            .collect();

        CsvMetadata {
            name: name.to_string(),
            rows: table.row_count(),
            columns,
            delimiter: settings.delimiter as char,
            has_header: settings.has_headers,
            encoding: settings.encoding,
        }
    }
}

/// Column names for a headerless file: `0`, `1`, `2`, ...
pub fn positional_headers(width: usize) -> Vec<String> {
    (0..width).map(|i| i.to_string()).collect()
}

/// Turns a raw header record into unique column names.
///
/// Blank cells become `Unnamed: {ordinal}`; repeated names get a `.1`, `.2`, ...
/// suffix in order of appearance.
pub fn normalize_headers<'a, I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let raw: Vec<String> = raw
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            if name.trim().is_empty() {
                format!("Unnamed: {i}")
            } else {
                name.to_string()
            }
        })
        .collect();

    let mut used: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut counters: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(raw.len());

    for name in raw {
        let mut candidate = name.clone();
        while used.contains(&candidate) {
            let n = counters.entry(name.clone()).or_insert(0);
            *n += 1;
            candidate = format!("{name}.{n}");
        }
        used.insert(candidate.clone());
        names.push(candidate);
    }

    names
}
