use crate::file::csv::{
    error::FileError,
    metadata::{normalize_headers, positional_headers},
    settings::{CsvSettings, RaggedRowPolicy},
};
use model::records::{row::Row, table::Table};
use std::{fs, path::Path, time::Instant};
use tracing::{debug, warn};

/// Reads a whole delimited file into memory.
///
/// The file is decoded with `settings.encoding` before parsing. Column names
/// come from the first record when `settings.has_headers` is set, otherwise
/// they are positional and the first record is data. Blank lines are skipped.
pub fn load(path: &Path, settings: &CsvSettings) -> Result<Table, FileError> {
    let start = Instant::now();
    let bytes = fs::read(path).map_err(|e| FileError::from_io(path, e))?;
    let text = settings
        .encoding
        .decode(&bytes)
        .map_err(|source| FileError::Decode {
            path: path.display().to_string(),
            source,
        })?;

    // Field counts are checked by hand so the ragged-row policy can apply.
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(settings.delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = reader.records();
    let first = match records.next() {
        Some(record) => record?,
        None => return Err(FileError::EmptyInput(path.display().to_string())),
    };

    let width = first.len();
    let (columns, mut rows) = if settings.has_headers {
        (normalize_headers(first.iter()), Vec::new())
    } else {
        let row = Row::new(0, first.iter().map(String::from).collect());
        (positional_headers(width), vec![row])
    };

    let mut skipped = 0usize;
    for record in records {
        let record = record?;
        if record.len() != width {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            match settings.on_ragged_row {
                RaggedRowPolicy::Error => {
                    return Err(FileError::RaggedRow {
                        path: path.display().to_string(),
                        line,
                        expected: width,
                        found: record.len(),
                    });
                }
                RaggedRowPolicy::Skip => {
                    warn!(
                        "Skipping line {line} of {}: expected {width} fields, saw {}",
                        path.display(),
                        record.len()
                    );
                    skipped += 1;
                    continue;
                }
            }
        }

        let index = rows.len();
        rows.push(Row::new(index, record.iter().map(String::from).collect()));
    }

    let table = Table::new(columns, rows)?;
    debug!(
        path = %path.display(),
        encoding = %settings.encoding,
        rows = table.row_count(),
        columns = table.column_count(),
        skipped,
        took_ms = start.elapsed().as_millis() as u64,
        "Loaded CSV file"
    );

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::encoding::TextEncoding;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tracing_test::traced_test;

    fn write_temp(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_with_header() {
        let file = write_temp(b"Id,Text\n1,\"hello, world\"\n\n2,bye\n");
        let table = load(file.path(), &CsvSettings::default()).unwrap();

        assert_eq!(table.columns(), &["Id", "Text"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.value(0, "Text"), Some("hello, world"));
        assert_eq!(table.rows()[1].index, 1);
    }

    #[test]
    fn test_load_without_header_latin1() {
        let file = write_temp(b"0,\"1467810369\",\"caf\xE9\"\n4,\"1467810672\",\"na\xEFve\"\n");
        let settings = CsvSettings::new(b',', false).with_encoding(TextEncoding::Latin1);
        let table = load(file.path(), &settings).unwrap();

        assert_eq!(table.columns(), &["0", "1", "2"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.value(0, "2"), Some("caf\u{e9}"));
        assert_eq!(table.value(1, "0"), Some("4"));
    }

    #[test]
    fn test_load_rejects_bad_utf8() {
        let file = write_temp(b"name\ncaf\xE9\n");
        let err = load(file.path(), &CsvSettings::default()).unwrap_err();
        assert!(matches!(err, FileError::Decode { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.csv"), &CsvSettings::default()).unwrap_err();
        assert!(matches!(err, FileError::NotFound(_)));
    }

    #[test]
    fn test_load_empty_file() {
        let file = write_temp(b"");
        let err = load(file.path(), &CsvSettings::default()).unwrap_err();
        assert!(matches!(err, FileError::EmptyInput(_)));
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_load_header_only() {
        let file = write_temp(b"a,b\n");
        let table = load(file.path(), &CsvSettings::default()).unwrap();
        assert_eq!(table.column_count(), 2);
        assert!(table.is_empty());
    }

    #[test]
    fn test_ragged_row_errors_by_default() {
        let file = write_temp(b"a,b\n1,2\n3\n4,5\n");
        let err = load(file.path(), &CsvSettings::default()).unwrap_err();

        match err {
            FileError::RaggedRow {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[traced_test]
    #[test]
    fn test_ragged_row_skip_policy() {
        let file = write_temp(b"a,b\n1,2\n3,4,5\n6,7\n");
        let settings = CsvSettings::default().with_ragged_rows(RaggedRowPolicy::Skip);
        let table = load(file.path(), &settings).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.value(1, "a"), Some("6"));
        assert_eq!(table.rows()[1].index, 1);
        assert!(logs_contain("Skipping line 3"));
    }
}
