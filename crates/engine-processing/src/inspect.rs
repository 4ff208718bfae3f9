use connectors::file::csv::{
    error::FileError, metadata::CsvMetadata, reader, settings::CsvSettings,
};
use std::path::Path;
use tracing::info;

/// Loads a file and reports its shape and inferred column types.
pub fn inspect(path: &Path, settings: &CsvSettings) -> Result<CsvMetadata, FileError> {
    let table = reader::load(path, settings)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let meta = CsvMetadata::describe(&name, &table, settings);
    info!(
        "Inspected {}: {} rows, {} columns",
        path.display(),
        meta.rows,
        meta.columns.len()
    );
    Ok(meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::{data_type::DataType, encoding::TextEncoding};
    use std::fs;

    #[test]
    fn test_inspect_headerless_latin1() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tweets.csv");
        fs::write(&path, b"0,1467810369,NO_QUERY,caf\xE9\n4,1467810672,NO_QUERY,ok\n").unwrap();

        let settings = CsvSettings::new(b',', false).with_encoding(TextEncoding::Latin1);
        let meta = inspect(&path, &settings).unwrap();

        assert_eq!(meta.name, "tweets");
        assert_eq!(meta.rows, 2);
        assert!(!meta.has_header);
        let names: Vec<_> = meta.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["0", "1", "2", "3"]);
        assert_eq!(meta.columns[0].data_type, DataType::Integer);
        assert_eq!(meta.columns[2].data_type, DataType::String);
    }
}
