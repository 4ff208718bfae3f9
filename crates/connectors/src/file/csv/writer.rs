use crate::file::csv::{error::FileError, settings::CsvSettings};
use model::records::table::Table;
use std::{
    borrow::Cow,
    fs::File,
    io::BufWriter,
    path::Path,
    time::Instant,
};
use tracing::debug;

/// Writes `table` to `path` as delimited text, replacing any existing file.
///
/// Output is a header line then one line per row, `\n`-terminated, with
/// fields quoted only when they contain the delimiter, a quote, or a line
/// break. With `include_row_index` a leading unnamed column carries each
/// row's source index.
pub fn save(
    table: &Table,
    path: &Path,
    settings: &CsvSettings,
    include_row_index: bool,
) -> Result<(), FileError> {
    let start = Instant::now();
    let encode = |text: &str| -> Result<Vec<u8>, FileError> {
        settings
            .output_encoding
            .encode(text)
            .map(Cow::into_owned)
            .map_err(|source| FileError::Encode {
                path: path.display().to_string(),
                source,
            })
    };

    // Encode everything first so an unmappable value leaves the destination intact.
    let mut header = Vec::with_capacity(table.column_count() + 1);
    if include_row_index {
        header.push(Vec::new());
    }
    for column in table.columns() {
        header.push(encode(column)?);
    }

    let records = table
        .rows()
        .iter()
        .map(|row| {
            let mut record = Vec::with_capacity(header.len());
            if include_row_index {
                record.push(row.index.to_string().into_bytes());
            }
            for value in &row.values {
                record.push(encode(value)?);
            }
            Ok(record)
        })
        .collect::<Result<Vec<Vec<Vec<u8>>>, FileError>>()?;

    let file = File::create(path).map_err(|e| FileError::from_io(path, e))?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(settings.delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(BufWriter::new(file));

    writer.write_record(&header)?;
    for record in &records {
        writer.write_record(record)?;
    }

    writer.flush().map_err(|e| FileError::from_io(path, e))?;

    debug!(
        path = %path.display(),
        encoding = %settings.output_encoding,
        rows = table.row_count(),
        took_ms = start.elapsed().as_millis() as u64,
        "Wrote CSV file"
    );

    Ok(())
}
