use connectors::file::csv::{reader::load, settings::CsvSettings};
use model::{core::encoding::TextEncoding, records::table::Table};
use std::{fs, path::Path};

/// Header of the product reviews fixture.
pub const REVIEWS_HEADER: &str =
    "Id,ProductId,UserId,ProfileName,HelpfulnessNumerator,Score,Summary,Text";

/// Writes a reviews-style file (UTF-8, with header) of `rows` data rows.
///
/// Every fifth review text contains a delimiter, every seventh an embedded
/// quote, and every eleventh a line break, so quoting is exercised.
pub fn write_reviews(path: &Path, rows: usize) {
    let mut content = String::from(REVIEWS_HEADER);
    content.push('\n');
    for i in 0..rows {
        let mut text = format!("Review number {i} \u{2013} tasty");
        if i % 5 == 0 {
            text.push_str(", would buy again");
        }
        if i % 7 == 0 {
            text.push_str(" \"best\" ever");
        }
        if i % 11 == 0 {
            text.push_str("\nsecond line");
        }
        let text = if text.contains([',', '"', '\n']) {
            format!("\"{}\"", text.replace('"', "\"\""))
        } else {
            text
        };
        content.push_str(&format!(
            "{},B00{:05},A{:08},user {},{},{},Summary {},{}\n",
            i + 1,
            i % 97,
            i * 31,
            i % 13,
            i % 4,
            1 + i % 5,
            i,
            text
        ));
    }
    fs::write(path, content).expect("write reviews fixture");
}

/// Writes a Sentiment140-style file: Latin-1, no header, six quoted columns.
pub fn write_tweets(path: &Path, rows: usize) {
    let mut content: Vec<u8> = Vec::new();
    for i in 0..rows {
        let polarity = if i % 2 == 0 { 0 } else { 4 };
        content.extend_from_slice(
            format!(
                "\"{polarity}\",\"{}\",\"Mon Apr 06 22:19:45 PDT 2009\",\"NO_QUERY\",\"user{i}\",\"",
                1_467_810_369 + i
            )
            .as_bytes(),
        );
        // 0xE9 is e-acute in Latin-1 and invalid on its own in UTF-8
        content.extend_from_slice(b"caf\xE9 tweet ");
        content.extend_from_slice(i.to_string().as_bytes());
        content.extend_from_slice(b"\"\n");
    }
    fs::write(path, content).expect("write tweets fixture");
}

pub fn load_utf8(path: &Path, has_header: bool) -> Table {
    load(path, &CsvSettings::new(b',', has_header)).expect("load utf-8 table")
}

pub fn load_latin1(path: &Path) -> Table {
    let settings = CsvSettings::new(b',', false).with_encoding(TextEncoding::Latin1);
    load(path, &settings).expect("load latin-1 table")
}

pub fn file_row_count(path: &Path) -> usize {
    load_utf8(path, true).row_count()
}
