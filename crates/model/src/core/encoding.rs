use encoding_rs::{Encoding, UTF_8};
use serde::{Serialize, Serializer};
use std::{borrow::Cow, fmt, str::FromStr};
use thiserror::Error;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Unknown text encoding: {0}")]
    UnknownLabel(String),

    #[error("Input is not valid {0}")]
    Malformed(String),

    #[error("Character {ch:?} cannot be represented in {encoding}")]
    Unmappable { ch: char, encoding: String },

    #[error("{0} can be read but not written")]
    ReadOnly(String),
}

/// Text encoding of a delimited file.
///
/// `Latin1` is strict ISO-8859-1 (every byte maps to the code point of the
/// same value). WHATWG labels such as `latin1` resolve to windows-1252 in
/// `encoding_rs`, so they are intercepted before the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Latin1,
    Other(&'static Encoding),
}

impl TextEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "iso-8859-1",
            TextEncoding::Other(enc) => enc.name(),
        }
    }

    /// Whether text can be written in this encoding. `encoding_rs` writes
    /// UTF-8 for UTF-16 and the replacement encoding.
    pub fn is_writable(&self) -> bool {
        match self {
            TextEncoding::Utf8 | TextEncoding::Latin1 => true,
            TextEncoding::Other(enc) => enc.output_encoding() == *enc,
        }
    }

    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>, EncodingError> {
        match self {
            TextEncoding::Utf8 => {
                let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                UTF_8
                    .decode_without_bom_handling_and_without_replacement(bytes)
                    .ok_or_else(|| EncodingError::Malformed(self.name().to_string()))
            }
            TextEncoding::Latin1 => Ok(Cow::Owned(bytes.iter().map(|&b| b as char).collect())),
            TextEncoding::Other(enc) => {
                let bytes = match Encoding::for_bom(bytes) {
                    Some((found, len)) if found == *enc => &bytes[len..],
                    _ => bytes,
                };
                enc.decode_without_bom_handling_and_without_replacement(bytes)
                    .ok_or_else(|| EncodingError::Malformed(self.name().to_string()))
            }
        }
    }

    pub fn encode<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>, EncodingError> {
        match self {
            TextEncoding::Utf8 => Ok(Cow::Borrowed(text.as_bytes())),
            TextEncoding::Latin1 => text
                .chars()
                .map(|ch| {
                    u8::try_from(u32::from(ch)).map_err(|_| EncodingError::Unmappable {
                        ch,
                        encoding: self.name().to_string(),
                    })
                })
                .collect::<Result<Vec<u8>, _>>()
                .map(Cow::Owned),
            TextEncoding::Other(_) if !self.is_writable() => {
                Err(EncodingError::ReadOnly(self.name().to_string()))
            }
            TextEncoding::Other(enc) => {
                let (bytes, _, had_errors) = enc.encode(text);
                if had_errors {
                    // encoding_rs substitutes numeric character references; find the culprit.
                    let ch = text
                        .chars()
                        .find(|c| {
                            let mut buf = [0u8; 4];
                            enc.encode(c.encode_utf8(&mut buf)).2
                        })
                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    return Err(EncodingError::Unmappable {
                        ch,
                        encoding: self.name().to_string(),
                    });
                }
                Ok(bytes)
            }
        }
    }
}

impl FromStr for TextEncoding {
    type Err = EncodingError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let normalized = label.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" | "l1" => Ok(TextEncoding::Latin1),
            _ => Encoding::for_label(normalized.as_bytes())
                .map(|enc| {
                    if enc == UTF_8 {
                        TextEncoding::Utf8
                    } else {
                        TextEncoding::Other(enc)
                    }
                })
                .ok_or_else(|| EncodingError::UnknownLabel(label.to_string())),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TextEncoding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
