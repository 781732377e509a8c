//! Plain text, markdown, JSON and raw HTML files

use super::read_bytes;
use crate::error::ExtractError;
use docsift_domain::{InputReference, TextExtractor};
use tracing::debug;

/// Reads a file as text, decoding UTF-8 with a Latin-1 fallback
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    type Error = ExtractError;

    fn extract(&self, source: &InputReference) -> Result<String, Self::Error> {
        let bytes = read_bytes(source.as_path())?;
        Ok(decode_text(bytes))
    }
}

/// Decode bytes as UTF-8, or as ISO-8859-1 if they are not valid UTF-8
///
/// Latin-1 maps every byte to the code point of the same value, so the
/// fallback never fails.
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!(valid_up_to = e.utf8_error().valid_up_to(), "Not UTF-8, decoding as Latin-1");
            e.into_bytes().into_iter().map(char::from).collect()
        }
    }
}
