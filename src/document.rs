use std::{fs, path::Path};

use crate::error::Result;

/// Reads an uploaded document. The bytes must be valid UTF-8.
pub fn read_document(path: &Path) -> Result<String> {
    decode(fs::read(path)?)
}

pub fn decode(bytes: Vec<u8>) -> Result<String> {
    Ok(String::from_utf8(bytes)?)
}
