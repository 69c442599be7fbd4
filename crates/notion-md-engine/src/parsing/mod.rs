//! Turning user input into a block identifier.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::BlockId;

fn hex_id_regex() -> &'static Regex {
    static HEX_ID: OnceLock<Regex> = OnceLock::new();
    HEX_ID.get_or_init(|| Regex::new(r"[a-f0-9]{32}").expect("Invalid hex id regex"))
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BlockIdError {
    #[error("no block ID given")]
    Empty,
    #[error("invalid Notion URL: cannot extract block ID from {0}")]
    NoIdInUrl(String),
}

/// Extract a block id from a page URL, or accept `input` as a raw id.
///
/// URLs carry the id as 32 undashed hex characters somewhere in the path; it
/// is returned in dashed UUID form. Surrounding whitespace is trimmed;
/// otherwise raw ids pass through as given.
pub fn extract_block_id(input: &str) -> Result<BlockId, BlockIdError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(BlockIdError::Empty);
    }

    if !(input.starts_with("http://") || input.starts_with("https://")) {
        return Ok(BlockId::from(input));
    }

    let hex = hex_id_regex()
        .find(input)
        .map(|m| m.as_str())
        .ok_or_else(|| BlockIdError::NoIdInUrl(input.to_string()))?;

    Ok(BlockId::from(format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )))
}
