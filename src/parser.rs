//! Price dump parsing.
//!
//! The dump is a plain text file where every card occupies exactly six
//! lines: name, rarity, set and card number, price, followed by two
//! separator lines that are ignored.

use crate::error::{PackError, Result};
use crate::models::CardRecord;
use log::{debug, info, warn};
use std::path::Path;

/// Number of lines that make up one card in the dump
pub const LINES_PER_RECORD: usize = 6;

const NAME_OFFSET: usize = 0;
const RARITY_OFFSET: usize = 1;
const SET_OFFSET: usize = 2;
const PRICE_OFFSET: usize = 3;

/// Reads and parses a price dump from disk.
pub fn read_listing<P: AsRef<Path>>(path: P) -> Result<Vec<CardRecord>> {
    let path = path.as_ref();
    info!("Reading price dump: {}", path.display());

    let content = std::fs::read_to_string(path)?;
    debug!("Price dump size: {} bytes", content.len());
    parse_listing(&content)
}

/// Parses the full text of a price dump.
pub fn parse_listing(text: &str) -> Result<Vec<CardRecord>> {
    let lines: Vec<&str> = text.lines().collect();
    parse_lines(&lines)
}

/// Parses raw dump lines into records, six lines per record.
///
/// Fails as a whole if the line count is not a multiple of six or if any
/// record carries an unusable field.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<CardRecord>> {
    if lines.len() % LINES_PER_RECORD != 0 {
        warn!(
            "Price dump has {} lines, expected a multiple of {LINES_PER_RECORD}",
            lines.len()
        );
        return Err(PackError::malformed(
            lines.len(),
            format!(
                "line count {} is not a multiple of {LINES_PER_RECORD}",
                lines.len()
            ),
        ));
    }

    let records = lines
        .chunks(LINES_PER_RECORD)
        .enumerate()
        .map(|(index, block)| parse_block(index * LINES_PER_RECORD + 1, block))
        .collect::<Result<Vec<_>>>()?;

    info!("Parsed {} card records", records.len());
    Ok(records)
}

/// Parses one six-line block. `first_line` is the 1-based line number of the name.
fn parse_block<S: AsRef<str>>(first_line: usize, block: &[S]) -> Result<CardRecord> {
    let name = clean_name(block[NAME_OFFSET].as_ref());
    let rarity = block[RARITY_OFFSET].as_ref().trim();
    let set_and_number = block[SET_OFFSET].as_ref().trim();

    if rarity.is_empty() {
        warn!("Card '{name}' has no rarity");
        return Err(PackError::malformed(
            first_line + RARITY_OFFSET,
            format!("missing rarity for card '{name}'"),
        ));
    }

    let price_line = first_line + PRICE_OFFSET;
    let price = parse_price(block[PRICE_OFFSET].as_ref()).ok_or_else(|| {
        PackError::malformed(
            price_line,
            format!("invalid price '{}'", block[PRICE_OFFSET].as_ref().trim()),
        )
    })?;

    debug!("Parsed card: {name} | {rarity} | {set_and_number} | {price:.2}");
    Ok(CardRecord::new(name, rarity, set_and_number, price))
}

/// Trims whitespace and the surrounding quotes from a card name,
/// including whitespace padded inside the quotes.
pub fn clean_name(raw: &str) -> &str {
    raw.trim().trim_matches('"').trim()
}

/// Parses a listed price like "$1.25".
///
/// Strips whitespace and a leading dollar sign. Returns `None` for text
/// that is not a number, and for negative or non-finite values.
pub fn parse_price(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let cleaned = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
    debug!("Parsing price string: {cleaned}");

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        Ok(value) => {
            warn!("Rejecting out-of-range price '{raw}': {value}");
            None
        }
        Err(e) => {
            warn!("Failed to parse price '{raw}': {e}");
            None
        }
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
