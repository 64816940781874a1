// 📐 Shape Layer - Receipt Validation
// Turns a raw payload into a Receipt, or rejects it as a whole

use crate::error::{ReceiptError, ReceiptResult};
use crate::money::Amount;
use crate::receipt::{Item, RawItem, RawReceipt, Receipt};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Decode a JSON request body and validate it.
pub fn parse_receipt(body: &[u8]) -> ReceiptResult<Receipt> {
    let raw: RawReceipt = serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, "receipt payload did not decode");
        ReceiptError::InvalidReceipt
    })?;

    validate(raw)
}

/// Validate an already-decoded JSON document.
pub fn validate_value(value: Value) -> ReceiptResult<Receipt> {
    let raw: RawReceipt = serde_json::from_value(value).map_err(|e| {
        debug!(error = %e, "receipt document has the wrong shape");
        ReceiptError::InvalidReceipt
    })?;

    validate(raw)
}

/// Validate every field; the first failure rejects the whole receipt.
pub fn validate(raw: RawReceipt) -> ReceiptResult<Receipt> {
    build_receipt(raw).map_err(|field| {
        debug!(field, "receipt rejected");
        ReceiptError::InvalidReceipt
    })
}

// ============================================================================
// FIELD RULES
// ============================================================================

/// Failing field name, kept for logs only.
type FieldResult<T> = Result<T, &'static str>;

fn build_receipt(raw: RawReceipt) -> FieldResult<Receipt> {
    if !is_retailer_name(&raw.retailer) {
        return Err("retailer");
    }

    let purchase_date = parse_date(&raw.purchase_date).ok_or("purchaseDate")?;
    let purchase_time = parse_time(&raw.purchase_time).ok_or("purchaseTime")?;

    let items = raw
        .items
        .into_iter()
        .map(build_item)
        .collect::<FieldResult<Vec<_>>>()?;

    let total = Amount::parse(&raw.total).map_err(|_| "total")?;

    Ok(Receipt {
        retailer: raw.retailer,
        purchase_date,
        purchase_time,
        items,
        total,
    })
}

fn build_item(raw: RawItem) -> FieldResult<Item> {
    if !is_description(&raw.short_description) {
        return Err("items.shortDescription");
    }

    let price = Amount::parse(&raw.price).map_err(|_| "items.price")?;

    Ok(Item {
        short_description: raw.short_description,
        price,
    })
}

// Unicode `\w` and `\s`, anchored to the whole string.
static DESCRIPTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\s\-]+$").expect("description pattern compiles"));
static RETAILER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\s\-&]+$").expect("retailer pattern compiles"));

/// `^[\w\s\-]+$`
pub fn is_description(text: &str) -> bool {
    DESCRIPTION_PATTERN.is_match(text)
}

/// `^[\w\s\-&]+$`
pub fn is_retailer_name(text: &str) -> bool {
    RETAILER_PATTERN.is_match(text)
}

/// Strict `YYYY-MM-DD`.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !shaped {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff`, 24-hour clock.
fn parse_time(raw: &str) -> Option<NaiveTime> {
    let bytes = raw.as_bytes();
    let digit = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);
    let two_digit = |i: usize| digit(i) && digit(i + 1);

    if !(two_digit(0) && bytes.get(2) == Some(&b':') && two_digit(3)) {
        return None;
    }

    let format = match bytes.len() {
        5 => "%H:%M",
        8 => "%H:%M:%S",
        n if n > 9 && bytes[8] == b'.' => "%H:%M:%S%.f",
        _ => return None,
    };

    if bytes.len() >= 8 && !(bytes[5] == b':' && two_digit(6)) {
        return None;
    }

    NaiveTime::parse_from_str(raw, format).ok()
}

// ============================================================================
// TESTS
// ============================================================================
