// 🧾 Receipt Data Model
// Raw payload shapes (as submitted) and validated values (as scored)

use crate::money::Amount;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reward points awarded for a receipt.
pub type Points = u64;

// ============================================================================
// RAW PAYLOAD (camelCase JSON, unvalidated)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    pub short_description: String,
    pub price: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReceipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<RawItem>,
    pub total: String,
}

// ============================================================================
// VALIDATED VALUES
// ============================================================================

/// A line item that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub short_description: String,
    pub price: Amount,
}

/// A receipt that passed validation. Built only by [`crate::schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<Item>,
    pub total: Amount,
}

// ============================================================================
// IDENTIFIER
// ============================================================================

/// Opaque identifier handed back on submission (UUID v4, hyphenated).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    pub fn generate() -> Self {
        ReceiptId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for ReceiptId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
