// Receipt Points - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod config;
pub mod error;
pub mod money;
pub mod receipt;
pub mod rules;
pub mod schema;
pub mod store;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use error::{ReceiptError, ReceiptResult, INVALID_RECEIPT_MESSAGE, NOT_FOUND_MESSAGE};
pub use money::Amount;
pub use receipt::{Item, Points, RawItem, RawReceipt, Receipt, ReceiptId};
pub use rules::{breakdown, score, Rule, RuleContribution, RULES};
pub use schema::{parse_receipt, validate, validate_value};
pub use store::ScoreStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
