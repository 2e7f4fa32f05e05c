mod date;
mod errors;

pub use date::TransactionDate;
pub use errors::DateError;

pub type TransactionId = String;
pub type UserId = String;

/// Ledger key used when the caller does not distinguish between users.
pub const DEFAULT_USER: &str = "default";
