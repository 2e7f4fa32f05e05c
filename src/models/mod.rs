mod category;
mod errors;
mod summary;
#[cfg(test)]
mod tests;
mod transaction;

use serde::Deserialize;

pub use category::Category;
pub use errors::TransactionError;
pub use summary::{AggregateSummary, CategoryBucket, ExpensePoint};
pub use transaction::{Transaction, MAX_AMOUNT_UNITS};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize)]
pub enum TransactionType {
    #[serde(alias = "credit", alias = "CREDIT")]
    Credit,
    #[serde(alias = "debit", alias = "DEBIT")]
    Debit
}

