use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::errors::TransactionError;
use crate::models::TransactionType;
use crate::types::{TransactionDate, TransactionId};

/// Largest accepted amount. Keeps any realistic number of summed amounts far below
/// `Decimal::MAX`, so aggregation never overflows.
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000;

/// Represents a single row handed over by the data-fetching layer.
///
/// The sign of the money flow is carried by `transaction_type`; `amount` is always
/// a non-negative magnitude once the record has passed [`Transaction::validate`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// Opaque identifier, unique within one list.
    pub id: TransactionId,
    /// When the transaction was booked; a plain date or a full timestamp.
    pub date: TransactionDate,
    /// Credit (income) or Debit (expense).
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Magnitude of the transaction.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Free-text description, also used for category inference.
    pub remark: String
}

impl Transaction {
    pub fn is_debit(&self) -> bool {
        self.transaction_type == TransactionType::Debit
    }

    /// Checks the record against the aggregation contract.
    ///
    /// # Errors
    /// Returns `TransactionError` if:
    /// - The identifier is blank.
    /// - The amount is negative.
    /// - The amount exceeds [`MAX_AMOUNT_UNITS`].
    pub fn validate(&self) -> Result<(), TransactionError> {
        if self.id.trim().is_empty() {
            return Err(TransactionError::missing_id(self))
        }

        if self.amount < Decimal::ZERO {
            return Err(TransactionError::negative_amount(self))
        }

        if self.amount > Decimal::from(MAX_AMOUNT_UNITS) {
            return Err(TransactionError::amount_too_large(self))
        }

        Ok(())
    }
}
