use crate::models::{Transaction, TransactionType};
use crate::types::{TransactionDate, TransactionId};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("Transaction dated [{date}]:[{transaction_type:?}] has no identifier")]
    MissingId {
        date: TransactionDate,
        transaction_type: TransactionType
    },
    #[error("Amount [{amount}] must not be negative for transaction [{transaction_id}]:[{transaction_type:?}]")]
    NegativeAmount {
        transaction_id: TransactionId,
        transaction_type: TransactionType,
        amount: Decimal
    },
    #[error("Amount [{amount}] exceeds the supported maximum for transaction [{transaction_id}]:[{transaction_type:?}]")]
    AmountTooLarge {
        transaction_id: TransactionId,
        transaction_type: TransactionType,
        amount: Decimal
    }
}

impl TransactionError {
    pub fn missing_id(tx: &Transaction) -> Self {
        Self::MissingId {
            date: tx.date,
            transaction_type: tx.transaction_type,
        }
    }

    pub fn negative_amount(tx: &Transaction) -> Self {
        Self::NegativeAmount {
            transaction_id: tx.id.clone(),
            transaction_type: tx.transaction_type,
            amount: tx.amount,
        }
    }

    pub fn amount_too_large(tx: &Transaction) -> Self {
        Self::AmountTooLarge {
            transaction_id: tx.id.clone(),
            transaction_type: tx.transaction_type,
            amount: tx.amount,
        }
    }
}
