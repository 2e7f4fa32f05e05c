mod ledger_storage;

use crate::models::Transaction;
use crate::types::UserId;

pub use ledger_storage::LedgerStorage;

pub trait Storage: Send + Sync + 'static {
    /// Snapshot of the user's transactions in insertion order; empty for unknown users.
    fn load(&self, user_id: &str) -> Vec<Transaction>;
    /// Replaces the user's whole transaction list.
    fn save(&self, user_id: UserId, transactions: Vec<Transaction>);
    /// Adds one transaction at the end of the user's list.
    fn append(&self, user_id: UserId, transaction: Transaction);
}
