use crate::models::Transaction;
use crate::storage::Storage;
use crate::types::UserId;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// In-memory transaction lists keyed by user.
///
/// Only raw transactions are held here; every derived view is recomputed by the caller from a
/// snapshot returned by [`Storage::load`].
pub struct LedgerStorage {
    ledgers: Arc<DashMap<UserId, Vec<Transaction>>>
}

impl LedgerStorage {
    pub fn new() -> Self {
        Self {
            ledgers: Arc::new(DashMap::new())
        }
    }
}

impl Storage for LedgerStorage {
    fn load(&self, user_id: &str) -> Vec<Transaction> {
        self.ledgers.get(user_id)
            .map(|ledger| ledger.value().clone())
            .unwrap_or_default()
    }

    fn save(&self, user_id: UserId, transactions: Vec<Transaction>) {
        debug!("Replacing ledger for user [{user_id}] with [{}] transactions", transactions.len());
        self.ledgers.insert(user_id, transactions);
    }

    fn append(&self, user_id: UserId, transaction: Transaction) {
        debug!("Appending transaction [{}] to ledger for user [{user_id}]", transaction.id);
        self.ledgers.entry(user_id).or_default().push(transaction);
    }
}
