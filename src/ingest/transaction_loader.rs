use crate::models::Transaction;
use crate::storage::Storage;
use crate::types::UserId;
use anyhow::anyhow;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error, warn};

/// Streams transactions from a CSV file into a user's ledger.
///
/// This is the validation boundary: rows that do not deserialize or that break the
/// transaction contract are logged and skipped, so the ledger only ever holds well-formed
/// records.
pub struct TransactionLoader {
    backpressure: usize
}

impl TransactionLoader {
    pub fn new() -> Self {
        Self {
            backpressure: 256
        }
    }

    /// Sets the capacity of the channel between the CSV reader and the ledger writer.
    pub fn with_backpressure(mut self, backpressure: usize) -> Self {
        self.backpressure = backpressure.max(1);
        self
    }

    /// Replaces the user's ledger with the valid rows of the CSV at `path`, in file order.
    ///
    /// A missing or unreadable file leaves the ledger empty and is not an error; only a
    /// crashed reader task is. Returns the number of transactions stored.
    pub async fn load_into<S: Storage>(&self, path: &str, storage: Arc<S>, user_id: UserId) -> anyhow::Result<usize> {
        let (sender, receiver) = mpsc::channel::<Transaction>(self.backpressure);
        let csv_handle = self.spawn_csv_reader(path.to_string(), sender);

        storage.save(user_id.clone(), Vec::new());
        let stored = Self::store_transactions(receiver, storage.as_ref(), user_id).await;

        csv_handle.await.map_err(|error| anyhow!("CSV ingestion failed: {error}"))?;

        Ok(stored)
    }

    fn spawn_csv_reader(&self, path: String, sender: mpsc::Sender<Transaction>) -> JoinHandle<()> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    error!("Error opening CSV at path: {path} | {error}");
                    return;
                }
            };

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .from_reader(BufReader::new(file));

            for result in reader.deserialize::<Transaction>() {
                match result {
                    Ok(transaction) => {
                        if let Err(error) = transaction.validate() {
                            warn!("{error}");
                            continue;
                        }

                        if sender.blocking_send(transaction).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        error!("CSV deserialization error: {error}");
                    }
                }
            }
        })
    }

    async fn store_transactions<S: Storage>(mut receiver: mpsc::Receiver<Transaction>, storage: &S, user_id: UserId) -> usize {
        let mut stored = 0;

        while let Some(transaction) = receiver.recv().await {
            debug!("Transaction [{}]:[{:?}] for user [{user_id}] stored", transaction.id, transaction.transaction_type);
            storage.append(user_id.clone(), transaction);
            stored += 1;
        }

        stored
    }
}
