mod transaction_loader;

pub use transaction_loader::TransactionLoader;
