use thiserror::Error;

#[derive(Debug, Error)]
pub enum DateError {
    #[error("Date error: {0}")]
    InvalidFormat(String),
    #[error("Date error: {0}")]
    Parse(#[from] chrono::ParseError)
}
