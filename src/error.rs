use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid bound: k must be non-negative, got {0}")]
    InvalidBound(i64),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Validates a caller-supplied bound before any element is ingested.
pub fn checked_bound(k: i64) -> Result<usize> {
    usize::try_from(k).map_err(|_| Error::InvalidBound(k))
}
