use thiserror::Error;

/// Errors surfaced by the rotation store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("rotation store lock was poisoned")]
    LockPoisoned,

    #[error("failed to read rotation source: {0:#}")]
    Source(anyhow::Error),
}
