use thiserror::Error;

/// Unified error type for the property-ledger-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An argument was rejected before any mutation took place, so the
    /// ledger is observably unchanged whenever this is returned.
    ///
    /// An unknown property id is NOT an error — mutators report it as
    /// an `Ok(false)` found-flag instead.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
