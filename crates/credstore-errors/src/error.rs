//! Storage error types

use thiserror::Error;

/// Result type for fallible storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors reported by the credential storage engine.
///
/// Faults with no more specific classification use [`StorageError::Other`]
/// directly; the two named variants carry a contract callers are expected to
/// dispatch on (see [`StorageError::recovery`]).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// Sync authentication credentials were rejected or have expired.
    /// Re-authenticate before retrying the operation.
    #[error("Sync authentication invalid: {0}")]
    SyncAuthInvalid(String),

    /// The lock token presented does not match the lock currently held.
    /// The caller is operating with a stale or incorrect lock handle;
    /// retrying with the same token will never succeed.
    #[error("Mismatched lock token: {0}")]
    MismatchedLock(String),

    /// Unclassified storage fault.
    #[error("Storage error: {0}")]
    Other(String),
}

/// Recommended caller action for a storage fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Re-authenticate with the sync backend, then retry
    Reauthenticate,
    /// Abort; do not retry with the same lock token
    Abort,
    /// Log or report; the operation has failed
    Fatal,
}

impl StorageError {
    /// The message supplied at construction, unmodified.
    pub fn message(&self) -> &str {
        match self {
            StorageError::SyncAuthInvalid(msg)
            | StorageError::MismatchedLock(msg)
            | StorageError::Other(msg) => msg,
        }
    }

    /// How a caller should react to this fault.
    pub fn recovery(&self) -> Recovery {
        match self {
            StorageError::SyncAuthInvalid(_) => Recovery::Reauthenticate,
            StorageError::MismatchedLock(_) => Recovery::Abort,
            StorageError::Other(_) => Recovery::Fatal,
        }
    }
}

impl From<String> for StorageError {
    fn from(message: String) -> Self {
        StorageError::Other(message)
    }
}

impl From<&str> for StorageError {
    fn from(message: &str) -> Self {
        StorageError::Other(message.to_string())
    }
}
