//! Set-store seam.
//!
//! The engine keeps its postings in a key-addressable store of string sets.
//! Each operation is its own atomic unit; there are no multi-key transactions.
//!
//! - [`RedbSetStore`]: embedded, file-backed store (one redb transaction per call)
//! - [`MemorySetStore`]: process-local store for embedding and tests

use std::sync::Arc;

pub use embedded::RedbSetStore;
pub use error::StoreError;
pub use memory::MemorySetStore;

mod embedded;
mod memory;
mod set_table;

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum StoreError {
        #[error("Database error: {0}")]
        Redb(#[from] redb::DatabaseError),

        #[error("Table error: {0}")]
        TableError(#[from] redb::TableError),

        #[error("Storage error: {0}")]
        StorageError(#[from] redb::StorageError),

        #[error("Transaction error: {0}")]
        TransactionError(#[from] redb::TransactionError),

        #[error("Commit error: {0}")]
        CommitError(#[from] redb::CommitError),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Prefix must not be blank")]
        BlankPrefix,

        #[error("Backend error: {0}")]
        Backend(String),
    }
}

/// Named sets of opaque string members.
pub trait SetStore {
    /// Adds `member` to the set at `key`, creating the set if needed.
    /// Returns the member count after the add.
    fn add_member(&self, key: &str, member: &str) -> Result<u64, StoreError>;

    /// Returns the members of the set at `key` in ascending order. A missing set
    /// is empty.
    fn list_members(&self, key: &str) -> Result<Vec<String>, StoreError>;

    /// Removes `member` from the set at `key`. Returns the member count after the
    /// remove. A set whose last member is removed disappears.
    fn remove_member(&self, key: &str, member: &str) -> Result<u64, StoreError>;

    /// Returns every non-empty set key starting with `prefix`, ascending.
    ///
    /// Returns `Err(BlankPrefix)` if `prefix` is blank.
    fn list_keys_by_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError>;
}

impl<S: SetStore + ?Sized> SetStore for &S {
    fn add_member(&self, key: &str, member: &str) -> Result<u64, StoreError> {
        (**self).add_member(key, member)
    }

    fn list_members(&self, key: &str) -> Result<Vec<String>, StoreError> {
        (**self).list_members(key)
    }

    fn remove_member(&self, key: &str, member: &str) -> Result<u64, StoreError> {
        (**self).remove_member(key, member)
    }

    fn list_keys_by_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        (**self).list_keys_by_prefix(prefix)
    }
}

impl<S: SetStore + ?Sized> SetStore for Arc<S> {
    fn add_member(&self, key: &str, member: &str) -> Result<u64, StoreError> {
        (**self).add_member(key, member)
    }

    fn list_members(&self, key: &str) -> Result<Vec<String>, StoreError> {
        (**self).list_members(key)
    }

    fn remove_member(&self, key: &str, member: &str) -> Result<u64, StoreError> {
        (**self).remove_member(key, member)
    }

    fn list_keys_by_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        (**self).list_keys_by_prefix(prefix)
    }
}

fn check_prefix(prefix: &str) -> Result<(), StoreError> {
    if prefix.trim().is_empty() {
        return Err(StoreError::BlankPrefix);
    }
    Ok(())
}
