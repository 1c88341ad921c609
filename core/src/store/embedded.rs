//! Embedded set store backed by a redb multimap table.

use crate::store::error::StoreError;
use crate::store::set_table::SetTable;
use crate::store::{SetStore, check_prefix};
use crate::types::StoreConfig;
use redb::ReadableDatabase;
use tracing::debug;

/// Posting sets: posting key → document ID members.
const POSTINGS: SetTable = SetTable::new("postings");

pub struct RedbSetStore {
    db: redb::Database,
}

impl RedbSetStore {
    /// Creates or opens the database at the configured path.
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&config.data_dir)?;

        let db = redb::Database::create(config.db_path())?;

        // Initialize tables
        let write_txn = db.begin_write()?;
        POSTINGS.init(&write_txn)?;
        write_txn.commit()?;

        debug!(path = %config.db_path().display(), "opened set store");
        Ok(Self { db })
    }
}

impl SetStore for RedbSetStore {
    fn add_member(&self, key: &str, member: &str) -> Result<u64, StoreError> {
        let write_txn = self.db.begin_write()?;
        let count = POSTINGS.insert(&write_txn, key, member)?;
        write_txn.commit()?;
        Ok(count)
    }

    fn list_members(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let read_txn = self.db.begin_read()?;
        POSTINGS.members(&read_txn, key)
    }

    fn remove_member(&self, key: &str, member: &str) -> Result<u64, StoreError> {
        let write_txn = self.db.begin_write()?;
        let count = POSTINGS.remove(&write_txn, key, member)?;
        write_txn.commit()?;
        Ok(count)
    }

    fn list_keys_by_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        check_prefix(prefix)?;

        let read_txn = self.db.begin_read()?;
        POSTINGS.keys_with_prefix(&read_txn, prefix)
    }
}
