use crate::store::error::StoreError;
use redb::{MultimapTableDefinition, ReadTransaction, ReadableMultimapTable, WriteTransaction};

/// Stores `key → {member}` sets in a redb multimap table.
pub struct SetTable {
    definition: MultimapTableDefinition<'static, &'static str, &'static str>,
}

impl SetTable {
    pub const fn new(name: &'static str) -> Self {
        Self {
            definition: MultimapTableDefinition::new(name),
        }
    }

    pub fn init(&self, txn: &WriteTransaction) -> Result<(), StoreError> {
        txn.open_multimap_table(self.definition)?;
        Ok(())
    }

    /// Returns the member count after inserting.
    pub fn insert(
        &self,
        txn: &WriteTransaction,
        key: &str,
        member: &str,
    ) -> Result<u64, StoreError> {
        let mut table = txn.open_multimap_table(self.definition)?;
        table.insert(key, member)?;
        let count = table.get(key)?.len();
        Ok(count)
    }

    /// Returns the member count after removing.
    pub fn remove(
        &self,
        txn: &WriteTransaction,
        key: &str,
        member: &str,
    ) -> Result<u64, StoreError> {
        let mut table = txn.open_multimap_table(self.definition)?;
        table.remove(key, member)?;
        let count = table.get(key)?.len();
        Ok(count)
    }

    pub fn members(&self, txn: &ReadTransaction, key: &str) -> Result<Vec<String>, StoreError> {
        let table = txn.open_multimap_table(self.definition)?;
        let mut members = Vec::new();

        for member in table.get(key)? {
            members.push(member?.value().to_string());
        }

        Ok(members)
    }

    /// Returns keys starting with `prefix` that still hold members, ascending.
    pub fn keys_with_prefix(
        &self,
        txn: &ReadTransaction,
        prefix: &str,
    ) -> Result<Vec<String>, StoreError> {
        let table = txn.open_multimap_table(self.definition)?;
        let mut keys = Vec::new();

        for entry in table.range(prefix..)? {
            let (key_guard, members) = entry?;
            let key = key_guard.value();
            if !key.starts_with(prefix) {
                break;
            }
            if !members.is_empty() {
                keys.push(key.to_string());
            }
        }

        Ok(keys)
    }
}
