use crate::store::error::StoreError;
use crate::store::{SetStore, check_prefix};
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

/// Process-local set store. Every call takes the lock once, so each call is
/// atomic on its own.
#[derive(Debug, Default)]
pub struct MemorySetStore {
    sets: RwLock<BTreeMap<String, BTreeSet<String>>>,
}

impl MemorySetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of non-empty sets.
    pub fn len(&self) -> usize {
        self.sets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.read().is_empty()
    }
}

impl SetStore for MemorySetStore {
    fn add_member(&self, key: &str, member: &str) -> Result<u64, StoreError> {
        let mut sets = self.sets.write();
        let set = sets.entry(key.to_string()).or_default();
        set.insert(member.to_string());
        Ok(set.len() as u64)
    }

    fn list_members(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let sets = self.sets.read();
        Ok(sets
            .get(key)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default())
    }

    fn remove_member(&self, key: &str, member: &str) -> Result<u64, StoreError> {
        let mut sets = self.sets.write();
        let Some(set) = sets.get_mut(key) else {
            return Ok(0);
        };

        set.remove(member);
        let count = set.len() as u64;
        if count == 0 {
            sets.remove(key);
        }
        Ok(count)
    }

    fn list_keys_by_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        check_prefix(prefix)?;

        let sets = self.sets.read();
        Ok(sets
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect())
    }
}
