#![allow(dead_code)]

use elasthink_core::types::{IndexSettings, StoreConfig};
use elasthink_core::{Engine, RedbSetStore};
use tempfile::{TempDir, tempdir};

pub fn open_store(temp: &TempDir) -> RedbSetStore {
    let config = StoreConfig {
        data_dir: temp.path().join("data"),
    };
    RedbSetStore::open(&config).unwrap()
}

pub fn create_test_engine(settings: IndexSettings) -> (Engine<RedbSetStore>, TempDir) {
    let temp = tempdir().unwrap();
    let engine = Engine::new(open_store(&temp), settings);
    (engine, temp)
}

pub fn ranked_ids(engine: &Engine<RedbSetStore>, doc_type: &str, query: &str) -> Vec<i64> {
    engine
        .search(doc_type, query)
        .unwrap()
        .ranked_result_list
        .iter()
        .map(|e| e.document_id)
        .collect()
}
