//! Word-level inverted index over small sets of typed documents.
//!
//! Document names are tokenized into terms; each term owns a set of document
//! IDs in a [`SetStore`](store::SetStore), addressed by document type and
//! term. Searches rank documents by how many query terms list them.

pub mod engine;
pub mod store;
pub mod types;

pub use engine::Engine;
pub use engine::error::{IndexError, PartialFailure, SuggestError};
pub use store::{MemorySetStore, RedbSetStore, SetStore, StoreError};
