use crate::engine::Engine;
use crate::store::SetStore;
use crate::types::{DocumentType, PostingKey, Term, TermSet};
use std::collections::BTreeMap;
use tracing::warn;

/// Decoded document IDs per query term.
pub type Postings = BTreeMap<Term, Vec<i64>>;

/// Outcome of a best-effort postings fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedPostings {
    pub postings: Postings,
    /// Keys whose members query failed. Their terms are absent from `postings`.
    pub failed_keys: Vec<PostingKey>,
}

impl<S: SetStore> Engine<S> {
    /// Fetches the posting list of every term in `terms`.
    ///
    /// A failing members query is recorded in `failed_keys` and the fetch moves
    /// on to the next term.
    pub fn fetch_postings(&self, doc_type: &DocumentType, terms: &TermSet) -> FetchedPostings {
        let mut fetched = FetchedPostings::default();

        for term in terms {
            let key = self.posting_key(doc_type, term);
            match self.store.list_members(key.as_str()) {
                Ok(members) => {
                    let ids = members
                        .iter()
                        .map(|member| decode_member(&key, member))
                        .collect();
                    fetched.postings.insert(term.clone(), ids);
                }
                Err(e) => {
                    warn!(%key, error = %e, "failed to get members of posting key");
                    fetched.failed_keys.push(key);
                }
            }
        }

        fetched
    }
}

/// Parses a stored member. Anything that isn't a 64-bit integer decodes as `0`.
fn decode_member(key: &PostingKey, member: &str) -> i64 {
    member.parse().unwrap_or_else(|_| {
        warn!(%key, member, "undecodable posting member, using 0");
        0
    })
}
