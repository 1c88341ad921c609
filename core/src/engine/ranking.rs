use crate::engine::fetcher::Postings;
use crate::types::SearchResultEntry;
use std::collections::{BTreeSet, HashMap};

/// Ranks documents by how many query terms list them.
///
/// Entries are sorted by overlap count descending, then document ID ascending,
/// and numbered `1..=N` in that order. Equal counts still get distinct ranks.
pub fn rank(postings: &Postings) -> Vec<SearchResultEntry> {
    let mut counts: HashMap<i64, usize> = HashMap::new();

    for ids in postings.values() {
        let distinct: BTreeSet<i64> = ids.iter().copied().collect();
        for id in distinct {
            *counts.entry(id).or_default() += 1;
        }
    }

    let mut ranked: Vec<SearchResultEntry> = counts
        .into_iter()
        .map(|(document_id, overlap_count)| SearchResultEntry {
            document_id,
            overlap_count,
            rank: 0,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.overlap_count
            .cmp(&a.overlap_count)
            .then(a.document_id.cmp(&b.document_id))
    });

    for (i, entry) in ranked.iter_mut().enumerate() {
        entry.rank = i + 1;
    }

    ranked
}
