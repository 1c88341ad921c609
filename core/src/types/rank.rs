use serde::{Deserialize, Serialize};

/// One ranked hit of a search request.
///
/// `document_id` is the raw decoded posting member. A member that could not be
/// decoded shows up as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultEntry {
    pub document_id: i64,
    pub overlap_count: usize,
    pub rank: usize,
}
