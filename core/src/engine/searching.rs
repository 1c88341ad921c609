use crate::engine::Engine;
use crate::engine::ranking::rank;
use crate::store::SetStore;
use crate::types::{PostingKey, SearchResultEntry, ValidationError};
use serde::Serialize;
use tracing::debug;

/// Ranked hits of one search request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub ranked_result_list: Vec<SearchResultEntry>,
    /// Posting keys that could not be read. Non-empty means the ranking was
    /// computed from partial postings.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed_keys: Vec<PostingKey>,
}

impl SearchResults {
    pub fn is_partial(&self) -> bool {
        !self.failed_keys.is_empty()
    }
}

/// Search operations.
impl<S: SetStore> Engine<S> {
    /// Ranks the documents of `document_type` by how many terms of
    /// `search_term` they were indexed under.
    ///
    /// Store failures do not fail the search: the affected keys are reported in
    /// [`SearchResults::failed_keys`] and ranking uses whatever was fetched.
    pub fn search(
        &self,
        document_type: &str,
        search_term: &str,
    ) -> Result<SearchResults, ValidationError> {
        if search_term.trim().is_empty() {
            return Err(ValidationError::EmptySearchTerm);
        }
        let doc_type = self.settings.registry.validate(document_type)?;

        let terms = self.tokenize(search_term);
        if terms.is_empty() {
            return Ok(SearchResults::default());
        }

        let fetched = self.fetch_postings(&doc_type, &terms);
        let ranked_result_list = rank(&fetched.postings);

        debug!(
            %doc_type,
            terms = terms.len(),
            hits = ranked_result_list.len(),
            failed = fetched.failed_keys.len(),
            "search completed"
        );

        Ok(SearchResults {
            ranked_result_list,
            failed_keys: fetched.failed_keys,
        })
    }
}
