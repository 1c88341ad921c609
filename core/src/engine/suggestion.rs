use crate::engine::Engine;
use crate::engine::error::SuggestError;
use crate::store::SetStore;
use crate::types::ValidationError;
use tracing::warn;

/// Suggestion operations.
impl<S: SetStore> Engine<S> {
    /// Returns every indexed term of `document_type` starting with `prefix`,
    /// sorted lexicographically. No match is an empty list, not an error.
    pub fn suggest_keywords(
        &self,
        document_type: &str,
        prefix: &str,
    ) -> Result<Vec<String>, SuggestError> {
        if prefix.trim().is_empty() {
            return Err(ValidationError::EmptyPrefix.into());
        }
        let doc_type = self.settings.registry.validate(document_type)?;

        let scheme = self.settings.key_scheme;
        let scan_prefix = scheme.term_prefix(&doc_type, &prefix.trim().to_lowercase());

        let raw_keys = self
            .store
            .list_keys_by_prefix(&scan_prefix)
            .inspect_err(|e| warn!(prefix = %scan_prefix, error = %e, "failed to list keys"))?;

        let mut keywords: Vec<String> = raw_keys
            .iter()
            .filter_map(|key| scheme.strip_type_prefix(&doc_type, key))
            .map(str::to_string)
            .collect();
        keywords.sort();

        Ok(keywords)
    }
}
