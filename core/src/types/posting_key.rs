use crate::types::document_type::DocumentType;
use crate::types::term::Term;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separates the document type from the term inside a posting key.
pub const KEY_SEPARATOR: char = ':';

/// Namespace used by [`KeyScheme::Namespaced`].
pub const INVERTED_INDEX_NAMESPACE: &str = "elasthink:inverted:";

/// Naming convention of posting keys at the set-store boundary.
///
/// Writes, fetches and keyword suggestion all derive their keys from the same
/// scheme value, so they always agree on the prefix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyScheme {
    /// `type:term`
    Bare,
    /// `elasthink:inverted:type:term`
    #[default]
    Namespaced,
}

impl KeyScheme {
    fn namespace(self) -> &'static str {
        match self {
            KeyScheme::Bare => "",
            KeyScheme::Namespaced => INVERTED_INDEX_NAMESPACE,
        }
    }

    /// Everything before the term: namespace, type and separator.
    pub fn type_prefix(self, doc_type: &DocumentType) -> String {
        format!("{}{}{}", self.namespace(), doc_type, KEY_SEPARATOR)
    }

    pub fn posting_key(self, doc_type: &DocumentType, term: &Term) -> PostingKey {
        PostingKey(format!("{}{}", self.type_prefix(doc_type), term))
    }

    /// Prefix matching every posting key of `doc_type` whose term starts with
    /// `term_prefix`.
    pub fn term_prefix(self, doc_type: &DocumentType, term_prefix: &str) -> String {
        format!("{}{}", self.type_prefix(doc_type), term_prefix)
    }

    /// Recovers the bare term from a raw store key of `doc_type`.
    pub fn strip_type_prefix<'a>(self, doc_type: &DocumentType, key: &'a str) -> Option<&'a str> {
        key.strip_prefix(&self.type_prefix(doc_type))
    }
}

impl fmt::Display for KeyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyScheme::Bare => write!(f, "bare"),
            KeyScheme::Namespaced => write!(f, "namespaced"),
        }
    }
}

/// Address of one posting set in the set store. Never stored as a record of its
/// own.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PostingKey(String);

impl PostingKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PostingKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
