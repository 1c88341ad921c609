use nutype::nutype;
use std::collections::BTreeSet;

/// A single index term: lower-case ASCII letters and digits, never empty.
///
/// Terms are concatenated with a document type into a posting key, so the
/// alphabet never contains the key separator.
#[nutype(
    sanitize(lowercase),
    validate(
        not_empty,
        predicate = |s: &str| s.chars().all(|c| c.is_ascii_alphanumeric())
    ),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Term(String);

/// Deduplicated terms of one text field, iterated in lexicographic order.
pub type TermSet = BTreeSet<Term>;
