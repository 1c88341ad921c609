use nutype::nutype;

/// Caller-supplied identifier of an indexed document. Always positive.
#[nutype(
    validate(greater = 0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct DocumentId(i64);

impl DocumentId {
    /// The set member stored under each posting key for this document.
    pub fn to_member(self) -> String {
        self.into_inner().to_string()
    }
}
