use crate::types::posting_key::KEY_SEPARATOR;
use crate::types::validation::ValidationError;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Document categories compiled into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinDocumentType {
    /// Advertisement campaign.
    AdvertisementCampaign,
    /// Promotion campaign (coupons).
    Campaign,
}

impl BuiltinDocumentType {
    pub const ALL: [BuiltinDocumentType; 2] = [
        BuiltinDocumentType::AdvertisementCampaign,
        BuiltinDocumentType::Campaign,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BuiltinDocumentType::AdvertisementCampaign => "advcampaign",
            BuiltinDocumentType::Campaign => "campaign",
        }
    }
}

impl fmt::Display for BuiltinDocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document type that passed registry validation.
///
/// Values only come out of [`DocumentTypeRegistry::validate`], so every posting
/// key is built from a registered, lower-cased type name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentType(Arc<str>);

impl DocumentType {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DocumentType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for DocumentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed set of recognized document types. Unknown names are rejected, never
/// registered on the fly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTypeRegistry {
    types: BTreeMap<String, DocumentType>,
}

impl DocumentTypeRegistry {
    /// Registry holding every [`BuiltinDocumentType`].
    pub fn builtin() -> Self {
        let types = BuiltinDocumentType::ALL
            .iter()
            .map(|t| (t.as_str().to_string(), DocumentType(Arc::from(t.as_str()))))
            .collect();
        Self { types }
    }

    /// Registry built from an externally supplied list of type names.
    ///
    /// Names are trimmed and lower-cased. Blank names and names containing the
    /// key separator are rejected.
    pub fn new<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut types = BTreeMap::new();

        for name in names {
            let raw = name.as_ref();
            let normalized = raw.trim().to_lowercase();
            if normalized.is_empty() || normalized.contains(KEY_SEPARATOR) {
                return Err(ValidationError::UnusableDocumentTypeName(raw.to_string()));
            }

            types
                .entry(normalized.clone())
                .or_insert_with(|| DocumentType(Arc::from(normalized.as_str())));
        }

        Ok(Self { types })
    }

    /// Case-folds `raw` and returns the registered type it names.
    pub fn validate(&self, raw: &str) -> Result<DocumentType, ValidationError> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ValidationError::DocumentTypeRequired);
        }

        self.types
            .get(&normalized)
            .cloned()
            .ok_or_else(|| ValidationError::InvalidDocumentType(raw.to_string()))
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.validate(raw).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentType> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for DocumentTypeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
