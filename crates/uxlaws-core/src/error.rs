//! Error types.
//!
//! `KnowledgeError` covers malformed tables and is only raised while building a
//! [`Knowledge`](crate::Knowledge). The `Unknown*` types are ordinary lookup
//! misses: they carry the valid identifiers so callers can render a listing.

/// A static table failed to parse or violated a cross-table reference.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("failed to parse {table} table: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate {kind} identifier '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("law '{law}' references unknown related law '{related}'")]
    DanglingRelatedLaw { law: String, related: String },

    #[error("law '{law}' belongs to category '{category}' which has no category entry")]
    MissingCategory { law: String, category: String },

    #[error("platform '{platform}' has an invalid detection signature '{signature}': {source}")]
    InvalidSignature {
        platform: String,
        signature: String,
        #[source]
        source: regex::Error,
    },

    #[error("platform '{0}' has no category")]
    UncategorizedPlatform(String),

    #[error("platform table is missing required platform '{0}'")]
    MissingPlatform(&'static str),

    #[error("override for law '{law}' on platform '{platform}' references an unknown {kind}")]
    DanglingOverride {
        law: String,
        platform: String,
        kind: &'static str,
    },

    #[error("checklist '{component}' references unknown {kind} '{id}'")]
    DanglingChecklistRef {
        component: String,
        kind: &'static str,
        id: String,
    },
}

/// Requested law identifier is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown law '{requested}'")]
pub struct UnknownLaw {
    pub requested: String,
    pub available: Vec<String>,
}

/// Requested component type has no checklist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown component type '{requested}'")]
pub struct UnknownComponent {
    pub requested: String,
    pub available: Vec<String>,
}

/// Resource URI does not address any document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("resource not found: {uri}")]
pub struct UnknownResource {
    pub uri: String,
}
