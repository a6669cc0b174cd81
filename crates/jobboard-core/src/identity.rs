//! # Identity Newtypes
//!
//! Record identifiers are opaque strings assigned by the Gateway. Each record
//! kind gets its own newtype so a [`JobId`] cannot be passed where a
//! [`PostId`] is expected.
//!
//! Records created locally (through a draft) receive a random UUID v4,
//! rendered as a hyphenated lowercase string. Numeric identifiers in a
//! Gateway export are accepted and kept as their decimal text.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Identifier as it appears on the wire: text or an integer primary key.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

fn id_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Opaque identifier of a job posting. Routed as `/job/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(#[serde(deserialize_with = "id_text")] String);

impl JobId {
    /// Create a new random job identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an identifier issued by the Gateway.
    pub fn from_raw(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identifier of a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(#[serde(deserialize_with = "id_text")] String);

impl PostId {
    /// Create a new random post identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an identifier issued by the Gateway.
    pub fn from_raw(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique_uuids() {
        let a = JobId::new();
        let b = JobId::new();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn raw_ids_are_preserved() {
        let id = PostId::from_raw("42");
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn numeric_ids_deserialize_as_text() {
        let id: PostId = serde_json::from_str("17").unwrap();
        assert_eq!(id.as_str(), "17");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"17\"");
    }

    #[test]
    fn serde_is_transparent() {
        let id = JobId::from_raw("abc-123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc-123\"");
        let back: JobId = serde_json::from_str("\"abc-123\"").unwrap();
        assert_eq!(back, id);
    }
}
