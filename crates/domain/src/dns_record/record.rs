use super::RecordType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata key holding the rule-language string applied to A record targets.
pub const TRANSFORM_METADATA_KEY: &str = "transform";

/// Metadata key holding the rule-language string of an import pseudo-record.
pub const TRANSFORM_TABLE_METADATA_KEY: &str = "transform_table";

pub const APEX: &str = "@";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Label relative to the zone apex, `@` for the apex itself.
    pub name: String,

    /// Absolute name without the trailing dot. Filled in by normalization.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name_fqdn: String,

    #[serde(rename = "type")]
    pub record_type: RecordType,

    pub target: String,

    #[serde(default)]
    pub ttl: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mx_preference: Option<u16>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl Record {
    pub fn new(name: impl Into<String>, record_type: RecordType, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            name_fqdn: String::new(),
            record_type,
            target: target.into(),
            ttl: 0,
            mx_preference: None,
            metadata: HashMap::new(),
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn is_apex(&self) -> bool {
        self.name == APEX
    }

    pub fn transform(&self) -> Option<&str> {
        self.metadata.get(TRANSFORM_METADATA_KEY).map(String::as_str)
    }

    /// Copy of this record with only the target replaced.
    pub fn with_target(&self, target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..self.clone()
        }
    }
}
