use serde::{Deserialize, Serialize};

use crate::dns_record::{Record, APEX};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Apex domain; a trailing dot is tolerated, see [`Zone::apex`].
    pub name: String,

    #[serde(default)]
    pub records: Vec<Record>,

    /// New apex suffix when the zone is being migrated; CNAME targets get re-rooted under it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to: Option<String>,
}

impl Zone {
    pub fn new(name: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            name: name.into(),
            records,
            migrate_to: None,
        }
    }

    pub fn with_migration(mut self, new_suffix: impl Into<String>) -> Self {
        self.migrate_to = Some(new_suffix.into());
        self
    }

    /// Apex name with any trailing dot stripped.
    pub fn apex(&self) -> &str {
        self.name.trim_end_matches('.')
    }

    /// Absolute form of a record label, without the trailing dot.
    pub fn fqdn(&self, label: &str) -> String {
        if label == APEX {
            self.apex().to_string()
        } else {
            format!("{}.{}", label, self.apex())
        }
    }

    /// Dot-terminated form of a host name target. Absolute targets are returned as-is.
    pub fn absolute_target(&self, target: &str) -> String {
        if target.ends_with('.') {
            target.to_string()
        } else {
            format!("{}.", self.fqdn(target))
        }
    }
}
