//! Data structures backing the profile screen.
//!
//! The store, controller and command bridge all share these types so the
//! presentation layer sees one consistent contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub location: String,
    pub about: String,
    /// Opaque asset identifier; resolved by the presentation layer.
    pub photo_reference: String,
    /// Display order is meaningful. Duplicates are allowed.
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkillChangeKind {
    Insert,
    Remove,
    Move,
}

/// One record per successful skill mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillChangeEvent {
    pub event_id: Uuid,
    pub kind: SkillChangeKind,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub diff_summary: Vec<String>,
    pub hash_before: String,
    pub hash_after: String,
}

impl SkillChangeEvent {
    pub fn new(kind: SkillChangeKind, hash_before: String, hash_after: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            kind,
            timestamp: Utc::now(),
            diff_summary: Vec::new(),
            hash_before,
            hash_after,
        }
    }

    pub fn with_summary(mut self, line: impl Into<String>) -> Self {
        self.diff_summary.push(line.into());
        self
    }
}
