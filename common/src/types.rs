//! Roster and matching types
//!
//! Shared between the matcher state machine and the CLI pipeline:
//! - MemberRecord: one roster row
//! - MatchTable: member name → resume file name
//! - MatchReport: final matcher output

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One roster row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub name: String,

    /// None when the cell is blank or the row is too short
    #[serde(default)]
    pub email: Option<String>,
}

impl MemberRecord {
    pub fn new(name: impl Into<String>, email: Option<String>) -> Self {
        Self {
            name: name.into(),
            email: email.filter(|e| !e.trim().is_empty()),
        }
    }
}

/// Member name → resume file name
pub type MatchTable = BTreeMap<String, String>;

/// Matcher output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    /// Roster name list, including names supplied during matching
    pub roster: Vec<String>,
    pub matches: MatchTable,
    /// Roster names without a resume, in roster order
    pub unmatched: Vec<String>,
}

/// Unmatched member with whatever contact info the roster has
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingContact {
    pub name: String,
    pub email: Option<String>,
}
