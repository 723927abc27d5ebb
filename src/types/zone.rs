//! Zone cluster configuration types

use serde::{Deserialize, Serialize};

/// A named group of zone aliases close enough to share one vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneCluster {
    /// Display name used in place of every member zone
    pub label: String,
    /// Zone names belonging to this cluster (matched case-insensitively)
    pub members: Vec<String>,
}

impl ZoneCluster {
    pub fn new(label: impl Into<String>, members: &[&str]) -> Self {
        Self {
            label: label.into(),
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }
}
