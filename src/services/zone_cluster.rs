//! Zone clustering
//!
//! Maps a free-text zone name (as returned by the zoning service) onto the
//! label of the configured cluster it belongs to, so that adjacent zones can
//! share a vehicle. Unmatched zones form their own singleton cluster.
//!
//! The cluster list is validated once when it is loaded and is immutable
//! afterwards; callers share it by reference.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::defaults::UNKNOWN_ZONE_LABEL;
use crate::types::ZoneCluster;

/// Invalid zone cluster configuration
#[derive(Debug, Error)]
pub enum ZoneClusterError {
    #[error("zone cluster #{index} has an empty label")]
    EmptyLabel { index: usize },

    #[error("zone cluster '{label}' has an empty member alias")]
    EmptyAlias { label: String },

    #[error("zone alias '{alias}' is claimed by both '{first}' and '{second}'")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },

    #[error("failed to read zone cluster file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse zone cluster file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Validated, read-only list of zone clusters
#[derive(Debug, Clone)]
pub struct ZoneClusterSet {
    clusters: Vec<ZoneCluster>,
    /// Lowercased aliases per cluster, same order as `clusters`
    aliases: Vec<Vec<String>>,
}

impl ZoneClusterSet {
    /// Validate and build the set. Labels and aliases must be non-blank and
    /// no alias may belong to two clusters.
    pub fn new(clusters: Vec<ZoneCluster>) -> Result<Self, ZoneClusterError> {
        let mut owners: HashMap<String, usize> = HashMap::new();
        let mut aliases = Vec::with_capacity(clusters.len());

        for (index, cluster) in clusters.iter().enumerate() {
            if cluster.label.trim().is_empty() {
                return Err(ZoneClusterError::EmptyLabel { index });
            }

            let mut normalized = Vec::with_capacity(cluster.members.len());
            for member in &cluster.members {
                let alias = normalize(member);
                if alias.is_empty() {
                    return Err(ZoneClusterError::EmptyAlias {
                        label: cluster.label.clone(),
                    });
                }

                match owners.get(&alias) {
                    Some(&owner) if owner != index => {
                        return Err(ZoneClusterError::DuplicateAlias {
                            alias: member.trim().to_string(),
                            first: clusters[owner].label.clone(),
                            second: cluster.label.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        owners.insert(alias.clone(), index);
                    }
                }
                normalized.push(alias);
            }
            aliases.push(normalized);
        }

        Ok(Self { clusters, aliases })
    }

    /// Load a JSON array of `{ "label": ..., "members": [...] }` from disk
    pub fn from_json_file(path: &Path) -> Result<Self, ZoneClusterError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| ZoneClusterError::Read {
            path: display.clone(),
            source,
        })?;
        let clusters: Vec<ZoneCluster> = serde_json::from_str(&raw)
            .map_err(|source| ZoneClusterError::Parse { path: display, source })?;
        Self::new(clusters)
    }

    /// Cluster label for a zone name.
    ///
    /// Blank input maps to the unknown-zone label; a name matching no
    /// configured alias is its own cluster (trimmed, original case).
    pub fn cluster_label_for(&self, zone_name: &str) -> String {
        let trimmed = zone_name.trim();
        if trimmed.is_empty() {
            return UNKNOWN_ZONE_LABEL.to_string();
        }

        let needle = trimmed.to_lowercase();
        for (cluster, aliases) in self.clusters.iter().zip(&self.aliases) {
            if aliases.iter().any(|alias| *alias == needle) {
                return cluster.label.clone();
            }
        }

        trimmed.to_string()
    }

    pub fn clusters(&self) -> &[ZoneCluster] {
        &self.clusters
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.iter().map(Vec::len).sum()
    }
}

fn normalize(alias: &str) -> String {
    alias.trim().to_lowercase()
}
