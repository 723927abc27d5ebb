//! Configuration management

use std::path::PathBuf;

use anyhow::{self, Context, Result};

use crate::defaults::{builtin_zone_clusters, DEFAULT_HUB};
use crate::services::zone_cluster::ZoneClusterSet;
use crate::types::Coordinates;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// NATS server URL
    pub nats_url: String,

    /// JSON file with zone clusters (built-in list when not set)
    pub zone_clusters_path: Option<PathBuf>,

    /// Hub (hospital) location routes are anchored on
    pub hub: Coordinates,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let nats_url = std::env::var("NATS_URL")
            .unwrap_or_else(|_| "nats://localhost:4222".to_string());

        let zone_clusters_path = std::env::var("ZONE_CLUSTERS_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let hub = match (std::env::var("HUB_LAT").ok(), std::env::var("HUB_LNG").ok()) {
            (None, None) => DEFAULT_HUB,
            (Some(lat), Some(lng)) => parse_hub(&lat, &lng)?,
            _ => anyhow::bail!("HUB_LAT and HUB_LNG must be set together"),
        };

        Ok(Self {
            nats_url,
            zone_clusters_path,
            hub,
        })
    }

    /// Load and validate the zone clusters. An invalid list is fatal.
    pub fn load_zone_clusters(&self) -> Result<ZoneClusterSet> {
        let set = match &self.zone_clusters_path {
            Some(path) => ZoneClusterSet::from_json_file(path)
                .with_context(|| format!("invalid zone cluster configuration in {}", path.display()))?,
            None => ZoneClusterSet::new(builtin_zone_clusters())
                .context("invalid built-in zone cluster configuration")?,
        };
        Ok(set)
    }
}

fn parse_hub(lat: &str, lng: &str) -> Result<Coordinates> {
    let lat: f64 = lat.trim().parse().context("HUB_LAT must be a number")?;
    let lng: f64 = lng.trim().parse().context("HUB_LNG must be a number")?;

    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        anyhow::bail!("HUB_LAT out of range: {}", lat);
    }
    if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
        anyhow::bail!("HUB_LNG out of range: {}", lng);
    }

    Ok(Coordinates::new(lat, lng))
}
