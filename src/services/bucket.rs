//! Bucket aggregation
//!
//! Groups stops by (date, time, cluster label). Each bucket becomes one
//! candidate shared-vehicle route.

use std::collections::HashMap;

use crate::services::zone_cluster::ZoneClusterSet;
use crate::types::{Bucket, Direction, Stop};

/// Result of grouping a batch of stops
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// Buckets in no particular order
    pub buckets: Vec<Bucket>,
    /// Stops dropped for a missing date or time
    pub skipped: usize,
}

/// Group `stops` into buckets keyed by (date, time, cluster label).
///
/// Every stop with a date and a time lands in exactly one bucket; stops
/// missing either are counted in `skipped` and otherwise ignored.
pub fn aggregate(stops: Vec<Stop>, direction: Direction, clusters: &ZoneClusterSet) -> Aggregation {
    let mut index: HashMap<(String, String, String), usize> = HashMap::new();
    let mut buckets: Vec<Bucket> = Vec::new();
    let mut skipped = 0;

    for stop in stops {
        let (date, time) = match (stop.date(), stop.time()) {
            (Some(date), Some(time)) => (date.to_string(), time.to_string()),
            _ => {
                skipped += 1;
                continue;
            }
        };

        let zone = stop.zone_name.as_deref().unwrap_or("");
        let cluster_label = clusters.cluster_label_for(zone);
        let source_zone = match zone.trim() {
            "" => cluster_label.clone(),
            name => name.to_string(),
        };

        let key = (date, time, cluster_label);
        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                let (date, time, label) = key.clone();
                buckets.push(Bucket::new(date, time, label, direction));
                index.insert(key, buckets.len() - 1);
                buckets.len() - 1
            }
        };

        let bucket = &mut buckets[slot];
        bucket.source_zones.insert(source_zone);
        bucket.stops.push(stop);
    }

    Aggregation { buckets, skipped }
}
