//! Smart Pack planning pipeline
//!
//! bookings → stops (side picked by direction) → date filter → buckets
//! → sequenced route groups sorted by (date, time, cluster label).

use crate::services::bucket::aggregate;
use crate::services::geo::{haversine_distance, path_length};
use crate::services::sequencer::sequence;
use crate::services::zone_cluster::ZoneClusterSet;
use crate::types::{
    Bucket, Coordinates, Direction, RouteGroup, SmartPackRequest, SmartPackResponse, Stop,
};

/// Planner holding the immutable cluster configuration and hub location
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    clusters: ZoneClusterSet,
    hub: Coordinates,
}

impl RoutePlanner {
    pub fn new(clusters: ZoneClusterSet, hub: Coordinates) -> Self {
        Self { clusters, hub }
    }

    pub fn clusters(&self) -> &ZoneClusterSet {
        &self.clusters
    }

    pub fn hub(&self) -> Coordinates {
        self.hub
    }

    /// Run the whole pipeline for one request
    pub fn plan(&self, request: &SmartPackRequest) -> SmartPackResponse {
        let stops: Vec<Stop> = request
            .bookings
            .iter()
            .map(|b| Stop::from_booking(b, request.direction))
            .collect();
        let stops = filter_by_date(stops, request.date.as_deref());
        let total_stops = stops.len();

        let aggregation = aggregate(stops, request.direction, &self.clusters);
        let groups = finalize(aggregation.buckets, &self.hub);

        SmartPackResponse {
            direction: request.direction,
            total_stops,
            skipped_stops: aggregation.skipped,
            groups,
        }
    }
}

/// Keep only stops on `date`; `None` or a blank date keeps everything
pub fn filter_by_date(stops: Vec<Stop>, date: Option<&str>) -> Vec<Stop> {
    match date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(date) => stops.into_iter().filter(|s| s.date() == Some(date)).collect(),
        None => stops,
    }
}

/// Sequence every bucket and sort the groups by (date, time, cluster label)
pub fn finalize(buckets: Vec<Bucket>, hub: &Coordinates) -> Vec<RouteGroup> {
    let mut groups: Vec<RouteGroup> = buckets
        .into_iter()
        .map(|bucket| {
            let stop_count = bucket.stop_count();
            let ordered_stops = sequence(bucket.stops, bucket.direction, hub);
            let route_distance_meters = route_distance(&ordered_stops, bucket.direction, hub);

            RouteGroup {
                date: bucket.date,
                time: bucket.time,
                cluster_label: bucket.cluster_label,
                direction: bucket.direction,
                source_zones: bucket.source_zones.into_iter().collect(),
                stop_count,
                ordered_stops,
                route_distance_meters,
            }
        })
        .collect();

    groups.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.time.cmp(&b.time))
            .then_with(|| a.cluster_label.cmp(&b.cluster_label))
    });

    groups
}

/// Length of the ordered walk plus the hub leg. Stops without coordinates
/// are skipped.
pub fn route_distance(ordered: &[Stop], direction: Direction, hub: &Coordinates) -> f64 {
    let points: Vec<Coordinates> = ordered.iter().filter_map(Stop::position).collect();
    let hub_leg = match direction {
        Direction::Inbound => points.last(),
        Direction::Outbound => points.first(),
    }
    .map(|p| haversine_distance(p, hub))
    .unwrap_or(0.0);

    path_length(&points) + hub_leg
}
