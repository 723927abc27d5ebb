//! Smart Pack planning types

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{BookingRecord, Direction, Stop};

/// All stops sharing (date, time, cluster label): the unit of route planning
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub date: String,
    pub time: String,
    pub cluster_label: String,
    pub direction: Direction,
    /// Original zone names that fed this bucket (display only)
    pub source_zones: BTreeSet<String>,
    pub stops: Vec<Stop>,
}

impl Bucket {
    pub fn new(date: String, time: String, cluster_label: String, direction: Direction) -> Self {
        Self {
            date,
            time,
            cluster_label,
            direction,
            source_zones: BTreeSet::new(),
            stops: Vec::new(),
        }
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }
}

/// A sequenced bucket, ready for display or dispatch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteGroup {
    pub date: String,
    pub time: String,
    pub cluster_label: String,
    pub direction: Direction,
    /// Sorted ascending
    pub source_zones: Vec<String>,
    pub stop_count: usize,
    pub ordered_stops: Vec<Stop>,
    /// Haversine length of the walk including the hub leg (meters)
    pub route_distance_meters: f64,
}

/// Payload of `smartpack.plan`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartPackRequest {
    pub direction: Direction,
    /// Restrict planning to one shift date (`YYYY-MM-DD`)
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub bookings: Vec<BookingRecord>,
}

/// Result of Smart Pack planning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartPackResponse {
    pub direction: Direction,
    /// Stops considered after the date filter
    pub total_stops: usize,
    /// Stops left out of bucketing for lack of a date or time
    pub skipped_stops: usize,
    pub groups: Vec<RouteGroup>,
}
