//! Stop and booking types

use serde::{Deserialize, Serialize};

/// Geographic point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Coordinates as they arrive from upstream, where either half may be
/// missing or null
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCoordinates {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl RawCoordinates {
    /// Usable point only when both halves are present and finite
    pub fn resolve(&self) -> Option<Coordinates> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)).filter(Coordinates::is_finite),
            _ => None,
        }
    }
}

impl From<Coordinates> for RawCoordinates {
    fn from(c: Coordinates) -> Self {
        Self { lat: Some(c.lat), lng: Some(c.lng) }
    }
}

/// Travel direction relative to the hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the hub (shift start)
    Inbound,
    /// Away from the hub (shift finish)
    Outbound,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Inbound => "inbound",
            Direction::Outbound => "outbound",
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inbound" | "in" => Ok(Direction::Inbound),
            "outbound" | "out" => Ok(Direction::Outbound),
            other => Err(format!("unknown direction '{}', expected inbound or outbound", other)),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One end of a booking (where someone is collected or dropped)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(default)]
    pub coordinates: Option<RawCoordinates>,
    #[serde(default)]
    pub zone_name: Option<String>,
    /// Pickup-point text shown to drivers
    #[serde(default)]
    pub label: Option<String>,
}

/// Booking as supplied by the storage query layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    #[serde(default)]
    pub booking_ref: Option<String>,
    #[serde(default, rename = "pickupDateISO")]
    pub pickup_date_iso: Option<String>,
    #[serde(default)]
    pub on_off_duty_time: Option<String>,
    #[serde(default)]
    pub pickup: Option<Place>,
    #[serde(default)]
    pub destination: Option<Place>,
}

/// A single location tied to one booking and one shift instance.
///
/// Stops are values: every planning stage produces new stops rather than
/// mutating the ones it was given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_ref: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub zone_name: Option<String>,
    #[serde(default, rename = "pickupDateISO")]
    pub pickup_date_iso: Option<String>,
    #[serde(default)]
    pub on_off_duty_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Stop {
    /// Project a booking onto the side that matters for `direction`:
    /// the pickup for inbound travel, the destination for outbound.
    pub fn from_booking(booking: &BookingRecord, direction: Direction) -> Self {
        let place = match direction {
            Direction::Inbound => booking.pickup.as_ref(),
            Direction::Outbound => booking.destination.as_ref(),
        };

        Self {
            booking_ref: booking.booking_ref.clone(),
            coordinates: place.and_then(|p| p.coordinates).and_then(|c| c.resolve()),
            zone_name: place.and_then(|p| p.zone_name.clone()),
            pickup_date_iso: booking.pickup_date_iso.clone(),
            on_off_duty_time: booking.on_off_duty_time.clone(),
            label: place.and_then(|p| p.label.clone()),
        }
    }

    /// Coordinates usable for distance comparisons
    pub fn position(&self) -> Option<Coordinates> {
        self.coordinates.filter(Coordinates::is_finite)
    }

    /// Trimmed shift date, `None` when missing or blank
    pub fn date(&self) -> Option<&str> {
        non_blank(self.pickup_date_iso.as_deref())
    }

    /// Trimmed on/off duty time, `None` when missing or blank
    pub fn time(&self) -> Option<&str> {
        non_blank(self.on_off_duty_time.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking() -> BookingRecord {
        BookingRecord {
            booking_ref: Some("BK-1".to_string()),
            pickup_date_iso: Some("2025-12-24".to_string()),
            on_off_duty_time: Some("08:00".to_string()),
            pickup: Some(Place {
                coordinates: Some(Coordinates::new(50.40, -4.15).into()),
                zone_name: Some("Mutley".to_string()),
                label: Some("Main gate".to_string()),
            }),
            destination: Some(Place {
                coordinates: Some(Coordinates::new(50.4195, -4.1090).into()),
                zone_name: Some("Derriford".to_string()),
                label: None,
            }),
        }
    }

    #[test]
    fn test_inbound_projects_pickup_side() {
        let stop = Stop::from_booking(&booking(), Direction::Inbound);
        assert_eq!(stop.zone_name.as_deref(), Some("Mutley"));
        assert_eq!(stop.label.as_deref(), Some("Main gate"));
        assert_eq!(stop.coordinates, Some(Coordinates::new(50.40, -4.15)));
        assert_eq!(stop.booking_ref.as_deref(), Some("BK-1"));
    }

    #[test]
    fn test_outbound_projects_destination_side() {
        let stop = Stop::from_booking(&booking(), Direction::Outbound);
        assert_eq!(stop.zone_name.as_deref(), Some("Derriford"));
        assert!(stop.label.is_none());
    }

    #[test]
    fn test_missing_side_yields_bare_stop() {
        let mut record = booking();
        record.destination = None;
        let stop = Stop::from_booking(&record, Direction::Outbound);
        assert!(stop.coordinates.is_none());
        assert!(stop.zone_name.is_none());
        assert_eq!(stop.date(), Some("2025-12-24"));
    }

    #[test]
    fn test_non_finite_coordinates_are_dropped() {
        let mut record = booking();
        record.pickup.as_mut().unwrap().coordinates = Some(Coordinates::new(f64::NAN, -4.1).into());
        let stop = Stop::from_booking(&record, Direction::Inbound);
        assert!(stop.coordinates.is_none());
    }

    #[test]
    fn test_half_coordinates_deserialize_and_resolve_to_none() {
        let json = r#"{
            "pickupDateISO": "2025-12-24",
            "onOffDutyTime": "08:00",
            "pickup": { "coordinates": { "lat": 50.40 }, "zoneName": "Mutley" },
            "destination": { "coordinates": { "lat": 50.40, "lng": null } }
        }"#;
        let record: BookingRecord = serde_json::from_str(json).unwrap();

        let inbound = Stop::from_booking(&record, Direction::Inbound);
        assert!(inbound.coordinates.is_none());
        assert_eq!(inbound.zone_name.as_deref(), Some("Mutley"));

        let outbound = Stop::from_booking(&record, Direction::Outbound);
        assert!(outbound.coordinates.is_none());
    }

    #[test]
    fn test_raw_coordinates_resolve() {
        let full = RawCoordinates { lat: Some(50.4), lng: Some(-4.1) };
        assert_eq!(full.resolve(), Some(Coordinates::new(50.4, -4.1)));
        assert_eq!(RawCoordinates { lat: None, lng: Some(-4.1) }.resolve(), None);
        assert_eq!(RawCoordinates::default().resolve(), None);
        assert_eq!(RawCoordinates { lat: Some(f64::INFINITY), lng: Some(-4.1) }.resolve(), None);
    }

    #[test]
    fn test_blank_date_and_time_are_missing() {
        let stop = Stop {
            pickup_date_iso: Some("  ".to_string()),
            on_off_duty_time: Some(" 07:30 ".to_string()),
            ..Default::default()
        };
        assert_eq!(stop.date(), None);
        assert_eq!(stop.time(), Some("07:30"));
    }

    #[test]
    fn test_direction_parses_case_insensitively() {
        assert_eq!("Inbound".parse::<Direction>().unwrap(), Direction::Inbound);
        assert_eq!("OUT".parse::<Direction>().unwrap(), Direction::Outbound);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_booking_deserializes_camel_case() {
        let json = r#"{
            "bookingRef": "BK-9",
            "pickupDateISO": "2025-12-24",
            "onOffDutyTime": "19:30",
            "pickup": { "coordinates": { "lat": 50.38, "lng": -4.2 }, "zoneName": "Lipson" }
        }"#;
        let record: BookingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.pickup_date_iso.as_deref(), Some("2025-12-24"));
        assert_eq!(record.pickup.unwrap().zone_name.as_deref(), Some("Lipson"));
        assert!(record.destination.is_none());
    }
}
