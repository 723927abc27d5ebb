//! Geographic calculations

use crate::types::Coordinates;

/// Earth radius in meters
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate great-circle (haversine) distance between two points in meters
pub fn haversine_distance(from: &Coordinates, to: &Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for near-antipodal points
    let a = a.min(1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Length of a walk through `points` in order (meters)
pub fn path_length(points: &[Coordinates]) -> f64 {
    points
        .windows(2)
        .map(|pair| haversine_distance(&pair[0], &pair[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_haversine_plymouth_exeter() {
        let plymouth = Coordinates { lat: 50.3755, lng: -4.1427 };
        let exeter = Coordinates { lat: 50.7184, lng: -3.5339 };

        let distance = haversine_distance(&plymouth, &exeter);

        // Plymouth to Exeter is approximately 58 km as the crow flies
        assert!((distance - 58_000.0).abs() < 3_000.0);
    }

    #[test]
    fn test_haversine_same_point() {
        let point = Coordinates { lat: 50.4195, lng: -4.1090 };
        let distance = haversine_distance(&point, &point);
        assert!(distance.abs() < 0.001);
    }

    #[test]
    fn test_haversine_one_degree_of_latitude() {
        let a = Coordinates { lat: 0.0, lng: 0.0 };
        let b = Coordinates { lat: 1.0, lng: 0.0 };
        let expected = EARTH_RADIUS_M * 1.0_f64.to_radians();
        assert!((haversine_distance(&a, &b) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_haversine_antipodal_points() {
        let a = Coordinates { lat: 0.0, lng: 0.0 };
        let b = Coordinates { lat: 0.0, lng: 180.0 };
        let half_circumference = EARTH_RADIUS_M * std::f64::consts::PI;
        assert!((haversine_distance(&a, &b) - half_circumference).abs() < 1.0);
    }

    #[test]
    fn test_path_length() {
        let points = vec![
            Coordinates { lat: 50.0, lng: -4.0 },
            Coordinates { lat: 50.1, lng: -4.0 },
            Coordinates { lat: 50.2, lng: -4.0 },
        ];
        let direct = haversine_distance(&points[0], &points[2]);
        assert!((path_length(&points) - direct).abs() < 1.0);
        assert_eq!(path_length(&points[..1]), 0.0);
        assert_eq!(path_length(&[]), 0.0);
    }

    proptest! {
        #[test]
        fn haversine_is_symmetric(
            lat1 in -90.0f64..90.0, lng1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lng2 in -180.0f64..180.0
        ) {
            let a = Coordinates { lat: lat1, lng: lng1 };
            let b = Coordinates { lat: lat2, lng: lng2 };
            prop_assert!((haversine_distance(&a, &b) - haversine_distance(&b, &a)).abs() < 1e-6);
        }

        #[test]
        fn haversine_is_non_negative_and_bounded(
            lat1 in -90.0f64..90.0, lng1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lng2 in -180.0f64..180.0
        ) {
            let d = haversine_distance(
                &Coordinates { lat: lat1, lng: lng1 },
                &Coordinates { lat: lat2, lng: lng2 },
            );
            prop_assert!(d >= 0.0);
            prop_assert!(d <= EARTH_RADIUS_M * std::f64::consts::PI + 1.0);
        }
    }
}
