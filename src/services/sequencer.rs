//! Route sequencing
//!
//! Orders the stops of one bucket into a driving sequence with a greedy
//! nearest-neighbour walk anchored on the hub:
//!
//! - inbound routes start at the stop furthest from the hub and keep
//!   extending to the nearest unplaced stop, ending near the hub;
//! - outbound routes start from the hub itself, so the first stop is the
//!   one nearest to the hub.
//!
//! Ties go to the stop seen first. Stops without usable coordinates never
//! take part in distance comparisons; they are appended after the walk in
//! their input order so no booking disappears from the route sheet.
//!
//! O(n²) per bucket.

use crate::services::geo::haversine_distance;
use crate::types::{Coordinates, Direction, Stop};

/// Return `stops` reordered into a driving sequence (a permutation of the input)
pub fn sequence(stops: Vec<Stop>, direction: Direction, hub: &Coordinates) -> Vec<Stop> {
    if stops.len() <= 1 {
        return stops;
    }

    let (placed, unplaced): (Vec<Stop>, Vec<Stop>) =
        stops.into_iter().partition(|s| s.position().is_some());

    let mut ordered = nearest_neighbour_walk(placed, direction, hub);
    ordered.extend(unplaced);
    ordered
}

/// Greedy walk over stops that all have coordinates
fn nearest_neighbour_walk(stops: Vec<Stop>, direction: Direction, hub: &Coordinates) -> Vec<Stop> {
    let n = stops.len();
    if n == 0 {
        return stops;
    }

    let points: Vec<Coordinates> = stops
        .iter()
        .map(|s| s.position().unwrap_or(*hub))
        .collect();

    let mut visited = vec![false; n];
    let mut order: Vec<usize> = Vec::with_capacity(n);

    let mut current = match direction {
        Direction::Inbound => {
            let seed = furthest_from(&points, hub);
            visited[seed] = true;
            order.push(seed);
            points[seed]
        }
        Direction::Outbound => *hub,
    };

    while order.len() < n {
        let mut best: Option<(usize, f64)> = None;
        for (i, point) in points.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let d = haversine_distance(&current, point);
            match best {
                Some((_, best_dist)) if d >= best_dist => {}
                _ => best = Some((i, d)),
            }
        }

        match best {
            Some((next, _)) => {
                visited[next] = true;
                order.push(next);
                current = points[next];
            }
            None => break,
        }
    }

    let mut slots: Vec<Option<Stop>> = stops.into_iter().map(Some).collect();
    order
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect()
}

/// Index of the point with the greatest distance from `hub`, first one on ties
fn furthest_from(points: &[Coordinates], hub: &Coordinates) -> usize {
    let mut best = 0;
    let mut best_dist = f64::NEG_INFINITY;
    for (i, point) in points.iter().enumerate() {
        let d = haversine_distance(hub, point);
        if d > best_dist {
            best_dist = d;
            best = i;
        }
    }
    best
}
