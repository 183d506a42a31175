mod contains;

pub use contains::{RingPosition, multi_polygon_contains, polygon_contains, ring_position};

use geo::Coord;

use crate::types::Region;

/// First region in `regions` whose shape contains `point`, or `None`.
///
/// Order is the tie-break: when shapes overlap (shared borders, sloppy
/// source data), the earliest region in the caller-supplied slice wins.
/// That choice is positional, not geometric: it is not the nearest or
/// smallest containing region. A point no region contains is simply
/// unlocated, never an error.
pub fn locate<'a>(point: Coord<f64>, regions: &'a [Region]) -> Option<&'a Region> {
    regions.iter().find(|region| region.contains(point))
}
