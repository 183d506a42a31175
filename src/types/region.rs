use std::fmt;
use std::sync::Arc;

use geo::{BoundingRect, Coord, MultiPolygon, Rect};

use crate::geometry::multi_polygon_contains;

/// Stable region identifier, e.g. a postal code like "CA".
/// Keeps one owned copy of the text; clones are cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(Arc<str>);

impl RegionId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    #[inline] pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A named geographic area: one or more polygons, each a shell ring plus
/// zero or more hole rings. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Region {
    id: RegionId,
    shape: MultiPolygon<f64>,
    /// Axis-aligned bounds of the whole shape, used to reject far-away
    /// points before any ring test. `None` for an empty shape.
    bounds: Option<Rect<f64>>,
}

impl Region {
    /// Build a region, precomputing its bounding rect.
    pub fn new(id: RegionId, shape: MultiPolygon<f64>) -> Self {
        let bounds = shape.bounding_rect();
        Self { id, shape, bounds }
    }

    #[inline] pub fn id(&self) -> &RegionId { &self.id }

    #[inline] pub fn shape(&self) -> &MultiPolygon<f64> { &self.shape }

    /// Boundary-inclusive containment test against the region's shape.
    ///
    /// `point` uses the crate-wide lon/lat (`x`/`y`) convention. An empty
    /// shape contains nothing.
    pub fn contains(&self, point: Coord<f64>) -> bool {
        let Some(bounds) = self.bounds else {
            return false;
        };
        // The prefilter must be inclusive so that points exactly on the
        // outermost ring edges still reach the full test.
        if point.x < bounds.min().x
            || point.x > bounds.max().x
            || point.y < bounds.min().y
            || point.y > bounds.max().y
        {
            return false;
        }
        multi_polygon_contains(&self.shape, point)
    }
}
