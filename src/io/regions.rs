use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::Value;

use crate::types::{Region, RegionId};

/// Load regions from a JSON object mapping region code to nested coordinate
/// arrays, in file order.
pub fn read_regions(path: &Path) -> Result<Vec<Region>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read regions file: {}", path.display()))?;

    let regions = parse_regions(&content)?;
    log::info!("loaded {} regions from {}", regions.len(), path.display());
    Ok(regions)
}

/// Parse the nested-array region encoding.
///
/// Each region value is a list of polygons. A polygon is either a single
/// shell ring given directly as `[[x, y], ...]`, or a list of rings with
/// the shell first and holes after. Coordinate pairs are
/// `[longitude, latitude]`. Open rings are closed; a ring with fewer than
/// three distinct vertices is dropped, and a region left with no valid
/// polygon is skipped with a warning.
pub fn parse_regions(json: &str) -> Result<Vec<Region>> {
    let root: Value = serde_json::from_str(json).context("Failed to parse region JSON")?;
    let Value::Object(entries) = root else {
        bail!("region JSON must be an object mapping region code to coordinates");
    };

    let mut regions = Vec::with_capacity(entries.len());
    for (code, coords) in &entries {
        match parse_shape(coords) {
            Some(shape) if !shape.0.is_empty() => {
                regions.push(Region::new(RegionId::new(code), shape));
            }
            _ => log::warn!("region {code}: no valid polygon geometry, skipping"),
        }
    }
    Ok(regions)
}

fn parse_shape(value: &Value) -> Option<MultiPolygon<f64>> {
    let polygons = value.as_array()?;
    Some(MultiPolygon(polygons.iter().filter_map(parse_polygon).collect()))
}

/// One polygon: either a bare shell ring or a shell-first list of rings.
fn parse_polygon(value: &Value) -> Option<Polygon<f64>> {
    let items = value.as_array()?;
    let first = items.first()?;

    let rings: Vec<LineString<f64>> = if first.get(0).is_some_and(Value::is_number) {
        // [[x, y], ...], a bare shell with no holes
        vec![parse_ring(items)?]
    } else {
        items
            .iter()
            .filter_map(|ring| parse_ring(ring.as_array()?))
            .collect()
    };

    let mut rings = rings.into_iter();
    let shell = rings.next()?;
    Some(Polygon::new(shell, rings.collect()))
}

/// One ring of `[x, y]` pairs; `None` when any pair is malformed or fewer
/// than three distinct vertices remain.
fn parse_ring(points: &[Value]) -> Option<LineString<f64>> {
    let mut coords = Vec::with_capacity(points.len());
    for point in points {
        let pair = point.as_array()?;
        let x = pair.first()?.as_f64()?;
        let y = pair.get(1)?.as_f64()?;
        coords.push(Coord { x, y });
    }

    let mut ring = LineString(coords);
    ring.close(); // no-op when the source already closed it
    (distinct_vertices(&ring) >= 3).then_some(ring)
}

/// Count pairwise-distinct vertices, ignoring the closing point.
fn distinct_vertices(ring: &LineString<f64>) -> usize {
    let open = &ring.0[..ring.0.len().saturating_sub(1)];
    let mut distinct: Vec<Coord<f64>> = Vec::new();
    for coord in open {
        if !distinct.contains(coord) {
            distinct.push(*coord);
        }
    }
    distinct.len()
}
