use ahash::AHashMap;
use rayon::prelude::*;

use crate::geometry::locate;
use crate::types::{Record, Region, RegionId, SentimentByRegion};

/// Records grouped by the region containing them. Transient: rebuilt on
/// every aggregation pass, and the order within a group is unspecified.
pub type GroupedRecords<'a> = AHashMap<RegionId, Vec<&'a Record>>;

/// Partition records among the regions that contain them.
///
/// The containment lookups are independent and read-only, so workers fold
/// their share of records into private partial groupings which are then
/// merged pairwise, so no lock ever guards the output. Records that no
/// region contains are dropped, not reported.
pub fn group_by_region<'a>(records: &'a [Record], regions: &[Region]) -> GroupedRecords<'a> {
    records
        .par_iter()
        .fold(GroupedRecords::new, |mut groups, record| {
            if let Some(region) = locate(record.location, regions) {
                groups.entry(region.id().clone()).or_default().push(record);
            }
            groups
        })
        .reduce(GroupedRecords::new, merge_groups)
}

/// Concatenate one partial grouping into another.
fn merge_groups<'a>(mut into: GroupedRecords<'a>, from: GroupedRecords<'a>) -> GroupedRecords<'a> {
    for (id, mut records) in from {
        into.entry(id).or_default().append(&mut records);
    }
    into
}

/// Mean of the defined sentiments per region.
///
/// `None` marks "no data": the region's records exist but none carries a
/// sentiment. That is deliberately distinct from a genuine mean of `0.0`.
/// The mean is order-independent, so the unspecified group order from the
/// parallel merge never shows in the result.
pub fn mean_sentiment(grouped: &GroupedRecords<'_>) -> SentimentByRegion {
    grouped
        .iter()
        .map(|(id, records)| {
            let scored: Vec<f64> = records.iter().filter_map(|record| record.sentiment).collect();
            let mean = (!scored.is_empty())
                .then(|| scored.iter().sum::<f64>() / scored.len() as f64);
            (id.clone(), mean)
        })
        .collect()
}
