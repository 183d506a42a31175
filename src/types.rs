mod record;
mod region;

pub use record::Record;
pub use region::{Region, RegionId};

use ahash::AHashMap;

/// Mean sentiment per region, the engine's terminal output.
///
/// `None` means "no data" for that region: it received records, but none of
/// them carried a defined sentiment. This is distinct from a genuine mean
/// of `0.0` (neutral).
pub type SentimentByRegion = AHashMap<RegionId, Option<f64>>;
