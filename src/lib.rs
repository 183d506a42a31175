#![doc = "Sentiment scoring and per-region aggregation for geotagged text records"]
pub mod aggregate;
pub mod analyze;
pub mod cli;
pub mod commands;
pub mod geometry;
pub mod io;
pub mod lexicon;
pub mod types;

#[doc(inline)]
pub use aggregate::{GroupedRecords, group_by_region, mean_sentiment};

#[doc(inline)]
pub use analyze::{score, score_records, tokenize};

#[doc(inline)]
pub use geometry::locate;

#[doc(inline)]
pub use lexicon::Lexicon;

#[doc(inline)]
pub use types::{Record, Region, RegionId, SentimentByRegion};
