use chrono::{DateTime, Utc};
use geo::Coord;

/// A single geotagged text record, the pipeline's unit of work.
///
/// `location` follows the crate-wide axis convention: `x` is longitude,
/// `y` is latitude. Sources that store latitude first convert at the
/// parsing boundary, never downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Raw text as supplied by the source.
    pub text: String,

    /// Geographic point (x = longitude, y = latitude).
    pub location: Coord<f64>,

    /// Posting time, if the source supplied a parseable one.
    pub timestamp: Option<DateTime<Utc>>,

    /// Average sentiment, written exactly once by the scoring pass.
    /// `None` after scoring means no lexicon phrase matched the text.
    pub sentiment: Option<f64>,
}

impl Record {
    /// Create an unscored record at (`lon`, `lat`).
    pub fn new(
        text: impl Into<String>,
        lon: f64,
        lat: f64,
        timestamp: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            text: text.into(),
            location: Coord { x: lon, y: lat },
            timestamp,
            sentiment: None,
        }
    }
}
