use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Number, Value};

use crate::types::SentimentByRegion;

/// Write mean sentiment per region as pretty JSON, `code -> number|null`,
/// with keys sorted for stable output.
pub fn write_results(path: &Path, results: &SentimentByRegion) -> Result<()> {
    let json = serde_json::to_string_pretty(&to_json(results))?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write results file: {}", path.display()))?;
    Ok(())
}

fn to_json(results: &SentimentByRegion) -> Value {
    let mut entries: Vec<_> = results.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut map = Map::with_capacity(entries.len());
    for (id, mean) in entries {
        let value = mean.and_then(Number::from_f64).map_or(Value::Null, Value::Number);
        map.insert(id.as_str().to_owned(), value);
    }
    Value::Object(map)
}
