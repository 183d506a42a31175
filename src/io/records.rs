use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};

use crate::types::Record;

/// Load records from `path`: a single file, or a directory whose `*.txt`
/// files are read in name order.
///
/// Line format, tab-separated: `[lat, lon]  _  datetime  text`. Malformed
/// lines are skipped with a debug log; an unparseable datetime keeps the
/// record with no timestamp. The lat-first pair in the file is converted
/// to the crate's lon/lat `Coord` here and nowhere else.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    if path.is_dir() {
        let mut files: Vec<_> = fs::read_dir(path)
            .with_context(|| format!("Failed to read records directory: {}", path.display()))?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|file| file.extension().is_some_and(|ext| ext == "txt"))
            .collect();
        files.sort();
        for file in &files {
            read_records_file(file, &mut records)?;
        }
    } else {
        read_records_file(path, &mut records)?;
    }

    log::info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

fn read_records_file(path: &Path, records: &mut Vec<Record>) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read records file: {}", path.display()))?;

    for line in content.lines() {
        match parse_line(line) {
            Some(record) => records.push(record),
            None if line.trim().is_empty() => {}
            None => log::debug!("skipping malformed record line: {line:?}"),
        }
    }
    Ok(())
}

/// Parse one `[lat, lon]\t_\tdatetime\ttext` line.
fn parse_line(line: &str) -> Option<Record> {
    let mut parts = line.split('\t');
    let location = parts.next()?;
    let _ = parts.next()?; // unused middle column
    let datetime = parts.next()?;
    let text = parts.next()?.trim();

    let (lat, lon) = parse_point(location)?;
    let timestamp = parse_timestamp(datetime.trim());

    Some(Record::new(text, lon, lat, timestamp))
}

/// Parse a `[lat, lon]` pair. Record files store latitude first.
fn parse_point(field: &str) -> Option<(f64, f64)> {
    let inner = field.trim().trim_start_matches('[').trim_end_matches(']');
    let mut coords = inner.split(',');
    let lat = coords.next()?.trim().parse().ok()?;
    let lon = coords.next()?.trim().parse().ok()?;
    Some((lat, lon))
}

/// Best-effort timestamp parse; `None` on failure rather than rejecting
/// the record.
fn parse_timestamp(field: &str) -> Option<DateTime<Utc>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(field) {
        return Some(datetime.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(field, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .ok()
}
