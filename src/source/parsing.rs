use chrono::{DateTime, FixedOffset, NaiveDateTime};

use crate::constants::loader::{TIMESTAMP_NAIVE, TIMESTAMP_WITH_OFFSET};
use crate::data::Coordinates;

/// Parse a tweet creation timestamp.
///
/// Accepts the dataset layout `2015-02-24 11:35:52 -0800`, RFC 3339
/// (`2015-02-24T11:35:52-08:00`), and offset-less `2015-02-24 11:35:52`, which
/// is read as UTC. The recorded offset is preserved. Returns `None` when no
/// layout matches.
pub fn parse_created_at(raw: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_str(trimmed, TIMESTAMP_WITH_OFFSET) {
        return Some(parsed);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_NAIVE) {
        return Some(naive.and_utc().fixed_offset());
    }
    None
}

/// Parse a `[lat, long]` coordinate cell.
///
/// Brackets are optional. Returns `None` for anything that is not two finite
/// numbers inside the valid latitude/longitude ranges.
pub fn parse_coordinate_pair(raw: &str) -> Option<Coordinates> {
    let inner = raw
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .trim();
    let mut parts = inner.split(',');
    let latitude = parts.next()?;
    let longitude = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    parse_coordinate_parts(latitude, longitude)
}

/// Parse separate latitude and longitude cells into a checked point.
pub fn parse_coordinate_parts(latitude: &str, longitude: &str) -> Option<Coordinates> {
    let latitude = latitude.trim().parse::<f64>().ok()?;
    let longitude = longitude.trim().parse::<f64>().ok()?;
    if !latitude.is_finite() || !longitude.is_finite() {
        return None;
    }
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return None;
    }
    Some(Coordinates {
        latitude,
        longitude,
    })
}
