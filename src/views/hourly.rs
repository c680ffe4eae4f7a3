use serde::Serialize;

use crate::config::HourOfDay;
use crate::data::{Dataset, TweetRecord};
use crate::types::TweetId;

/// Half-open hour window `[start, end)`; `end` wraps 23 to 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HourWindow {
    pub start: u8,
    pub end: u8,
}

impl From<HourOfDay> for HourWindow {
    fn from(hour: HourOfDay) -> Self {
        Self {
            start: hour.get(),
            end: hour.next(),
        }
    }
}

/// A located tweet ready for map plotting.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapPoint {
    pub id: TweetId,
    pub latitude: f64,
    pub longitude: f64,
}

/// Tweets created within one hour of the day.
#[derive(Clone, Debug, Serialize)]
pub struct HourSlice<'a> {
    pub window: HourWindow,
    /// Every matching row, located or not.
    pub rows: Vec<&'a TweetRecord>,
}

impl<'a> HourSlice<'a> {
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// Caption such as `12 tweets between 5:00 and 6:00`.
    pub fn label(&self) -> String {
        format!(
            "{} tweets between {}:00 and {}:00",
            self.count(),
            self.window.start,
            self.window.end
        )
    }

    /// Matching rows that carry coordinates. Rows without a location are
    /// left off the map but still appear in `rows` and `count`.
    pub fn map_points(&self) -> Vec<MapPoint> {
        self.rows
            .iter()
            .filter_map(|record| {
                record.coordinates.map(|coords| MapPoint {
                    id: record.id.clone(),
                    latitude: coords.latitude,
                    longitude: coords.longitude,
                })
            })
            .collect()
    }

    /// Matching rows without coordinates.
    pub fn unlocated(&self) -> usize {
        self.rows
            .iter()
            .filter(|record| record.coordinates.is_none())
            .count()
    }
}

/// Tweets whose wall-clock creation hour equals `hour`, on any date.
pub fn tweets_in_hour(dataset: &Dataset, hour: HourOfDay) -> HourSlice<'_> {
    let rows = dataset
        .iter()
        .filter(|record| record.hour() == hour.get())
        .collect();
    HourSlice {
        window: hour.into(),
        rows,
    }
}
