use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::dashboard::HOURS_PER_DAY;
use crate::data::Sentiment;
use crate::errors::ViewError;
use crate::types::Airline;

/// How a count table should be charted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayKind {
    #[default]
    Histogram,
    PieChart,
}

impl DisplayKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DisplayKind::Histogram => "histogram",
            DisplayKind::PieChart => "pie_chart",
        }
    }
}

impl fmt::Display for DisplayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayKind {
    type Err = ViewError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "histogram" => Ok(DisplayKind::Histogram),
            "piechart" | "pie" => Ok(DisplayKind::PieChart),
            _ => Err(ViewError::InvalidParameter(format!(
                "unknown display kind '{}'",
                raw.trim()
            ))),
        }
    }
}

/// Hour-of-day value guaranteed to be in `0..24`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HourOfDay(u8);

impl HourOfDay {
    pub fn new(hour: u8) -> Result<Self, ViewError> {
        if hour < HOURS_PER_DAY {
            Ok(Self(hour))
        } else {
            Err(ViewError::InvalidParameter(format!(
                "hour {hour} is outside 0-{}",
                HOURS_PER_DAY - 1
            )))
        }
    }

    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Start of the following hour, wrapping 23 to 0.
    pub const fn next(&self) -> u8 {
        (self.0 + 1) % HOURS_PER_DAY
    }
}

impl TryFrom<u8> for HourOfDay {
    type Error = ViewError;

    fn try_from(hour: u8) -> Result<Self, Self::Error> {
        Self::new(hour)
    }
}

impl<'de> Deserialize<'de> for HourOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = u8::deserialize(deserializer)?;
        HourOfDay::new(raw).map_err(serde::de::Error::custom)
    }
}

/// User selections for one dashboard refresh.
///
/// Rebuilt on every refresh and passed explicitly into each view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameters {
    /// Sentiment used for the random example tweet.
    pub sample_sentiment: Sentiment,
    /// Chart kind for sentiment counts.
    pub sentiment_display: DisplayKind,
    /// Hour used by the time/location filter.
    pub hour: HourOfDay,
    /// Airlines for the sentiment breakdown; empty means the view is skipped.
    pub airlines: BTreeSet<Airline>,
    /// Sentiment whose tweets feed the word cloud.
    pub word_cloud_sentiment: Sentiment,
    /// Chart kind for negative reason counts.
    pub reason_display: DisplayKind,
    /// Airlines for the negative-reason breakdown; empty means the view is skipped.
    pub reason_airlines: BTreeSet<Airline>,
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self {
            sample_sentiment: Sentiment::Positive,
            sentiment_display: DisplayKind::Histogram,
            hour: HourOfDay::default(),
            airlines: BTreeSet::new(),
            word_cloud_sentiment: Sentiment::Positive,
            reason_display: DisplayKind::Histogram,
            reason_airlines: BTreeSet::new(),
        }
    }
}

impl QueryParameters {
    pub fn with_sample_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sample_sentiment = sentiment;
        self
    }

    pub fn with_sentiment_display(mut self, display: DisplayKind) -> Self {
        self.sentiment_display = display;
        self
    }

    pub fn with_hour(mut self, hour: HourOfDay) -> Self {
        self.hour = hour;
        self
    }

    pub fn with_airlines<I, S>(mut self, airlines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Airline>,
    {
        self.airlines = airlines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_word_cloud_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.word_cloud_sentiment = sentiment;
        self
    }

    pub fn with_reason_display(mut self, display: DisplayKind) -> Self {
        self.reason_display = display;
        self
    }

    pub fn with_reason_airlines<I, S>(mut self, airlines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Airline>,
    {
        self.reason_airlines = airlines.into_iter().map(Into::into).collect();
        self
    }

    /// Reject selections that cannot be queried.
    ///
    /// `hour` is range-checked on construction; this covers the airline sets.
    pub fn validate(&self) -> Result<(), ViewError> {
        for airline in self.airlines.iter().chain(self.reason_airlines.iter()) {
            if airline.trim().is_empty() {
                return Err(ViewError::InvalidParameter(
                    "airline filter contains a blank name".to_string(),
                ));
            }
        }
        Ok(())
    }
}
