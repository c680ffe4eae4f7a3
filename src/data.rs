use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::ViewError;

pub use crate::types::{Airline, NegativeReason, TweetId};

/// Sentiment label attached to every tweet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// All sentiments in display order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Lowercase label as stored in the dataset.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = ViewError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "neutral" => Ok(Sentiment::Neutral),
            "negative" => Ok(Sentiment::Negative),
            other => Err(ViewError::InvalidParameter(format!(
                "unknown sentiment '{other}'"
            ))),
        }
    }
}

/// Geographic point attached to a tweet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One tweet row, immutable after load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TweetRecord {
    /// `tweet_id` when the source provides one, otherwise a positional id.
    pub id: TweetId,
    pub text: String,
    pub sentiment: Sentiment,
    /// Only populated for negative tweets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_reason: Option<NegativeReason>,
    pub airline: Airline,
    /// Creation time in the offset the source recorded it with.
    pub created_at: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl TweetRecord {
    /// Wall-clock hour (0-23) of `created_at`.
    pub fn hour(&self) -> u8 {
        self.created_at.hour() as u8
    }
}

/// Immutable in-memory table of tweets.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<TweetRecord>,
}

impl Dataset {
    pub fn new(records: Vec<TweetRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TweetRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TweetRecord> {
        self.records.iter()
    }

    /// Rows labelled with `sentiment`.
    pub fn with_sentiment(&self, sentiment: Sentiment) -> impl Iterator<Item = &TweetRecord> {
        self.records
            .iter()
            .filter(move |record| record.sentiment == sentiment)
    }

    /// Distinct airline names, sorted.
    pub fn airlines(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .map(|record| record.airline.as_str())
            .collect()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a TweetRecord;
    type IntoIter = std::slice::Iter<'a, TweetRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
