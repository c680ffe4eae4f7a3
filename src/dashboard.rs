//! One-shot evaluation of every dashboard view.
//!
//! `Dashboard::snapshot` is the hand-off point to a presentation layer: it
//! takes explicit `QueryParameters`, runs each view independently, and returns
//! plain serializable data. Nothing here knows how the data is charted.

use std::sync::Arc;

use rand::RngCore;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::{DisplayKind, QueryParameters};
use crate::constants::dashboard::DEFAULT_TOP_TERMS;
use crate::data::{Dataset, Sentiment, TweetRecord};
use crate::errors::ViewError;
use crate::metrics::CountShare;
use crate::sampler::SentimentSampler;
use crate::stopwords::Stopwords;
use crate::types::{Airline, NegativeReason, Token};
use crate::views::{
    CountTable, GroupedCountTable, HourWindow, MapPoint, airline_sentiment_breakdown,
    negative_reason_counts, negative_reasons_by_airline, sentiment_counts, term_frequencies,
    tweets_in_hour,
};

/// Count table tagged with the chart kind the user picked.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartTable<K> {
    pub display: DisplayKind,
    pub table: CountTable<K>,
    /// Populated for pie charts only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares: Option<Vec<CountShare<K>>>,
}

impl<K> ChartTable<K>
where
    K: Clone + Eq + std::hash::Hash + Ord,
{
    fn new(display: DisplayKind, table: CountTable<K>) -> Self {
        let shares = match display {
            DisplayKind::PieChart => Some(table.shares()),
            DisplayKind::Histogram => None,
        };
        Self {
            display,
            table,
            shares,
        }
    }
}

/// Hour-of-day section: caption, map points, and raw matching rows.
#[derive(Clone, Debug, Serialize)]
pub struct HourSection<'a> {
    pub window: HourWindow,
    pub label: String,
    pub count: usize,
    pub points: Vec<MapPoint>,
    pub rows: Vec<&'a TweetRecord>,
}

/// One ranked word-cloud entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub token: Token,
    pub count: usize,
}

/// Every view computed for one set of parameters.
#[derive(Clone, Debug, Serialize)]
pub struct DashboardSnapshot<'a> {
    pub parameters: QueryParameters,
    /// `None` when the chosen sentiment has no tweets.
    pub sample: Option<&'a str>,
    pub sentiment_counts: ChartTable<Sentiment>,
    pub hour: HourSection<'a>,
    /// `None` when no airline is selected.
    pub airline_breakdown: Option<GroupedCountTable<Airline, Sentiment>>,
    pub word_cloud: Vec<TermCount>,
    pub negative_reasons: ChartTable<NegativeReason>,
    /// `None` when no airline is selected.
    pub reasons_by_airline: Option<GroupedCountTable<NegativeReason, Airline>>,
}

/// Dataset plus the fixed settings shared across refreshes.
#[derive(Clone, Debug)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    stopwords: Stopwords,
    top_terms: usize,
}

impl Dashboard {
    /// Dashboard over `dataset` with English stopwords.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            stopwords: Stopwords::english(),
            top_terms: DEFAULT_TOP_TERMS,
        }
    }

    pub fn with_stopwords(mut self, stopwords: Stopwords) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Cap the number of ranked word-cloud entries.
    pub fn with_top_terms(mut self, top_terms: usize) -> Self {
        self.top_terms = top_terms;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Evaluate every view for `params`.
    ///
    /// An empty sample selection becomes `sample: None`; invalid parameters
    /// are rejected before any view runs.
    pub fn snapshot<R: RngCore>(
        &self,
        params: &QueryParameters,
        sampler: &mut SentimentSampler<R>,
    ) -> Result<DashboardSnapshot<'_>, ViewError> {
        params.validate()?;
        let dataset = self.dataset.as_ref();

        let sample = match sampler.sample_text(dataset, params.sample_sentiment) {
            Ok(text) => Some(text),
            Err(err) if err.is_empty_result() => None,
            Err(err) => return Err(err),
        };

        let slice = tweets_in_hour(dataset, params.hour);
        let unlocated = slice.unlocated();
        let hour = HourSection {
            window: slice.window,
            label: slice.label(),
            count: slice.count(),
            points: slice.map_points(),
            rows: slice.rows,
        };
        if unlocated > 0 {
            warn!(
                hour = params.hour.get(),
                unlocated,
                "tweets without coordinates left off the map"
            );
        }

        let word_cloud = term_frequencies(dataset, params.word_cloud_sentiment, &self.stopwords)
            .top(self.top_terms)
            .into_iter()
            .map(|(token, count)| TermCount {
                token: token.to_string(),
                count,
            })
            .collect();

        let snapshot = DashboardSnapshot {
            parameters: params.clone(),
            sample,
            sentiment_counts: ChartTable::new(params.sentiment_display, sentiment_counts(dataset)),
            hour,
            airline_breakdown: airline_sentiment_breakdown(dataset, &params.airlines),
            word_cloud,
            negative_reasons: ChartTable::new(
                params.reason_display,
                negative_reason_counts(dataset),
            ),
            reasons_by_airline: negative_reasons_by_airline(dataset, &params.reason_airlines),
        };
        info!(
            records = dataset.len(),
            hour_matches = snapshot.hour.count,
            terms = snapshot.word_cloud.len(),
            "dashboard snapshot computed"
        );
        Ok(snapshot)
    }
}
