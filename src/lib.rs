#![doc = include_str!("../README.md")]

/// Query parameter types.
pub mod config;
/// Centralized constants for columns, loading, and term extraction.
pub mod constants;
/// One-shot evaluation of every dashboard view.
pub mod dashboard;
/// Tweet record and dataset types.
pub mod data;
/// Reusable CLI runners shared by the bundled binaries.
pub mod example_apps;
/// Memoized dataset loading.
pub mod ingestion;
/// Share helpers for count tables.
pub mod metrics;
/// Random example tweet sampling.
pub mod sampler;
/// Dataset sources.
pub mod source;
/// Word-cloud stopword sets.
pub mod stopwords;
/// Shared type aliases.
pub mod types;
/// Tokenization helpers.
pub mod utils;
/// Derived dashboard views.
pub mod views;

mod errors;

pub use config::{DisplayKind, HourOfDay, QueryParameters};
pub use dashboard::{ChartTable, Dashboard, DashboardSnapshot, HourSection, TermCount};
pub use data::{Coordinates, Dataset, Sentiment, TweetRecord};
pub use errors::ViewError;
pub use ingestion::{DatasetCache, load_cached};
pub use sampler::{DeterministicRng, SentimentSampler};
pub use source::{CsvSource, CsvSourceConfig, DatasetSource, InMemorySource};
pub use stopwords::Stopwords;
pub use types::{Airline, NegativeReason, Token, TweetId};
pub use views::{
    CountRow, CountTable, GroupedCountRow, GroupedCountTable, HourSlice, HourWindow, MapPoint,
    TermFrequencies, airline_sentiment_breakdown, negative_reason_counts,
    negative_reasons_by_airline, sentiment_counts, term_frequencies, tweets_in_hour,
};
