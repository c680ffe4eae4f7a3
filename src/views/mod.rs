//! Derived views over a loaded `Dataset`.
//!
//! Every function here is a pure function of its inputs: no I/O, no shared
//! state, and identical inputs always yield identical outputs.

/// Airline-filtered two-key breakdowns.
pub mod breakdown;
/// Single-key count tables.
pub mod counts;
/// Hour-of-day filtering for the location map.
pub mod hourly;
/// Count table containers handed to the presentation layer.
pub mod tables;
/// Word-cloud term frequencies.
pub mod terms;

pub use breakdown::{airline_sentiment_breakdown, negative_reasons_by_airline};
pub use counts::{negative_reason_counts, sentiment_counts};
pub use hourly::{HourSlice, HourWindow, MapPoint, tweets_in_hour};
pub use tables::{CountRow, CountTable, GroupedCountRow, GroupedCountTable};
pub use terms::{TermFrequencies, term_frequencies};
