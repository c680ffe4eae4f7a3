use std::collections::BTreeSet;

use tracing::debug;

use super::tables::GroupedCountTable;
use crate::data::{Dataset, Sentiment, TweetRecord};
use crate::types::{Airline, NegativeReason};

fn in_selection<'a>(
    dataset: &'a Dataset,
    airlines: &'a BTreeSet<Airline>,
) -> impl Iterator<Item = &'a TweetRecord> {
    dataset
        .iter()
        .filter(move |record| airlines.contains(&record.airline))
}

/// Tweets per `(airline, sentiment)` for the selected airlines.
///
/// Returns `None` when no airline is selected; the view is simply not shown.
pub fn airline_sentiment_breakdown(
    dataset: &Dataset,
    airlines: &BTreeSet<Airline>,
) -> Option<GroupedCountTable<Airline, Sentiment>> {
    if airlines.is_empty() {
        debug!("airline sentiment breakdown skipped: no airlines selected");
        return None;
    }
    Some(GroupedCountTable::tally(
        in_selection(dataset, airlines).map(|record| (record.airline.clone(), record.sentiment)),
    ))
}

/// Negative tweets per `(reason, airline)` for the selected airlines.
///
/// The filtered subset is negative rows of the selected airlines that carry a
/// reason. Returns `None` when no airline is selected.
pub fn negative_reasons_by_airline(
    dataset: &Dataset,
    airlines: &BTreeSet<Airline>,
) -> Option<GroupedCountTable<NegativeReason, Airline>> {
    if airlines.is_empty() {
        debug!("negative reason breakdown skipped: no airlines selected");
        return None;
    }
    Some(GroupedCountTable::tally(
        in_selection(dataset, airlines)
            .filter(|record| record.sentiment == Sentiment::Negative)
            .filter_map(|record| {
                record
                    .negative_reason
                    .as_ref()
                    .map(|reason| (reason.clone(), record.airline.clone()))
            }),
    ))
}
