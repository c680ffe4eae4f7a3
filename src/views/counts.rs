use super::tables::CountTable;
use crate::data::{Dataset, Sentiment};
use crate::types::NegativeReason;

/// Tweets per sentiment; always has exactly one row per `Sentiment`.
pub fn sentiment_counts(dataset: &Dataset) -> CountTable<Sentiment> {
    CountTable::tally(
        Sentiment::ALL,
        dataset.iter().map(|record| record.sentiment),
    )
}

/// Tweets per negative reason. Rows without a reason are not counted.
pub fn negative_reason_counts(dataset: &Dataset) -> CountTable<NegativeReason> {
    CountTable::tally(
        [],
        dataset
            .iter()
            .filter_map(|record| record.negative_reason.clone()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::fixtures::sample_dataset;

    #[test]
    fn sentiment_counts_cover_every_label_and_sum_to_len() {
        let dataset = sample_dataset();
        let counts = sentiment_counts(&dataset);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.get(&Sentiment::Negative), 4);
        assert_eq!(counts.get(&Sentiment::Positive), 2);
        assert_eq!(counts.get(&Sentiment::Neutral), 1);
        assert_eq!(counts.total(), dataset.len());
        assert_eq!(counts.rows()[0].key, Sentiment::Negative);
    }

    #[test]
    fn sentiment_counts_keep_zero_groups() {
        let counts = sentiment_counts(&Dataset::default());
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn negative_reason_counts_skip_rows_without_reason() {
        let dataset = sample_dataset();
        let counts = negative_reason_counts(&dataset);
        let with_reason = dataset
            .iter()
            .filter(|record| record.negative_reason.is_some())
            .count();
        assert_eq!(counts.total(), with_reason);
        assert_eq!(counts.get(&"Late Flight".to_string()), 2);
        assert_eq!(counts.len(), 3);
        assert!(!counts.contains_key(&String::new()));
        assert!(!counts.contains_key(&"unknown".to_string()));
    }
}
