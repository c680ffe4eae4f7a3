use std::collections::BTreeSet;

use chrono::{FixedOffset, TimeZone};

use sentiment_views::{
    Coordinates, Dataset, HourOfDay, Sentiment, SentimentSampler, Stopwords, TweetRecord,
    airline_sentiment_breakdown, negative_reason_counts, negative_reasons_by_airline,
    sentiment_counts, term_frequencies, tweets_in_hour,
};

const AIRLINES: [&str; 6] = [
    "US Airways",
    "United",
    "American",
    "Southwest",
    "Delta",
    "Virgin America",
];
const REASONS: [&str; 4] = [
    "Late Flight",
    "Customer Service Issue",
    "Lost Luggage",
    "Cancelled Flight",
];

fn build_record(idx: usize) -> TweetRecord {
    let sentiment = match idx % 5 {
        0 | 3 => Sentiment::Negative,
        1 => Sentiment::Positive,
        _ => Sentiment::Neutral,
    };
    // Every seventh negative tweet has no reason recorded.
    let negative_reason = (sentiment == Sentiment::Negative && idx % 7 != 0)
        .then(|| REASONS[idx % REASONS.len()].to_string());
    let offset = FixedOffset::west_opt(if idx % 2 == 0 { 8 * 3600 } else { 5 * 3600 }).unwrap();
    let created_at = offset
        .with_ymd_and_hms(2015, 2, 17 + (idx % 7) as u32, (idx * 5 % 24) as u32, 15, 0)
        .unwrap();
    let coordinates = (idx % 3 == 0).then_some(Coordinates {
        latitude: 30.0 + idx as f64 * 0.01,
        longitude: -90.0 - idx as f64 * 0.01,
    });
    TweetRecord {
        id: idx.to_string(),
        text: format!(
            "@{} RT flight {} was {} http://t.co/{idx}",
            AIRLINES[idx % 6],
            idx % 4,
            sentiment
        ),
        sentiment,
        negative_reason,
        airline: AIRLINES[idx % AIRLINES.len()].to_string(),
        created_at,
        coordinates,
    }
}

fn build_dataset(len: usize) -> Dataset {
    Dataset::new((0..len).map(build_record).collect())
}

#[test]
fn sampled_text_belongs_to_requested_sentiment() {
    let dataset = build_dataset(120);
    let mut sampler = SentimentSampler::seeded(2024);
    for sentiment in Sentiment::ALL {
        for _ in 0..25 {
            let text = sampler.sample_text(&dataset, sentiment).unwrap();
            let row = dataset
                .iter()
                .find(|record| record.text == text)
                .expect("sampled text comes from the dataset");
            assert_eq!(row.sentiment, sentiment);
        }
    }
}

#[test]
fn sentiment_counts_sum_to_dataset_len() {
    let dataset = build_dataset(97);
    let counts = sentiment_counts(&dataset);
    assert_eq!(counts.len(), Sentiment::ALL.len());
    assert_eq!(counts.total(), dataset.len());
    for sentiment in Sentiment::ALL {
        assert_eq!(
            counts.get(&sentiment),
            dataset.with_sentiment(sentiment).count()
        );
    }
}

#[test]
fn hour_filter_matches_brute_force_for_every_hour() {
    let dataset = build_dataset(200);
    for value in 0..24u8 {
        let hour = HourOfDay::new(value).unwrap();
        let slice = tweets_in_hour(&dataset, hour);
        assert!(slice.rows.iter().all(|record| record.hour() == value));
        let expected = dataset.iter().filter(|record| record.hour() == value).count();
        assert_eq!(slice.count(), expected, "hour {value}");
        assert!(slice.map_points().len() <= slice.count());
    }
    let five = tweets_in_hour(&dataset, HourOfDay::new(5).unwrap());
    assert!(five.count() > 0);
}

#[test]
fn airline_breakdown_covers_exactly_the_filtered_subset() {
    let dataset = build_dataset(150);
    let choice: BTreeSet<String> = ["Delta", "United"].iter().map(|s| s.to_string()).collect();
    let table = airline_sentiment_breakdown(&dataset, &choice).unwrap();

    let subset: Vec<&TweetRecord> = dataset
        .iter()
        .filter(|record| choice.contains(&record.airline))
        .collect();
    assert!(subset.iter().all(|record| choice.contains(&record.airline)));
    assert!(table.rows().iter().all(|row| choice.contains(&row.primary)));
    assert_eq!(table.total(), subset.len());
    assert_eq!(table.filtered_rows(), subset.len());
}

#[test]
fn reason_breakdown_counts_only_negative_rows_with_reasons() {
    let dataset = build_dataset(150);
    let choice: BTreeSet<String> = ["American", "Southwest"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let table = negative_reasons_by_airline(&dataset, &choice).unwrap();
    let expected = dataset
        .iter()
        .filter(|record| choice.contains(&record.airline))
        .filter(|record| record.sentiment == Sentiment::Negative)
        .filter(|record| record.negative_reason.is_some())
        .count();
    assert_eq!(table.total(), expected);
    assert!(table.rows().iter().all(|row| choice.contains(&row.secondary)));
}

#[test]
fn negative_reason_counts_exclude_missing_reasons() {
    let dataset = build_dataset(140);
    let counts = negative_reason_counts(&dataset);
    let with_reason = dataset
        .iter()
        .filter(|record| record.negative_reason.is_some())
        .count();
    let negatives = dataset.with_sentiment(Sentiment::Negative).count();
    assert!(with_reason < negatives, "fixture should include reasonless negatives");
    assert_eq!(counts.total(), with_reason);
    assert!(counts.rows().iter().all(|row| REASONS.contains(&row.key.as_str())));
}

#[test]
fn term_frequencies_match_documented_example() {
    let created_at = FixedOffset::west_opt(8 * 3600)
        .unwrap()
        .with_ymd_and_hms(2015, 2, 24, 9, 0, 0)
        .unwrap();
    let records = ["@joe check http://x RT great flight", "great crew"]
        .iter()
        .enumerate()
        .map(|(idx, text)| TweetRecord {
            id: idx.to_string(),
            text: text.to_string(),
            sentiment: Sentiment::Positive,
            negative_reason: None,
            airline: "Delta".to_string(),
            created_at,
            coordinates: None,
        })
        .collect();
    let dataset = Dataset::new(records);
    let terms = term_frequencies(&dataset, Sentiment::Positive, &Stopwords::empty());

    let mut observed: Vec<(&str, usize)> = terms.iter().collect();
    observed.sort();
    assert_eq!(
        observed,
        vec![("check", 1), ("crew", 1), ("flight", 1), ("great", 2)]
    );
}

#[test]
fn deterministic_views_are_idempotent() {
    let dataset = build_dataset(80);
    let choice: BTreeSet<String> = AIRLINES.iter().map(|s| s.to_string()).collect();
    let hour = HourOfDay::new(10).unwrap();
    let stopwords = Stopwords::english();

    assert_eq!(sentiment_counts(&dataset), sentiment_counts(&dataset));
    assert_eq!(
        tweets_in_hour(&dataset, hour).rows,
        tweets_in_hour(&dataset, hour).rows
    );
    assert_eq!(
        airline_sentiment_breakdown(&dataset, &choice),
        airline_sentiment_breakdown(&dataset, &choice)
    );
    assert_eq!(
        negative_reasons_by_airline(&dataset, &choice),
        negative_reasons_by_airline(&dataset, &choice)
    );
    assert_eq!(negative_reason_counts(&dataset), negative_reason_counts(&dataset));
    assert_eq!(
        term_frequencies(&dataset, Sentiment::Neutral, &stopwords),
        term_frequencies(&dataset, Sentiment::Neutral, &stopwords)
    );
}

#[test]
fn word_cloud_input_never_contains_noise_tokens() {
    let dataset = build_dataset(60);
    for sentiment in Sentiment::ALL {
        let terms = term_frequencies(&dataset, sentiment, &Stopwords::english());
        for (token, _) in terms.iter() {
            assert!(!token.contains("http"));
            assert!(!token.starts_with('@'));
            assert_ne!(token, "RT");
            assert_ne!(token.to_lowercase(), "was");
        }
        assert!(terms.get("flight") > 0);
    }
}
