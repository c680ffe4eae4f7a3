use indexmap::IndexMap;
use serde::Serialize;

use crate::data::{Dataset, Sentiment};
use crate::stopwords::Stopwords;
use crate::types::Token;
use crate::utils::content_tokens;

/// Token frequencies feeding a word cloud.
///
/// Tokens keep their original casing; iteration follows first appearance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TermFrequencies {
    counts: IndexMap<Token, usize>,
}

impl TermFrequencies {
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total token occurrences.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
    }

    /// The `n` most frequent tokens, ties broken by token.
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }
}

/// Word frequencies across all tweets labelled `sentiment`.
///
/// Links, mentions, and the `RT` marker are dropped before stopword removal;
/// stopword matching is case-insensitive.
pub fn term_frequencies(
    dataset: &Dataset,
    sentiment: Sentiment,
    stopwords: &Stopwords,
) -> TermFrequencies {
    let mut counts: IndexMap<Token, usize> = IndexMap::new();
    for record in dataset.with_sentiment(sentiment) {
        for token in content_tokens(&record.text) {
            if stopwords.contains(token) {
                continue;
            }
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }
    }
    TermFrequencies { counts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::fixtures::{sample_dataset, tweet};

    fn positive(texts: &[&str]) -> Dataset {
        Dataset::new(
            texts
                .iter()
                .enumerate()
                .map(|(idx, text)| {
                    tweet(
                        &idx.to_string(),
                        "Delta",
                        Sentiment::Positive,
                        None,
                        "2015-02-24T05:10:00-08:00",
                        text,
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn drops_links_mentions_and_retweet_marker() {
        let dataset = positive(&["@joe check http://x RT great flight", "great crew"]);
        let terms = term_frequencies(&dataset, Sentiment::Positive, &Stopwords::empty());
        let observed: Vec<(&str, usize)> = terms.iter().collect();
        assert_eq!(
            observed,
            vec![("check", 1), ("great", 2), ("flight", 1), ("crew", 1)]
        );
        assert_eq!(terms.get("RT"), 0);
        assert_eq!(terms.get("@joe"), 0);
    }

    #[test]
    fn stopwords_match_case_insensitively_but_keys_keep_case() {
        let dataset = positive(&["The flight was GREAT", "the Crew"]);
        let stopwords: Stopwords = ["the", "WAS"].into_iter().collect();
        let terms = term_frequencies(&dataset, Sentiment::Positive, &stopwords);
        assert_eq!(terms.get("The"), 0);
        assert_eq!(terms.get("the"), 0);
        assert_eq!(terms.get("was"), 0);
        assert_eq!(terms.get("GREAT"), 1);
        assert_eq!(terms.get("Crew"), 1);
        assert_eq!(terms.len(), 3);
    }

    #[test]
    fn only_matching_sentiment_contributes() {
        let dataset = sample_dataset();
        let terms = term_frequencies(&dataset, Sentiment::Negative, &Stopwords::empty());
        assert_eq!(terms.get("late"), 3);
        assert_eq!(terms.get("crew"), 0);
        assert_eq!(terms.total(), 7);
    }

    #[test]
    fn top_ranks_by_count_then_token() {
        let dataset = positive(&["b a b c a b"]);
        let terms = term_frequencies(&dataset, Sentiment::Positive, &Stopwords::empty());
        assert_eq!(terms.top(2), vec![("b", 3), ("a", 2)]);
        assert_eq!(terms.top(10).len(), 3);
    }

    #[test]
    fn repeated_extraction_is_identical() {
        let dataset = sample_dataset();
        let stopwords = Stopwords::english();
        let a = term_frequencies(&dataset, Sentiment::Negative, &stopwords);
        let b = term_frequencies(&dataset, Sentiment::Negative, &stopwords);
        assert_eq!(a, b);
    }
}
