use rand::RngCore;
use rand::seq::IndexedRandom;
use tracing::warn;

use crate::data::{Dataset, Sentiment, TweetRecord};
use crate::errors::ViewError;

#[derive(Debug, Clone)]
/// Small deterministic RNG used for reproducible example sampling.
pub struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64_internal(&mut self) -> u64 {
        let mut z = self.state.wrapping_add(0x9E3779B97F4A7C15);
        self.state = z;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }
}

impl RngCore for DeterministicRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64_internal() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u64_internal()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64_internal().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Draws example tweets for a chosen sentiment.
///
/// The RNG is injected so tests and reproducible runs can seed it.
#[derive(Debug, Clone)]
pub struct SentimentSampler<R = DeterministicRng> {
    rng: R,
}

impl SentimentSampler<DeterministicRng> {
    /// Sampler with a fixed seed; identical seeds yield identical draws.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(DeterministicRng::new(seed))
    }

    /// Sampler seeded from the thread-local entropy source.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::rng().next_u64())
    }
}

impl<R: RngCore> SentimentSampler<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Uniformly pick one tweet labelled `sentiment`.
    pub fn sample_record<'a>(
        &mut self,
        dataset: &'a Dataset,
        sentiment: Sentiment,
    ) -> Result<&'a TweetRecord, ViewError> {
        let pool: Vec<&TweetRecord> = dataset.with_sentiment(sentiment).collect();
        pool.choose(&mut self.rng)
            .copied()
            .ok_or_else(|| empty_sentiment(sentiment))
    }

    /// Text of one uniformly chosen tweet labelled `sentiment`.
    pub fn sample_text<'a>(
        &mut self,
        dataset: &'a Dataset,
        sentiment: Sentiment,
    ) -> Result<&'a str, ViewError> {
        self.sample_record(dataset, sentiment)
            .map(|record| record.text.as_str())
    }

    /// Up to `count` distinct tweets labelled `sentiment`, in draw order.
    ///
    /// Returns fewer than `count` when the sentiment has fewer rows, and
    /// `EmptyResult` when it has none.
    pub fn sample_texts<'a>(
        &mut self,
        dataset: &'a Dataset,
        sentiment: Sentiment,
        count: usize,
    ) -> Result<Vec<&'a str>, ViewError> {
        let pool: Vec<&TweetRecord> = dataset.with_sentiment(sentiment).collect();
        if pool.is_empty() {
            return Err(empty_sentiment(sentiment));
        }
        let amount = count.min(pool.len());
        Ok(rand::seq::index::sample(&mut self.rng, pool.len(), amount)
            .into_iter()
            .map(|idx| pool[idx].text.as_str())
            .collect())
    }
}

fn empty_sentiment(sentiment: Sentiment) -> ViewError {
    warn!(sentiment = sentiment.as_str(), "no tweets to sample");
    ViewError::EmptyResult(format!("no {sentiment} tweets to sample"))
}
