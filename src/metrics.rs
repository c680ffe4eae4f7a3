use serde::{Deserialize, Serialize};

/// Share of one category within a count table, for pie rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountShare<K> {
    pub key: K,
    pub count: usize,
    pub share: f64,
}

/// Convert `(key, count)` pairs into shares of their total, preserving order.
///
/// An all-zero input yields zero shares rather than NaN.
pub fn count_shares<K, I>(counts: I) -> Vec<CountShare<K>>
where
    I: IntoIterator<Item = (K, usize)>,
{
    let counts: Vec<(K, usize)> = counts.into_iter().collect();
    let total: usize = counts.iter().map(|(_, count)| *count).sum();
    counts
        .into_iter()
        .map(|(key, count)| CountShare {
            key,
            count,
            share: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            },
        })
        .collect()
}
