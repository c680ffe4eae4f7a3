use std::hash::Hash;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::metrics::{CountShare, count_shares};

/// One `(key, count)` row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRow<K> {
    pub key: K,
    pub count: usize,
}

/// Two-column count table.
///
/// Rows are ordered by descending count, then ascending key, so the table is
/// stable for identical inputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountTable<K> {
    rows: Vec<CountRow<K>>,
}

impl<K> CountTable<K>
where
    K: Clone + Eq + Hash + Ord,
{
    /// Count every key yielded by `keys`, seeding `expected` with zero rows.
    pub(crate) fn tally<I>(expected: impl IntoIterator<Item = K>, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut counts: IndexMap<K, usize> = expected.into_iter().map(|key| (key, 0)).collect();
        for key in keys {
            *counts.entry(key).or_insert(0) += 1;
        }
        let mut rows: Vec<CountRow<K>> = counts
            .into_iter()
            .map(|(key, count)| CountRow { key, count })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
        Self { rows }
    }

    /// Count for `key`, zero when absent.
    pub fn get(&self, key: &K) -> usize {
        self.rows
            .iter()
            .find(|row| &row.key == key)
            .map(|row| row.count)
            .unwrap_or(0)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.rows.iter().any(|row| &row.key == key)
    }

    /// Per-key fraction of the total, for pie rendering.
    pub fn shares(&self) -> Vec<CountShare<K>> {
        count_shares(self.rows.iter().map(|row| (row.key.clone(), row.count)))
    }
}

impl<K> CountTable<K> {
    pub fn rows(&self) -> &[CountRow<K>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.rows.iter().map(|row| row.count).sum()
    }
}

/// One `(primary, secondary, count)` row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedCountRow<A, B> {
    pub primary: A,
    pub secondary: B,
    pub count: usize,
}

/// Count table keyed by two columns, plus the size of the filtered subset it
/// was computed from.
///
/// Rows are ordered by `(primary, secondary)`; only observed pairs appear.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedCountTable<A, B> {
    rows: Vec<GroupedCountRow<A, B>>,
    filtered_rows: usize,
}

impl<A, B> GroupedCountTable<A, B>
where
    A: Clone + Eq + Hash + Ord,
    B: Clone + Eq + Hash + Ord,
{
    pub(crate) fn tally<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
    {
        let mut counts: IndexMap<(A, B), usize> = IndexMap::new();
        let mut filtered_rows = 0usize;
        for pair in pairs {
            filtered_rows += 1;
            *counts.entry(pair).or_insert(0) += 1;
        }
        counts.sort_keys();
        let rows = counts
            .into_iter()
            .map(|((primary, secondary), count)| GroupedCountRow {
                primary,
                secondary,
                count,
            })
            .collect();
        Self {
            rows,
            filtered_rows,
        }
    }

    /// Count for the `(primary, secondary)` pair, zero when absent.
    pub fn get(&self, primary: &A, secondary: &B) -> usize {
        self.rows
            .iter()
            .find(|row| &row.primary == primary && &row.secondary == secondary)
            .map(|row| row.count)
            .unwrap_or(0)
    }

    /// Counts for one primary key collapsed over the secondary column.
    pub fn primary_total(&self, primary: &A) -> usize {
        self.rows
            .iter()
            .filter(|row| &row.primary == primary)
            .map(|row| row.count)
            .sum()
    }
}

impl<A, B> GroupedCountTable<A, B> {
    pub fn rows(&self) -> &[GroupedCountRow<A, B>] {
        &self.rows
    }

    /// Size of the filtered subset the counts were computed from.
    pub fn filtered_rows(&self) -> usize {
        self.filtered_rows
    }

    pub fn total(&self) -> usize {
        self.rows.iter().map(|row| row.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
