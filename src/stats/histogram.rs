//! Value and frequency distributions.

use serde::{Deserialize, Serialize};

/// How a [`Histogram`]'s buckets were chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistogramType {
    /// Equal-width buckets over the value range.
    #[default]
    Standard,

    /// Equal-mass buckets (quantile boundaries).
    Quantiles,
}

/// One bucket of a value histogram.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bucket {
    /// Inclusive lower bound of the bucket.
    pub low_value: f64,

    /// Exclusive upper bound (inclusive for the last bucket).
    pub high_value: f64,

    /// Number of values in the bucket. May be fractional for weighted or
    /// sampled statistics.
    pub sample_count: f64,
}

impl Bucket {
    /// Create a bucket over `[low_value, high_value)` holding `sample_count`
    /// values.
    pub fn new(low_value: f64, high_value: f64, sample_count: f64) -> Self {
        Self {
            low_value,
            high_value,
            sample_count,
        }
    }
}

/// A histogram over numeric values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Histogram {
    /// Buckets in ascending value order.
    pub buckets: Vec<Bucket>,

    /// Number of NaN values excluded from the buckets.
    pub num_nan: u64,

    /// Bucketing scheme.
    pub histogram_type: HistogramType,
}

impl Histogram {
    /// Create an equal-width histogram from buckets.
    pub fn standard(buckets: Vec<Bucket>) -> Self {
        Self {
            buckets,
            num_nan: 0,
            histogram_type: HistogramType::Standard,
        }
    }

    /// Create a quantile histogram from buckets.
    pub fn quantiles(buckets: Vec<Bucket>) -> Self {
        Self {
            buckets,
            num_nan: 0,
            histogram_type: HistogramType::Quantiles,
        }
    }

    /// Set the NaN count.
    pub fn with_num_nan(mut self, num_nan: u64) -> Self {
        self.num_nan = num_nan;
        self
    }

    /// Total sample count across all buckets (excludes NaNs).
    pub fn total_count(&self) -> f64 {
        self.buckets.iter().map(|b| b.sample_count).sum()
    }
}

/// One bucket of a [`RankHistogram`]: a distinct value and its frequency.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankBucket {
    /// Lowest rank (by descending frequency) covered by this bucket.
    pub low_rank: u64,

    /// Highest rank covered by this bucket.
    pub high_rank: u64,

    /// The value itself.
    pub label: String,

    /// Number of occurrences. May be fractional for weighted statistics.
    pub sample_count: f64,
}

impl RankBucket {
    /// Create a bucket for `label` with the given frequency.
    pub fn new(label: impl Into<String>, sample_count: f64) -> Self {
        Self {
            low_rank: 0,
            high_rank: 0,
            label: label.into(),
            sample_count,
        }
    }

    /// Set the rank range covered by this bucket.
    pub fn with_ranks(mut self, low_rank: u64, high_rank: u64) -> Self {
        self.low_rank = low_rank;
        self.high_rank = high_rank;
        self
    }
}

/// A frequency histogram over distinct values, ordered by descending
/// frequency.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankHistogram {
    /// Buckets in rank order (most frequent first).
    pub buckets: Vec<RankBucket>,
}

impl RankHistogram {
    /// Create a rank histogram from buckets.
    pub fn new(buckets: Vec<RankBucket>) -> Self {
        Self { buckets }
    }

    /// Create a rank histogram from `(label, count)` pairs, assigning ranks
    /// in the given order.
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let buckets = counts
            .into_iter()
            .enumerate()
            .map(|(rank, (label, count))| {
                RankBucket::new(label, count).with_ranks(rank as u64 + 1, rank as u64 + 1)
            })
            .collect();
        Self { buckets }
    }
}
