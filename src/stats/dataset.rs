//! Per-dataset statistics records.

use serde::{Deserialize, Serialize};

use crate::stats::feature::FeatureStats;

/// Statistics for one dataset snapshot: totals plus the flat feature list.
///
/// Nested features appear in [`DatasetStats::features`] as ordinary entries
/// whose paths extend their ancestors'; the record itself carries no tree
/// structure. [`crate::view::DatasetView`] reconstructs the hierarchy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetStats {
    /// Dataset name (e.g. the split or slice this snapshot covers).
    pub name: String,

    /// Number of examples in the dataset.
    pub num_examples: u64,

    /// Sum of example weights. Zero when the producer saw no weights.
    /// Weighted statistics count as fully present only when this is nonzero
    /// and every feature carries its weighted block.
    pub weighted_num_examples: f64,

    /// Per-feature statistics, in producer order.
    pub features: Vec<FeatureStats>,
}

impl DatasetStats {
    /// Create dataset statistics with the given name and example count.
    pub fn new(name: impl Into<String>, num_examples: u64) -> Self {
        Self {
            name: name.into(),
            num_examples,
            ..Default::default()
        }
    }

    /// Set the weighted example total.
    pub fn with_weighted_total(mut self, weighted_num_examples: f64) -> Self {
        self.weighted_num_examples = weighted_num_examples;
        self
    }

    /// Append a feature record.
    pub fn with_feature(mut self, feature: FeatureStats) -> Self {
        self.features.push(feature);
        self
    }

    /// Number of feature records.
    #[inline]
    pub fn num_features(&self) -> usize {
        self.features.len()
    }
}
