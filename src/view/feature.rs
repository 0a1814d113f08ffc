//! Feature-level view.

use std::collections::BTreeMap;
use std::fmt;

use crate::path::Path;
use crate::stats::{CustomStat, FeatureStats, FeatureType, NumericStats, StatsType};
use crate::view::dataset::DatasetView;

/// Returned by [`FeatureView::num_stats`] when the record carries no
/// numeric block, so callers never handle an `Option` there.
static EMPTY_NUM_STATS: NumericStats = NumericStats {
    mean: 0.0,
    std_dev: 0.0,
    num_zeros: 0,
    median: 0.0,
    min: 0.0,
    max: 0.0,
    histograms: Vec::new(),
    weighted: None,
};

/// Read-only view over one feature of a dataset.
///
/// A `FeatureView` is a dataset-view handle plus a record index; cloning
/// copies the handle, never the data. Count-like queries answer from the
/// weighted statistics when the dataset view was built with `by_weight`,
/// falling back to the unweighted numbers for any feature whose record
/// lacks the weighted block.
///
/// Obtained from [`DatasetView::features`], [`DatasetView::get_by_path`]
/// and the navigation methods; there is no public constructor.
#[derive(Clone)]
pub struct FeatureView<'a> {
    view: DatasetView<'a>,
    index: usize,
}

impl<'a> FeatureView<'a> {
    pub(crate) fn new(view: DatasetView<'a>, index: usize) -> Self {
        debug_assert!(
            index < view.core().num_records(),
            "feature index out of range"
        );
        Self { view, index }
    }

    #[inline]
    pub(crate) fn index(&self) -> usize {
        self.index
    }

    /// The underlying record.
    #[inline]
    fn record(&self) -> &'a FeatureStats {
        self.view.core().record(self.index)
    }

    /// The feature name as the producer wrote it.
    ///
    /// For legacy producers this may be a dotted path; [`FeatureView::path`]
    /// is the canonical identity.
    #[inline]
    pub fn name(&self) -> &str {
        &self.record().name
    }

    /// The canonical path of this feature.
    #[inline]
    pub fn path(&self) -> &Path {
        self.view.core().path_at(self.index)
    }

    /// The statistics type the producer assigned.
    #[inline]
    pub fn stats_type(&self) -> StatsType {
        self.record().stats_type
    }

    /// Returns true for struct-typed features, the only ones that can have
    /// children.
    #[inline]
    pub fn is_struct(&self) -> bool {
        self.stats_type().is_struct()
    }

    /// The coarse physical type. String collapses into bytes here; consumers
    /// at this level do not distinguish them.
    #[inline]
    pub fn feature_type(&self) -> FeatureType {
        self.stats_type().into()
    }

    /// Number of examples in which this feature is present.
    ///
    /// Weighted views report the weight sum, or the unweighted count if the
    /// record has no weighted block.
    pub fn num_present(&self) -> f64 {
        let common = &self.record().common;
        if self.view.by_weight() {
            if let Some(weighted) = &common.weighted {
                return weighted.num_non_missing;
            }
        }
        common.num_non_missing as f64
    }

    /// Minimum number of values in a single example.
    ///
    /// A negative stored value is producer error, reported as zero rather
    /// than propagated.
    pub fn min_num_values(&self) -> i64 {
        self.record().common.min_num_values.max(0)
    }

    /// Maximum number of values in a single example.
    #[inline]
    pub fn max_num_values(&self) -> i64 {
        self.record().common.max_num_values
    }

    /// Total number of examples in the dataset, present or not. Delegates
    /// to the dataset view.
    #[inline]
    pub fn num_examples(&self) -> f64 {
        self.view.num_examples()
    }

    /// Number of examples in which this feature is absent, derived as
    /// `num_examples() - num_present()` and clamped at zero.
    ///
    /// The record's stored `num_missing` is never consulted; the answer is
    /// always consistent with the dataset's example count.
    pub fn num_missing(&self) -> f64 {
        (self.num_examples() - self.num_present()).max(0.0)
    }

    /// Fraction of examples in which this feature is present.
    ///
    /// `None` when the dataset has no examples; never NaN or infinite.
    pub fn fraction_present(&self) -> Option<f64> {
        let num_examples = self.num_examples();
        if num_examples == 0.0 {
            return None;
        }
        Some(self.num_present() / num_examples)
    }

    /// Total number of values of this feature across all examples.
    ///
    /// Weighted views read the weighted total (falling back to the
    /// unweighted numbers if the record has no weighted block). Records
    /// from producers that predate the stored total report
    /// `avg_num_values * num_non_missing` instead.
    pub fn total_value_count(&self) -> f64 {
        let common = &self.record().common;
        if self.view.by_weight() {
            if let Some(weighted) = &common.weighted {
                return weighted.tot_num_values;
            }
        }
        if common.tot_num_values == 0 {
            common.avg_num_values * common.num_non_missing as f64
        } else {
            common.tot_num_values as f64
        }
    }

    /// The strings occurring in the data with their (weighted) counts,
    /// read from the rank histogram.
    ///
    /// Empty when the feature has no string statistics.
    pub fn string_values_with_counts(&self) -> BTreeMap<String, f64> {
        let mut counts = BTreeMap::new();
        let string_stats = match &self.record().string_stats {
            Some(stats) => stats,
            None => return counts,
        };
        let rank_histogram = if self.view.by_weight() {
            match &string_stats.weighted {
                Some(weighted) => &weighted.rank_histogram,
                None => &string_stats.rank_histogram,
            }
        } else {
            &string_stats.rank_histogram
        };
        for bucket in &rank_histogram.buckets {
            counts.insert(bucket.label.clone(), bucket.sample_count);
        }
        counts
    }

    /// The strings occurring in the data, sorted.
    ///
    /// Empty when the feature has no string statistics.
    pub fn string_values(&self) -> Vec<String> {
        self.string_values_with_counts().into_keys().collect()
    }

    /// Returns true if this is a string feature and some of its values
    /// were not valid UTF-8.
    pub fn has_invalid_utf8(&self) -> bool {
        self.stats_type() == StatsType::String
            && self
                .record()
                .string_stats
                .as_ref()
                .map(|s| s.invalid_utf8_count > 0)
                .unwrap_or(false)
    }

    /// The numeric statistics block, or an empty one if the record carries
    /// none. Never fails; non-numeric features simply read all zeros.
    pub fn num_stats(&self) -> &NumericStats {
        self.record().num_stats.as_ref().unwrap_or(&EMPTY_NUM_STATS)
    }

    /// The producer-defined statistics of this feature.
    #[inline]
    pub fn custom_stats(&self) -> &[CustomStat] {
        &self.record().custom_stats
    }

    /// Whether the dataset's weighted statistics exist with full feature
    /// parity. Pass-through to the dataset view.
    #[inline]
    pub fn weighted_stats_exist(&self) -> bool {
        self.view.weighted_stats_exist()
    }

    /// The environment of the dataset view, if configured.
    #[inline]
    pub fn environment(&self) -> Option<&str> {
        self.view.environment()
    }

    /// The dataset view this feature belongs to.
    #[inline]
    pub fn parent_view(&self) -> &DatasetView<'a> {
        &self.view
    }

    /// This feature in the previous-span snapshot: the feature at the same
    /// canonical path there.
    ///
    /// `None` when no previous snapshot is configured or it has no feature
    /// at this path.
    pub fn previous(&self) -> Option<FeatureView<'a>> {
        self.view.previous()?.get_by_path(self.path())
    }

    /// This feature in the serving snapshot: the feature at the same
    /// canonical path there.
    ///
    /// `None` when no serving snapshot is configured or it has no feature
    /// at this path.
    pub fn serving(&self) -> Option<FeatureView<'a>> {
        self.view.serving()?.get_by_path(self.path())
    }

    /// The parent feature, if one resolved at construction.
    pub fn parent(&self) -> Option<FeatureView<'a>> {
        self.view.parent_of(self)
    }

    /// The features whose parent is this one, in record order.
    pub fn children(&self) -> Vec<FeatureView<'a>> {
        self.view.children_of(self)
    }
}

/// Two feature views are equal iff they index the same record of the same
/// derived state. Views of identical records in different dataset views
/// compare unequal.
impl PartialEq for FeatureView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.view.shares_core(&other.view)
    }
}

impl fmt::Debug for FeatureView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureView")
            .field("path", &format_args!("{}", self.path()))
            .field("stats_type", &self.stats_type())
            .finish()
    }
}
