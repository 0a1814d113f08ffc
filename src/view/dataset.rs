//! Dataset-level view.

use std::fmt;
use std::sync::Arc;

use crate::path::Path;
use crate::stats::DatasetStats;
use crate::view::core::ViewCore;
use crate::view::feature::FeatureView;

/// Read-only view over one dataset statistics record.
///
/// A `DatasetView` borrows the caller-owned [`DatasetStats`] and answers
/// navigation and count queries over it. Cloning is an `Arc` bump: every
/// clone shares the derived state built at construction, so clones are
/// observably identical and cheap enough to hand out freely (every
/// [`FeatureView`] carries one).
///
/// Construct with [`DatasetView::new`] for plain unweighted access, or with
/// [`DatasetView::builder`] for weighted access and comparison snapshots.
#[derive(Clone)]
pub struct DatasetView<'a> {
    core: Arc<ViewCore<'a>>,
}

impl<'a> DatasetView<'a> {
    /// Create an unweighted view with no environment or comparison
    /// snapshots.
    ///
    /// # Panics
    ///
    /// Panics if two features in `stats` resolve to the same canonical
    /// path; see [`DatasetViewBuilder::build`].
    pub fn new(stats: &'a DatasetStats) -> Self {
        Self {
            core: Arc::new(ViewCore::new(stats, false, None, None, None)),
        }
    }

    /// Start building a view with non-default configuration.
    pub fn builder(stats: &'a DatasetStats) -> DatasetViewBuilder<'a> {
        DatasetViewBuilder {
            stats,
            by_weight: false,
            environment: None,
            previous: None,
            serving: None,
        }
    }

    /// Total number of examples in the dataset.
    ///
    /// Weighted views report the weighted total. Zero is a legitimate
    /// answer as well as the unset default; callers must not infer absence
    /// from it.
    pub fn num_examples(&self) -> f64 {
        if self.core.by_weight() {
            self.core.stats().weighted_num_examples
        } else {
            self.core.stats().num_examples as f64
        }
    }

    /// Views over every feature, in record order.
    pub fn features(&self) -> Vec<FeatureView<'a>> {
        (0..self.core.num_records())
            .map(|index| FeatureView::new(self.clone(), index))
            .collect()
    }

    /// Views over the features with no parent, in record order.
    pub fn root_features(&self) -> Vec<FeatureView<'a>> {
        (0..self.core.num_records())
            .filter(|&index| self.core.parent_of(index).is_none())
            .map(|index| FeatureView::new(self.clone(), index))
            .collect()
    }

    /// Look up a feature by canonical path.
    pub fn get_by_path(&self, path: &Path) -> Option<FeatureView<'a>> {
        let index = self.core.index_of(path)?;
        Some(FeatureView::new(self.clone(), index))
    }

    /// The parent of `feature`, if one resolved at construction.
    ///
    /// The parent is the struct-typed feature whose canonical path is the
    /// longest strict prefix of `feature`'s path.
    pub fn parent_of(&self, feature: &FeatureView<'a>) -> Option<FeatureView<'a>> {
        debug_assert!(
            self.shares_core(feature.parent_view()),
            "feature belongs to a different dataset view"
        );
        let parent = self.core.parent_of(feature.index())?;
        Some(FeatureView::new(self.clone(), parent))
    }

    /// The features whose parent is `feature`, in record order.
    pub fn children_of(&self, feature: &FeatureView<'a>) -> Vec<FeatureView<'a>> {
        debug_assert!(
            self.shares_core(feature.parent_view()),
            "feature belongs to a different dataset view"
        );
        (0..self.core.num_records())
            .filter(|&index| self.core.parent_of(index) == Some(feature.index()))
            .map(|index| FeatureView::new(self.clone(), index))
            .collect()
    }

    /// The canonical path of `feature`.
    pub fn path_of(&self, feature: &FeatureView<'a>) -> &Path {
        debug_assert!(
            self.shares_core(feature.parent_view()),
            "feature belongs to a different dataset view"
        );
        self.core.path_at(feature.index())
    }

    /// Whether weighted statistics exist with full feature parity: the
    /// weighted example total is nonzero and every feature carries a
    /// weighted common-statistics block.
    ///
    /// Independent of how the view was constructed; an unweighted view
    /// answers this truthfully too.
    pub fn weighted_stats_exist(&self) -> bool {
        self.core.weighted_stats_exist()
    }

    /// Whether count-like queries answer from weighted statistics.
    #[inline]
    pub fn by_weight(&self) -> bool {
        self.core.by_weight()
    }

    /// The environment this snapshot was collected in, if configured.
    pub fn environment(&self) -> Option<&str> {
        self.core.environment()
    }

    /// The snapshot of the preceding span of the same data, if configured.
    pub fn previous(&self) -> Option<DatasetView<'a>> {
        self.core.previous().cloned()
    }

    /// The snapshot of the serving data, if configured.
    pub fn serving(&self) -> Option<DatasetView<'a>> {
        self.core.serving().cloned()
    }

    /// Shared access for feature views. Indices handed to the core must
    /// come from this view's own queries.
    #[inline]
    pub(crate) fn core(&self) -> &ViewCore<'a> {
        &self.core
    }

    /// True if `other` shares this view's derived state.
    #[inline]
    pub(crate) fn shares_core(&self, other: &DatasetView<'a>) -> bool {
        Arc::ptr_eq(&self.core, &other.core)
    }
}

impl fmt::Debug for DatasetView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatasetView")
            .field("name", &self.core.stats().name)
            .field("num_examples", &self.num_examples())
            .field("num_features", &self.core.num_records())
            .field("by_weight", &self.by_weight())
            .field("environment", &self.environment())
            .finish()
    }
}

/// Builder for [`DatasetView`] with non-default configuration.
///
/// Comparison snapshots are complete views in their own right; build them
/// first and pass them in. Construction cannot form cycles because a view
/// only ever references views that already exist.
///
/// # Example
///
/// ```
/// use statview::stats::DatasetStats;
/// use statview::DatasetView;
///
/// let previous_stats = DatasetStats::new("day-1", 80);
/// let current_stats = DatasetStats::new("day-2", 100).with_weighted_total(97.5);
///
/// let previous = DatasetView::new(&previous_stats);
/// let view = DatasetView::builder(&current_stats)
///     .by_weight(true)
///     .environment("TRAINING")
///     .previous(previous)
///     .build();
///
/// assert_eq!(view.num_examples(), 97.5);
/// assert!(view.previous().is_some());
/// ```
pub struct DatasetViewBuilder<'a> {
    stats: &'a DatasetStats,
    by_weight: bool,
    environment: Option<String>,
    previous: Option<DatasetView<'a>>,
    serving: Option<DatasetView<'a>>,
}

impl<'a> DatasetViewBuilder<'a> {
    /// Answer count-like queries from weighted statistics.
    pub fn by_weight(mut self, by_weight: bool) -> Self {
        self.by_weight = by_weight;
        self
    }

    /// Record the environment this snapshot was collected in.
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Attach the snapshot of the preceding span of the same data.
    pub fn previous(mut self, previous: DatasetView<'a>) -> Self {
        self.previous = Some(previous);
        self
    }

    /// Attach the snapshot of the serving data.
    pub fn serving(mut self, serving: DatasetView<'a>) -> Self {
        self.serving = Some(serving);
        self
    }

    /// Build the view, deriving paths and resolving parents.
    ///
    /// # Panics
    ///
    /// Panics if two features resolve to the same canonical path. A record
    /// with duplicate paths has no unambiguous lookup and is rejected at
    /// construction.
    pub fn build(self) -> DatasetView<'a> {
        DatasetView {
            core: Arc::new(ViewCore::new(
                self.stats,
                self.by_weight,
                self.environment,
                self.previous,
                self.serving,
            )),
        }
    }
}
