//! Shared backing state for dataset views.
//!
//! [`ViewCore`] is built exactly once per [`super::DatasetView`] lineage and
//! shared by every clone through an `Arc`. It owns everything derived from
//! the borrowed record: the canonical path of each feature, the path lookup
//! index, the parent table, and the weighted-parity flag. Nothing in here is
//! mutated after construction.

use std::collections::HashMap;

use crate::path::Path;
use crate::stats::{DatasetStats, FeatureStats};
use crate::view::DatasetView;

/// Derived state shared by all clones of one dataset view.
pub(crate) struct ViewCore<'a> {
    /// The borrowed record. All feature data is read through here.
    stats: &'a DatasetStats,

    /// Whether count-like queries answer from weighted statistics.
    by_weight: bool,

    /// Environment this snapshot was collected in, if any.
    environment: Option<String>,

    /// Snapshot of the preceding span of the same data, if configured.
    previous: Option<DatasetView<'a>>,

    /// Snapshot of the serving data, if configured.
    serving: Option<DatasetView<'a>>,

    /// Canonical path per record, index-aligned with `stats.features`.
    paths: Box<[Path]>,

    /// Canonical path to record index.
    path_index: HashMap<Path, usize>,

    /// Resolved parent per record, index-aligned with `stats.features`.
    parents: Box<[Option<usize>]>,

    /// Whether every feature carries weighted common statistics and the
    /// weighted example total is nonzero.
    weighted_stats_exist: bool,
}

impl<'a> ViewCore<'a> {
    /// Build the derived state for `stats`.
    ///
    /// # Panics
    ///
    /// Panics if two features derive the same canonical path; path lookup
    /// over such a record would be ambiguous.
    pub(crate) fn new(
        stats: &'a DatasetStats,
        by_weight: bool,
        environment: Option<String>,
        previous: Option<DatasetView<'a>>,
        serving: Option<DatasetView<'a>>,
    ) -> Self {
        let paths: Box<[Path]> = stats.features.iter().map(derive_path).collect();

        let mut path_index = HashMap::with_capacity(paths.len());
        for (index, path) in paths.iter().enumerate() {
            if path_index.insert(path.clone(), index).is_some() {
                panic!("duplicate feature path `{path}` in dataset statistics");
            }
        }

        let parents = paths
            .iter()
            .map(|path| resolve_parent(path, &path_index, &stats.features))
            .collect();

        let weighted_stats_exist = stats.weighted_num_examples != 0.0
            && stats.features.iter().all(|f| f.common.weighted.is_some());

        Self {
            stats,
            by_weight,
            environment,
            previous,
            serving,
            paths,
            path_index,
            parents,
            weighted_stats_exist,
        }
    }

    /// The borrowed record.
    #[inline]
    pub(crate) fn stats(&self) -> &'a DatasetStats {
        self.stats
    }

    /// Number of feature records.
    #[inline]
    pub(crate) fn num_records(&self) -> usize {
        self.paths.len()
    }

    /// The feature record at `index`.
    ///
    /// Panics on an out-of-range index; feature views only carry indices
    /// produced by this core, so that would be an internal bug.
    #[inline]
    pub(crate) fn record(&self, index: usize) -> &'a FeatureStats {
        &self.stats.features[index]
    }

    /// The canonical path of the record at `index`.
    #[inline]
    pub(crate) fn path_at(&self, index: usize) -> &Path {
        &self.paths[index]
    }

    /// The resolved parent of the record at `index`.
    #[inline]
    pub(crate) fn parent_of(&self, index: usize) -> Option<usize> {
        self.parents[index]
    }

    /// Look up a record by canonical path.
    #[inline]
    pub(crate) fn index_of(&self, path: &Path) -> Option<usize> {
        self.path_index.get(path).copied()
    }

    #[inline]
    pub(crate) fn by_weight(&self) -> bool {
        self.by_weight
    }

    #[inline]
    pub(crate) fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    #[inline]
    pub(crate) fn previous(&self) -> Option<&DatasetView<'a>> {
        self.previous.as_ref()
    }

    #[inline]
    pub(crate) fn serving(&self) -> Option<&DatasetView<'a>> {
        self.serving.as_ref()
    }

    #[inline]
    pub(crate) fn weighted_stats_exist(&self) -> bool {
        self.weighted_stats_exist
    }
}

/// The canonical path of a record: its structured path when present,
/// otherwise its name parsed as a dotted path. A name that fails to parse
/// becomes a single-step path holding the whole name; every record stays
/// addressable.
fn derive_path(feature: &FeatureStats) -> Path {
    match &feature.path {
        Some(path) => path.clone(),
        None => feature
            .name
            .parse()
            .unwrap_or_else(|_| Path::new([feature.name.clone()])),
    }
}

/// The parent of a record: the struct-typed feature whose canonical path is
/// the longest strict prefix of `path`.
///
/// Walks the prefixes of `path` from longest to shortest, which visits
/// candidates in exactly the order the longest-prefix rule requires.
/// Prefixes that exist but are not struct-typed are skipped, not barriers:
/// a shorter struct ancestor still wins.
fn resolve_parent(
    path: &Path,
    path_index: &HashMap<Path, usize>,
    features: &[FeatureStats],
) -> Option<usize> {
    let mut prefix = path.parent()?;
    loop {
        if let Some(&candidate) = path_index.get(&prefix) {
            if features[candidate].stats_type.is_struct() {
                return Some(candidate);
            }
        }
        prefix = prefix.parent()?;
    }
}
