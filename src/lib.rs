//! statview: read-only views over dataset feature statistics.
//!
//! A statistics pipeline summarizes a dataset into one flat record per
//! feature: presence counts, value distributions, string frequencies and
//! whatever custom measurements the producer added. Validation logic then
//! wants to ask structured questions over those records ("what is this
//! feature's parent?", "what did it look like in the previous snapshot?")
//! without copying or mutating anything. This crate is that query surface.
//!
//! # Key Types
//!
//! - [`DatasetView`] - cheap-to-clone view over one dataset's statistics
//! - [`FeatureView`] - one feature within a dataset view
//! - [`Path`] - ordered name segments identifying a feature
//! - [`stats`] - the plain-data record model the views read from
//!
//! # Navigation
//!
//! Features form a tree: a struct-typed feature whose path is the longest
//! strict prefix of another's is its parent. The tree is resolved once at
//! view construction; [`DatasetView::get_by_path`],
//! [`FeatureView::parent`] and [`FeatureView::children`] then answer from
//! the prebuilt index.
//!
//! # Weighted duality
//!
//! Every count-like query exists in unweighted and example-weighted form.
//! The choice is made once, at view construction (`by_weight`), and every
//! query on that view answers consistently from the chosen side, falling
//! back per feature to unweighted numbers when a record carries no
//! weighted block.
//!
//! # Comparison snapshots
//!
//! A view can carry views of related snapshots (a previous span of the
//! same data, the serving data). [`FeatureView::previous`] and
//! [`FeatureView::serving`] resolve the same feature path there, for drift
//! and skew checks.
//!
//! # Example
//!
//! ```
//! use statview::stats::{CommonStats, DatasetStats, FeatureStats, StatsType};
//! use statview::{DatasetView, Path};
//!
//! let stats = DatasetStats::new("train", 100)
//!     .with_feature(FeatureStats::new("user", StatsType::Struct))
//!     .with_feature(
//!         FeatureStats::new("user.age", StatsType::Int)
//!             .with_common(CommonStats::new(95, 5)),
//!     );
//!
//! let view = DatasetView::new(&stats);
//!
//! let age = view.get_by_path(&Path::new(["user", "age"])).unwrap();
//! assert_eq!(age.fraction_present(), Some(0.95));
//! assert_eq!(age.parent().unwrap().name(), "user");
//! assert_eq!(view.root_features().len(), 1);
//! ```
//!
//! Views borrow the caller-owned [`stats::DatasetStats`] and are
//! `Send + Sync`; clone them freely across threads for the record's
//! lifetime.

pub mod path;
pub mod stats;
pub mod testing;
pub mod view;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use path::{Path, PathParseError};
pub use view::{DatasetView, DatasetViewBuilder, FeatureView};
