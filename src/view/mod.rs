//! Read-only views over dataset statistics.
//!
//! This module provides [`DatasetView`] and [`FeatureView`], the query
//! surface over a [`crate::stats::DatasetStats`] record. A view borrows the
//! caller-owned record and never copies or mutates it; all derived state is
//! computed once at construction and shared by every clone.
//!
//! # Key Types
//!
//! - [`DatasetView`]: cheap-to-clone handle over one dataset snapshot
//! - [`DatasetViewBuilder`]: construction with weighting, environment and
//!   comparison views
//! - [`FeatureView`]: one feature within a dataset view
//!
//! # Weighted and unweighted reads
//!
//! A view is constructed either weighted (`by_weight = true`) or unweighted.
//! Count-like queries on both view types answer from the matching statistics
//! block; a weighted view whose record lacks a weighted block for some
//! feature falls back to the unweighted numbers for that feature.
//!
//! # Example
//!
//! ```
//! use statview::stats::{CommonStats, DatasetStats, FeatureStats, StatsType};
//! use statview::{DatasetView, Path};
//!
//! let stats = DatasetStats::new("train", 10)
//!     .with_feature(FeatureStats::new("user", StatsType::Struct))
//!     .with_feature(
//!         FeatureStats::new("user.age", StatsType::Int)
//!             .with_common(CommonStats::new(9, 1)),
//!     );
//!
//! let view = DatasetView::new(&stats);
//! let age = view.get_by_path(&Path::new(["user", "age"])).unwrap();
//!
//! assert_eq!(age.num_present(), 9.0);
//! assert_eq!(age.parent().unwrap().name(), "user");
//! ```

mod core;
mod dataset;
mod feature;

pub(crate) use self::core::ViewCore;

pub use dataset::{DatasetView, DatasetViewBuilder};
pub use feature::FeatureView;
