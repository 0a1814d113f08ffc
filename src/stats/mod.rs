//! Statistics record model.
//!
//! These are the plain-data records produced by an external statistics
//! pipeline, one [`DatasetStats`] per dataset snapshot with one
//! [`FeatureStats`] per feature. This crate treats them as immutable input:
//! the view layer in [`crate::view`] borrows a `DatasetStats` and answers
//! queries over it, and nothing here is ever mutated after construction.
//!
//! # Key Types
//!
//! - [`DatasetStats`]: per-dataset totals plus the flat feature list
//! - [`FeatureStats`]: one feature's statistics (typed by [`StatsType`])
//! - [`CommonStats`]: presence and value-count statistics every feature has
//! - [`NumericStats`] / [`StringStats`]: per-type statistics blocks
//! - [`Histogram`] / [`RankHistogram`]: value and frequency distributions
//! - [`CustomStat`]: open-ended producer-defined statistics
//!
//! Weighted counterparts ([`WeightedCommonStats`], [`WeightedNumericStats`],
//! [`WeightedStringStats`]) are optional blocks alongside the unweighted
//! ones; a producer that never saw example weights simply leaves them out.
//!
//! All records serialize with serde. Deserialization tolerates sparse input:
//! every missing field takes its default, matching producers that omit
//! zero-valued or unpopulated fields.
//!
//! # Example
//!
//! ```
//! use statview::stats::{CommonStats, DatasetStats, FeatureStats, StatsType};
//!
//! let stats = DatasetStats::new("train", 100)
//!     .with_feature(
//!         FeatureStats::new("age", StatsType::Int)
//!             .with_common(CommonStats::new(98, 2)),
//!     );
//!
//! assert_eq!(stats.num_examples, 100);
//! assert_eq!(stats.features[0].name, "age");
//! ```

mod dataset;
mod feature;
mod histogram;

pub use dataset::DatasetStats;
pub use feature::{
    CommonStats, CustomStat, CustomValue, FeatureStats, FeatureType, FreqAndValue, NumericStats,
    StatsType, StringStats, WeightedCommonStats, WeightedNumericStats, WeightedStringStats,
};
pub use histogram::{Bucket, Histogram, HistogramType, RankBucket, RankHistogram};
