//! Per-feature statistics records.
//!
//! A [`FeatureStats`] carries everything a producer computed for one
//! feature: the [`CommonStats`] every feature has, plus a per-type block
//! ([`NumericStats`] or [`StringStats`]) and any [`CustomStat`] entries.
//! Counts that exist in both unweighted and example-weighted form live in
//! paired structs; the weighted block is optional and absent for producers
//! that never saw weights.

use serde::{Deserialize, Serialize};

use crate::path::Path;
use crate::stats::histogram::{Histogram, RankHistogram};

// =============================================================================
// StatsType / FeatureType
// =============================================================================

/// The statistics type a producer assigned to a feature.
///
/// Determines which per-type block ([`FeatureStats::num_stats`] or
/// [`FeatureStats::string_stats`]) is meaningful, and whether the feature
/// can act as a parent in the feature tree (only [`StatsType::Struct`] can).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsType {
    /// Integer-valued feature.
    #[default]
    Int,

    /// Floating-point feature.
    Float,

    /// String feature with valid UTF-8 values.
    String,

    /// Opaque byte-string feature.
    Bytes,

    /// Structured feature containing nested features.
    Struct,
}

impl StatsType {
    /// Returns true for [`StatsType::Struct`].
    #[inline]
    pub fn is_struct(&self) -> bool {
        matches!(self, StatsType::Struct)
    }
}

/// The coarse physical type of a feature.
///
/// Schema-level consumers distinguish fewer types than statistics producers
/// do; in particular string and byte features are both just byte strings at
/// this level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureType {
    /// Integer-valued feature.
    #[default]
    Int,

    /// Floating-point feature.
    Float,

    /// Byte-string feature (stringly typed or opaque).
    Bytes,

    /// Structured feature.
    Struct,
}

impl From<StatsType> for FeatureType {
    fn from(stats_type: StatsType) -> Self {
        match stats_type {
            StatsType::Int => FeatureType::Int,
            StatsType::Float => FeatureType::Float,
            StatsType::String | StatsType::Bytes => FeatureType::Bytes,
            StatsType::Struct => FeatureType::Struct,
        }
    }
}

// =============================================================================
// CommonStats
// =============================================================================

/// Presence and value-count statistics computed for every feature.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonStats {
    /// Number of examples in which the feature is present.
    pub num_non_missing: u64,

    /// Number of examples in which the feature is absent, as counted by the
    /// producer. Consumers usually derive missingness from the dataset's
    /// example count instead.
    pub num_missing: u64,

    /// Minimum number of values in a single example. Signed because some
    /// producers have emitted negative values here; consumers clamp.
    pub min_num_values: i64,

    /// Maximum number of values in a single example.
    pub max_num_values: i64,

    /// Average number of values per present example.
    pub avg_num_values: f64,

    /// Total number of values across all examples. Zero when the producer
    /// predates this field.
    pub tot_num_values: u64,

    /// Example-weighted counterparts, when the producer saw weights.
    pub weighted: Option<WeightedCommonStats>,
}

impl CommonStats {
    /// Create common statistics with presence counts.
    pub fn new(num_non_missing: u64, num_missing: u64) -> Self {
        Self {
            num_non_missing,
            num_missing,
            ..Default::default()
        }
    }

    /// Set the per-example value-count statistics.
    pub fn with_num_values(mut self, min: i64, max: i64, avg: f64) -> Self {
        self.min_num_values = min;
        self.max_num_values = max;
        self.avg_num_values = avg;
        self
    }

    /// Set the total value count.
    pub fn with_total(mut self, tot_num_values: u64) -> Self {
        self.tot_num_values = tot_num_values;
        self
    }

    /// Attach the weighted counterpart block.
    pub fn with_weighted(mut self, weighted: WeightedCommonStats) -> Self {
        self.weighted = Some(weighted);
        self
    }
}

/// Example-weighted counterparts of [`CommonStats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightedCommonStats {
    /// Sum of example weights where the feature is present.
    pub num_non_missing: f64,

    /// Sum of example weights where the feature is absent.
    pub num_missing: f64,

    /// Weighted average number of values per present example.
    pub avg_num_values: f64,

    /// Weighted total number of values.
    pub tot_num_values: f64,
}

impl WeightedCommonStats {
    /// Create weighted common statistics with presence sums.
    pub fn new(num_non_missing: f64, num_missing: f64) -> Self {
        Self {
            num_non_missing,
            num_missing,
            ..Default::default()
        }
    }

    /// Set the weighted value-count statistics.
    pub fn with_num_values(mut self, avg: f64, tot: f64) -> Self {
        self.avg_num_values = avg;
        self.tot_num_values = tot;
        self
    }
}

// =============================================================================
// NumericStats
// =============================================================================

/// Statistics for numeric ([`StatsType::Int`] / [`StatsType::Float`])
/// features.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericStats {
    /// Mean of the values.
    pub mean: f64,

    /// Standard deviation of the values.
    pub std_dev: f64,

    /// Number of values equal to zero.
    pub num_zeros: u64,

    /// Median of the values.
    pub median: f64,

    /// Minimum value.
    pub min: f64,

    /// Maximum value.
    pub max: f64,

    /// Value distributions (typically one standard, one quantiles).
    pub histograms: Vec<Histogram>,

    /// Example-weighted counterparts, when the producer saw weights.
    pub weighted: Option<WeightedNumericStats>,
}

impl NumericStats {
    /// Create numeric statistics with the given mean and standard deviation.
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self {
            mean,
            std_dev,
            ..Default::default()
        }
    }

    /// Set the value range.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the median.
    pub fn with_median(mut self, median: f64) -> Self {
        self.median = median;
        self
    }

    /// Set the zero count.
    pub fn with_num_zeros(mut self, num_zeros: u64) -> Self {
        self.num_zeros = num_zeros;
        self
    }

    /// Append a histogram.
    pub fn with_histogram(mut self, histogram: Histogram) -> Self {
        self.histograms.push(histogram);
        self
    }

    /// Attach the weighted counterpart block.
    pub fn with_weighted(mut self, weighted: WeightedNumericStats) -> Self {
        self.weighted = Some(weighted);
        self
    }
}

/// Example-weighted counterparts of [`NumericStats`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightedNumericStats {
    /// Weighted mean of the values.
    pub mean: f64,

    /// Weighted standard deviation.
    pub std_dev: f64,

    /// Weighted median.
    pub median: f64,

    /// Weighted value distributions.
    pub histograms: Vec<Histogram>,
}

impl WeightedNumericStats {
    /// Create weighted numeric statistics with the given mean and standard
    /// deviation.
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self {
            mean,
            std_dev,
            ..Default::default()
        }
    }

    /// Set the weighted median.
    pub fn with_median(mut self, median: f64) -> Self {
        self.median = median;
        self
    }

    /// Append a weighted histogram.
    pub fn with_histogram(mut self, histogram: Histogram) -> Self {
        self.histograms.push(histogram);
        self
    }
}

// =============================================================================
// StringStats
// =============================================================================

/// A distinct value and its frequency, for the most-frequent-values list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreqAndValue {
    /// The value.
    pub value: String,

    /// Number of occurrences. May be fractional for weighted statistics.
    pub frequency: f64,
}

impl FreqAndValue {
    /// Create a value/frequency pair.
    pub fn new(value: impl Into<String>, frequency: f64) -> Self {
        Self {
            value: value.into(),
            frequency,
        }
    }
}

/// Statistics for string ([`StatsType::String`] / [`StatsType::Bytes`])
/// features.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringStats {
    /// Number of distinct values.
    pub unique: u64,

    /// Average value length in bytes.
    pub avg_length: f64,

    /// Most frequent values, descending.
    pub top_values: Vec<FreqAndValue>,

    /// Frequencies of distinct values, by rank.
    pub rank_histogram: RankHistogram,

    /// Number of values that were not valid UTF-8.
    pub invalid_utf8_count: u64,

    /// Example-weighted counterparts, when the producer saw weights.
    pub weighted: Option<WeightedStringStats>,
}

impl StringStats {
    /// Create string statistics with the given distinct-value count.
    pub fn new(unique: u64) -> Self {
        Self {
            unique,
            ..Default::default()
        }
    }

    /// Set the average value length.
    pub fn with_avg_length(mut self, avg_length: f64) -> Self {
        self.avg_length = avg_length;
        self
    }

    /// Append a most-frequent-value entry.
    pub fn with_top_value(mut self, value: FreqAndValue) -> Self {
        self.top_values.push(value);
        self
    }

    /// Set the rank histogram.
    pub fn with_rank_histogram(mut self, rank_histogram: RankHistogram) -> Self {
        self.rank_histogram = rank_histogram;
        self
    }

    /// Set the invalid-UTF-8 count.
    pub fn with_invalid_utf8(mut self, invalid_utf8_count: u64) -> Self {
        self.invalid_utf8_count = invalid_utf8_count;
        self
    }

    /// Attach the weighted counterpart block.
    pub fn with_weighted(mut self, weighted: WeightedStringStats) -> Self {
        self.weighted = Some(weighted);
        self
    }
}

/// Example-weighted counterparts of [`StringStats`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightedStringStats {
    /// Most frequent values by weighted count, descending.
    pub top_values: Vec<FreqAndValue>,

    /// Weighted frequencies of distinct values, by rank.
    pub rank_histogram: RankHistogram,
}

impl WeightedStringStats {
    /// Create weighted string statistics with the given rank histogram.
    pub fn new(rank_histogram: RankHistogram) -> Self {
        Self {
            top_values: Vec::new(),
            rank_histogram,
        }
    }
}

// =============================================================================
// CustomStat
// =============================================================================

/// The value of a producer-defined statistic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomValue {
    /// A numeric statistic.
    Num(f64),

    /// A string statistic.
    Str(String),

    /// A histogram-valued statistic.
    Histogram(Histogram),

    /// A rank-histogram-valued statistic.
    RankHistogram(RankHistogram),
}

impl Default for CustomValue {
    fn default() -> Self {
        CustomValue::Num(0.0)
    }
}

/// A named producer-defined statistic attached to a feature.
///
/// Producers use these for domain-specific measurements the standard blocks
/// do not cover; consumers look them up by name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomStat {
    /// Statistic name, producer-defined.
    pub name: String,

    /// Statistic value.
    pub value: CustomValue,
}

impl CustomStat {
    /// Create a numeric custom statistic.
    pub fn num(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value: CustomValue::Num(value),
        }
    }

    /// Create a string custom statistic.
    pub fn str(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: CustomValue::Str(value.into()),
        }
    }

    /// Create a histogram-valued custom statistic.
    pub fn histogram(name: impl Into<String>, histogram: Histogram) -> Self {
        Self {
            name: name.into(),
            value: CustomValue::Histogram(histogram),
        }
    }

    /// Create a rank-histogram-valued custom statistic.
    pub fn rank_histogram(name: impl Into<String>, histogram: RankHistogram) -> Self {
        Self {
            name: name.into(),
            value: CustomValue::RankHistogram(histogram),
        }
    }
}

// =============================================================================
// FeatureStats
// =============================================================================

/// All statistics a producer computed for one feature.
///
/// [`FeatureStats::path`] is the structured location of the feature; legacy
/// producers leave it unset and identify the feature by
/// [`FeatureStats::name`] alone. Exactly one of the per-type blocks is
/// normally populated, matching [`FeatureStats::stats_type`]; struct
/// features populate neither.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureStats {
    /// Feature name. For legacy producers this may be a dotted path.
    pub name: String,

    /// Structured path, when the producer emitted one.
    pub path: Option<Path>,

    /// Statistics type assigned by the producer.
    pub stats_type: StatsType,

    /// Presence and value-count statistics.
    pub common: CommonStats,

    /// Numeric statistics, for numeric features.
    pub num_stats: Option<NumericStats>,

    /// String statistics, for string and byte features.
    pub string_stats: Option<StringStats>,

    /// Producer-defined statistics.
    pub custom_stats: Vec<CustomStat>,
}

impl FeatureStats {
    /// Create a feature record with the given name and type.
    pub fn new(name: impl Into<String>, stats_type: StatsType) -> Self {
        Self {
            name: name.into(),
            stats_type,
            ..Default::default()
        }
    }

    /// Set the structured path.
    pub fn with_path(mut self, path: Path) -> Self {
        self.path = Some(path);
        self
    }

    /// Set the common statistics.
    pub fn with_common(mut self, common: CommonStats) -> Self {
        self.common = common;
        self
    }

    /// Set the numeric statistics block.
    pub fn with_num_stats(mut self, num_stats: NumericStats) -> Self {
        self.num_stats = Some(num_stats);
        self
    }

    /// Set the string statistics block.
    pub fn with_string_stats(mut self, string_stats: StringStats) -> Self {
        self.string_stats = Some(string_stats);
        self
    }

    /// Append a producer-defined statistic.
    pub fn with_custom_stat(mut self, custom_stat: CustomStat) -> Self {
        self.custom_stats.push(custom_stat);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_type_default_is_int() {
        assert_eq!(StatsType::default(), StatsType::Int);
    }

    #[test]
    fn stats_type_is_struct() {
        assert!(StatsType::Struct.is_struct());
        assert!(!StatsType::Int.is_struct());
    }

    #[test]
    fn feature_type_collapses_string_into_bytes() {
        assert_eq!(FeatureType::from(StatsType::Int), FeatureType::Int);
        assert_eq!(FeatureType::from(StatsType::Float), FeatureType::Float);
        assert_eq!(FeatureType::from(StatsType::String), FeatureType::Bytes);
        assert_eq!(FeatureType::from(StatsType::Bytes), FeatureType::Bytes);
        assert_eq!(FeatureType::from(StatsType::Struct), FeatureType::Struct);
    }

    #[test]
    fn common_stats_chain() {
        let common = CommonStats::new(8, 2)
            .with_num_values(1, 3, 1.5)
            .with_total(12)
            .with_weighted(WeightedCommonStats::new(7.5, 2.5).with_num_values(1.4, 10.5));

        assert_eq!(common.num_non_missing, 8);
        assert_eq!(common.min_num_values, 1);
        assert_eq!(common.tot_num_values, 12);
        let weighted = common.weighted.unwrap();
        assert_eq!(weighted.num_non_missing, 7.5);
        assert_eq!(weighted.tot_num_values, 10.5);
    }

    #[test]
    fn feature_stats_chain() {
        let feature = FeatureStats::new("age", StatsType::Int)
            .with_common(CommonStats::new(10, 0))
            .with_num_stats(NumericStats::new(35.0, 4.0).with_range(18.0, 70.0))
            .with_custom_stat(CustomStat::num("drift_score", 0.25));

        assert_eq!(feature.name, "age");
        assert!(feature.path.is_none());
        assert_eq!(feature.num_stats.as_ref().unwrap().min, 18.0);
        assert!(feature.string_stats.is_none());
        assert_eq!(feature.custom_stats.len(), 1);
        assert_eq!(feature.custom_stats[0].value, CustomValue::Num(0.25));
    }

    #[test]
    fn sparse_deserialization_defaults() {
        let feature: FeatureStats = serde_json::from_str(r#"{"name": "f"}"#).unwrap();
        assert_eq!(feature.stats_type, StatsType::Int);
        assert_eq!(feature.common, CommonStats::default());
        assert!(feature.num_stats.is_none());
        assert!(feature.custom_stats.is_empty());

        // Negative minima from older producers must survive deserialization
        // untouched; clamping is a read-side policy.
        let common: CommonStats = serde_json::from_str(r#"{"min_num_values": -3}"#).unwrap();
        assert_eq!(common.min_num_values, -3);
    }

    #[test]
    fn custom_value_serde_tags() {
        let json = serde_json::to_string(&CustomValue::Num(1.5)).unwrap();
        assert_eq!(json, r#"{"num":1.5}"#);

        let value: CustomValue = serde_json::from_str(r#"{"str":"hello"}"#).unwrap();
        assert_eq!(value, CustomValue::Str("hello".into()));
    }
}
