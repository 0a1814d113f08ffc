//! Synthetic statistics fixtures.
//!
//! Shared by unit tests, integration tests, benches and the demos. These
//! build [`DatasetStats`] records a statistics pipeline could plausibly have
//! produced, deterministically, so tests can assert exact values.

use crate::path::Path;
use crate::stats::{
    Bucket, CommonStats, CustomStat, DatasetStats, FeatureStats, FreqAndValue, Histogram,
    NumericStats, RankHistogram, StatsType, StringStats, WeightedCommonStats,
    WeightedNumericStats, WeightedStringStats,
};

/// A snapshot of a small event-log dataset with nested features, string
/// features and full weighted parity.
///
/// Layout:
///
/// ```text
/// event            STRUCT
/// event.type       STRING
/// event.latency_ms FLOAT
/// user             STRUCT
/// user.age         INT
/// country          STRING
/// ```
pub fn event_log_stats() -> DatasetStats {
    let weighted = |non_missing: f64, missing: f64, avg: f64| {
        WeightedCommonStats::new(non_missing, missing).with_num_values(avg, avg * non_missing)
    };

    DatasetStats::new("train", 1000)
        .with_weighted_total(980.0)
        .with_feature(
            FeatureStats::new("event", StatsType::Struct).with_common(
                CommonStats::new(1000, 0)
                    .with_num_values(1, 1, 1.0)
                    .with_total(1000)
                    .with_weighted(weighted(980.0, 0.0, 1.0)),
            ),
        )
        .with_feature(
            FeatureStats::new("event.type", StatsType::String)
                .with_common(
                    CommonStats::new(1000, 0)
                        .with_num_values(1, 1, 1.0)
                        .with_total(1000)
                        .with_weighted(weighted(980.0, 0.0, 1.0)),
                )
                .with_string_stats(
                    StringStats::new(3)
                        .with_avg_length(5.2)
                        .with_top_value(FreqAndValue::new("click", 600.0))
                        .with_rank_histogram(RankHistogram::from_counts([
                            ("click", 600.0),
                            ("view", 300.0),
                            ("purchase", 100.0),
                        ]))
                        .with_weighted(WeightedStringStats::new(RankHistogram::from_counts([
                            ("click", 588.0),
                            ("view", 294.0),
                            ("purchase", 98.0),
                        ]))),
                ),
        )
        .with_feature(
            FeatureStats::new("event.latency_ms", StatsType::Float)
                .with_common(
                    CommonStats::new(950, 50)
                        .with_num_values(1, 1, 1.0)
                        .with_total(950)
                        .with_weighted(weighted(931.0, 49.0, 1.0)),
                )
                .with_num_stats(
                    NumericStats::new(120.0, 35.0)
                        .with_median(110.0)
                        .with_range(5.0, 900.0)
                        .with_histogram(Histogram::standard(vec![
                            Bucket::new(5.0, 452.5, 940.0),
                            Bucket::new(452.5, 900.0, 10.0),
                        ]))
                        .with_weighted(WeightedNumericStats::new(118.0, 34.0).with_median(108.0)),
                )
                .with_custom_stat(CustomStat::num("p99_latency_ms", 410.0)),
        )
        .with_feature(
            FeatureStats::new("user", StatsType::Struct).with_common(
                CommonStats::new(990, 10)
                    .with_num_values(1, 1, 1.0)
                    .with_total(990)
                    .with_weighted(weighted(970.0, 10.0, 1.0)),
            ),
        )
        .with_feature(
            FeatureStats::new("user.age", StatsType::Int)
                .with_common(
                    CommonStats::new(985, 15)
                        .with_num_values(1, 1, 1.0)
                        .with_total(985)
                        .with_weighted(weighted(965.0, 15.0, 1.0)),
                )
                .with_num_stats(
                    NumericStats::new(34.5, 12.0)
                        .with_median(32.0)
                        .with_range(13.0, 88.0)
                        .with_num_zeros(0),
                ),
        )
        .with_feature(
            FeatureStats::new("country", StatsType::String)
                .with_common(
                    CommonStats::new(1000, 0)
                        .with_num_values(1, 1, 1.0)
                        .with_total(1000)
                        .with_weighted(weighted(980.0, 0.0, 1.0)),
                )
                .with_string_stats(
                    StringStats::new(2)
                        .with_rank_histogram(RankHistogram::from_counts([
                            ("US", 700.0),
                            ("NL", 300.0),
                        ]))
                        .with_weighted(WeightedStringStats::new(RankHistogram::from_counts([
                            ("US", 686.0),
                            ("NL", 294.0),
                        ]))),
                ),
        )
}

/// An earlier snapshot of the same event-log dataset, for comparison views.
///
/// Differs from [`event_log_stats`] in its counts and drops
/// `event.latency_ms` entirely, so lookups of that feature in this snapshot
/// come back empty.
pub fn previous_event_log_stats() -> DatasetStats {
    DatasetStats::new("train-previous", 800)
        .with_feature(
            FeatureStats::new("event", StatsType::Struct).with_common(CommonStats::new(800, 0)),
        )
        .with_feature(
            FeatureStats::new("event.type", StatsType::String)
                .with_common(CommonStats::new(800, 0))
                .with_string_stats(
                    StringStats::new(2).with_rank_histogram(RankHistogram::from_counts([
                        ("click", 500.0),
                        ("view", 300.0),
                    ])),
                ),
        )
        .with_feature(
            FeatureStats::new("user", StatsType::Struct).with_common(CommonStats::new(790, 10)),
        )
        .with_feature(
            FeatureStats::new("user.age", StatsType::Int)
                .with_common(CommonStats::new(780, 20))
                .with_num_stats(NumericStats::new(33.0, 11.5).with_range(14.0, 85.0)),
        )
        .with_feature(
            FeatureStats::new("country", StatsType::String)
                .with_common(CommonStats::new(800, 0))
                .with_string_stats(
                    StringStats::new(2).with_rank_histogram(RankHistogram::from_counts([
                        ("US", 550.0),
                        ("NL", 250.0),
                    ])),
                ),
        )
}

/// A complete `branching`-ary feature tree, `depth` levels deep: every
/// level but the last is struct features, the last level is int leaves.
///
/// Feature count is `branching + branching^2 + ... + branching^depth`, so
/// it grows geometrically with depth; benches use this to size view
/// construction. Paths are emitted through the structured path field.
pub fn synthetic_tree_stats(depth: usize, branching: usize) -> DatasetStats {
    fn push_level(
        stats: &mut DatasetStats,
        parent: &Path,
        level: usize,
        depth: usize,
        branching: usize,
    ) {
        for i in 0..branching {
            let path = parent.child(format!("f{i}"));
            if level < depth {
                stats.features.push(
                    FeatureStats::new(path.to_string(), StatsType::Struct)
                        .with_path(path.clone())
                        .with_common(CommonStats::new(100, 0)),
                );
                push_level(stats, &path, level + 1, depth, branching);
            } else {
                stats.features.push(
                    FeatureStats::new(path.to_string(), StatsType::Int)
                        .with_path(path.clone())
                        .with_common(CommonStats::new(95, 5).with_num_values(1, 1, 1.0)),
                );
            }
        }
    }

    let mut stats = DatasetStats::new("synthetic", 100);
    push_level(&mut stats, &Path::empty(), 1, depth, branching);
    stats
}
