//! Comparison snapshot integration tests.
//!
//! Covers wiring previous/serving views through the builder and resolving
//! features across snapshots by path, the way drift and skew checks do.

use statview::stats::DatasetStats;
use statview::testing::{event_log_stats, previous_event_log_stats};
use statview::{DatasetView, Path};

#[test]
fn previous_features_resolve_by_path() {
    let previous_stats = previous_event_log_stats();
    let current_stats = event_log_stats();

    let view = DatasetView::builder(&current_stats)
        .previous(DatasetView::new(&previous_stats))
        .build();

    let age = view.get_by_path(&Path::new(["user", "age"])).unwrap();
    let before = age.previous().unwrap();

    assert_eq!(before.num_present(), 780.0);
    assert_eq!(before.path(), age.path());
    assert_eq!(before.num_examples(), 800.0);
}

#[test]
fn serving_features_resolve_by_path() {
    let serving_stats = previous_event_log_stats();
    let current_stats = event_log_stats();

    let view = DatasetView::builder(&current_stats)
        .serving(DatasetView::new(&serving_stats))
        .build();

    let country = view.get_by_path(&Path::new(["country"])).unwrap();
    let served = country.serving().unwrap();

    assert_eq!(served.string_values_with_counts()["US"], 550.0);
    assert!(country.previous().is_none());
}

#[test]
fn missing_path_in_snapshot_is_absent_not_error() {
    // The previous snapshot predates `event.latency_ms`.
    let previous_stats = previous_event_log_stats();
    let current_stats = event_log_stats();

    let view = DatasetView::builder(&current_stats)
        .previous(DatasetView::new(&previous_stats))
        .build();

    let latency = view.get_by_path(&Path::new(["event", "latency_ms"])).unwrap();
    assert!(latency.previous().is_none());
}

#[test]
fn unconfigured_snapshots_are_absent_everywhere() {
    let stats = event_log_stats();
    let view = DatasetView::new(&stats);

    assert!(view.previous().is_none());
    assert!(view.serving().is_none());
    for feature in view.features() {
        assert!(feature.previous().is_none());
        assert!(feature.serving().is_none());
    }
}

#[test]
fn drift_check_reads_both_snapshots() {
    let previous_stats = previous_event_log_stats();
    let current_stats = event_log_stats();

    let view = DatasetView::builder(&current_stats)
        .previous(DatasetView::new(&previous_stats))
        .build();

    let event_type = view.get_by_path(&Path::new(["event", "type"])).unwrap();
    let now = event_type.string_values_with_counts();
    let before = event_type.previous().unwrap().string_values_with_counts();

    // A value that only shows up in the current span.
    assert!(now.contains_key("purchase"));
    assert!(!before.contains_key("purchase"));
    assert!(before.contains_key("click"));
}

#[test]
fn comparison_views_keep_their_own_configuration() {
    // Weighted current view over an unweighted previous snapshot: each
    // side answers from its own construction.
    let previous_stats = previous_event_log_stats();
    let current_stats = event_log_stats();

    let view = DatasetView::builder(&current_stats)
        .by_weight(true)
        .previous(DatasetView::new(&previous_stats))
        .build();

    assert_eq!(view.num_examples(), 980.0);
    assert_eq!(view.previous().unwrap().num_examples(), 800.0);

    let age = view.get_by_path(&Path::new(["user", "age"])).unwrap();
    assert_eq!(age.num_present(), 965.0);
    assert_eq!(age.previous().unwrap().num_present(), 780.0);
}

#[test]
fn comparison_chains_compose() {
    let day0 = DatasetStats::new("day0", 1);
    let day1 = DatasetStats::new("day1", 2);
    let day2 = DatasetStats::new("day2", 3);

    let view0 = DatasetView::new(&day0);
    let view1 = DatasetView::builder(&day1).previous(view0).build();
    let view2 = DatasetView::builder(&day2).previous(view1).build();

    let back_two = view2.previous().unwrap().previous().unwrap();
    assert_eq!(back_two.num_examples(), 1.0);
    assert!(back_two.previous().is_none());
}

#[test]
fn environment_does_not_affect_snapshot_lookup() {
    let previous_stats = previous_event_log_stats();
    let current_stats = event_log_stats();

    let view = DatasetView::builder(&current_stats)
        .environment("SERVING")
        .previous(DatasetView::builder(&previous_stats).environment("TRAINING").build())
        .build();

    assert_eq!(view.environment(), Some("SERVING"));
    let before = view.previous().unwrap();
    assert_eq!(before.environment(), Some("TRAINING"));

    let age = view.get_by_path(&Path::new(["user", "age"])).unwrap();
    assert_eq!(age.environment(), Some("SERVING"));
    assert_eq!(age.previous().unwrap().environment(), Some("TRAINING"));
}
