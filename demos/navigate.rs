//! Feature-tree navigation example.
//!
//! Builds a view over a synthetic event-log snapshot together with its
//! previous span, then walks the feature tree and reads per-feature
//! presence and drift information the way a validation pass would.
//!
//! Run with:
//! ```bash
//! cargo run --example navigate
//! ```

use statview::testing::{event_log_stats, previous_event_log_stats};
use statview::{DatasetView, FeatureView, Path};

fn main() {
    // =========================================================================
    // 1. Build the Views
    // =========================================================================
    let previous_stats = previous_event_log_stats();
    let current_stats = event_log_stats();

    let view = DatasetView::builder(&current_stats)
        .environment("TRAINING")
        .previous(DatasetView::new(&previous_stats))
        .build();

    println!("dataset: {} examples", view.num_examples());
    println!("environment: {:?}", view.environment());
    println!("weighted statistics: {}\n", view.weighted_stats_exist());

    // =========================================================================
    // 2. Walk the Feature Tree
    // =========================================================================
    println!("=== Feature tree ===");
    for root in view.root_features() {
        print_subtree(&root, 0);
    }

    // =========================================================================
    // 3. Read One Feature in Depth
    // =========================================================================
    let age = view
        .get_by_path(&Path::new(["user", "age"]))
        .expect("fixture has user.age");

    println!("\n=== user.age ===");
    println!("type: {:?}", age.feature_type());
    println!("present in {} of {} examples", age.num_present(), age.num_examples());
    println!("missing: {}", age.num_missing());
    println!("values per example: {}..{}", age.min_num_values(), age.max_num_values());
    println!("mean: {:.1}, median: {:.1}", age.num_stats().mean, age.num_stats().median);

    // =========================================================================
    // 4. Compare Against the Previous Span
    // =========================================================================
    println!("\n=== Drift against previous span ===");
    for feature in view.features() {
        match feature.previous() {
            None => println!("{}: not in previous span", feature.path()),
            Some(before) => {
                let now = feature.fraction_present().unwrap_or(0.0);
                let then = before.fraction_present().unwrap_or(0.0);
                println!("{}: presence {:.3} -> {:.3}", feature.path(), then, now);
            }
        }
    }
}

/// Print a feature and its subtree, indented by depth.
fn print_subtree(feature: &FeatureView<'_>, depth: usize) {
    let pad = "  ".repeat(depth);
    let presence = match feature.fraction_present() {
        Some(fraction) => format!("{:.1}%", fraction * 100.0),
        None => "n/a".to_string(),
    };
    println!(
        "{pad}{} [{:?}] present: {presence}",
        feature.path().last_step().unwrap_or("<root>"),
        feature.stats_type()
    );
    for child in feature.children() {
        print_subtree(&child, depth + 1);
    }
}
