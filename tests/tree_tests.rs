//! Procedural tree placement tests

use intersection_drive::simulation::{
    back_to_front, place_trees, signal_anchors, TreePlacementConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_placement_predicate() {
    let config = TreePlacementConfig::default();
    let anchors = signal_anchors();

    // On or beside a road centreline
    assert!(!config.is_valid_position(0.0, 100.0, &anchors));
    assert!(!config.is_valid_position(100.0, 14.9, &anchors));
    assert!(!config.is_valid_position(-14.9, -100.0, &anchors));

    // Clear of the roads but too close to the (10, 10.5) signal post
    assert!(!config.is_valid_position(20.0, 20.0, &anchors));
    assert!(config.is_near_signal(20.0, 20.0, &anchors));

    assert!(config.is_valid_position(100.0, 100.0, &anchors));
    assert!(config.is_valid_position(30.0, 25.0, &anchors));
    assert!(config.is_valid_position(-15.0, 40.0, &anchors));
}

#[test]
fn test_every_tree_respects_clearances() {
    let config = TreePlacementConfig::default();
    let anchors = signal_anchors();
    let trees = place_trees(&config, &anchors, &mut StdRng::seed_from_u64(1234));

    assert!(!trees.is_empty());
    assert!(trees.len() <= 1600);

    for tree in &trees {
        assert!(tree.x.abs() >= 15.0, "Tree on north-south road: {:?}", tree);
        assert!(tree.z.abs() >= 15.0, "Tree on west-east road: {:?}", tree);
        for anchor in &anchors {
            let dx = tree.x - anchor.x;
            let dz = tree.z - anchor.z;
            assert!(
                (dx * dx + dz * dz).sqrt() >= 20.0,
                "Tree {:?} too close to signal {:?}",
                tree,
                anchor
            );
        }
        assert!((0.0..360.0).contains(&tree.rotation));
        assert_eq!(tree.rotation, tree.rotation.trunc());
        let step = ((tree.scale - 0.8) / 0.1).round();
        assert!((0.0..=3.0).contains(&step), "Unexpected scale {}", tree.scale);
        assert!((tree.scale - (0.8 + step * 0.1)).abs() < 1e-5);
    }
}

#[test]
fn test_placement_is_reproducible() {
    let config = TreePlacementConfig::default();
    let anchors = signal_anchors();

    let first = place_trees(&config, &anchors, &mut StdRng::seed_from_u64(99));
    let second = place_trees(&config, &anchors, &mut StdRng::seed_from_u64(99));
    assert_eq!(first, second);

    let other = place_trees(&config, &anchors, &mut StdRng::seed_from_u64(100));
    assert_ne!(first, other);
}

#[test]
fn test_unjittered_grid_only_loses_the_corner_by_the_signal() {
    let config = TreePlacementConfig {
        jitter: 0,
        ..TreePlacementConfig::default()
    };
    let anchors = signal_anchors();
    let trees = place_trees(&config, &anchors, &mut StdRng::seed_from_u64(5));

    // 20 x 20 grid points per quadrant; only (20, 20) sits near a signal
    assert_eq!(trees.len(), 4 * 400 - 1);
    assert!(!trees.iter().any(|t| t.x == 20.0 && t.z == 20.0));
    assert!(trees.iter().any(|t| t.x == -1000.0 && t.z == -1000.0));
    assert!(trees.iter().any(|t| t.x == 970.0 && t.z == -50.0));
}

#[test]
fn test_back_to_front_order() {
    let config = TreePlacementConfig::default();
    let anchors = signal_anchors();
    let trees = place_trees(&config, &anchors, &mut StdRng::seed_from_u64(8));
    let original = trees.clone();

    let ordered = back_to_front(&trees);
    assert_eq!(ordered.len(), trees.len());
    for pair in ordered.windows(2) {
        assert!(pair[0].distance_sq_from_origin() >= pair[1].distance_sq_from_origin());
    }
    for tree in &trees {
        assert!(ordered.contains(tree));
    }
    // The placement list keeps its own order
    assert_eq!(trees, original);
}

#[test]
fn test_candidate_count() {
    let config = TreePlacementConfig::default();
    assert_eq!(config.steps_per_axis(), 20);
    assert_eq!(config.candidate_count(), 1600);

    let degenerate = TreePlacementConfig {
        spacing: 0.0,
        ..TreePlacementConfig::default()
    };
    assert_eq!(degenerate.candidate_count(), 0);
}

#[test]
fn test_placement_terminates_for_unvalidated_config() {
    let anchors = signal_anchors();

    // Spacing below the float step at x = 20 would stall an accumulating loop
    let tiny = TreePlacementConfig {
        spacing: 1e-7,
        quadrant_inner: 20.0,
        quadrant_outer: 20.0 + 1e-5,
        ..TreePlacementConfig::default()
    };
    let steps = tiny.steps_per_axis();
    assert!(steps > 0 && steps < 1000, "unexpected step count {}", steps);
    let trees = place_trees(&tiny, &anchors, &mut StdRng::seed_from_u64(2));
    assert!(trees.len() as u64 <= tiny.candidate_count());

    let wild_jitter = TreePlacementConfig {
        jitter: u32::MAX,
        quadrant_inner: 20.0,
        quadrant_outer: 70.0,
        ..TreePlacementConfig::default()
    };
    assert_eq!(wild_jitter.candidate_count(), 4);
    let trees = place_trees(&wild_jitter, &anchors, &mut StdRng::seed_from_u64(2));
    assert!(trees.len() <= 4);
}
