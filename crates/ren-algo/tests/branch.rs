//! Branch decomposition tests

use ren_algo::{branch_nodes, downstream_of, BranchError};
use ren_core::{Link, LinkSet, Meters};

/// Star topology: center `a` linked to `b`, `c`, `d` and nothing else
fn star() -> LinkSet {
    LinkSet::from_links([
        Link::new("a", "b", Meters(1.0)),
        Link::new("a", "c", Meters(2.0)),
        Link::new("a", "d", Meters(3.0)),
    ])
    .unwrap()
}

/// Two-level tree:
///
/// ```text
///         a
///        / \
///       b   c
///      / \   \
///     d   e   f
/// ```
fn two_level_tree() -> LinkSet {
    LinkSet::from_links([
        Link::new("a", "b", Meters(1.0)),
        Link::new("a", "c", Meters(1.0)),
        Link::new("b", "d", Meters(1.0)),
        Link::new("b", "e", Meters(1.0)),
        Link::new("c", "f", Meters(1.0)),
    ])
    .unwrap()
}

#[test]
fn test_chain_from_partial_frontier() {
    let links = LinkSet::from_links([
        Link::new("a", "b", Meters(3.0)),
        Link::new("b", "c", Meters(4.0)),
    ])
    .unwrap();

    let branch = branch_nodes(&links, "a", &["b"]).unwrap();
    assert_eq!(branch, vec!["b", "c"]);
}

#[test]
fn test_star_visits_every_child() {
    let links = star();
    let branch = branch_nodes(&links, "a", &["b", "c", "d"]).unwrap();
    assert_eq!(branch, vec!["b", "c", "d"]);
}

#[test]
fn test_multi_child_branch_points_keep_all_siblings() {
    let links = two_level_tree();

    // both grandchildren of b appear, not just the first
    let branch = branch_nodes(&links, "a", &["b"]).unwrap();
    assert_eq!(branch, vec!["b", "d", "e"]);

    // full frontier drains level by level
    let branch = branch_nodes(&links, "a", &["b", "c"]).unwrap();
    assert_eq!(branch, vec!["b", "c", "d", "e", "f"]);
}

#[test]
fn test_interior_stem_splits_the_tree() {
    let links = two_level_tree();

    // from b, the branch through a is everything on the far side
    let branch = branch_nodes(&links, "b", &["a"]).unwrap();
    assert_eq!(branch, vec!["a", "c", "f"]);

    // while d and e are leaf branches of their own
    assert_eq!(branch_nodes(&links, "b", &["d"]).unwrap(), vec!["d"]);
}

#[test]
fn test_downstream_of_returns_whole_remaining_tree() {
    let links = two_level_tree();
    for stem in ["a", "b", "c", "d", "e", "f"] {
        let mut branch = downstream_of(&links, stem).unwrap();
        branch.sort();

        let mut expected: Vec<String> = ["a", "b", "c", "d", "e", "f"]
            .iter()
            .filter(|&&label| label != stem)
            .map(|&label| label.to_string())
            .collect();
        expected.sort();

        assert_eq!(branch, expected, "stem '{}'", stem);
    }
}

#[test]
fn test_empty_frontier_yields_empty_branch() {
    let links = star();
    assert!(branch_nodes(&links, "a", &[]).unwrap().is_empty());
}

#[test]
fn test_duplicate_frontier_entries_collapse() {
    let links = star();
    let branch = branch_nodes(&links, "a", &["b", "b", "c"]).unwrap();
    assert_eq!(branch, vec!["b", "c"]);
}

#[test]
fn test_frontier_must_neighbor_the_stem() {
    let links = two_level_tree();

    let err = branch_nodes(&links, "a", &["d"]).unwrap_err();
    assert_eq!(
        err,
        BranchError::NotAStemNeighbor {
            frontier: "d".to_string(),
            stem: "a".to_string(),
        }
    );

    // the stem itself is not a valid frontier entry
    let err = branch_nodes(&links, "a", &["a"]).unwrap_err();
    assert!(matches!(err, BranchError::NotAStemNeighbor { .. }));
}

#[test]
fn test_cycle_fails_fast_instead_of_double_counting() {
    let links = LinkSet::from_links([
        Link::new("a", "b", Meters(1.0)),
        Link::new("b", "c", Meters(1.0)),
        Link::new("c", "a", Meters(1.0)),
    ])
    .unwrap();

    let err = branch_nodes(&links, "a", &["b"]).unwrap_err();
    assert!(matches!(err, BranchError::CycleDetected(_)));
}
