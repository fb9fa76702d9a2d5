//! Alignment properties of GeoGraph over arbitrary graphs.

use geograph::{GeoGraph, GeographError};
use petgraph::stable_graph::StableUnGraph;
use proptest::prelude::*;

const WGS84: &str = "+proj=longlat +datum=WGS84";

fn grid_coords(n: usize) -> Vec<(f64, f64)> {
    (0..n).map(|i| (i as f64, (n - i) as f64)).collect()
}

proptest! {
    /// A graph with nodes 0..n and n coords validates, whatever its edges.
    #[test]
    fn complete_coords_always_align(n in 0usize..64, density in 0.0f64..1.0) {
        let mut graph = StableUnGraph::<(), ()>::default();
        let nodes: Vec<_> = (0..n).map(|_| graph.add_node(())).collect();
        for i in 0..n {
            for j in (i + 1)..n {
                // deterministic pseudo-density so the edge set varies with n
                if ((i * 31 + j * 17) % 100) as f64 / 100.0 < density {
                    graph.add_edge(nodes[i], nodes[j], ());
                }
            }
        }

        let g = GeoGraph::from_graph(WGS84, grid_coords(n), graph);
        prop_assert!(g.validate().is_ok());
        prop_assert!(g.is_valid());
    }

    /// Removing any single node breaks alignment (a hole for inner nodes, a
    /// length mismatch for the last one).
    #[test]
    fn removing_any_node_breaks_alignment(n in 1usize..64, pick in any::<prop::sample::Index>()) {
        let mut graph = StableUnGraph::<(), ()>::default();
        let nodes: Vec<_> = (0..n).map(|_| graph.add_node(())).collect();
        graph.remove_node(nodes[pick.index(n)]);

        let g = GeoGraph::from_graph(WGS84, grid_coords(n), graph);
        prop_assert!(matches!(g.validate(), Err(GeographError::NodesCoordsMisaligned)));
    }

    /// Alignment only depends on counts and indices, never on the
    /// coordinate values themselves.
    #[test]
    fn coordinate_values_are_irrelevant(xs in prop::collection::vec((-180.0f64..180.0, -90.0f64..90.0), 0..32)) {
        let n = xs.len();
        let mut graph = StableUnGraph::<(), ()>::default();
        for _ in 0..n {
            graph.add_node(());
        }

        let g = GeoGraph::from_graph(WGS84, xs, graph);
        prop_assert!(g.is_valid());
    }
}

#[test]
fn misalignment_error_carries_the_fixed_message() {
    let g: GeoGraph = GeoGraph::from_edges(WGS84, [(0.0, 0.0), (1.0, 1.0)], [(0, 1), (1, 2)]);
    let err = g.validate().unwrap_err();
    assert_eq!(err.to_string(), "GeoGraph nodes and coords not aligned");
}

#[test]
fn construction_never_validates() {
    // wildly misaligned, but construction succeeds; only validate objects
    let g: GeoGraph = GeoGraph::new(WGS84, grid_coords(5));
    assert_eq!(g.node_count(), 0);
    assert!(!g.is_valid());
}
