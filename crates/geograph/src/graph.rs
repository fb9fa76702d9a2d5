//! A petgraph graph with geo components.
//!
//! [`GeoGraph`] pairs an undirected graph with a [`GeoObject`] whose
//! coordinate array is positionally aligned to node indices: the coordinate
//! of node `i` lives at `coords[i]`. The pairing is a convention, not an
//! enforced invariant — nodes and coordinates may be mutated independently
//! and drift apart; [`GeoGraph::validate`] checks the alignment on demand.

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use geo::Coord;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableUnGraph;
use petgraph::IntoWeightedEdge;
use serde_json::Value;

use crate::error::{GeographError, Result};
use crate::object::GeoObject;

/// An undirected graph whose nodes carry positionally-aligned coordinates
/// in a common spatial reference system.
///
/// Stable node indices are used so that removing a node leaves a hole in the
/// index space instead of renumbering — exactly the kind of drift the
/// alignment check exists to catch.
///
/// The full petgraph surface is available through `Deref`, so graph queries
/// and algorithms run directly on a `GeoGraph`:
///
/// ```
/// use geograph::GeoGraph;
///
/// let g: GeoGraph = GeoGraph::from_edges(
///     "+proj=longlat +datum=WGS84",
///     [(13.4, 52.5), (2.35, 48.86), (-0.13, 51.51)],
///     [(0, 1), (1, 2)],
/// );
/// assert_eq!(g.node_count(), 3);
/// assert!(g.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct GeoGraph<N = (), E = ()> {
    geo: GeoObject<Vec<Coord>>,
    graph: StableUnGraph<N, E>,
    attrs: HashMap<String, Value>,
}

impl<N, E> GeoGraph<N, E> {
    /// Create a geo-tagged graph with no nodes or edges.
    ///
    /// No alignment is checked here or in any constructor: a graph may be
    /// built up (or torn down) out of step with its coordinate array and
    /// only has to line up when `validate` is called.
    pub fn new(srs: impl Into<String>, coords: impl IntoIterator<Item = impl Into<Coord>>) -> Self {
        Self::from_graph(srs, coords, StableUnGraph::default())
    }

    /// Wrap an existing graph together with its coordinate array.
    pub fn from_graph(
        srs: impl Into<String>,
        coords: impl IntoIterator<Item = impl Into<Coord>>,
        graph: StableUnGraph<N, E>,
    ) -> Self {
        Self {
            geo: GeoObject::new(srs, coords.into_iter().map(Into::into).collect()),
            graph,
            attrs: HashMap::new(),
        }
    }

    /// Build the graph from an edge list, creating nodes up to the largest
    /// endpoint index, like [`petgraph::graph::Graph::from_edges`].
    pub fn from_edges<I>(
        srs: impl Into<String>,
        coords: impl IntoIterator<Item = impl Into<Coord>>,
        edges: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: IntoWeightedEdge<E>,
        <I::Item as IntoWeightedEdge<E>>::NodeId: Into<NodeIndex>,
        N: Default,
    {
        Self::from_graph(srs, coords, StableUnGraph::from_edges(edges))
    }

    /// Attach a graph-level attribute, builder style.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Set a graph-level attribute.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Look up a graph-level attribute.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    /// All graph-level attributes.
    pub fn attrs(&self) -> &HashMap<String, Value> {
        &self.attrs
    }

    /// The spatial reference system, as a proj4 string.
    pub fn srs(&self) -> &str {
        &self.geo.srs
    }

    /// The coordinate array, positionally aligned to node indices.
    pub fn coords(&self) -> &[Coord] {
        &self.geo.coords
    }

    /// Mutable access to the coordinate array. Keeping it aligned with the
    /// node set is the caller's responsibility.
    pub fn coords_mut(&mut self) -> &mut Vec<Coord> {
        &mut self.geo.coords
    }

    /// The coordinate of a node, by positional alignment.
    ///
    /// Returns `None` when the index lies outside the coordinate array,
    /// which on a misaligned graph can happen for a live node.
    pub fn node_coord(&self, node: NodeIndex) -> Option<Coord> {
        self.geo.coords.get(node.index()).copied()
    }

    /// The underlying graph.
    pub fn graph(&self) -> &StableUnGraph<N, E> {
        &self.graph
    }

    /// Mutable access to the underlying graph. Adding or removing nodes
    /// without updating `coords` leaves the graph misaligned until fixed.
    pub fn graph_mut(&mut self) -> &mut StableUnGraph<N, E> {
        &mut self.graph
    }

    /// Whether the spatial reference system is geographic. Delegates to
    /// [`GeoObject::is_geographic`]; a malformed `srs` is an error.
    pub fn is_geographic(&self) -> Result<bool> {
        self.geo.is_geographic()
    }

    /// Check that node indices and the coordinate array are aligned: the
    /// sorted node indices must be exactly `0..coords.len()`.
    ///
    /// Useful after a graph has had its coords or nodes modified. Pure and
    /// idempotent; fails with [`GeographError::NodesCoordsMisaligned`].
    pub fn validate(&self) -> Result<()> {
        let mut ids: Vec<usize> = self.graph.node_indices().map(NodeIndex::index).collect();
        ids.sort_unstable();

        if !ids.iter().copied().eq(0..self.geo.coords.len()) {
            tracing::debug!(
                nodes = ids.len(),
                coords = self.geo.coords.len(),
                "GeoGraph alignment check failed"
            );
            return Err(GeographError::NodesCoordsMisaligned);
        }
        Ok(())
    }

    /// Boolean form of [`GeoGraph::validate`].
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl<N, E> Deref for GeoGraph<N, E> {
    type Target = StableUnGraph<N, E>;

    fn deref(&self) -> &Self::Target {
        &self.graph
    }
}

impl<N, E> DerefMut for GeoGraph<N, E> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.graph
    }
}
