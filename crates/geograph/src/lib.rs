//! geograph - Geo-tagged graphs
//!
//! This crate attaches spatial-reference metadata and per-node coordinate
//! arrays to petgraph graphs, so that graph nodes can be read as points in a
//! coordinate system. Graph algorithms stay with petgraph and spatial
//! reference handling stays with PROJ; geograph is only the composition.

pub mod error;
pub mod graph;
pub mod object;

pub use error::{GeographError, Result};
pub use graph::GeoGraph;
pub use object::GeoObject;

pub use geo::Coord;
