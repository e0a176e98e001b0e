//! Graphs whose accessors return live set views.
//!
//! A graph built with [`GraphBuilder`] hands out [`SetView`]s of its nodes,
//! neighbors, and edges.  A view never copies: every query re-reads the
//! graph, so the view reflects later mutations.
//!
//! ```
//! use livegraph::{Graph, GraphBuilder, MutableGraph, Set};
//!
//! let mut graph = GraphBuilder::directed().build();
//! let successors = graph.successors(&1);
//! assert!(successors.is_empty());
//!
//! graph.put_edge(1, 2);
//! assert!(successors.contains(&2));
//! graph.remove_node(&2);
//! assert!(successors.is_empty());
//! ```

pub mod adjacency_graph;
pub mod builder;
pub mod directedness;
pub mod endpoint_pair;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod set;
pub mod tracing_support;

mod util;

#[cfg(test)]
mod graph_test_support;

pub use crate::adjacency_graph::{AdjacencyListGraph, DirectedGraph, UndirectedGraph};
pub use crate::builder::GraphBuilder;
pub use crate::directedness::{Directed, Directedness, Undirected};
pub use crate::endpoint_pair::EndpointPair;
pub use crate::error::GraphError;
pub use crate::graph::{Graph, MutableGraph, NodeId, graph_equal};
pub use crate::set::{MapSet, MutableSet, Set, SetView};
