use std::fmt::Debug;

use crate::{
    adjacency_graph::{DirectedConnections, NodeConnections, UndirectedConnections},
    endpoint_pair::EndpointPair,
    graph::NodeId,
};

/// Marker type representing directed graph edges.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Directed;

/// Marker type representing undirected graph edges.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Undirected;

/// Trait defining the directedness behavior of graph edges.
///
/// This trait is implemented by [`Directed`] and [`Undirected`] marker types
/// to provide compile-time specialization of graph behavior: how each node's
/// neighbors are stored, and whether edges are ordered [`EndpointPair`]s.
pub trait Directedness: Copy + Debug + Default + 'static {
    type Connections<N: NodeId>: NodeConnections<N>;

    fn is_directed() -> bool;

    /// Makes the endpoint pair of an edge from `node_u` to `node_v`.
    fn endpoints<N>(node_u: N, node_v: N) -> EndpointPair<N> {
        if Self::is_directed() {
            EndpointPair::ordered(node_u, node_v)
        } else {
            EndpointPair::unordered(node_u, node_v)
        }
    }
}

impl Directedness for Directed {
    type Connections<N: NodeId> = DirectedConnections<N>;

    fn is_directed() -> bool {
        true
    }
}

impl Directedness for Undirected {
    type Connections<N: NodeId> = UndirectedConnections<N>;

    fn is_directed() -> bool {
        false
    }
}
