use std::{
    cell::RefCell,
    collections::HashMap,
    fmt::{self, Debug, Display, Formatter},
    rc::Rc,
};

pub use self::connections::{
    DirectedConnections, NodeConnections, Neighbors, UndirectedConnections,
};
pub use self::views::{EdgeSet, IncidentEdgeSet, NeighborKind, NeighborSet, NodeSet};
use crate::{
    directedness::{Directed, Directedness, Undirected},
    endpoint_pair::EndpointPair,
    error::GraphError,
    graph::{Graph, MutableGraph, NodeId, fmt_graph},
    set::{Set, SetView},
    tracing_support::{info_span, trace},
};

mod connections;
mod views;

/// An undirected [`AdjacencyListGraph`].
pub type UndirectedGraph<N> = AdjacencyListGraph<N, Undirected>;

/// A directed [`AdjacencyListGraph`].
pub type DirectedGraph<N> = AdjacencyListGraph<N, Directed>;

/// The state shared between a graph and its views.
pub(crate) type SharedAdjacency<N, D> = Rc<RefCell<Adjacency<N, D>>>;

/// A map from each node to its connections, plus the number of edges.
///
/// Invariant: `v` is a successor of `u` if and only if `u` is a predecessor
/// of `v`, and `edge_count` is the number of distinct edges those relations
/// describe.
pub(crate) struct Adjacency<N: NodeId, D: Directedness> {
    connections: HashMap<N, D::Connections<N>>,
    edge_count: usize,
}

impl<N: NodeId, D: Directedness> Adjacency<N, D> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            connections: HashMap::with_capacity(capacity),
            edge_count: 0,
        }
    }

    fn has_edge(&self, node_u: &N, node_v: &N) -> bool {
        self.connections
            .get(node_u)
            .is_some_and(|connections| connections.successors().contains(node_v))
    }

    fn degree(&self, node: &N) -> usize {
        self.connections
            .get(node)
            .map_or(0, |connections| connections.degree(node))
    }
}

/// A graph stored as a map from each node to the set of its neighbors.
///
/// All accessors return live views that share the adjacency map with the
/// graph.  The graph is the only thing that mutates the map.  It is not
/// thread-safe: one owner mutates it, and views are read on the same thread.
///
/// Graphs are created with [`GraphBuilder`](crate::GraphBuilder).  Cloning a
/// graph copies its contents; views of the original do not see the copy.
///
/// # Type Parameters
/// * `N` - The node type
/// * `D` - The directedness ([`Directed`] or [`Undirected`])
pub struct AdjacencyListGraph<N: NodeId, D: Directedness> {
    adjacency: SharedAdjacency<N, D>,
    allows_self_loops: bool,
}

impl<N: NodeId, D: Directedness> AdjacencyListGraph<N, D> {
    pub(crate) fn with_config(allows_self_loops: bool, expected_node_count: usize) -> Self {
        Self {
            adjacency: Rc::new(RefCell::new(Adjacency::with_capacity(expected_node_count))),
            allows_self_loops,
        }
    }

    /// Checks that every edge is recorded at both of its ends and that the
    /// edge counter matches the adjacency lists, returning a reason if not.
    /// This operation scans the whole graph.
    pub fn check_consistency(&self) -> Result<(), &'static str> {
        let adjacency = self.adjacency.borrow();
        let mut scanned_edges = 0;
        for (node, connections) in &adjacency.connections {
            for successor in connections.successors().items() {
                let Some(other) = adjacency.connections.get(successor) else {
                    return Err("successor is not a node of the graph");
                };
                if !other.predecessors().contains(node) {
                    return Err("successor does not list the node as a predecessor");
                }
                if D::is_directed() || successor == node {
                    scanned_edges += 2;
                } else {
                    scanned_edges += 1;
                }
            }
            for predecessor in connections.predecessors().items() {
                let Some(other) = adjacency.connections.get(predecessor) else {
                    return Err("predecessor is not a node of the graph");
                };
                if !other.successors().contains(node) {
                    return Err("predecessor does not list the node as a successor");
                }
            }
            if !self.allows_self_loops && connections.successors().contains(node) {
                return Err("self-loop in a graph that does not allow them");
            }
        }
        if scanned_edges / 2 != adjacency.edge_count {
            return Err("edge count does not match the adjacency lists");
        }
        Ok(())
    }
}

impl<N: NodeId, D: Directedness> Graph for AdjacencyListGraph<N, D> {
    type Node = N;
    type Directedness = D;

    fn allows_self_loops(&self) -> bool {
        self.allows_self_loops
    }

    fn nodes(&self) -> SetView<N> {
        Box::new(NodeSet::new(self.adjacency.clone()))
    }

    fn adjacent_nodes(&self, node: &N) -> SetView<N> {
        Box::new(NeighborSet::new(
            self.adjacency.clone(),
            node.clone(),
            NeighborKind::Adjacent,
        ))
    }

    fn predecessors(&self, node: &N) -> SetView<N> {
        Box::new(NeighborSet::new(
            self.adjacency.clone(),
            node.clone(),
            NeighborKind::Predecessors,
        ))
    }

    fn successors(&self, node: &N) -> SetView<N> {
        Box::new(NeighborSet::new(
            self.adjacency.clone(),
            node.clone(),
            NeighborKind::Successors,
        ))
    }

    fn edges(&self) -> SetView<EndpointPair<N>> {
        Box::new(EdgeSet::new(self.adjacency.clone()))
    }

    fn incident_edges(&self, node: &N) -> SetView<EndpointPair<N>> {
        Box::new(IncidentEdgeSet::new(self.adjacency.clone(), node.clone()))
    }

    fn degree(&self, node: &N) -> usize {
        self.adjacency.borrow().degree(node)
    }

    fn in_degree(&self, node: &N) -> usize {
        self.adjacency
            .borrow()
            .connections
            .get(node)
            .map_or(0, |connections| connections.predecessors().len())
    }

    fn out_degree(&self, node: &N) -> usize {
        self.adjacency
            .borrow()
            .connections
            .get(node)
            .map_or(0, |connections| connections.successors().len())
    }

    fn has_edge_connecting(&self, node_u: &N, node_v: &N) -> bool {
        self.adjacency.borrow().has_edge(node_u, node_v)
    }
}

impl<N: NodeId, D: Directedness> MutableGraph for AdjacencyListGraph<N, D> {
    fn add_node(&mut self, node: N) -> bool {
        let mut adjacency = self.adjacency.borrow_mut();
        if adjacency.connections.contains_key(&node) {
            return false;
        }
        trace!(?node, "add_node");
        adjacency.connections.insert(node, Default::default());
        true
    }

    fn try_put_edge(&mut self, node_u: N, node_v: N) -> Result<bool, GraphError> {
        if !self.allows_self_loops && node_u == node_v {
            return Err(GraphError::SelfLoopsNotAllowed {
                node: node_u.to_string(),
            });
        }
        let mut guard = self.adjacency.borrow_mut();
        let adjacency = &mut *guard;
        let is_new = adjacency
            .connections
            .entry(node_u.clone())
            .or_default()
            .add_successor(node_v.clone());
        trace!(?node_u, ?node_v, is_new, "put_edge");
        adjacency
            .connections
            .entry(node_v)
            .or_default()
            .add_predecessor(node_u);
        if is_new {
            adjacency.edge_count += 1;
        }
        Ok(is_new)
    }

    fn remove_node(&mut self, node: &N) -> bool {
        let _span = info_span!("remove_node").entered();
        let mut guard = self.adjacency.borrow_mut();
        let adjacency = &mut *guard;
        let Some(removed) = adjacency.connections.remove(node) else {
            return false;
        };
        for successor in removed.successors().items().filter(|&other| other != node) {
            if let Some(connections) = adjacency.connections.get_mut(successor) {
                connections.remove_predecessor(node);
            }
        }
        if D::is_directed() {
            for predecessor in removed.predecessors().items().filter(|&other| other != node) {
                if let Some(connections) = adjacency.connections.get_mut(predecessor) {
                    connections.remove_successor(node);
                }
            }
        }
        let degree = removed.degree(node);
        adjacency.edge_count -= degree;
        trace!(?node, degree, "remove_node");
        true
    }

    fn remove_edge(&mut self, node_u: &N, node_v: &N) -> bool {
        let mut guard = self.adjacency.borrow_mut();
        let adjacency = &mut *guard;
        let removed = adjacency
            .connections
            .get_mut(node_u)
            .is_some_and(|connections| connections.remove_successor(node_v));
        if let Some(connections) = adjacency.connections.get_mut(node_v) {
            connections.remove_predecessor(node_u);
        }
        if removed {
            adjacency.edge_count -= 1;
            trace!(?node_u, ?node_v, "remove_edge");
        }
        removed
    }
}

impl<N: NodeId, D: Directedness> Clone for AdjacencyListGraph<N, D> {
    fn clone(&self) -> Self {
        let adjacency = self.adjacency.borrow();
        Self {
            adjacency: Rc::new(RefCell::new(Adjacency {
                connections: adjacency.connections.clone(),
                edge_count: adjacency.edge_count,
            })),
            allows_self_loops: self.allows_self_loops,
        }
    }
}

impl<N: NodeId, D: Directedness> Display for AdjacencyListGraph<N, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_graph(self, f)
    }
}

impl<N: NodeId, D: Directedness> Debug for AdjacencyListGraph<N, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        struct DebugSet<T: 'static>(SetView<T>);

        impl<T: Debug> Debug for DebugSet<T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_set().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("AdjacencyListGraph")
            .field("is_directed", &self.is_directed())
            .field("allows_self_loops", &self.allows_self_loops)
            .field("nodes", &DebugSet(self.nodes()))
            .field("edges", &DebugSet(self.edges()))
            .finish()
    }
}
