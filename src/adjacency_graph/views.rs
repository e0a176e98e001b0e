//! Live views over the adjacency map shared with an [`AdjacencyListGraph`].
//!
//! Each view holds a handle to the shared map plus any fixed parameters, and
//! recomputes every answer from the map's current state.  Iteration collects
//! one pass under a short borrow, so the graph may be mutated while an
//! iterator is alive; the change shows up on the next call to `iter`.
//!
//! [`AdjacencyListGraph`]: super::AdjacencyListGraph

use std::{
    collections::HashSet,
    fmt::{self, Display, Formatter},
};

use derivative::Derivative;

use crate::{
    adjacency_graph::{NodeConnections, SharedAdjacency, connections::Neighbors},
    directedness::Directedness,
    endpoint_pair::EndpointPair,
    graph::NodeId,
    set::{Set, fmt_set},
};

/// The graph's nodes.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct NodeSet<N: NodeId, D: Directedness> {
    adjacency: SharedAdjacency<N, D>,
}

impl<N: NodeId, D: Directedness> NodeSet<N, D> {
    pub(crate) fn new(adjacency: SharedAdjacency<N, D>) -> Self {
        Self { adjacency }
    }
}

impl<N: NodeId, D: Directedness> Set<N> for NodeSet<N, D> {
    fn contains(&self, item: &N) -> bool {
        self.adjacency.borrow().connections.contains_key(item)
    }

    fn len(&self) -> usize {
        self.adjacency.borrow().connections.len()
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = N> + 'a>
    where
        N: 'a,
    {
        let nodes: Vec<N> = self.adjacency.borrow().connections.keys().cloned().collect();
        Box::new(nodes.into_iter())
    }
}

/// Which neighbors of a node a [`NeighborSet`] reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NeighborKind {
    Adjacent,
    Predecessors,
    Successors,
}

impl NeighborKind {
    fn select<N: NodeId, C: NodeConnections<N>>(self, connections: &C) -> Neighbors<'_, N> {
        match self {
            NeighborKind::Adjacent => connections.adjacent_nodes(),
            NeighborKind::Predecessors => Neighbors::Direct(connections.predecessors()),
            NeighborKind::Successors => Neighbors::Direct(connections.successors()),
        }
    }
}

/// The neighbors of one fixed node.  Every call looks the node up again, so
/// the view follows edges added to or removed from it, and is empty while
/// the node is absent from the graph.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct NeighborSet<N: NodeId, D: Directedness> {
    adjacency: SharedAdjacency<N, D>,
    node: N,
    kind: NeighborKind,
}

impl<N: NodeId, D: Directedness> NeighborSet<N, D> {
    pub(crate) fn new(adjacency: SharedAdjacency<N, D>, node: N, kind: NeighborKind) -> Self {
        Self {
            adjacency,
            node,
            kind,
        }
    }

    fn read<R>(&self, absent: R, f: impl FnOnce(Neighbors<'_, N>) -> R) -> R {
        match self.adjacency.borrow().connections.get(&self.node) {
            Some(connections) => f(self.kind.select(connections)),
            None => absent,
        }
    }
}

impl<N: NodeId, D: Directedness> Set<N> for NeighborSet<N, D> {
    fn contains(&self, item: &N) -> bool {
        self.read(false, |neighbors| neighbors.contains(item))
    }

    fn len(&self) -> usize {
        self.read(0, |neighbors| neighbors.len())
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = N> + 'a>
    where
        N: 'a,
    {
        let neighbors: Vec<N> = self.read(Vec::new(), |neighbors| neighbors.iter().collect());
        Box::new(neighbors.into_iter())
    }
}

/// The edges touching one fixed node.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct IncidentEdgeSet<N: NodeId, D: Directedness> {
    adjacency: SharedAdjacency<N, D>,
    node: N,
}

impl<N: NodeId, D: Directedness> IncidentEdgeSet<N, D> {
    pub(crate) fn new(adjacency: SharedAdjacency<N, D>, node: N) -> Self {
        Self { adjacency, node }
    }

    fn read<R>(&self, absent: R, f: impl FnOnce(&D::Connections<N>) -> R) -> R {
        self.adjacency
            .borrow()
            .connections
            .get(&self.node)
            .map_or(absent, f)
    }
}

impl<N: NodeId, D: Directedness> Set<EndpointPair<N>> for IncidentEdgeSet<N, D> {
    fn contains(&self, item: &EndpointPair<N>) -> bool {
        self.read(false, |connections| {
            connections.has_incident_edge(&self.node, item)
        })
    }

    fn len(&self) -> usize {
        self.read(0, |connections| connections.degree(&self.node))
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = EndpointPair<N>> + 'a>
    where
        EndpointPair<N>: 'a,
    {
        let edges = self.read(Vec::new(), |connections| {
            connections.incident_edges(&self.node)
        });
        Box::new(edges.into_iter())
    }
}

/// Every edge of the graph.  The length comes from the graph's edge counter
/// rather than a scan.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct EdgeSet<N: NodeId, D: Directedness> {
    adjacency: SharedAdjacency<N, D>,
}

impl<N: NodeId, D: Directedness> EdgeSet<N, D> {
    pub(crate) fn new(adjacency: SharedAdjacency<N, D>) -> Self {
        Self { adjacency }
    }
}

impl<N: NodeId, D: Directedness> Set<EndpointPair<N>> for EdgeSet<N, D> {
    fn contains(&self, item: &EndpointPair<N>) -> bool {
        item.is_ordered() == D::is_directed()
            && self.adjacency.borrow().has_edge(item.node_u(), item.node_v())
    }

    fn len(&self) -> usize {
        self.adjacency.borrow().edge_count
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = EndpointPair<N>> + 'a>
    where
        EndpointPair<N>: 'a,
    {
        let adjacency = self.adjacency.borrow();
        let mut edges = Vec::with_capacity(adjacency.edge_count);
        // An undirected edge is reached from both of its ends.
        let mut seen = HashSet::new();
        for (node, connections) in &adjacency.connections {
            for successor in connections.successors().items() {
                let edge = D::endpoints(node.clone(), successor.clone());
                if D::is_directed() || seen.insert(edge.clone()) {
                    edges.push(edge);
                }
            }
        }
        Box::new(edges.into_iter())
    }
}

impl<N: NodeId, D: Directedness> Display for NodeSet<N, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_set(self, f)
    }
}

impl<N: NodeId, D: Directedness> Display for NeighborSet<N, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_set(self, f)
    }
}

impl<N: NodeId, D: Directedness> Display for IncidentEdgeSet<N, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_set(self, f)
    }
}

impl<N: NodeId, D: Directedness> Display for EdgeSet<N, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_set(self, f)
    }
}
