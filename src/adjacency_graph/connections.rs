use std::fmt::Debug;

use derivative::Derivative;

use crate::{
    endpoint_pair::EndpointPair,
    graph::NodeId,
    set::{MapSet, MutableSet, Set, Union, union},
    util::other_value,
};

/// The edges touching one node, as stored in an adjacency list.
///
/// The methods taking `node` expect the node these connections belong to.
pub trait NodeConnections<N: NodeId>: Clone + Debug + Default {
    /// Nodes connected to this one by an edge in either direction.
    fn adjacent_nodes(&self) -> Neighbors<'_, N>;

    /// Nodes with an edge into this one.
    fn predecessors(&self) -> &MapSet<N>;

    /// Nodes with an edge out of this one.
    fn successors(&self) -> &MapSet<N>;

    /// Number of edges touching `node`, counting a self-loop once.
    fn degree(&self, node: &N) -> usize;

    /// Records an edge from `node` into this one.  Returns true if it is new.
    fn add_predecessor(&mut self, node: N) -> bool;

    /// Records an edge from this node to `node`.  Returns true if it is new.
    fn add_successor(&mut self, node: N) -> bool;

    fn remove_predecessor(&mut self, node: &N) -> bool;

    fn remove_successor(&mut self, node: &N) -> bool;

    /// Returns true if `edge` is an edge of this graph that touches `node`.
    fn has_incident_edge(&self, node: &N, edge: &EndpointPair<N>) -> bool;

    /// Collects every edge touching `node`, each exactly once.
    fn incident_edges(&self, node: &N) -> Vec<EndpointPair<N>>;
}

/// A borrowed neighbor set: either one stored set, or the union of a
/// directed node's predecessors and successors.
pub enum Neighbors<'a, N> {
    Direct(&'a MapSet<N>),
    Union(Union<N, &'a MapSet<N>, &'a MapSet<N>>),
}

impl<'s, N: NodeId> Set<N> for Neighbors<'s, N> {
    fn contains(&self, item: &N) -> bool {
        match self {
            Neighbors::Direct(set) => set.contains(item),
            Neighbors::Union(set) => set.contains(item),
        }
    }

    fn len(&self) -> usize {
        match self {
            Neighbors::Direct(set) => set.len(),
            Neighbors::Union(set) => set.len(),
        }
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = N> + 'a>
    where
        N: 'a,
    {
        match self {
            Neighbors::Direct(set) => set.iter(),
            Neighbors::Union(set) => set.iter(),
        }
    }
}

/// Connections of a node in an undirected graph: a single neighbor set that
/// serves as predecessors, successors, and adjacent nodes.  A self-loop puts
/// the node in its own neighbor set once.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""), Default(bound = ""))]
pub struct UndirectedConnections<N: NodeId> {
    neighbors: MapSet<N>,
}

impl<N: NodeId> NodeConnections<N> for UndirectedConnections<N> {
    fn adjacent_nodes(&self) -> Neighbors<'_, N> {
        Neighbors::Direct(&self.neighbors)
    }

    fn predecessors(&self) -> &MapSet<N> {
        &self.neighbors
    }

    fn successors(&self) -> &MapSet<N> {
        &self.neighbors
    }

    fn degree(&self, _node: &N) -> usize {
        self.neighbors.len()
    }

    fn add_predecessor(&mut self, node: N) -> bool {
        self.neighbors.add(node)
    }

    fn add_successor(&mut self, node: N) -> bool {
        self.neighbors.add(node)
    }

    fn remove_predecessor(&mut self, node: &N) -> bool {
        self.neighbors.remove(node)
    }

    fn remove_successor(&mut self, node: &N) -> bool {
        self.neighbors.remove(node)
    }

    fn has_incident_edge(&self, node: &N, edge: &EndpointPair<N>) -> bool {
        !edge.is_ordered()
            && other_value(edge.nodes(), node)
                .into_option()
                .is_some_and(|other| self.neighbors.contains(other))
    }

    fn incident_edges(&self, node: &N) -> Vec<EndpointPair<N>> {
        self.neighbors
            .items()
            .map(|neighbor| EndpointPair::unordered(node.clone(), neighbor.clone()))
            .collect()
    }
}

/// Connections of a node in a directed graph.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""), Default(bound = ""))]
pub struct DirectedConnections<N: NodeId> {
    predecessors: MapSet<N>,
    successors: MapSet<N>,
}

impl<N: NodeId> DirectedConnections<N> {
    fn has_self_loop(&self, node: &N) -> bool {
        self.successors.contains(node)
    }
}

impl<N: NodeId> NodeConnections<N> for DirectedConnections<N> {
    fn adjacent_nodes(&self) -> Neighbors<'_, N> {
        Neighbors::Union(union(&self.predecessors, &self.successors))
    }

    fn predecessors(&self) -> &MapSet<N> {
        &self.predecessors
    }

    fn successors(&self) -> &MapSet<N> {
        &self.successors
    }

    fn degree(&self, node: &N) -> usize {
        // A self-loop is both a predecessor and a successor.
        self.predecessors.len() + self.successors.len() - usize::from(self.has_self_loop(node))
    }

    fn add_predecessor(&mut self, node: N) -> bool {
        self.predecessors.add(node)
    }

    fn add_successor(&mut self, node: N) -> bool {
        self.successors.add(node)
    }

    fn remove_predecessor(&mut self, node: &N) -> bool {
        self.predecessors.remove(node)
    }

    fn remove_successor(&mut self, node: &N) -> bool {
        self.successors.remove(node)
    }

    fn has_incident_edge(&self, node: &N, edge: &EndpointPair<N>) -> bool {
        if !edge.is_ordered() {
            return false;
        }
        let (source, target) = edge.nodes();
        (source == node && self.successors.contains(target))
            || (target == node && self.predecessors.contains(source))
    }

    fn incident_edges(&self, node: &N) -> Vec<EndpointPair<N>> {
        let incoming = self
            .predecessors
            .items()
            .map(|predecessor| EndpointPair::ordered(predecessor.clone(), node.clone()));
        let outgoing = self
            .successors
            .items()
            .filter(|successor| *successor != node)
            .map(|successor| EndpointPair::ordered(node.clone(), successor.clone()));
        incoming.chain(outgoing).collect()
    }
}
