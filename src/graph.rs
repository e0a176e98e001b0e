use std::{
    fmt::{self, Debug, Display, Formatter},
    hash::Hash,
};

use crate::{
    directedness::Directedness,
    endpoint_pair::EndpointPair,
    error::{GraphError, fail},
    set::{Set, SetView, equal, fmt_set},
};

/// A trait representing a node in a graph.
///
/// This trait has no methods and is implemented for every type with
/// equality, hashing, cloning, and formatting.  Nodes are stored by value, so
/// cheap-to-clone types work best.  Error messages name nodes by their
/// `Display` form.
pub trait NodeId: Eq + Hash + Clone + Debug + Display + 'static {}

impl<T> NodeId for T where T: Eq + Hash + Clone + Debug + Display + 'static {}

/// A trait representing a directed or undirected graph.
///
/// Accessors that return sets return live views: the view keeps reading the
/// graph's current state, so two reads separated by a mutation can differ.
/// Queries about a node that is not in the graph return an empty set or
/// zero; use `nodes().contains(node)` to tell an absent node from a
/// disconnected one.
pub trait Graph {
    type Node: NodeId;
    type Directedness: Directedness;

    /// Returns true if the graph is directed.
    fn is_directed(&self) -> bool {
        Self::Directedness::is_directed()
    }

    /// Returns true if edges from a node to itself are allowed.
    fn allows_self_loops(&self) -> bool;

    // Nodes

    /// Gets a view of all nodes in the graph.
    fn nodes(&self) -> SetView<Self::Node>;

    /// Gets a view of the nodes connected to `node` by an edge in either
    /// direction.
    fn adjacent_nodes(&self, node: &Self::Node) -> SetView<Self::Node>;

    /// Gets a view of the nodes with an edge into `node`.  In an undirected
    /// graph this is the same as [`Self::adjacent_nodes`].
    fn predecessors(&self, node: &Self::Node) -> SetView<Self::Node>;

    /// Gets a view of the nodes with an edge out of `node`.  In an undirected
    /// graph this is the same as [`Self::adjacent_nodes`].
    fn successors(&self, node: &Self::Node) -> SetView<Self::Node>;

    // Edges

    /// Gets a view of all edges in the graph.
    fn edges(&self) -> SetView<EndpointPair<Self::Node>>;

    /// Gets a view of the edges touching `node`.
    fn incident_edges(&self, node: &Self::Node) -> SetView<EndpointPair<Self::Node>>;

    /// Gets the number of edges touching `node`.  A self-loop counts once.
    fn degree(&self, node: &Self::Node) -> usize {
        self.incident_edges(node).len()
    }

    /// Gets the number of edges into `node`.
    fn in_degree(&self, node: &Self::Node) -> usize {
        self.predecessors(node).len()
    }

    /// Gets the number of edges out of `node`.
    fn out_degree(&self, node: &Self::Node) -> usize {
        self.successors(node).len()
    }

    /// Checks if there is an edge from `node_u` to `node_v`.  In an
    /// undirected graph the order of the arguments does not matter.
    fn has_edge_connecting(&self, node_u: &Self::Node, node_v: &Self::Node) -> bool {
        self.successors(node_u).contains(node_v)
    }

    /// Checks if the edge named by `endpoints` exists.  Returns false if the
    /// pair's ordering does not match the graph's directedness.
    fn has_edge_connecting_pair(&self, endpoints: &EndpointPair<Self::Node>) -> bool {
        self.is_ordering_compatible(endpoints)
            && self.has_edge_connecting(endpoints.node_u(), endpoints.node_v())
    }

    /// Returns true if `endpoints` is ordered exactly when the graph is
    /// directed.
    fn is_ordering_compatible(&self, endpoints: &EndpointPair<Self::Node>) -> bool {
        endpoints.is_ordered() == self.is_directed()
    }

    /// Checks that `endpoints` can name an edge of this graph.
    fn validate_endpoints(&self, endpoints: &EndpointPair<Self::Node>) -> Result<(), GraphError> {
        if self.is_ordering_compatible(endpoints) {
            Ok(())
        } else {
            Err(GraphError::EndpointOrderingMismatch {
                pair: endpoints.to_string(),
            })
        }
    }
}

/// A trait for graphs that support mutation operations.
pub trait MutableGraph: Graph {
    /// Adds a node with no edges.  Returns false if it was already present.
    fn add_node(&mut self, node: Self::Node) -> bool;

    /// Adds an edge from `node_u` to `node_v`, adding either node if it is
    /// missing.  Returns true if the edge is new.  Fails if the edge is a
    /// self-loop and the graph does not allow them.
    fn try_put_edge(&mut self, node_u: Self::Node, node_v: Self::Node) -> Result<bool, GraphError>;

    /// Like [`Self::try_put_edge`], but panics on a disallowed self-loop.
    #[track_caller]
    fn put_edge(&mut self, node_u: Self::Node, node_v: Self::Node) -> bool {
        self.try_put_edge(node_u, node_v)
            .unwrap_or_else(|error| fail(error))
    }

    /// Adds the edge named by `endpoints`.  Fails if the pair's ordering does
    /// not match the graph's directedness.
    fn try_put_edge_pair(&mut self, endpoints: EndpointPair<Self::Node>) -> Result<bool, GraphError> {
        self.validate_endpoints(&endpoints)?;
        let (node_u, node_v) = endpoints.into_nodes();
        self.try_put_edge(node_u, node_v)
    }

    /// Like [`Self::try_put_edge_pair`], but panics on failure.
    #[track_caller]
    fn put_edge_pair(&mut self, endpoints: EndpointPair<Self::Node>) -> bool {
        self.try_put_edge_pair(endpoints)
            .unwrap_or_else(|error| fail(error))
    }

    /// Removes a node and every edge touching it.  Returns false if the node
    /// was not present.
    fn remove_node(&mut self, node: &Self::Node) -> bool;

    /// Removes the edge from `node_u` to `node_v`.  Returns false if there was
    /// no such edge.
    fn remove_edge(&mut self, node_u: &Self::Node, node_v: &Self::Node) -> bool;

    /// Removes the edge named by `endpoints`.  Fails if the pair's ordering
    /// does not match the graph's directedness.
    fn try_remove_edge_pair(
        &mut self,
        endpoints: &EndpointPair<Self::Node>,
    ) -> Result<bool, GraphError> {
        self.validate_endpoints(endpoints)?;
        Ok(self.remove_edge(endpoints.node_u(), endpoints.node_v()))
    }

    /// Like [`Self::try_remove_edge_pair`], but panics on failure.
    #[track_caller]
    fn remove_edge_pair(&mut self, endpoints: &EndpointPair<Self::Node>) -> bool {
        self.try_remove_edge_pair(endpoints)
            .unwrap_or_else(|error| fail(error))
    }
}

/// Compares two graphs: both directed or both undirected, with equal node
/// sets and equal edge sets.  Self-loop policy is not compared.
pub fn graph_equal<G1, G2>(a: &G1, b: &G2) -> bool
where
    G1: Graph,
    G2: Graph<Node = G1::Node>,
{
    a.is_directed() == b.is_directed()
        && equal(&a.nodes(), &b.nodes())
        && equal(&a.edges(), &b.edges())
}

/// Writes `isDirected: .., allowsSelfLoops: .., nodes: [..], edges: [..]`.
pub fn fmt_graph<G: Graph>(graph: &G, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
        f,
        "isDirected: {}, allowsSelfLoops: {}, nodes: ",
        graph.is_directed(),
        graph.allows_self_loops()
    )?;
    fmt_set(&graph.nodes(), f)?;
    f.write_str(", edges: ")?;
    fmt_set(&graph.edges(), f)
}
