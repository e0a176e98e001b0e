use std::marker::PhantomData;

use derivative::Derivative;

use crate::{
    adjacency_graph::AdjacencyListGraph,
    directedness::{Directed, Directedness, Undirected},
    graph::{Graph, NodeId},
};

/// Configures and creates [`AdjacencyListGraph`]s.
///
/// ```
/// use livegraph::{GraphBuilder, Graph, MutableGraph};
///
/// let mut graph = GraphBuilder::undirected().allows_self_loops(true).build();
/// graph.put_edge("a", "a");
/// assert_eq!(graph.degree(&"a"), 1);
/// ```
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Copy(bound = ""), Debug(bound = ""))]
pub struct GraphBuilder<D: Directedness> {
    allows_self_loops: bool,
    expected_node_count: Option<usize>,
    #[derivative(Debug = "ignore")]
    directedness: PhantomData<D>,
}

impl GraphBuilder<Undirected> {
    /// A builder for undirected graphs that do not allow self-loops.
    pub fn undirected() -> Self {
        Self::new()
    }
}

impl GraphBuilder<Directed> {
    /// A builder for directed graphs that do not allow self-loops.
    pub fn directed() -> Self {
        Self::new()
    }
}

impl<D: Directedness> GraphBuilder<D> {
    fn new() -> Self {
        Self {
            allows_self_loops: false,
            expected_node_count: None,
            directedness: PhantomData,
        }
    }

    /// A builder with the same directedness and self-loop policy as `graph`.
    /// The graph's contents are not copied.
    pub fn from_graph<G>(graph: &G) -> Self
    where
        G: Graph<Directedness = D>,
    {
        Self::new().allows_self_loops(graph.allows_self_loops())
    }

    pub fn allows_self_loops(mut self, allows_self_loops: bool) -> Self {
        self.allows_self_loops = allows_self_loops;
        self
    }

    /// Reserves room for `count` nodes up front.
    pub fn expected_node_count(mut self, count: usize) -> Self {
        self.expected_node_count = Some(count);
        self
    }

    /// Creates an empty graph with this configuration.  The builder can be
    /// reused afterwards.
    pub fn build<N: NodeId>(&self) -> AdjacencyListGraph<N, D> {
        AdjacencyListGraph::with_config(
            self.allows_self_loops,
            self.expected_node_count.unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::MutableGraph;

    #[test]
    fn test_defaults() {
        let graph = GraphBuilder::undirected().build::<i32>();
        assert!(!graph.is_directed());
        assert!(!graph.allows_self_loops());
        assert!(graph.nodes().is_empty());

        let graph = GraphBuilder::directed().expected_node_count(16).build::<i32>();
        assert!(graph.is_directed());
        assert!(graph.nodes().is_empty());
    }

    #[test]
    fn test_builder_is_reusable() {
        let builder = GraphBuilder::directed().allows_self_loops(true);
        let mut first = builder.build::<i32>();
        let second = builder.build::<i32>();
        first.put_edge(1, 1);
        assert!(second.allows_self_loops());
        assert!(second.nodes().is_empty());
    }

    #[test]
    fn test_from_graph() {
        let graph = GraphBuilder::undirected().allows_self_loops(true).build::<&str>();
        let copy = GraphBuilder::from_graph(&graph).build::<u64>();
        assert!(!copy.is_directed());
        assert!(copy.allows_self_loops());
    }

    #[test]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", GraphBuilder::directed()),
            "GraphBuilder { allows_self_loops: false, expected_node_count: None }"
        );
    }
}
