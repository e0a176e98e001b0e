use std::collections::HashSet;
use std::hash::Hash;

use quickcheck::{Arbitrary, Gen};

use crate::prelude::*;
use crate::set;
use crate::tracing_support::{info_span, init_tracing};
use crate::{AdjacencyListGraph, graph_equal};

/// A small random graph over `u8` nodes, for property tests.
#[derive(Debug, Clone)]
pub struct ArbGraph<D: Directedness> {
    pub graph: AdjacencyListGraph<u8, D>,
}

impl<D: Directedness> Arbitrary for ArbGraph<D> {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_nodes = usize::arbitrary(g) % 20; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 50;
        let allows_self_loops = bool::arbitrary(g);

        let mut graph = AdjacencyListGraph::with_config(allows_self_loops, num_nodes);
        for _ in 0..num_nodes {
            graph.add_node(u8::arbitrary(g) % 32);
        }
        let nodes: Vec<u8> = graph.nodes().iter().collect();
        if nodes.is_empty() {
            return ArbGraph { graph };
        }

        for _ in 0..num_edges {
            let source = nodes[usize::arbitrary(g) % nodes.len()];
            let target = nodes[usize::arbitrary(g) % nodes.len()];
            if source != target || allows_self_loops {
                graph.put_edge(source, target);
            }
        }

        ArbGraph { graph }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let graph = self.graph.clone();
        let nodes: Vec<u8> = graph.nodes().iter().collect();
        Box::new(nodes.into_iter().map(move |node| {
            let mut smaller = graph.clone();
            smaller.remove_node(&node);
            ArbGraph { graph: smaller }
        }))
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Checks that every view of a graph agrees with every other view, and with
/// the graph's own bookkeeping.
pub fn check_graph_consistency<N: NodeId, D: Directedness>(graph: &AdjacencyListGraph<N, D>) {
    init_tracing();
    let _span = info_span!("check_graph_consistency").entered();

    assert_eq!(graph.check_consistency(), Ok(()));

    let nodes = graph.nodes();
    assert!(!has_duplicates(nodes.iter()));
    assert_eq!(nodes.iter().count(), nodes.len());

    let edges = graph.edges();
    assert!(!has_duplicates(edges.iter()));
    assert_eq!(edges.iter().count(), edges.len());

    let mut degree_sum = 0;
    let mut self_loops = 0;
    for node in nodes.iter() {
        assert!(nodes.contains(&node));

        let adjacent = graph.adjacent_nodes(&node);
        let predecessors = graph.predecessors(&node);
        let successors = graph.successors(&node);
        let incident = graph.incident_edges(&node);
        for view in [&adjacent, &predecessors, &successors] {
            assert!(!has_duplicates(view.iter()));
            assert_eq!(view.iter().count(), view.len());
            assert!(view.iter().all(|other| nodes.contains(&other)));
        }
        assert!(!has_duplicates(incident.iter()));
        assert_eq!(incident.iter().count(), incident.len());

        assert_eq!(graph.degree(&node), incident.len());
        assert_eq!(graph.in_degree(&node), predecessors.len());
        assert_eq!(graph.out_degree(&node), successors.len());

        for successor in successors.iter() {
            assert!(graph.has_edge_connecting(&node, &successor));
            assert!(graph.predecessors(&successor).contains(&node));
            assert!(adjacent.contains(&successor));
            let edge = D::endpoints(node.clone(), successor.clone());
            assert!(edges.contains(&edge));
            assert!(incident.contains(&edge));
            assert!(graph.has_edge_connecting_pair(&edge));
        }
        for predecessor in predecessors.iter() {
            assert!(graph.successors(&predecessor).contains(&node));
            assert!(adjacent.contains(&predecessor));
        }
        for edge in incident.iter() {
            assert!(edge.contains(&node));
            assert!(edges.contains(&edge));
        }
        if !graph.is_directed() {
            assert!(set::equal(&adjacent, &successors));
            assert!(set::equal(&adjacent, &predecessors));
        }

        degree_sum += incident.len();
        if graph.has_edge_connecting(&node, &node) {
            self_loops += 1;
        }
    }

    // Every edge touches two nodes, except a self-loop, which touches one.
    assert_eq!(degree_sum + self_loops, 2 * edges.len());

    for edge in edges.iter() {
        assert_eq!(edge.is_ordered(), graph.is_directed());
        assert!(graph.has_edge_connecting(edge.node_u(), edge.node_v()));
        if !graph.is_directed() {
            assert!(graph.has_edge_connecting(edge.node_v(), edge.node_u()));
        }
        if !graph.allows_self_loops() {
            assert!(edge.node_u() != edge.node_v());
        }
    }

    assert!(graph_equal(graph, &graph.clone()));
}
