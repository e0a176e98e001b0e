/// Contract violations reported by graphs and endpoint pairs.
///
/// These are programmer errors.  The plain methods ([`source`], [`put_edge`],
/// ...) panic with the error's message; the `try_` forms return it.  Queries
/// about nodes that are not in a graph are never errors.
///
/// [`source`]: crate::EndpointPair::source
/// [`put_edge`]: crate::MutableGraph::put_edge
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GraphError {
    /// `source()` or `target()` was called on an unordered pair.
    #[error(
        "Cannot call source()/target() on an EndpointPair from an undirected graph. \
         Consider calling adjacent_node(node) if you already have a node, \
         or node_u()/node_v() if you don't."
    )]
    UnorderedEndpoints,
    /// `adjacent_node()` was called with a node that is neither endpoint.
    #[error("EndpointPair {pair} does not contain node {node}")]
    NotAnEndpoint { pair: String, node: String },
    /// A self-loop was added to a graph that does not allow them.
    #[error(
        "Cannot add self-loop edge on node {node}, as self-loops are not allowed. \
         To construct a graph that allows self-loops, call allows_self_loops(true) \
         on the builder."
    )]
    SelfLoopsNotAllowed { node: String },
    /// An ordered pair was given to an undirected graph, or the reverse.
    #[error(
        "Mismatch: endpoints' ordering is not compatible with directionality of the graph: {pair}"
    )]
    EndpointOrderingMismatch { pair: String },
}

/// Logs a contract violation and panics with its message.
#[track_caller]
pub(crate) fn fail(error: GraphError) -> ! {
    crate::tracing_support::debug!(%error, "graph contract violation");
    panic!("{}", error)
}
