use std::{
    fmt::{self, Debug, Display, Formatter},
    hash::{Hash, Hasher},
};

use crate::{
    error::{GraphError, fail},
    util::{other_value, unordered_hash},
};

/// The two endpoints of one edge.
///
/// An ordered pair is a directed edge from [`Self::source`] to
/// [`Self::target`].  An unordered pair is an undirected edge with no
/// intrinsic direction; two unordered pairs are equal if they hold the same
/// nodes in either order.  An ordered pair never equals an unordered one.
///
/// [`Self::node_u`] and [`Self::node_v`] return the nodes in the order they
/// were given, whether or not the pair is ordered.  Pairs whose two nodes are
/// the same (self-loops) are legal values.
#[derive(Clone, Copy)]
pub struct EndpointPair<N> {
    node_u: N,
    node_v: N,
    is_ordered: bool,
}

impl<N> EndpointPair<N> {
    /// Creates a pair for a directed edge from `source` to `target`.
    pub fn ordered(source: N, target: N) -> Self {
        Self {
            node_u: source,
            node_v: target,
            is_ordered: true,
        }
    }

    /// Creates a pair for an undirected edge between `node_u` and `node_v`.
    pub fn unordered(node_u: N, node_v: N) -> Self {
        Self {
            node_u,
            node_v,
            is_ordered: false,
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.is_ordered
    }

    pub fn node_u(&self) -> &N {
        &self.node_u
    }

    pub fn node_v(&self) -> &N {
        &self.node_v
    }

    /// Both nodes, in construction order.
    pub fn nodes(&self) -> (&N, &N) {
        (&self.node_u, &self.node_v)
    }

    pub fn into_nodes(self) -> (N, N) {
        (self.node_u, self.node_v)
    }

    /// Gets the source of an ordered pair.
    pub fn try_source(&self) -> Result<&N, GraphError> {
        if self.is_ordered {
            Ok(&self.node_u)
        } else {
            Err(GraphError::UnorderedEndpoints)
        }
    }

    /// Gets the target of an ordered pair.
    pub fn try_target(&self) -> Result<&N, GraphError> {
        if self.is_ordered {
            Ok(&self.node_v)
        } else {
            Err(GraphError::UnorderedEndpoints)
        }
    }

    /// Gets the source of an ordered pair.  Panics if the pair is unordered.
    #[track_caller]
    pub fn source(&self) -> &N {
        self.try_source().unwrap_or_else(|error| fail(error))
    }

    /// Gets the target of an ordered pair.  Panics if the pair is unordered.
    #[track_caller]
    pub fn target(&self) -> &N {
        self.try_target().unwrap_or_else(|error| fail(error))
    }

    /// Returns true if `node` is one of the two endpoints.
    pub fn contains(&self, node: &N) -> bool
    where
        N: PartialEq,
    {
        self.node_u == *node || self.node_v == *node
    }

    /// Given one endpoint, returns the other.  The error names the pair and
    /// the node by their `Display` forms.
    pub fn try_adjacent_node(&self, node: &N) -> Result<&N, GraphError>
    where
        N: PartialEq + Display,
    {
        other_value(self.nodes(), node)
            .into_option()
            .ok_or_else(|| GraphError::NotAnEndpoint {
                pair: self.to_string(),
                node: node.to_string(),
            })
    }

    /// Given one endpoint, returns the other.  Panics if `node` is neither
    /// endpoint.
    #[track_caller]
    pub fn adjacent_node(&self, node: &N) -> &N
    where
        N: PartialEq + Display,
    {
        self.try_adjacent_node(node)
            .unwrap_or_else(|error| fail(error))
    }

    /// Writes `<u -> v>` or `[u, v]` using `fmt_node` for each node.
    fn fmt_with(
        &self,
        f: &mut Formatter<'_>,
        fmt_node: impl Fn(&N, &mut Formatter<'_>) -> fmt::Result,
    ) -> fmt::Result {
        let (open, separator, close) = if self.is_ordered {
            ("<", " -> ", ">")
        } else {
            ("[", ", ", "]")
        };
        f.write_str(open)?;
        fmt_node(&self.node_u, f)?;
        f.write_str(separator)?;
        fmt_node(&self.node_v, f)?;
        f.write_str(close)
    }
}

impl<N: PartialEq> PartialEq for EndpointPair<N> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_ordered, other.is_ordered) {
            (true, true) => self.node_u == other.node_u && self.node_v == other.node_v,
            (false, false) => {
                (self.node_u == other.node_u && self.node_v == other.node_v)
                    || (self.node_u == other.node_v && self.node_v == other.node_u)
            }
            _ => false,
        }
    }
}

impl<N: Eq> Eq for EndpointPair<N> {}

impl<N: Hash> Hash for EndpointPair<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_ordered.hash(state);
        if self.is_ordered {
            self.node_u.hash(state);
            self.node_v.hash(state);
        } else {
            state.write_u64(unordered_hash(&self.node_u, &self.node_v));
        }
    }
}

impl<N: Display> Display for EndpointPair<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, |node, f| Display::fmt(node, f))
    }
}

impl<N: Debug> Debug for EndpointPair<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, |node, f| Debug::fmt(node, f))
    }
}
