pub use crate::builder::GraphBuilder;
pub use crate::directedness::{Directed, Directedness, Undirected};
pub use crate::endpoint_pair::EndpointPair;
pub use crate::graph::{Graph, MutableGraph, NodeId};
pub use crate::set::{MutableSet, Set, SetView};
