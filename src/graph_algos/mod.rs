mod builder;
mod dijkstra;
mod graph;
mod shortest_path;
pub mod implicit;

use std::fmt::Debug;
use num_traits::{Bounded, CheckedAdd, Zero};

use crate::collections::FxIndexMap;

pub use builder::{build_graph, terminal_keys};
pub(crate) use builder::{corner_nodes, run_moves};
pub use dijkstra::dijkstra;
pub use graph::{Edge, Graph, Node, NodeId, NodeKey, Plane};
pub use shortest_path::{path_weight, shortest_path};


/// Edge weights and path distances
/// `max_value()` is reserved as the distance of unreached nodes
pub trait Cost: Zero + Bounded + CheckedAdd + Ord + Copy + Debug {}

impl<T> Cost for T where T: Zero + Bounded + CheckedAdd + Ord + Copy + Debug {}


/// Type alias for the node map used by the implicit search
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map, None for the start node
/// - cost is the total cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (Option<usize>, C)>;
