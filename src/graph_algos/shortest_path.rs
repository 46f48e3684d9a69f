use super::{Cost, Graph, GraphNodeMap, NodeId};


/// Construct the shortest path to `end` after the graph has been relaxed from `start`
/// Returns the node ids ordered from start to end, or an empty path if `end` was never reached
pub fn shortest_path<C: Cost>(graph: &Graph<C>, start: NodeId, end: NodeId) -> Vec<NodeId> {

    if graph.node(end).previous().is_none() && end != start {
        return Vec::new();
    }

    // Trace back from end to start
    let mut path = Vec::new();
    let mut current = Some(end);
    while let Some(id) = current {
        path.push(id);
        current = graph.node(id).previous();
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}


/// Sum of the edge weights along a path
/// Returns None if two consecutive nodes are not joined by an edge
pub fn path_weight<C: Cost>(graph: &Graph<C>, path: &[NodeId]) -> Option<C> {
    path.windows(2).try_fold(C::zero(), |total, pair| {
        let weight = graph.edge_weight(pair[0], pair[1])?;
        total.checked_add(&weight)
    })
}


/// Construct a path out of a settled node map
/// Returns the nodes ordered from the root to `goal_index`
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
pub(crate) fn map_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Vec<N>
where
    N: Clone,
{
    let mut path = Vec::new();
    let mut current_index = Some(goal_index);

    while let Some(index) = current_index {
        let Some((node, &(parent_index, _))) = node_map.get_index(index) else {
            break;
        };
        path.push(node.clone());
        current_index = parent_index;
    }

    path.reverse();
    path
}
