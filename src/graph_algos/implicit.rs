use super::{Cost, GraphNodeMap, shortest_path::map_path};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use indexmap::map::Entry::{Occupied, Vacant};
use log::debug;


/// Dijkstra over a graph that is discovered while searching
/// From the start node, expand neighbors on demand until a node meets the goal criteria
/// Returns the path from start to goal together with its cost, or None if no goal is reachable
pub fn dijkstra<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Cost,
    G: Fn(&N) -> bool, // node qualifier for goal
{
    let (node_map, goal_index) = explore(start, neighbors, goal);

    let goal_index = goal_index?;
    let (_, &(_, cost)) = node_map.get_index(goal_index)?;
    Some((map_path(&node_map, goal_index), cost))
}


/// Returns a full map of the graph, includes all (reachable) nodes and costs
pub fn settle_all<N, C, IT, NN>(start: N, neighbors: NN) -> GraphNodeMap<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Cost,
{
    explore(start, neighbors, |_| false).0
}


/// Traverses the graph lowest cost first
/// Returns a map of nodes with their smallest costs along with the index of the goal node
fn explore<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> (GraphNodeMap<N, C>, Option<usize>)
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Cost,
    G: Fn(&N) -> bool,
{
    // binary heap sorts biggest to smallest, Frontier reverses it
    let mut nodes_to_visit: BinaryHeap<Frontier<C>> = BinaryHeap::new();

    // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the map
    let mut nodes_map: GraphNodeMap<N, C> = GraphNodeMap::default();

    let start_index = nodes_map.insert_full(start, (None, C::zero())).0;
    nodes_to_visit.push(Frontier { index: start_index, cost: C::zero() });

    while let Some(Frontier { cost, index }) = nodes_to_visit.pop() {

        let Some((node, &(_, best))) = nodes_map.get_index(index) else {
            continue;
        };

        // A cheaper entry for this node was already expanded
        if cost > best {
            continue;
        }

        if goal_fn(node) {
            debug!("goal reached after discovering {} nodes", nodes_map.len());
            return (nodes_map, Some(index));
        }

        let node = node.clone();
        for (neighbor, edge_cost) in neighbors(&node) {

            let Some(new_cost) = best.checked_add(&edge_cost) else {
                continue;
            };

            let neighbor_index = match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    let neighbor_index = e.index();
                    e.insert((Some(index), new_cost));
                    neighbor_index
                }
                Occupied(mut e) => {
                    if e.get().1 <= new_cost {
                        continue;
                    }
                    e.insert((Some(index), new_cost));
                    e.index()
                }
            };

            nodes_to_visit.push(Frontier { index: neighbor_index, cost: new_cost });
        }
    }

    debug!("search exhausted after discovering {} nodes", nodes_map.len());
    (nodes_map, None)
}


/// Heap entry, only the cost and the map index are needed to order it
#[derive(Debug)]
struct Frontier<T> {
    index: usize,
    cost: T,
}

impl<T: Ord> Ord for Frontier<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost
            .cmp(&self.cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl<T: Ord> PartialOrd for Frontier<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: Ord> PartialEq for Frontier<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T: Ord> Eq for Frontier<T> {}
