use super::{Cost, Edge, Graph, NodeId};

use std::{collections::BinaryHeap, cmp::Ordering};
use log::{debug, trace};


/// Single-source shortest paths with Dijkstra's algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// Relaxes the whole graph reachable from `start`, writing distances, predecessors
/// and the finalized flag onto the nodes. Nodes that stay unreached keep a distance
/// of `C::max_value()`, which callers must check for.
///
/// The frontier is a binary heap without decrease-key: an improved node is pushed
/// again and its outdated entry is dropped when popped after the node was finalized.
/// Entries with equal distance pop in node id order, so reruns are deterministic.
pub fn dijkstra<C: Cost>(graph: &mut Graph<C>, start: NodeId) {

    let source = graph.node_mut(start);
    source.distance = C::zero();
    source.previous = None;

    let mut frontier: BinaryHeap<QueueEntry<C>> = BinaryHeap::new();
    frontier.push(QueueEntry { id: start, distance: C::zero() });

    let mut settled = 0usize;
    let mut stale = 0usize;

    while let Some(QueueEntry { id, distance }) = frontier.pop() {

        let node = graph.node_mut(id);
        if node.finalized {
            stale += 1;
            continue;
        }
        node.finalized = true;
        settled += 1;
        trace!("settled node {} at distance {:?}", id.index(), distance);

        for edge_index in 0..graph.node(id).edges.len() {
            let Edge { weight, target } = graph.node(id).edges[edge_index];

            // a sum that does not fit the cost type is never shorter than what is known
            let Some(candidate) = distance.checked_add(&weight) else {
                continue;
            };

            let target_node = graph.node_mut(target);
            if candidate < target_node.distance {
                target_node.distance = candidate;
                target_node.previous = Some(id);

                if !target_node.finalized {
                    frontier.push(QueueEntry { id: target, distance: candidate });
                }
            }
        }
    }

    debug!("dijkstra settled {} of {} nodes, skipped {} stale entries", settled, graph.len(), stale);
}


/// Frontier entry
/// - ordered so the max-heap pops the smallest distance, then the smallest id
#[derive(Debug, Clone, Copy)]
struct QueueEntry<C> {
    id: NodeId,
    distance: C,
}

impl<C: Ord> Ord for QueueEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance
            .cmp(&self.distance)
            .then_with(|| other.id.cmp(&self.id))
    }
}
impl<C: Ord> PartialOrd for QueueEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: Ord> PartialEq for QueueEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<C: Ord> Eq for QueueEntry<C> {}
