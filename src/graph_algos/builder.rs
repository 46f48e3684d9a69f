use crate::geometry::Vector2d;
use crate::grid::Grid;
use super::{Cost, Graph, NodeId, NodeKey, Plane};

use log::debug;


/// Build the two-plane movement graph for a grid of entry costs
/// Returns the graph along with the synthetic start and end nodes
///
/// Every cell gets one node per plane. A horizontal node only leaves east or west
/// and always lands on a vertical node, and vice versa, so every move is followed
/// by a turn. A move is a straight run of `f` cells with `f` in [min_run, max_run),
/// weighted by the summed entry cost of the cells it enters.
///
/// The start node (top-left, outside the grid) and the end node (bottom-right,
/// outside the grid) sit on `Plane::Both` and are joined by zero-weight edges to
/// both planes of their corner cell.
///
/// The run limits are taken as given: `max_run <= min_run` produces a graph
/// whose end node cannot be reached.
pub fn build_graph<C: Cost>(grid: &Grid<C>, min_run: usize, max_run: usize) -> (Graph<C>, NodeId, NodeId) {

    let mut graph = Graph::with_capacity(grid.width() * grid.height() * 2 + 2);

    // Cell nodes first so their ids follow row-major order
    for (position, &cost) in grid.positions().zip(grid.rows().flatten()) {
        graph.add_node(NodeKey::new(position, Plane::Horizontal), cost);
        graph.add_node(NodeKey::new(position, Plane::Vertical), cost);
    }

    let cell_ids: Vec<NodeId> = graph.ids().collect();
    for from in cell_ids {
        for (target, weight) in run_moves(grid, graph.key(from), min_run, max_run) {
            if let Some(to) = graph.id_of(&target) {
                graph.add_edge(from, to, weight);
            }
        }
    }

    let (start_key, end_key) = terminal_keys(grid);
    let start = graph.add_node(start_key, C::zero());
    let end = graph.add_node(end_key, C::zero());

    for corner in corner_nodes(grid, Vector2d::new(0, 0)) {
        if let Some(id) = graph.id_of(&corner) {
            graph.add_edge(start, id, C::zero());
        }
    }
    let last = Vector2d::new(grid.width() as i64 - 1, grid.height() as i64 - 1);
    for corner in corner_nodes(grid, last) {
        if let Some(id) = graph.id_of(&corner) {
            graph.add_edge(id, end, C::zero());
        }
    }

    debug!(
        "built {}x{} graph with runs [{}, {}): {} nodes, {} edges",
        grid.width(), grid.height(), min_run, max_run, graph.len(), graph.edge_count()
    );

    (graph, start, end)
}


/// Keys of the synthetic start and end nodes for a grid
pub fn terminal_keys<C>(grid: &Grid<C>) -> (NodeKey, NodeKey) {
    let start = NodeKey::new(Vector2d::new(-1, -1), Plane::Both);
    let end = NodeKey::new(Vector2d::new(grid.width() as i64, grid.height() as i64), Plane::Both);
    (start, end)
}


/// Both plane nodes of a cell, or nothing if the cell is outside the grid
pub(crate) fn corner_nodes<C>(grid: &Grid<C>, position: Vector2d) -> Vec<NodeKey> {
    if !grid.contains_point(position) {
        return Vec::new();
    }
    vec![
        NodeKey::new(position, Plane::Horizontal),
        NodeKey::new(position, Plane::Vertical),
    ]
}


/// Every run leaving `from`, as (landing node, accumulated cost)
/// A direction is abandoned as soon as the run leaves the grid or its cost
/// no longer fits `C`, since longer runs only cost more.
pub(crate) fn run_moves<C: Cost>(grid: &Grid<C>, from: NodeKey, min_run: usize, max_run: usize) -> Vec<(NodeKey, C)> {

    let Some(axis) = from.plane.axis() else {
        return Vec::new();
    };
    let landing = Plane::from(axis.other());

    let mut moves = Vec::new();
    for direction in axis.directions() {
        let step = direction.as_vector();
        let mut cost = C::zero();

        for run in 1..max_run {
            let position = from.position + step * run as i64;
            let Ok(&entry) = grid.get_point(position) else {
                break;
            };
            let Some(total) = cost.checked_add(&entry) else {
                break;
            };
            cost = total;

            if run >= min_run {
                moves.push((NodeKey::new(position, landing), cost));
            }
        }
    }
    moves
}
