//! Constrained-movement shortest path queries
//!
//! A query walks from the top-left to the bottom-right corner of a cost grid,
//! moving in straight runs whose length must lie in `[min_run, max_run)` and
//! turning by 90 degrees after every run. Entering a cell costs its value.

use std::ops::Range;

use log::debug;

use crate::errors::{ConfigError, QueryError};
use crate::geometry::Vector2d;
use crate::graph_algos::{
    Cost, NodeKey, build_graph, corner_nodes, dijkstra, implicit, run_moves, shortest_path, terminal_keys,
};
use crate::grid::{Grid, parse_cost_grid};


/// Permitted straight-run lengths, the half-open range [min_run, max_run)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunLimits {
    min_run: usize,
    max_run: usize,
}

impl RunLimits {
    /// Runs of 1 to 3 cells
    pub const BASIC: RunLimits = RunLimits { min_run: 1, max_run: 4 };

    /// Runs of 4 to 10 cells
    pub const LONG: RunLimits = RunLimits { min_run: 4, max_run: 11 };

    pub fn new(min_run: usize, max_run: usize) -> Result<Self, ConfigError> {
        if min_run < 1 {
            return Err(ConfigError::MinRunTooSmall(min_run));
        }
        if max_run <= min_run {
            return Err(ConfigError::EmptyRunRange { min_run, max_run });
        }
        Ok(Self { min_run, max_run })
    }

    pub fn min_run(&self) -> usize {
        self.min_run
    }

    pub fn max_run(&self) -> usize {
        self.max_run
    }

    pub fn run_lengths(&self) -> Range<usize> {
        self.min_run..self.max_run
    }
}


/// Outcome of a query
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<C> {
    cost: Option<C>,
    path: Vec<NodeKey>,
}

impl<C: Cost> Solution<C> {

    fn unreachable() -> Self {
        Self { cost: None, path: Vec::new() }
    }

    /// Minimum total cost, None if the destination cannot be reached
    pub fn cost(&self) -> Option<C> {
        self.cost
    }

    /// Turning points of the path, from the start corner to the end corner
    /// Each entry is the cell a run ended on and the plane it was entered on.
    pub fn path(&self) -> &[NodeKey] {
        &self.path
    }

    pub fn is_reachable(&self) -> bool {
        self.cost.is_some()
    }
}


/// Cheapest route from the top-left to the bottom-right corner
/// Builds the full two-plane graph, relaxes it, then reads the end node.
pub fn solve<C: Cost>(grid: &Grid<C>, limits: RunLimits) -> Solution<C> {

    let (mut graph, start, end) = build_graph(grid, limits.min_run, limits.max_run);
    dijkstra(&mut graph, start);

    let end_node = graph.node(end);
    if !end_node.is_reached() {
        debug!("no route for runs {:?}", limits.run_lengths());
        return Solution::unreachable();
    }

    let path = shortest_path(&graph, start, end)
        .into_iter()
        .map(|id| graph.key(id))
        .filter(|key| !key.is_synthetic())
        .collect();

    debug!("route for runs {:?} costs {:?}", limits.run_lengths(), end_node.distance());
    Solution { cost: Some(end_node.distance()), path }
}


/// Cheapest route found by expanding moves on demand instead of building the graph
/// Stops as soon as the end is settled, so cheap routes on large grids touch fewer nodes.
/// The cost always matches [`solve`]; when several routes tie, the path may differ.
pub fn solve_lazy<C: Cost>(grid: &Grid<C>, limits: RunLimits) -> Solution<C> {

    let (start_key, end_key) = terminal_keys(grid);
    let last = Vector2d::new(grid.width() as i64 - 1, grid.height() as i64 - 1);
    let first_corner = corner_nodes(grid, Vector2d::new(0, 0));
    let last_corner = corner_nodes(grid, last);

    let neighbors = |key: &NodeKey| -> Vec<(NodeKey, C)> {
        if *key == start_key {
            return first_corner.iter().map(|&corner| (corner, C::zero())).collect();
        }
        let mut moves = run_moves(grid, *key, limits.min_run, limits.max_run);
        if last_corner.contains(key) {
            moves.push((end_key, C::zero()));
        }
        moves
    };

    match implicit::dijkstra(start_key, neighbors, |key| *key == end_key) {
        Some((path, cost)) => Solution {
            cost: Some(cost),
            path: path.into_iter().filter(|key| !key.is_synthetic()).collect(),
        },
        None => Solution::unreachable(),
    }
}


/// Parse a digit grid and solve it with runs of [min_run, max_run)
pub fn solve_str(input: &str, min_run: usize, max_run: usize) -> Result<Solution<u64>, QueryError> {
    let limits = RunLimits::new(min_run, max_run)?;
    let grid: Grid<u64> = parse_cost_grid(input)?;
    Ok(solve(&grid, limits))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ParseError;
    use crate::graph_algos::{Plane, path_weight};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    const EXAMPLE: &str = "
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

    const UNLUCKY: &str = "
111111111111
999999999991
999999999991
999999999991
999999999991
";

    fn random_grid(rng: &mut StdRng) -> Grid<u64> {
        let width = rng.random_range(1..=9);
        let height = rng.random_range(1..=9);
        let mut grid = Grid::new(width, height, 0u64);
        for position in grid.positions().collect::<Vec<_>>() {
            grid.set(position.x, position.y, rng.random_range(1..=9)).unwrap();
        }
        grid
    }

    #[test]
    fn test_example_basic() {
        let solution = solve_str(EXAMPLE, 1, 4).unwrap();
        assert_eq!(solution.cost(), Some(102));
    }

    #[test]
    fn test_example_long() {
        let solution = solve_str(EXAMPLE, 4, 11).unwrap();
        assert_eq!(solution.cost(), Some(94));
    }

    #[test]
    fn test_long_runs_force_detour() {
        // the cheap top row cannot be left early or turned into the last column in time
        let grid: Grid<u64> = parse_cost_grid(UNLUCKY).unwrap();

        assert_eq!(solve(&grid, RunLimits::LONG).cost(), Some(71));
        assert_eq!(solve_lazy(&grid, RunLimits::LONG).cost(), Some(71));
    }

    #[test]
    fn test_single_cell_grid() {
        let grid = Grid::new(1, 1, 7u64);

        for limits in [RunLimits::BASIC, RunLimits::LONG] {
            let solution = solve(&grid, limits);
            assert_eq!(solution.cost(), Some(0));
            assert_eq!(solution.path().len(), 1);
            assert_eq!(solution.path()[0].position, Vector2d::new(0, 0));
        }
    }

    #[test]
    fn test_unreachable_is_not_an_error() {
        // a 2x2 grid needs a run of 1, which the long variant forbids
        let grid = Grid::new(2, 2, 1u64);

        let solution = solve(&grid, RunLimits::LONG);
        assert!(!solution.is_reachable());
        assert_eq!(solution.cost(), None);
        assert!(solution.path().is_empty());
        assert_eq!(solve_lazy(&grid, RunLimits::LONG), solution);
    }

    #[test]
    fn test_costs_beyond_cost_type_are_unreachable() {
        // every route enters at least six cells of 200, far more than u8 holds
        let grid = Grid::new(4, 4, 200u8);

        for limits in [RunLimits::BASIC, RunLimits::LONG] {
            assert_eq!(solve(&grid, limits).cost(), None);
            assert_eq!(solve_lazy(&grid, limits).cost(), None);
        }

        // a single run of 200 still fits
        let grid = Grid::new(2, 1, 200u8);
        assert_eq!(solve(&grid, RunLimits::BASIC).cost(), Some(200));
        assert_eq!(solve_lazy(&grid, RunLimits::BASIC).cost(), Some(200));
    }

    #[test]
    fn test_empty_run_range_is_unreachable_in_graph() {
        let grid: Grid<u64> = parse_cost_grid(EXAMPLE).unwrap();

        for (min_run, max_run) in [(3, 3), (4, 2), (1, 1)] {
            let (mut graph, start, end) = build_graph(&grid, min_run, max_run);
            dijkstra(&mut graph, start);
            assert!(!graph.node(end).is_reached());
            assert!(shortest_path(&graph, start, end).is_empty());
        }
    }

    #[test]
    fn test_run_limits_validation() {
        assert_eq!(RunLimits::new(0, 4), Err(ConfigError::MinRunTooSmall(0)));
        assert_eq!(RunLimits::new(4, 4), Err(ConfigError::EmptyRunRange { min_run: 4, max_run: 4 }));
        assert_eq!(RunLimits::new(1, 4), Ok(RunLimits::BASIC));
        assert_eq!(RunLimits::new(4, 11), Ok(RunLimits::LONG));
        assert_eq!(RunLimits::LONG.run_lengths(), 4..11);
    }

    #[test]
    fn test_solve_str_errors() {
        assert!(matches!(solve_str(EXAMPLE, 2, 1), Err(QueryError::Config(_))));
        assert!(matches!(
            solve_str("12\n3", 1, 4),
            Err(QueryError::Parse(ParseError::Ragged { line: 1, .. }))
        ));
    }

    #[test]
    fn test_path_alternates_planes_and_respects_runs() {
        let grid: Grid<u64> = parse_cost_grid(EXAMPLE).unwrap();

        for limits in [RunLimits::BASIC, RunLimits::LONG] {
            let solution = solve(&grid, limits);
            let path = solution.path();

            assert_eq!(path.first().map(|k| k.position), Some(Vector2d::new(0, 0)));
            assert_eq!(path.last().map(|k| k.position), Some(Vector2d::new(12, 12)));

            let mut total = 0;
            for pair in path.windows(2) {
                let delta = pair[1].position - pair[0].position;
                let length = (delta.x.abs() + delta.y.abs()) as usize;

                // a move is straight, along the source plane, and lands on the other plane
                assert!(delta.x == 0 || delta.y == 0);
                assert!(limits.run_lengths().contains(&length));
                assert_ne!(pair[0].plane, pair[1].plane);
                match pair[0].plane {
                    Plane::Horizontal => assert_eq!(delta.y, 0),
                    Plane::Vertical => assert_eq!(delta.x, 0),
                    Plane::Both => unreachable!(),
                }

                let step = Vector2d::new(delta.x.signum(), delta.y.signum());
                for f in 1..=length as i64 {
                    total += *grid.get_point(pair[0].position + step * f).unwrap();
                }
            }
            assert_eq!(Some(total), solution.cost());
        }
    }

    #[test]
    fn test_path_weight_matches_distance() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..50 {
            let grid = random_grid(&mut rng);
            let (mut graph, start, end) = build_graph(&grid, 1, 4);
            dijkstra(&mut graph, start);

            let path = shortest_path(&graph, start, end);
            if graph.node(end).is_reached() {
                assert_eq!(path_weight(&graph, &path), Some(graph.node(end).distance()));
            } else {
                // single-column or single-row grids taller than one run cannot turn
                assert!(path.is_empty());
            }
        }
    }

    #[test]
    fn test_stricter_minimum_never_cheaper() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..50 {
            let grid = random_grid(&mut rng);
            let costs: Vec<Option<u64>> = (1..5)
                .map(|min_run| solve(&grid, RunLimits::new(min_run, 6).unwrap()).cost())
                .collect();

            for pair in costs.windows(2) {
                if let (Some(looser), Some(stricter)) = (pair[0], pair[1]) {
                    assert!(stricter >= looser, "{costs:?}");
                }
            }
        }
    }

    #[test]
    fn test_repeat_queries_agree() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..30 {
            let grid = random_grid(&mut rng);
            for limits in [RunLimits::BASIC, RunLimits::LONG] {
                let first = solve(&grid, limits);
                let second = solve(&grid, limits);
                assert_eq!(first, second);

                // the lazy search may pick a different route of equal cost
                assert_eq!(solve_lazy(&grid, limits).cost(), first.cost());
            }
        }
    }
}
