//! Shortest paths over 2D cost grids with run-length constrained movement
//!
//! Movement happens in straight runs whose length must fall in `[min_run, max_run)`,
//! and every run must be followed by a 90 degree turn. Instead of tracking direction
//! and run length while searching, each cell is split into a horizontal and a vertical
//! node and only runs that land on the other plane are turned into edges.
//!
//! ```
//! use gridnav::{RunLimits, parse_cost_grid, solve};
//!
//! let grid = parse_cost_grid::<u64>("1111\n9991\n9991").unwrap();
//! assert_eq!(solve(&grid, RunLimits::BASIC).cost(), Some(5));
//! ```
//!
//! The building blocks are exposed too:
//! - [`build_graph`] materialises the two-plane graph for a grid
//! - [`dijkstra`] relaxes a graph from a source node
//! - [`shortest_path`] walks predecessor links back from a node
//! - [`implicit::dijkstra`] searches a graph given as a neighbor function
//!
//! [`Garden`] answers step-budget reachability questions on a map of plots and rocks.

pub mod collections;
pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod grid;
pub mod query;
pub mod reach;

pub use errors::{ConfigError, GridError, ParseError, QueryError};
pub use geometry::{Axis, Direction, Vector2d};
pub use graph_algos::{
    Cost, Edge, Graph, Node, NodeId, NodeKey, Plane, build_graph, dijkstra, implicit, path_weight, shortest_path,
};
pub use grid::{Grid, parse_cost_grid};
pub use query::{RunLimits, Solution, solve, solve_lazy, solve_str};
pub use reach::Garden;
