//! Step-budget reachability on a garden of plots and rocks
//!
//! A walker starts on the `S` tile and takes unit steps north, south, east or west
//! onto open plots (`.`), never onto rocks (`#`) and never off the map.

use log::debug;

use crate::errors::ParseError;
use crate::geometry::{Direction, Vector2d};
use crate::graph_algos::{GraphNodeMap, implicit};
use crate::grid::{Grid, parse_rows};


/// Walkable map with a starting tile
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Garden {
    open: Grid<bool>,
    start: Vector2d,
}

impl Garden {

    /// Parse a garden map, `.` and `S` are plots, `#` is a rock
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut start = None;
        let open = parse_rows(input, |line, column, ch| match ch {
            '.' => Ok(true),
            '#' => Ok(false),
            'S' => {
                if start.is_some() {
                    return Err(ParseError::MultipleStarts { x: column, y: line });
                }
                start = Some(Vector2d::new(column as i64, line as i64));
                Ok(true)
            }
            found => Err(ParseError::InvalidTile { line, column, found }),
        })?;

        let start = start.ok_or(ParseError::MissingStart)?;
        Ok(Self { open, start })
    }

    pub fn start(&self) -> Vector2d {
        self.start
    }

    pub fn is_open(&self, position: Vector2d) -> bool {
        matches!(self.open.get_point(position), Ok(&true))
    }

    /// Fewest steps from the start to every plot that can be reached at all
    pub fn step_distances(&self) -> GraphNodeMap<Vector2d, usize> {
        let garden = self;
        let distances = implicit::settle_all(self.start, move |&position: &Vector2d| {
            Direction::ALL
                .into_iter()
                .map(move |direction| position + direction.as_vector())
                .filter(move |&next| garden.is_open(next))
                .map(|next| (next, 1usize))
        });
        debug!("{} plots reachable from {:?}", distances.len(), self.start);
        distances
    }

    /// Plots the walker can stand on after exactly `steps` steps
    /// Stepping back and forth burns two steps, so a plot qualifies when its
    /// distance fits the budget and has the same parity.
    pub fn reachable_in_exactly(&self, steps: usize) -> Vec<Vector2d> {
        self.step_distances()
            .into_iter()
            .filter(|&(_, (_, distance))| distance <= steps && (steps - distance) % 2 == 0)
            .map(|(position, _)| position)
            .collect()
    }

    /// Plots the walker can reach using at most `steps` steps
    pub fn reachable_within(&self, steps: usize) -> Vec<Vector2d> {
        self.step_distances()
            .into_iter()
            .filter(|&(_, (_, distance))| distance <= steps)
            .map(|(position, _)| position)
            .collect()
    }
}
