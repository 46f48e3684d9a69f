mod parse;

pub use parse::parse_cost_grid;
pub(crate) use parse::parse_rows;

use crate::errors::GridError;
use crate::geometry::Vector2d;


/// 2D rectangular grid, stored row-major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {

    /// Create a grid with every cell set to `default_value`
    pub fn new(width: usize, height: usize, default_value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![default_value; width * height],
        }
    }
}

impl<T> Grid<T> {

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check a coordinate against [0, width) x [0, height)
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_some()
    }

    pub fn contains_point(&self, point: Vector2d) -> bool {
        self.contains(point.x, point.y)
    }

    pub fn get(&self, x: i64, y: i64) -> Result<&T, GridError> {
        let idx = self.checked_index(x, y)?;
        Ok(&self.cells[idx])
    }

    pub fn get_point(&self, point: Vector2d) -> Result<&T, GridError> {
        self.get(point.x, point.y)
    }

    pub fn set(&mut self, x: i64, y: i64, value: T) -> Result<(), GridError> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() panics on 0
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Every coordinate in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Vector2d> + use<T> {
        let (width, height) = (self.width as i64, self.height as i64);
        (0..height).flat_map(move |y| (0..width).map(move |x| Vector2d::new(x, y)))
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    fn checked_index(&self, x: i64, y: i64) -> Result<usize, GridError> {
        self.index(x, y).ok_or(GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    /// Build from pre-validated rows
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<T>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }
}
