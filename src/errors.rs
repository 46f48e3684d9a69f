use thiserror::Error;


/// Coordinate access outside the grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("({x}, {y}) is out of grid area {width}x{height}")]
    OutOfBounds { x: i64, y: i64, width: usize, height: usize },
}

/// Malformed puzzle text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input contains no grid rows")]
    Empty,
    #[error("line {line} has width {found}, expected {expected}")]
    Ragged { line: usize, expected: usize, found: usize },
    #[error("line {line}, column {column}: {found:?} is not a digit")]
    InvalidDigit { line: usize, column: usize, found: char },
    #[error("line {line}, column {column}: {found:?} is not a garden tile")]
    InvalidTile { line: usize, column: usize, found: char },
    #[error("garden has no starting tile")]
    MissingStart,
    #[error("garden has a second starting tile at ({x}, {y})")]
    MultipleStarts { x: usize, y: usize },
}

/// Rejected run-length configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("minimum run must be at least 1, got {0}")]
    MinRunTooSmall(usize),
    #[error("run range [{min_run}, {max_run}) is empty")]
    EmptyRunRange { min_run: usize, max_run: usize },
}

/// Anything that aborts a query before the graph is built
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
