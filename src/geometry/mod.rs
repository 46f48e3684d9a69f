use std::ops::{Add, Mul, Neg, Sub};


/// 2D integer vector
/// Used both as a grid position and as a movement delta
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vector2d {
    pub x: i64,
    pub y: i64,
}

impl Vector2d {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl Add for Vector2d {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2d {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Vector2d {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<i64> for Vector2d {
    type Output = Self;

    fn mul(self, scalar: i64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}


/// Axis a move travels along
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The perpendicular axis
    pub fn other(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Both directions along this axis
    pub fn directions(self) -> [Direction; 2] {
        match self {
            Axis::Horizontal => [Direction::East, Direction::West],
            Axis::Vertical => [Direction::North, Direction::South],
        }
    }
}


/// Cardinal direction, y grows southwards
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::East, Direction::South, Direction::West, Direction::North];

    /// Opposite direction
    pub fn complement(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::North => Direction::South,
        }
    }

    /// Unit vector for one step in this direction
    pub fn as_vector(self) -> Vector2d {
        match self {
            Direction::East => Vector2d::new(1, 0),
            Direction::South => Vector2d::new(0, 1),
            Direction::West => Vector2d::new(-1, 0),
            Direction::North => Vector2d::new(0, -1),
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Direction::East | Direction::West => Axis::Horizontal,
            Direction::South | Direction::North => Axis::Vertical,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_arithmetic() {
        let a = Vector2d::new(3, -2);
        let b = Vector2d::new(1, 4);

        assert_eq!(a + b, Vector2d::new(4, 2));
        assert_eq!(a - b, Vector2d::new(2, -6));
        assert_eq!(-a, Vector2d::new(-3, 2));
        assert_eq!(b * 3, Vector2d::new(3, 12));
    }

    #[test]
    fn test_complement_cancels_step() {
        let origin = Vector2d::new(5, 5);
        for direction in Direction::ALL {
            let there = origin + direction.as_vector();
            assert_ne!(there, origin);
            assert_eq!(there + direction.complement().as_vector(), origin);
            assert_eq!(direction.complement().complement(), direction);
            assert_eq!(direction.complement().axis(), direction.axis());
        }
    }

    #[test]
    fn test_axis_directions() {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let [a, b] = axis.directions();
            assert_eq!(a.complement(), b);
            assert_eq!(a.axis(), axis);
            assert_ne!(axis.other(), axis);
        }
    }
}
