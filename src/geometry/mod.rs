mod grid;

pub use grid::{Grid, with_obstruction};

use std::{fmt, ops::{Add, Sub}};
use num_traits::{Num, Signed};


/// Manhattan distance
pub fn manhattan<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Chebyshev distance
/// Number of king moves between two cells when diagonal steps cost the same as orthogonal ones
pub fn chebyshev<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed + PartialOrd,
    {
    let dx = (x1 - x2).abs();
    let dy = (y1 - y2).abs();
    if dx > dy { dx } else { dy }
}

/// Manhattan distance between two points
pub fn manhattan_distance(a: Point, b: Point) -> i32 {
    manhattan(a.x, a.y, b.x, b.y)
}

/// Chebyshev distance between two points
pub fn chebyshev_distance(a: Point, b: Point) -> i32 {
    chebyshev(a.x, a.y, b.x, b.y)
}


/// 2D integer grid coordinate
/// x grows to the right, y grows downwards
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}


/// Orthogonal neighbour offsets: up, right, down, left
pub const CARDINALS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

/// All eight neighbour offsets, clockwise starting at up
pub const DIRECTIONS: [Point; 8] = [
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
    Point::new(0, 1),
    Point::new(-1, 1),
    Point::new(-1, 0),
    Point::new(-1, -1),
];
