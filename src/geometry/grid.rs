use std::ops::{Index, IndexMut};

use crate::errors::GridError;
use super::Point;


/// Rectangular grid stored row-major
/// Cells are addressed by `Point`, with (0, 0) at the top left corner
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {

    /// Create a grid of the given size with every cell set to `fill`
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }
}

impl<T> Grid<T> {

    /// Build a grid from a list of rows, `rows[y][x]`
    /// Every row must have the same, non-zero length
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for (y, row) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(row);
            let found = cells.len() - before;

            if y == 0 {
                width = found;
            } else if found != width {
                return Err(GridError::RaggedRows { row: y, expected: width, found });
            }
            height += 1;
        }

        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }

        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a point lies inside the grid
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0 && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    fn idx(&self, point: Point) -> Option<usize> {
        if self.contains(point) {
            Some(point.y as usize * self.width + point.x as usize)
        } else {
            None
        }
    }

    pub fn get(&self, point: Point) -> Option<&T> {
        self.idx(point).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, point: Point) -> Option<&mut T> {
        match self.idx(point) {
            Some(i) => Some(&mut self.cells[i]),
            None => None,
        }
    }

    /// Replace the value at `point`, returning the previous one
    /// Returns None and leaves the grid untouched if the point is out of bounds
    pub fn set(&mut self, point: Point, value: T) -> Option<T> {
        self.get_mut(point).map(|cell| std::mem::replace(cell, value))
    }

    /// All points of the grid in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> + use<T> {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, point: Point) -> &T {
        match self.idx(point) {
            Some(i) => &self.cells[i],
            None => panic!("point {point} outside of {}x{} grid", self.width, self.height),
        }
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, point: Point) -> &mut T {
        match self.idx(point) {
            Some(i) => &mut self.cells[i],
            None => panic!("point {point} outside of {}x{} grid", self.width, self.height),
        }
    }
}


/// Temporarily place `value` at `point`, run `f` against the modified grid, then restore the old value
/// Returns None without calling `f` if the point is out of bounds
pub fn with_obstruction<T, R, F>(grid: &mut Grid<T>, point: Point, value: T, f: F) -> Option<R>
where
    F: FnOnce(&Grid<T>) -> R,
{
    let previous = grid.set(point, value)?;
    let result = f(grid);
    grid.set(point, previous);
    Some(result)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows([[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid[Point::new(2, 0)], 3);
        assert_eq!(grid[Point::new(0, 1)], 4);
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        let ragged = Grid::from_rows(vec![vec![1, 2], vec![3]]);
        assert_eq!(ragged, Err(GridError::RaggedRows { row: 1, expected: 2, found: 1 }));

        let empty = Grid::<u8>::from_rows(Vec::<Vec<u8>>::new());
        assert_eq!(empty, Err(GridError::EmptyGrid));

        let no_columns = Grid::<u8>::from_rows(vec![vec![], vec![]]);
        assert_eq!(no_columns, Err(GridError::EmptyGrid));
    }

    #[test]
    fn test_bounds() {
        let grid = Grid::new(4, 2, '.');
        assert!(grid.contains(Point::new(3, 1)));
        assert!(!grid.contains(Point::new(4, 1)));
        assert!(!grid.contains(Point::new(0, -1)));
        assert_eq!(grid.get(Point::new(-1, 0)), None);
        assert_eq!(grid.get(Point::new(1, 1)), Some(&'.'));
    }

    #[test]
    fn test_set_returns_previous() {
        let mut grid = Grid::new(2, 2, 0);
        assert_eq!(grid.set(Point::new(1, 0), 7), Some(0));
        assert_eq!(grid.set(Point::new(1, 0), 8), Some(7));
        assert_eq!(grid.set(Point::new(2, 0), 9), None);
        assert_eq!(grid[Point::new(1, 0)], 8);
    }

    #[test]
    fn test_points_row_major() {
        let grid = Grid::new(2, 2, ());
        let points: Vec<_> = grid.points().collect();
        assert_eq!(points, vec![
            Point::new(0, 0), Point::new(1, 0),
            Point::new(0, 1), Point::new(1, 1),
        ]);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds_panics() {
        let grid = Grid::new(2, 2, 0);
        let _value: i32 = grid[Point::new(2, 2)];
    }

    #[test]
    fn test_with_obstruction_restores_cell() {
        let mut grid = Grid::new(3, 3, '.');
        let seen = with_obstruction(&mut grid, Point::new(1, 1), '#', |g| g[Point::new(1, 1)]);
        assert_eq!(seen, Some('#'));
        assert_eq!(grid[Point::new(1, 1)], '.');

        let outside = with_obstruction(&mut grid, Point::new(5, 5), '#', |_| ());
        assert_eq!(outside, None);
    }
}
