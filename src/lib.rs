//! Shortest-path search over lazily discovered graphs and 2D grids.
//!
//! A [`SearchSource`] describes a graph one node at a time: given an element, it yields the
//! neighbouring elements and the cost of stepping to each. [`DijkstraSearch`] and
//! [`AStarSearch`] find cheapest paths through any source, and [`GridSearchSource`] turns a
//! [`Grid`] into one.
//!
//! ```
//! use gridsearch::prelude::*;
//!
//! let grid = Grid::from_rows([
//!     "..#",
//!     "..#",
//!     "...",
//! ].map(|row| row.chars())).unwrap();
//!
//! let source = GridSearchSource::new(&grid).walkable(|_, &c: &char| c != '#');
//! let start = source.to_element(Point::new(0, 0)).unwrap();
//! let goal = source.to_element(Point::new(2, 2)).unwrap();
//!
//! let result = AStarSearch::new(&source, manhattan_heuristic).find(start, goal).unwrap();
//! assert_eq!(result.cost, 4);
//! assert_eq!(result.path.len(), 5);
//! ```
//!
//! "No path" is an ordinary outcome, reported as [`SearchError::NoPathFound`].

pub mod collections;
pub mod errors;
pub mod geometry;
pub mod search;

pub use errors::{GridError, SearchError};
pub use geometry::{Grid, Point};
pub use search::{
    AStarSearch, Connectivity, CostMap, DijkstraSearch, FnSource, GridSearchSource, Search,
    SearchElement, SearchNeighbour, SearchPath, SearchResult, SearchSource,
};

/// Everything needed to build a grid source and run a search
pub mod prelude {
    pub use crate::errors::{GridError, SearchError};
    pub use crate::geometry::{Grid, Point, chebyshev_distance, manhattan_distance, with_obstruction};
    pub use crate::search::{
        AStarSearch, Connectivity, CostMap, DijkstraSearch, FnSource, GridSearchSource, Search,
        SearchElement, SearchNeighbour, SearchPath, SearchResult, SearchSource,
        chebyshev_heuristic, manhattan_heuristic,
    };
}
