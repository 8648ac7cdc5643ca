pub mod a_star;
pub mod dijkstra;
mod cost_map;
mod element;
mod frontier;
mod grid_source;
mod shortest_path;
mod source;

pub use a_star::{AStarSearch, chebyshev_heuristic, manhattan_heuristic};
pub use cost_map::CostMap;
pub use dijkstra::DijkstraSearch;
pub use element::SearchElement;
pub use grid_source::{Connectivity, GridSearchSource, always_walkable, unit_cost};
pub use source::{FnSource, SearchNeighbour, SearchSource};

use std::fmt;
use shortest_path::shortest_path;

use crate::collections::FxIndexMap;
use crate::errors::SearchError;

/// Type alias for the node map used by the search algorithms
/// N: Node - element of the search source
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map, `usize::MAX` for the start node
/// - cost is the lowest known total cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;

/// Outcome of a search: the path found, or why there is none
pub type SearchResult<N, C> = Result<SearchPath<N, C>, SearchError>;


/// A shortest-path algorithm over some search source
///
/// `find` allocates all of its state per call, so one instance can serve any number of
/// searches, including from several threads at once.
pub trait Search {
    type Element;
    type Cost;

    /// Find the cheapest path from `start` to `goal`
    /// `Err(SearchError::NoPathFound)` when the goal cannot be reached
    fn find(&self, start: Self::Element, goal: Self::Element) -> SearchResult<Self::Element, Self::Cost>;
}


/// Path found by a search
/// `path` runs from start to goal, both included; `cost` is the sum of the edge costs along it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchPath<N, C> {
    pub path: Vec<N>,
    pub cost: C,
}

impl<N, C> SearchPath<N, C> {

    pub fn new(path: Vec<N>, cost: C) -> Self {
        Self { path, cost }
    }

    /// Number of steps taken, one less than the number of elements
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&N> {
        self.path.first()
    }

    pub fn goal(&self) -> Option<&N> {
        self.path.last()
    }
}

impl<N: fmt::Debug, C: fmt::Debug> fmt::Display for SearchPath<N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path[Cost = {:?}]: ", self.cost)?;
        let mut nodes = self.path.iter();
        match nodes.next() {
            None => write!(f, "<empty>"),
            Some(first) => {
                write!(f, "{first:?}")?;
                for node in nodes {
                    write!(f, " -> {node:?}")?;
                }
                Ok(())
            }
        }
    }
}
