use crate::errors::SearchError;
use super::frontier::{Frontier, FrontierNode};
use super::{CostMap, GraphNodeMap, Search, SearchNeighbour, SearchPath, SearchResult, SearchSource, shortest_path};

use log::{debug, trace};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};


/// Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Uniform-cost search over any `SearchSource` with non-negative edge costs.
///
/// The search holds nothing but its source: every call builds its own frontier and node map,
/// so one instance can be reused for any number of searches.
#[derive(Clone, Debug)]
pub struct DijkstraSearch<S> {
    source: S,
}

impl<S: SearchSource> DijkstraSearch<S> {

    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Find the cheapest path from `start` to the first element satisfying `goal_fn`
    /// Elements are tested as they leave the frontier, so the returned path is the cheapest
    /// to any goal; among equally cheap goals the one discovered first wins
    pub fn find_where<G>(&self, start: S::Element, goal_fn: G) -> SearchResult<S::Element, S::Cost>
    where
        G: Fn(&S::Element) -> bool,
    {
        let (node_map, goal_index) = self.build_graph(start, goal_fn, None);

        let Some(goal_index) = goal_index else {
            return Err(SearchError::NoPathFound);
        };

        let cost = node_map[goal_index].1;
        let path = shortest_path(&node_map, goal_index)?;
        Ok(SearchPath::new(path, cost))
    }

    /// Lowest cost to every element reachable from `start`
    pub fn costs_from(&self, start: S::Element) -> CostMap<S::Element, S::Cost> {
        let (node_map, _) = self.build_graph(start, |_| false, None);
        CostMap::new(node_map)
    }

    /// Lowest cost to every element reachable from `start` for at most `max_cost`
    /// Elements beyond the bound are never recorded, so their neighbours are not explored either
    pub fn costs_within(&self, start: S::Element, max_cost: S::Cost) -> CostMap<S::Element, S::Cost> {
        let (node_map, _) = self.build_graph(start, |_| false, Some(max_cost));
        CostMap::new(node_map)
    }

    /// Traverses the graph using Dijkstra's algorithm
    /// Returns a map of nodes with their smallest costs along with the index of the goal node
    fn build_graph<G>(&self, start: S::Element, goal_fn: G, max_cost: Option<S::Cost>) -> (GraphNodeMap<S::Element, S::Cost>, Option<usize>)
    where
        G: Fn(&S::Element) -> bool,
    {
        // Nodes to visit, smallest cost first
        let mut frontier: Frontier<S::Cost> = Frontier::new();

        // Best known cost and parent of every node seen so far
        // for the start node, parent_index is set to usize::MAX to indicate it has no parent
        let mut node_map: GraphNodeMap<S::Element, S::Cost> = GraphNodeMap::default();

        let start_index = node_map.insert_full(start, (usize::MAX, Zero::zero())).0;
        frontier.push(start_index, Zero::zero(), Zero::zero());

        let mut expanded = 0usize;

        while let Some(FrontierNode { index, cost, .. }) = frontier.pop() {

            let Some((node, &(_, best))) = node_map.get_index(index) else {
                continue;
            };

            // A cheaper path to this node was found after this entry was pushed
            if cost > best {
                continue;
            }

            if goal_fn(node) {
                debug!("dijkstra: reached {node:?} at cost {best:?}, expanded {expanded}, discovered {}", node_map.len());
                return (node_map, Some(index));
            }

            let current = node.clone();
            expanded += 1;
            trace!("dijkstra: expanding {current:?} at cost {best:?}");

            for SearchNeighbour { element, cost: edge_cost } in self.source.neighbours(&current) {

                let new_cost = best + edge_cost;

                if max_cost.is_some_and(|max| new_cost > max) {
                    continue;
                }

                let neighbour_index = match node_map.entry(element) {
                    Vacant(e) => {
                        let i = e.index();
                        e.insert((index, new_cost));
                        i
                    }
                    Occupied(mut e) => {
                        if new_cost < e.get().1 {
                            e.insert((index, new_cost));
                            e.index()
                        } else {
                            continue;
                        }
                    }
                };

                frontier.push(neighbour_index, new_cost, new_cost);
            }
        }

        debug!("dijkstra: frontier exhausted, expanded {expanded}, discovered {}", node_map.len());
        (node_map, None)
    }
}

impl<S: SearchSource> Search for DijkstraSearch<S> {
    type Element = S::Element;
    type Cost = S::Cost;

    fn find(&self, start: S::Element, goal: S::Element) -> SearchResult<S::Element, S::Cost> {
        self.find_where(start, |node| *node == goal)
    }
}
