use crate::errors::SearchError;
use crate::geometry::{Point, chebyshev_distance, manhattan_distance};
use super::frontier::{Frontier, FrontierNode};
use super::{GraphNodeMap, Search, SearchElement, SearchNeighbour, SearchPath, SearchResult, SearchSource, shortest_path};

use log::{debug, trace};
use num_traits::{FromPrimitive, Zero};
use indexmap::map::Entry::{Occupied, Vacant};


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// Same mechanics as `DijkstraSearch`, but the frontier is ordered by cost + `heuristic(node, goal)`.
/// The returned path is only guaranteed optimal if the heuristic is:
/// 1. admissible: it never overestimates the true cost to reach the goal
/// 2. consistent: h(a) <= cost(a, b) + h(b) for every edge a -> b
/// Neither is checked. A heuristic that always returns zero turns this into Dijkstra's algorithm.
#[derive(Clone, Debug)]
pub struct AStarSearch<S, H> {
    source: S,
    heuristic: H,
}

impl<S, H> AStarSearch<S, H>
where
    S: SearchSource,
    H: Fn(&S::Element, &S::Element) -> S::Cost,
{

    pub fn new(source: S, heuristic: H) -> Self {
        Self { source, heuristic }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Traverses the graph using A* algorithm
    /// Returns a map of nodes with their smallest costs along with the index of the goal node
    fn build_graph(&self, start: S::Element, goal: &S::Element) -> (GraphNodeMap<S::Element, S::Cost>, Option<usize>) {

        // Open list, ordered by f = cost + heuristic
        let mut open_list: Frontier<S::Cost> = Frontier::new();

        // Best known cost and parent of every node seen so far, used to rebuild the path
        let mut node_map: GraphNodeMap<S::Element, S::Cost> = GraphNodeMap::default();

        let start_f = (self.heuristic)(&start, goal);
        let start_index = node_map.insert_full(start, (usize::MAX, Zero::zero())).0;
        open_list.push(start_index, Zero::zero(), start_f);

        let mut expanded = 0usize;

        while let Some(FrontierNode { index, cost, .. }) = open_list.pop() {

            let Some((node, &(_, best))) = node_map.get_index(index) else {
                continue;
            };

            // A cheaper path to this node was found after this entry was pushed
            if cost > best {
                continue;
            }

            if node == goal {
                debug!("a*: reached {node:?} at cost {best:?}, expanded {expanded}, discovered {}", node_map.len());
                return (node_map, Some(index));
            }

            let current = node.clone();
            expanded += 1;
            trace!("a*: expanding {current:?} at cost {best:?}");

            for SearchNeighbour { element, cost: edge_cost } in self.source.neighbours(&current) {

                // Confirmed cost, not heuristic
                let new_cost = best + edge_cost;

                let h_cost = (self.heuristic)(&element, goal);

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

                open_list.push(neighbour_index, new_cost, new_cost + h_cost);
            }
        }

        debug!("a*: open list exhausted, expanded {expanded}, discovered {}", node_map.len());
        (node_map, None)
    }
}

impl<S, H> Search for AStarSearch<S, H>
where
    S: SearchSource,
    H: Fn(&S::Element, &S::Element) -> S::Cost,
{
    type Element = S::Element;
    type Cost = S::Cost;

    fn find(&self, start: S::Element, goal: S::Element) -> SearchResult<S::Element, S::Cost> {
        let (node_map, goal_index) = self.build_graph(start, &goal);

        let Some(goal_index) = goal_index else {
            return Err(SearchError::NoPathFound);
        };

        let cost = node_map[goal_index].1;
        let path = shortest_path(&node_map, goal_index)?;
        Ok(SearchPath::new(path, cost))
    }
}


/// Manhattan distance between two grid elements
/// Admissible for 4-connected grids where every step costs at least one
pub fn manhattan_heuristic<V, C>(node: &SearchElement<Point, V>, goal: &SearchElement<Point, V>) -> C
where
    C: FromPrimitive + Zero,
{
    C::from_i32(manhattan_distance(*node.key(), *goal.key())).unwrap_or_else(C::zero)
}

/// Chebyshev distance between two grid elements
/// Admissible for 8-connected grids where every step costs at least one
pub fn chebyshev_heuristic<V, C>(node: &SearchElement<Point, V>, goal: &SearchElement<Point, V>) -> C
where
    C: FromPrimitive + Zero,
{
    C::from_i32(chebyshev_distance(*node.key(), *goal.key())).unwrap_or_else(C::zero)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::FnSource;
    use std::collections::HashMap;

    type Graph = HashMap<String, Vec<(String, u32)>>;

    fn graph(edges: &[(&str, &[(&str, u32)])]) -> Graph {
        edges.iter()
            .map(|(node, out)| {
                let out = out.iter().map(|(n, c)| (n.to_string(), *c)).collect();
                (node.to_string(), out)
            })
            .collect()
    }

    fn source(graph: &Graph) -> impl SearchSource<Element = String, Cost = u32> + '_ {
        FnSource::new(move |node: &String| graph.get(node).cloned().unwrap_or_default())
    }

    fn names(path: &[&str]) -> Vec<String> {
        path.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_a_star_zero_heuristic() {
        // Diamond-shaped graph: A -> B -> D and A -> C -> D
        let graph = graph(&[
            ("A", &[("B", 1), ("C", 3)]),
            ("B", &[("D", 5)]),
            ("C", &[("D", 1)]),
            ("D", &[]),
        ]);
        let a_star = AStarSearch::new(source(&graph), |_: &String, _: &String| 0);
        let result = a_star.find("A".into(), "D".into()).unwrap();

        assert_eq!(result.path, names(&["A", "C", "D"]));
        assert_eq!(result.cost, 4);
    }

    #[test]
    fn test_a_star_handles_unreachable_goal() {
        let graph = graph(&[
            ("A", &[("B", 1)]),
            ("B", &[("C", 1)]),
            ("C", &[]),
            ("D", &[]), // D is not connected
        ]);
        let a_star = AStarSearch::new(source(&graph), |_: &String, _: &String| 0);

        assert_eq!(a_star.find("A".into(), "D".into()), Err(SearchError::NoPathFound));
    }

    #[test]
    fn test_a_star_with_cycle() {
        // A -> B -> C -> A
        let graph = graph(&[
            ("A", &[("B", 1)]),
            ("B", &[("C", 1)]),
            ("C", &[("A", 1), ("D", 2)]),
            ("D", &[]),
        ]);
        let a_star = AStarSearch::new(source(&graph), |_: &String, _: &String| 0);
        let (node_map, goal_index) = a_star.build_graph("A".into(), &"D".into());

        assert!(goal_index.is_some());
        let costs: HashMap<_, _> = node_map.iter().map(|(node, (_, cost))| (node.clone(), *cost)).collect();
        assert_eq!(costs["A"], 0);
        assert_eq!(costs["B"], 1);
        assert_eq!(costs["C"], 2);
        assert_eq!(costs["D"], 4);
    }

    #[test]
    fn test_a_star_with_heuristic() {
        // A(0,0) -> B(1,0) -> D(2,0)
        //   |
        //   v
        // C(0,1) ------> D(2,0)
        let graph = graph(&[
            ("A", &[("B", 1), ("C", 1)]),
            ("B", &[("D", 1)]),
            ("C", &[("D", 2)]),
            ("D", &[]),
        ]);
        let coords = HashMap::from([
            ("A".to_string(), Point::new(0, 0)),
            ("B".to_string(), Point::new(1, 0)),
            ("C".to_string(), Point::new(0, 1)),
            ("D".to_string(), Point::new(2, 0)),
        ]);
        let heuristic = |node: &String, goal: &String| manhattan_distance(coords[node], coords[goal]) as u32;

        let a_star = AStarSearch::new(source(&graph), heuristic);
        let (node_map, _) = a_star.build_graph("A".into(), &"D".into());
        let result = a_star.find("A".into(), "D".into()).unwrap();

        assert_eq!(result.path, names(&["A", "B", "D"]));
        assert_eq!(result.cost, 2);
        // C is discovered from A but never needed
        assert!(node_map.contains_key("C"));
    }

    #[test]
    fn test_a_star_start_is_goal() {
        let graph = graph(&[("A", &[("B", 1)])]);
        let a_star = AStarSearch::new(source(&graph), |_: &String, _: &String| 0);
        let result = a_star.find("A".into(), "A".into()).unwrap();

        assert_eq!(result.path, names(&["A"]));
        assert_eq!(result.cost, 0);
    }

    #[test]
    fn test_grid_heuristics() {
        let a = SearchElement::new(Point::new(0, 0), ());
        let b = SearchElement::new(Point::new(3, -1), ());

        let manhattan: u64 = manhattan_heuristic(&a, &b);
        let chebyshev: u8 = chebyshev_heuristic(&a, &b);
        assert_eq!(manhattan, 4);
        assert_eq!(chebyshev, 3);
        assert_eq!(manhattan_heuristic::<(), u32>(&b, &b), 0);
    }
}
