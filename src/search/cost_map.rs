use std::hash::Hash;

use super::{GraphNodeMap, SearchPath, shortest_path};


/// Lowest costs from a single start to every element a search reached
/// Produced by `DijkstraSearch::costs_from` and `DijkstraSearch::costs_within`.
/// Iteration follows discovery order, the start comes first.
#[derive(Clone, Debug)]
pub struct CostMap<N, C> {
    nodes: GraphNodeMap<N, C>,
}

impl<N, C> CostMap<N, C>
where
    N: Eq + Hash + Clone,
    C: Copy,
{

    pub(crate) fn new(nodes: GraphNodeMap<N, C>) -> Self {
        Self { nodes }
    }

    /// Cost of the cheapest path from the start to `node`, if it was reached
    pub fn cost(&self, node: &N) -> Option<C> {
        self.nodes.get(node).map(|&(_, cost)| cost)
    }

    /// Cheapest path from the start to `node`, if it was reached
    pub fn path_to(&self, node: &N) -> Option<SearchPath<N, C>> {
        let (index, _, &(_, cost)) = self.nodes.get_full(node)?;
        let path = shortest_path(&self.nodes, index).ok()?;
        Some(SearchPath::new(path, cost))
    }

    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reached elements with their costs
    pub fn iter(&self) -> impl Iterator<Item = (&N, C)> {
        self.nodes.iter().map(|(node, &(_, cost))| (node, cost))
    }
}
