use std::{fmt::Debug, hash::Hash, marker::PhantomData};
use num_traits::Zero;


/// Edge to a neighbouring element and the cost of taking it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNeighbour<E, C> {
    pub element: E,
    pub cost: C,
}

impl<E, C> SearchNeighbour<E, C> {
    pub fn new(element: E, cost: C) -> Self {
        Self { element, cost }
    }
}

impl<E, C> From<(E, C)> for SearchNeighbour<E, C> {
    fn from((element, cost): (E, C)) -> Self {
        Self::new(element, cost)
    }
}


/// A lazily discovered weighted graph
///
/// Search algorithms only ever see the graph through `neighbours`, one element at a time,
/// so a source never has to materialize the whole graph.
/// Requirements on implementors:
/// - `neighbours` is a pure query, it must not mutate shared state
/// - edge costs are non-negative
/// - edges need not be symmetric
pub trait SearchSource {
    type Element: Eq + Hash + Clone + Debug;
    type Cost: Zero + Ord + Copy + Debug;

    /// Elements reachable from `element` in one step, with the cost of that step
    fn neighbours(&self, element: &Self::Element) -> impl Iterator<Item = SearchNeighbour<Self::Element, Self::Cost>>;
}

impl<S: SearchSource + ?Sized> SearchSource for &S {
    type Element = S::Element;
    type Cost = S::Cost;

    fn neighbours(&self, element: &Self::Element) -> impl Iterator<Item = SearchNeighbour<Self::Element, Self::Cost>> {
        (**self).neighbours(element)
    }
}


/// Search source backed by a closure
/// The closure returns the neighbours of a node as (node, edge cost) pairs
pub struct FnSource<F, E, C, I> {
    neighbours: F,
    _marker: PhantomData<fn(&E) -> (I, C)>,
}

impl<F, E, C, I> FnSource<F, E, C, I>
where
    F: Fn(&E) -> I,
    I: IntoIterator<Item = (E, C)>,
{
    pub fn new(neighbours: F) -> Self {
        Self { neighbours, _marker: PhantomData }
    }
}

impl<F, E, C, I> SearchSource for FnSource<F, E, C, I>
where
    F: Fn(&E) -> I,
    I: IntoIterator<Item = (E, C)>,
    E: Eq + Hash + Clone + Debug,
    C: Zero + Ord + Copy + Debug,
{
    type Element = E;
    type Cost = C;

    fn neighbours(&self, element: &E) -> impl Iterator<Item = SearchNeighbour<E, C>> {
        (self.neighbours)(element).into_iter().map(SearchNeighbour::from)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_fn_source_neighbours() {
        let graph = HashMap::from([
            ("A", vec![("B", 1u32), ("C", 3)]),
            ("B", vec![]),
        ]);
        let source = FnSource::new(|node: &&str| graph.get(node).cloned().unwrap_or_default());

        let neighbours: Vec<_> = source.neighbours(&"A").collect();
        assert_eq!(neighbours, vec![SearchNeighbour::new("B", 1), SearchNeighbour::new("C", 3)]);
        assert_eq!(source.neighbours(&"B").count(), 0);
        assert_eq!(source.neighbours(&"Z").count(), 0);
    }

    #[test]
    fn test_reference_forwards() {
        let source = FnSource::new(|n: &u8| [(n + 1, 2u8)]);
        let by_ref = &source;
        let neighbours: Vec<_> = by_ref.neighbours(&4).collect();
        assert_eq!(neighbours, vec![SearchNeighbour::new(5, 2)]);
    }
}
