use std::{fmt::Debug, marker::PhantomData};
use num_traits::{One, Zero};

use crate::geometry::{CARDINALS, DIRECTIONS, Grid, Point};
use super::{SearchElement, SearchNeighbour, SearchSource};


/// Which cells count as adjacent
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Connectivity {
    /// Up, right, down, left
    #[default]
    Four,
    /// The four orthogonal cells plus the four diagonals
    Eight,
}

impl Connectivity {

    /// Neighbour offsets, in the order they are expanded
    pub fn offsets(self) -> &'static [Point] {
        match self {
            Connectivity::Four => &CARDINALS,
            Connectivity::Eight => &DIRECTIONS,
        }
    }
}


/// Default walkability: every cell can be entered
pub fn always_walkable<V>(_point: Point, _value: &V) -> bool {
    true
}

/// Default step cost: every step costs one
pub fn unit_cost<V, C: One>(_from: Point, _to: Point, _from_value: &V, _to_value: &V) -> C {
    C::one()
}

type WalkableFn<V> = fn(Point, &V) -> bool;
type CostFn<V, C> = fn(Point, Point, &V, &V) -> C;


/// Search source over the cells of a `Grid`
///
/// Elements are `SearchElement<Point, V>`: a coordinate plus a snapshot of the cell value taken
/// when the element was created. Neighbours are the adjacent cells (see `Connectivity`) that lie
/// inside the grid and pass the `walkable` predicate; the step cost comes from the `cost` function,
/// called as `cost(from, to, from_value, to_value)` where `from_value` is the snapshot carried by
/// the expanded element.
///
/// Defaults: every cell walkable, every step costs `1u32`, 4-connectivity.
///
/// The grid is borrowed for the lifetime of the source, so it cannot change underneath a search.
/// To test a temporary change, modify the grid first, then build the source (see `with_obstruction`).
pub struct GridSearchSource<'g, V, C = u32, W = WalkableFn<V>, F = CostFn<V, C>> {
    grid: &'g Grid<V>,
    walkable: W,
    cost: F,
    connectivity: Connectivity,
    _cost: PhantomData<fn() -> C>,
}

impl<'g, V> GridSearchSource<'g, V> {

    pub fn new(grid: &'g Grid<V>) -> Self {
        Self {
            grid,
            walkable: always_walkable::<V>,
            cost: unit_cost::<V, u32>,
            connectivity: Connectivity::default(),
            _cost: PhantomData,
        }
    }
}

impl<'g, V, C, W, F> GridSearchSource<'g, V, C, W, F> {

    /// Replace the walkability predicate, called as `walkable(point, value)`
    pub fn walkable<W2>(self, walkable: W2) -> GridSearchSource<'g, V, C, W2, F>
    where
        W2: Fn(Point, &V) -> bool,
    {
        GridSearchSource {
            grid: self.grid,
            walkable,
            cost: self.cost,
            connectivity: self.connectivity,
            _cost: PhantomData,
        }
    }

    /// Replace the step cost function, called as `cost(from, to, from_value, to_value)`
    pub fn cost<C2, F2>(self, cost: F2) -> GridSearchSource<'g, V, C2, W, F2>
    where
        F2: Fn(Point, Point, &V, &V) -> C2,
    {
        GridSearchSource {
            grid: self.grid,
            walkable: self.walkable,
            cost,
            connectivity: self.connectivity,
            _cost: PhantomData,
        }
    }

    pub fn connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Shorthand for `Connectivity::Eight` when true, `Connectivity::Four` otherwise
    pub fn include_diagonals(self, include: bool) -> Self {
        self.connectivity(if include { Connectivity::Eight } else { Connectivity::Four })
    }

    pub fn grid(&self) -> &'g Grid<V> {
        self.grid
    }

    pub fn connectivity_mode(&self) -> Connectivity {
        self.connectivity
    }
}

impl<V: Clone, C, W, F> GridSearchSource<'_, V, C, W, F> {

    /// Element for `point`, carrying a copy of the cell value as it is right now
    /// None if the point is outside the grid
    pub fn to_element(&self, point: Point) -> Option<SearchElement<Point, V>> {
        self.grid.get(point).map(|value| SearchElement::new(point, value.clone()))
    }
}

impl<V, C, W, F> SearchSource for GridSearchSource<'_, V, C, W, F>
where
    V: Clone + Debug,
    C: Zero + Ord + Copy + Debug,
    W: Fn(Point, &V) -> bool,
    F: Fn(Point, Point, &V, &V) -> C,
{
    type Element = SearchElement<Point, V>;
    type Cost = C;

    fn neighbours(&self, element: &Self::Element) -> impl Iterator<Item = SearchNeighbour<Self::Element, C>> {
        let from = *element.key();
        let from_value = element.value();

        self.connectivity.offsets().iter().filter_map(move |&offset| {
            let to = from + offset;
            let to_value = self.grid.get(to)?;
            if !(self.walkable)(to, to_value) {
                return None;
            }
            let cost = (self.cost)(from, to, from_value, to_value);
            Some(SearchNeighbour::new(SearchElement::new(to, to_value.clone()), cost))
        })
    }
}
