use std::{cmp::Ordering, collections::BinaryHeap};


/// Entry on the frontier
/// - `index` points into the best-known map, the node itself lives there
/// - `cost` is the accumulated cost when the entry was pushed, used to spot stale entries
/// - `priority` orders the heap: cost for Dijkstra, cost + heuristic for A*
/// - `seq` is the push order, equal priorities pop first-in first-out
#[derive(Debug)]
pub(crate) struct FrontierNode<C> {
    pub(crate) index: usize,
    pub(crate) cost: C,
    pub(crate) priority: C,
    seq: usize,
}

impl<C: Ord> Ord for FrontierNode<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the biggest entry, so both keys are reversed
        other.priority.cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<C: Ord> PartialOrd for FrontierNode<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: Ord> PartialEq for FrontierNode<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<C: Ord> Eq for FrontierNode<C> {}


/// Min-priority queue without decrease-key
/// Improving a node pushes a second entry, the outdated one is skipped when popped
pub(crate) struct Frontier<C> {
    heap: BinaryHeap<FrontierNode<C>>,
    next_seq: usize,
}

impl<C: Ord> Frontier<C> {

    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub(crate) fn push(&mut self, index: usize, cost: C, priority: C) {
        self.heap.push(FrontierNode {
            index,
            cost,
            priority,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<FrontierNode<C>> {
        self.heap.pop()
    }
}
