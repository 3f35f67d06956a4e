//! Per-invocation search state shared by every strategy: an arena of discovered cells with the
//! index of the cell that first discovered each one, plus the order cells were expanded in.
//!
//! The arena is an [IndexMap], so a cell's insertion index doubles as its arena slot and the
//! map itself is the visited set.
use crate::{Cell, PathResult};
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index of the start cell.
const NO_PARENT: usize = usize::MAX;

/// What a strategy hands back: the path result and the cells it expanded, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub result: PathResult,
    pub explored: Vec<Cell>,
}

#[derive(Clone, Debug)]
pub(crate) struct SearchContext {
    parents: FxIndexMap<Cell, usize>,
    explored: Vec<Cell>,
}

impl SearchContext {
    /// Seeds the arena with `start` at index 0 and marks it visited.
    pub fn new(start: Cell) -> SearchContext {
        let mut parents = FxIndexMap::default();
        parents.insert(start, NO_PARENT);
        SearchContext {
            parents,
            explored: Vec::new(),
        }
    }

    /// Records `cell` as discovered by the cell at arena index `parent` and returns its own
    /// index. Returns [None] if the cell was already discovered; the first parent is kept.
    pub fn discover(&mut self, cell: Cell, parent: usize) -> Option<usize> {
        match self.parents.entry(cell) {
            Vacant(e) => {
                let index = e.index();
                e.insert(parent);
                Some(index)
            }
            Occupied(_) => None,
        }
    }

    /// Looks up the cell stored at `index` and appends it to the exploration trace.
    pub fn expand(&mut self, index: usize) -> Cell {
        let cell = self.cell(index);
        self.explored.push(cell);
        cell
    }

    fn cell(&self, index: usize) -> Cell {
        match self.parents.get_index(index) {
            Some((cell, _)) => *cell,
            None => unreachable!("arena index {index} was never handed out"),
        }
    }

    /// Walks parent links from `index` back to the start and returns the cells in start-to-end
    /// order.
    pub fn reverse_path(&self, index: usize) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut i = index;
        while let Some((cell, &parent)) = self.parents.get_index(i) {
            path.push(*cell);
            i = parent;
        }
        path.reverse();
        path
    }

    pub fn finish(self, result: PathResult) -> SearchOutcome {
        SearchOutcome {
            result,
            explored: self.explored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_discovery_wins() {
        let start = Cell::new(0, 0);
        let mut ct = SearchContext::new(start);
        assert_eq!(ct.discover(start, 0), None);
        let a = ct.discover(Cell::new(0, 1), 0).unwrap();
        let b = ct.discover(Cell::new(1, 0), 0).unwrap();
        let c = ct.discover(Cell::new(1, 1), a).unwrap();
        assert_eq!(ct.discover(Cell::new(1, 1), b), None);
        assert_eq!(
            ct.reverse_path(c),
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]
        );
        assert_eq!(ct.reverse_path(0), vec![start]);
    }

    #[test]
    fn expansion_trace() {
        let mut ct = SearchContext::new(Cell::new(2, 2));
        let i = ct.discover(Cell::new(2, 3), 0).unwrap();
        assert_eq!(ct.expand(0), Cell::new(2, 2));
        assert_eq!(ct.expand(i), Cell::new(2, 3));
        let outcome = ct.finish(PathResult::NotFound);
        assert_eq!(outcome.explored, vec![Cell::new(2, 2), Cell::new(2, 3)]);
    }
}
