//! An insertion-ordered set of grid positions.
use fxhash::FxHashSet;

use crate::types::Position;

/// Positions in the order they were first inserted, without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellSet {
    order: Vec<Position>,
    members: FxHashSet<Position>,
}

impl CellSet {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self::default()
    }

    /// adds the position, returns false if it was already present
    pub fn insert(&mut self, pos: Position) -> bool {
        if self.members.insert(pos) {
            self.order.push(pos);
            true
        } else {
            false
        }
    }

    /// removes the position, keeping the order of the rest
    pub fn remove(&mut self, pos: Position) -> bool {
        if self.members.remove(&pos) {
            self.order.retain(|p| *p != pos);
            true
        } else {
            false
        }
    }

    #[allow(missing_docs)]
    pub fn contains(&self, pos: Position) -> bool {
        self.members.contains(&pos)
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// positions in insertion order
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.order.iter().copied()
    }

    #[allow(missing_docs)]
    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    /// empties the set, handing back its positions in insertion order
    pub fn take(&mut self) -> Vec<Position> {
        self.members.clear();
        std::mem::take(&mut self.order)
    }
}

impl Extend<Position> for CellSet {
    fn extend<I: IntoIterator<Item = Position>>(&mut self, iter: I) {
        for pos in iter {
            self.insert(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_without_duplicates() {
        let mut set = CellSet::new();
        assert!(set.insert(Position::new(3, 1)));
        assert!(set.insert(Position::new(1, 1)));
        assert!(!set.insert(Position::new(3, 1)));
        set.extend(vec![Position::new(2, 2), Position::new(1, 1)]);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Position::new(3, 1), Position::new(1, 1), Position::new(2, 2)]
        );
    }

    #[test]
    fn test_remove_and_take() {
        let mut set = CellSet::new();
        set.extend(vec![Position::new(1, 1), Position::new(2, 1), Position::new(3, 1)]);
        assert!(set.remove(Position::new(2, 1)));
        assert!(!set.remove(Position::new(2, 1)));
        assert!(!set.contains(Position::new(2, 1)));
        let taken = set.take();
        assert_eq!(taken, vec![Position::new(1, 1), Position::new(3, 1)]);
        assert!(set.is_empty());
        assert!(!set.contains(Position::new(1, 1)));
    }
}
