//! Short move history.
//!
//! Remembers the last few positions the mower left so the navigator can
//! avoid stepping straight back and forth between two cells.

use std::collections::VecDeque;

use crate::core::GridCoord;

/// Fixed-size ring of recently vacated positions.
#[derive(Clone, Debug)]
pub struct MoveHistory {
    /// Recently vacated positions, oldest first.
    recent_positions: VecDeque<GridCoord>,

    /// Ring capacity.
    max_recent: usize,
}

impl MoveHistory {
    /// Create a history holding at most `max_recent` positions.
    pub fn new(max_recent: usize) -> Self {
        Self {
            recent_positions: VecDeque::with_capacity(max_recent),
            max_recent,
        }
    }

    /// Record a vacated position, overwriting the oldest when full.
    pub fn push(&mut self, position: GridCoord) {
        if self.max_recent == 0 {
            return;
        }
        if self.recent_positions.len() == self.max_recent {
            self.recent_positions.pop_front();
        }
        self.recent_positions.push_back(position);
    }

    /// Was `position` vacated within the last `max_recent` moves?
    pub fn contains(&self, position: &GridCoord) -> bool {
        self.recent_positions.contains(position)
    }

    /// Number of positions currently held.
    pub fn len(&self) -> usize {
        self.recent_positions.len()
    }

    /// Check if no positions are held.
    pub fn is_empty(&self) -> bool {
        self.recent_positions.is_empty()
    }

    /// Ring capacity.
    pub fn capacity(&self) -> usize {
        self.max_recent
    }

    /// Most recently vacated position.
    pub fn last(&self) -> Option<GridCoord> {
        self.recent_positions.back().copied()
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.recent_positions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history() {
        let history = MoveHistory::new(2);
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 2);
        assert!(!history.contains(&GridCoord::new(1, 1)));
        assert!(history.last().is_none());
    }

    #[test]
    fn test_ring_overwrites_oldest() {
        let mut history = MoveHistory::new(2);
        history.push(GridCoord::new(1, 1));
        history.push(GridCoord::new(1, 2));
        history.push(GridCoord::new(1, 3));

        assert_eq!(history.len(), 2);
        assert!(!history.contains(&GridCoord::new(1, 1)));
        assert!(history.contains(&GridCoord::new(1, 2)));
        assert!(history.contains(&GridCoord::new(1, 3)));
        assert_eq!(history.last(), Some(GridCoord::new(1, 3)));
    }

    #[test]
    fn test_zero_capacity_holds_nothing() {
        let mut history = MoveHistory::new(0);
        history.push(GridCoord::new(1, 1));
        assert!(history.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut history = MoveHistory::new(3);
        history.push(GridCoord::new(2, 2));
        history.clear();
        assert!(history.is_empty());
    }
}
