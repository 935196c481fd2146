//! Cyclic fields
//!
//! A cyclic field is a value restricted to a fixed ordered list, advanced by
//! stepping to the next element and wrapping at the end.

/// An ordered list of choices with a current position
#[derive(Debug, Clone, PartialEq)]
pub struct Cycle<T> {
    items: Vec<T>,
    /// `None` when the current value isn't one of `items`
    index: Option<usize>,
}

impl<T: Clone + PartialEq> Cycle<T> {
    /// Build a cycle positioned on `current`
    ///
    /// If `current` isn't in the list the cycle has no position yet and the
    /// first `advance` lands on the first item.
    pub fn new(items: Vec<T>, current: &T) -> Self {
        let index = items.iter().position(|item| item == current);
        Cycle { items, index }
    }

    /// Step to the next item, wrapping, and return it
    ///
    /// Returns `None` only for an empty list.
    pub fn advance(&mut self) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }

        let next = match self.index {
            Some(i) => (i + 1) % self.items.len(),
            None => 0,
        };
        self.index = Some(next);
        self.items.get(next)
    }

    pub fn current(&self) -> Option<&T> {
        self.index.and_then(|i| self.items.get(i))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        let mut cycle = Cycle::new(vec![1, 2, 3], &2);
        assert_eq!(cycle.advance(), Some(&3));
        assert_eq!(cycle.advance(), Some(&1));
        assert_eq!(cycle.current(), Some(&1));
    }

    #[test]
    fn test_unknown_current_starts_at_first() {
        let mut cycle = Cycle::new(vec!["a", "b"], &"z");
        assert_eq!(cycle.current(), None);
        assert_eq!(cycle.advance(), Some(&"a"));
    }

    #[test]
    fn test_empty_cycle() {
        let mut cycle: Cycle<u32> = Cycle::new(Vec::new(), &0);
        assert!(cycle.is_empty());
        assert_eq!(cycle.advance(), None);
    }

    #[test]
    fn test_full_lap_returns_to_start() {
        let mut cycle = Cycle::new(vec!['a', 'b', 'c', 'd'], &'c');
        for _ in 0..cycle.len() {
            cycle.advance();
        }
        assert_eq!(cycle.current(), Some(&'c'));
    }
}
