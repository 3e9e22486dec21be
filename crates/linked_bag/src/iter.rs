use std::iter::FusedIterator;

use crate::bag::{Bag, NodeId};

/// Borrowing iterator over a [Bag], in insertion order
#[derive(Debug)]
pub struct Iter<'a, T> {
    bag: &'a Bag<T>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(bag: &'a Bag<T>, head: Option<NodeId>, len: usize) -> Self {
        Self {
            bag,
            next: head,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.bag.node(self.next?)?;
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

// not derived, `T` doesn't need to be `Clone`
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            bag: self.bag,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

/// Consuming iterator over a [Bag], in insertion order
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    bag: Bag<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(bag: Bag<T>) -> Self {
        Self { bag }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.bag.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bag.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use crate::Bag;

    use super::Iter;

    utils::assert_covariant!(Iter<u8>);

    #[test]
    fn insertion_order() {
        let bag = Bag::from([1, 2, 3]);
        let mut seen = Vec::new();
        for x in &bag {
            seen.push(*x);
        }
        assert_eq!(seen, [1, 2, 3]);
    }

    #[test]
    fn restartable() {
        let bag = Bag::from(['a', 'b']);
        let mut first = bag.iter();
        assert_eq!(first.next(), Some(&'a'));
        // a new iteration starts from the head again
        assert_eq!(bag.iter().collect::<String>(), "ab");
        assert_eq!(first.collect::<String>(), "b");
    }

    #[test]
    fn exact_size() {
        let bag = Bag::from([1, 2, 3]);
        let mut iter = bag.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        let copy = iter.clone();
        assert_eq!(iter.count(), 2);
        assert_eq!(copy.count(), 2);
    }

    #[test]
    fn fused() {
        let bag = Bag::from([1]);
        let mut iter = bag.iter();
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn after_removal() {
        let mut bag = Bag::from([1, 2, 3]);
        bag.remove(&2);
        assert_eq!(bag.iter().copied().collect::<Vec<_>>(), [1, 3]);
        assert_eq!(bag.iter().len(), 2);
    }

    #[test]
    fn into_iter_moves_out() {
        let bag = Bag::from([String::from("x"), String::from("y")]);
        let mut iter = bag.into_iter();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next().as_deref(), Some("x"));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.collect::<Vec<_>>(), ["y"]);
    }

    #[test]
    fn holes_are_skipped() {
        let mut bag = Bag::from([1, 2, 3, 4]);
        bag.remove(&1);
        bag.remove(&3);
        bag.add(5);
        assert_eq!(bag.into_iter().collect::<Vec<_>>(), [2, 4, 5]);
    }
}
