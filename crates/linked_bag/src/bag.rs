use std::{
    fmt::{self, Debug, Display},
    mem,
};

use itertools::Itertools;
use log::{debug, trace};

use crate::{
    error::{BagError, InvalidArgument},
    iter::{IntoIter, Iter},
};

pub(crate) type NodeId = usize;

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) elem: T,
    pub(crate) next: Option<NodeId>,
}

/// A cell of the arena. Vacant cells are chained into the free list.
#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant(Option<NodeId>),
}

/// A multiset keeping its elements in insertion order.
///
/// The elements live on a singly linked list whose nodes are stored in an
/// arena; `head`, `tail` and every `next` are indices into it. The tail is
/// only there to make [Bag::add] constant time.
///
/// Equality is multiset equality: two bags are equal when they hold the same
/// elements with the same multiplicities, whatever the order. There is no
/// [std::hash::Hash] implementation (see [Bag::try_hash]).
///
/// Iterating borrows the bag, so it cannot be modified while an iteration is
/// in progress.
#[derive(Clone)]
pub struct Bag<T> {
    slots: Vec<Slot<T>>,
    free: Option<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> Bag<T> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of elements, counting duplicates
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Always `false`, a bag can always be mutated
    pub const fn is_read_only(&self) -> bool {
        false
    }

    /// Appends `item` after the last element. Equal elements are kept as
    /// separate entries.
    pub fn add(&mut self, item: T) {
        let id = self.alloc(Node {
            elem: item,
            next: None,
        });
        match self.tail.and_then(|t| self.node_mut(t)) {
            Some(tail) => tail.next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        trace!("added node #{id} ({} elements)", self.len);
    }

    /// Drops every element
    pub fn clear(&mut self) {
        trace!("clearing {} elements", self.len);
        self.slots.clear();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains_by(|x| x == item)
    }

    /// `true` if some element satisfies `pred`
    pub fn contains_by<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(pred)
    }

    /// Removes the first element equal to `item`. Returns `false` and leaves
    /// the bag untouched when there is none.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove_by(|x| x == item)
    }

    /// Removes the first element satisfying `pred`, see [Bag::remove]
    pub fn remove_by<F>(&mut self, mut pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let mut previous = None;
        let mut current = self.head;
        while let Some(id) = current {
            let Some(node) = self.node(id) else { break };
            if pred(&node.elem) {
                let next = node.next;
                self.unlink(previous, id, next);
                return true;
            }
            previous = current;
            current = node.next;
        }
        false
    }

    /// Copies all the elements, in order, into `destination[start_index..]`.
    ///
    /// Nothing is written unless every element fits. The rest of
    /// `destination` is left untouched.
    pub fn copy_to(&self, destination: Option<&mut [T]>, start_index: isize) -> Result<(), BagError>
    where
        T: Clone,
    {
        let Some(destination) = destination else {
            debug!("copy_to without a destination");
            return Err(InvalidArgument::MissingDestination.into());
        };
        let start = usize::try_from(start_index).map_err(|_| {
            debug!("copy_to from negative index {start_index}");
            BagError::IndexOutOfRange { index: start_index }
        })?;

        let length = destination.len();
        match length.checked_sub(start) {
            Some(available) if available >= self.len => (),
            _ => {
                debug!("copy_to: {} elements do not fit in {length} from {start}", self.len);
                return Err(InvalidArgument::InsufficientSpace {
                    length,
                    start,
                    required: self.len,
                }
                .into());
            }
        }

        for (cell, elem) in destination[start..].iter_mut().zip(self) {
            cell.clone_from(elem);
        }
        Ok(())
    }

    /// Bags can't be hashed, this always fails with [BagError::NotImplemented]
    pub fn try_hash(&self) -> Result<u64, BagError> {
        Err(BagError::NotImplemented { operation: "hash" })
    }

    /// Iterates from the first added element to the last one. Each call starts
    /// over from the beginning.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self, self.head, self.len)
    }

    pub(crate) fn node(&self, id: NodeId) -> Option<&Node<T>> {
        match self.slots.get(id)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant(_) => None,
        }
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        match self.slots.get_mut(id)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant(_) => None,
        }
    }

    /// Removes and returns the first element
    pub(crate) fn pop_first(&mut self) -> Option<T> {
        let id = self.head?;
        let next = self.node(id)?.next;
        self.unlink(None, id, next).map(|node| node.elem)
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free {
            Some(id) => {
                let previous = mem::replace(&mut self.slots[id], Slot::Occupied(node));
                debug_assert!(
                    matches!(previous, Slot::Vacant(_)),
                    "free list points to a live node"
                );
                if let Slot::Vacant(next_free) = previous {
                    self.free = next_free;
                }
                id
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    /// Takes `id` out of the chain. `previous` must be the node right before
    /// it (or `None` if `id` is the head) and `next` the one right after.
    fn unlink(
        &mut self,
        previous: Option<NodeId>,
        id: NodeId,
        next: Option<NodeId>,
    ) -> Option<Node<T>> {
        match previous.and_then(|p| self.node_mut(p)) {
            Some(previous) => previous.next = next,
            None => self.head = next,
        }
        if self.tail == Some(id) {
            self.tail = previous;
        }
        self.len -= 1;
        trace!("removed node #{id} ({} elements left)", self.len);

        let node = match mem::replace(&mut self.slots[id], Slot::Vacant(self.free)) {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant(_) => None,
        };
        self.free = Some(id);
        if self.len == 0 {
            self.slots.clear();
            self.free = None;
        }
        node
    }
}

impl<T> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Bag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for Bag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().format(", "))
    }
}

impl<T: PartialEq> PartialEq for Bag<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && utils::multiset::same_multiset(self, other)
    }
}

impl<T: Eq> Eq for Bag<T> {}

impl<T> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

impl<T> Extend<T> for Bag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|e| self.add(e))
    }
}

impl<T, const N: usize> From<[T; N]> for Bag<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> IntoIterator for Bag<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Bag<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
