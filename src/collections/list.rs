//! Doubly linked list with indexed access.
//!
//! Nodes are stored in a [`generational_arena::Arena`] and link to both
//! neighbours by arena [`Index`]. Because neither link owns the other node,
//! there is no `Rc`/`Weak` pairing to keep consistent: unlinking a node is a
//! matter of rewriting two handles and removing one arena slot.
//!
//! # Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `push_*` / `pop_*` / `front` / `back` | O(1) |
//! | `at` / `at_mut` / `insert_after` / `remove` | O(n), walking from the nearer end |
//! | `erase` / `erase_all` / `contains` / `position` | O(n) |
//! | `reverse` | O(n), in place |
//!
//! The graph uses this list as the ordered child list of every node.

use std::fmt;

use generational_arena::{Arena, Index};

use crate::{Error, Result};

struct ListNode<T> {
    data: T,
    prev: Option<Index>,
    next: Option<Index>,
}

/// An ordered, doubly linked sequence.
///
/// # Examples
///
/// ```rust
/// use rootgraph::collections::DoubleLinkedList;
///
/// let mut list: DoubleLinkedList<i32> = [5, 7, 9].into_iter().collect();
/// list.reverse();
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![9, 7, 5]);
///
/// list.insert_after(0, 8)?;
/// assert_eq!(list.at(1)?, &8);
/// assert!(list.erase(&7));
/// assert_eq!(list.len(), 3);
/// # Ok::<(), rootgraph::Error>(())
/// ```
pub struct DoubleLinkedList<T> {
    nodes: Arena<ListNode<T>>,
    head: Option<Index>,
    tail: Option<Index>,
}

impl<T> DoubleLinkedList<T> {
    /// Creates a new empty list.
    #[must_use]
    pub fn new() -> Self {
        DoubleLinkedList {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends `data` at the back.
    pub fn push_back(&mut self, data: T) {
        let index = self.nodes.insert(ListNode {
            data,
            prev: self.tail,
            next: None,
        });
        match self.tail.and_then(|tail| self.nodes.get_mut(tail)) {
            Some(tail) => tail.next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }

    /// Prepends `data` at the front.
    pub fn push_front(&mut self, data: T) {
        let index = self.nodes.insert(ListNode {
            data,
            prev: None,
            next: self.head,
        });
        match self.head.and_then(|head| self.nodes.get_mut(head)) {
            Some(head) => head.prev = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the list is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(Error::EmptyCollection)?;
        self.unlink(tail).ok_or(Error::EmptyCollection)
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::EmptyCollection)?;
        self.unlink(head).ok_or(Error::EmptyCollection)
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the list is empty.
    pub fn front(&self) -> Result<&T> {
        self.head
            .and_then(|head| self.nodes.get(head))
            .map(|node| &node.data)
            .ok_or(Error::EmptyCollection)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the list is empty.
    pub fn back(&self) -> Result<&T> {
        self.tail
            .and_then(|tail| self.nodes.get(tail))
            .map(|node| &node.data)
            .ok_or(Error::EmptyCollection)
    }

    /// Returns the element at position `index`, counting from zero.
    ///
    /// # Arguments
    ///
    /// * `index` - Position in the list, `0..len()`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T> {
        let slot = self.slot_at(index)?;
        self.nodes
            .get(slot)
            .map(|node| &node.data)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Returns a mutable reference to the element at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len();
        let slot = self.slot_at(index)?;
        self.nodes
            .get_mut(slot)
            .map(|node| &mut node.data)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Inserts `data` directly after the element at position `index`.
    ///
    /// # Arguments
    ///
    /// * `index` - Position of the element the new one follows
    /// * `data` - The value to insert
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`. Use
    /// [`push_front`](Self::push_front) to insert into an empty list.
    pub fn insert_after(&mut self, index: usize, data: T) -> Result<()> {
        let anchor = self.slot_at(index)?;
        let next = self.nodes.get(anchor).and_then(|node| node.next);

        let inserted = self.nodes.insert(ListNode {
            data,
            prev: Some(anchor),
            next,
        });
        if let Some(node) = self.nodes.get_mut(anchor) {
            node.next = Some(inserted);
        }
        match next.and_then(|next| self.nodes.get_mut(next)) {
            Some(node) => node.prev = Some(inserted),
            None => self.tail = Some(inserted),
        }
        Ok(())
    }

    /// Removes and returns the element at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let len = self.len();
        let slot = self.slot_at(index)?;
        self.unlink(slot).ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Reverses the list in place.
    pub fn reverse(&mut self) {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            cursor = match self.nodes.get_mut(index) {
                Some(node) => {
                    std::mem::swap(&mut node.prev, &mut node.next);
                    // after the swap `prev` holds the old successor
                    node.prev
                }
                None => None,
            };
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Returns a double-ended iterator from front to back.
    ///
    /// `iter().rev()` walks from back to front.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Resolves a position to its arena slot, walking from the nearer end.
    fn slot_at(&self, index: usize) -> Result<Index> {
        let len = self.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        let found = if index <= len / 2 {
            let mut cursor = self.head;
            for _ in 0..index {
                cursor = cursor.and_then(|slot| self.nodes.get(slot)?.next);
            }
            cursor
        } else {
            let mut cursor = self.tail;
            for _ in 0..(len - 1 - index) {
                cursor = cursor.and_then(|slot| self.nodes.get(slot)?.prev);
            }
            cursor
        };
        found.ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Detaches the node in `slot` from its neighbours and frees it.
    fn unlink(&mut self, slot: Index) -> Option<T> {
        let node = self.nodes.remove(slot)?;

        match node.prev.and_then(|prev| self.nodes.get_mut(prev)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|next| self.nodes.get_mut(next)) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }
        Some(node.data)
    }

    /// Arena slots in list order.
    fn slots(&self) -> Vec<Index> {
        let mut slots = Vec::with_capacity(self.len());
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            slots.push(slot);
            cursor = self.nodes.get(slot).and_then(|node| node.next);
        }
        slots
    }
}

impl<T: PartialEq> DoubleLinkedList<T> {
    /// Removes the first element equal to `value`.
    ///
    /// Returns `true` if an element was removed.
    pub fn erase(&mut self, value: &T) -> bool {
        let found = self
            .slots()
            .into_iter()
            .find(|&slot| self.nodes.get(slot).is_some_and(|node| node.data == *value));
        match found {
            Some(slot) => self.unlink(slot).is_some(),
            None => false,
        }
    }

    /// Removes every element equal to `value` and returns how many were removed.
    pub fn erase_all(&mut self, value: &T) -> usize {
        let matching: Vec<Index> = self
            .slots()
            .into_iter()
            .filter(|&slot| self.nodes.get(slot).is_some_and(|node| node.data == *value))
            .collect();

        matching
            .into_iter()
            .filter(|&slot| self.unlink(slot).is_some())
            .count()
    }

    /// Returns `true` if any element equals `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }

    /// Returns the position of the first element equal to `value`.
    #[must_use]
    pub fn position(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }
}

impl<T> Default for DoubleLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoubleLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoubleLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoubleLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for DoubleLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for DoubleLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoubleLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoubleLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a DoubleLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DoubleLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// Borrowing double-ended iterator over a [`DoubleLinkedList`].
pub struct Iter<'a, T> {
    list: &'a DoubleLinkedList<T>,
    front: Option<Index>,
    back: Option<Index>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.nodes.get(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.nodes.get(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.data)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over a [`DoubleLinkedList`].
pub struct IntoIter<T> {
    list: DoubleLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back().ok()
    }
}
