//! Singly linked FIFO queue.
//!
//! Nodes live in a [`generational_arena::Arena`] and link to their successor
//! by arena [`Index`]. The queue keeps both a head and a tail handle, so
//! enqueueing at the back and dequeueing at the front are O(1).

use std::fmt;

use generational_arena::{Arena, Index};

use crate::{Error, Result};

struct QueueNode<T> {
    data: T,
    next: Option<Index>,
}

/// A first-in, first-out queue.
///
/// Breadth-first traversal uses this as its frontier.
///
/// # Examples
///
/// ```rust
/// use rootgraph::collections::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue("a");
/// queue.enqueue("b");
///
/// assert_eq!(queue.dequeue()?, "a");
/// assert_eq!(queue.peek()?, &"b");
/// assert_eq!(queue.len(), 1);
/// # Ok::<(), rootgraph::Error>(())
/// ```
pub struct Queue<T> {
    nodes: Arena<QueueNode<T>>,
    head: Option<Index>,
    tail: Option<Index>,
}

impl<T> Queue<T> {
    /// Creates a new empty queue.
    #[must_use]
    pub fn new() -> Self {
        Queue {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates a new empty queue with room for `capacity` elements before reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Queue {
            nodes: Arena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of queued elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends `data` at the back of the queue.
    pub fn enqueue(&mut self, data: T) {
        let index = self.nodes.insert(QueueNode { data, next: None });
        match self.tail.and_then(|tail| self.nodes.get_mut(tail)) {
            Some(tail) => tail.next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }

    /// Removes and returns the element at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::EmptyCollection)?;
        let node = self.nodes.remove(head).ok_or(Error::EmptyCollection)?;

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Ok(node.data)
    }

    /// Returns a reference to the front element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the queue is empty.
    pub fn peek(&self) -> Result<&T> {
        self.head
            .and_then(|head| self.nodes.get(head))
            .map(|node| &node.data)
            .ok_or(Error::EmptyCollection)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Returns an iterator from the front of the queue to the back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            next: self.head,
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

/// Borrowing iterator over a [`Queue`], front first.
pub struct Iter<'a, T> {
    queue: &'a Queue<T>,
    next: Option<Index>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.nodes.get(self.next?)?;
        self.next = node.next;
        Some(&node.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_fifo_order() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.dequeue().unwrap(), 1);
        assert_eq!(queue.dequeue().unwrap(), 2);
        assert_eq!(queue.dequeue().unwrap(), 3);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_empty_errors() {
        let mut queue: Queue<u8> = Queue::new();
        assert!(matches!(queue.dequeue(), Err(Error::EmptyCollection)));
        assert!(matches!(queue.peek(), Err(Error::EmptyCollection)));
    }

    #[test]
    fn test_queue_interleaved_operations() {
        let mut queue = Queue::with_capacity(2);
        queue.enqueue("a");
        queue.enqueue("b");
        assert_eq!(queue.dequeue().unwrap(), "a");

        queue.enqueue("c");
        assert_eq!(queue.peek().unwrap(), &"b");
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec!["b", "c"]);

        assert_eq!(queue.dequeue().unwrap(), "b");
        assert_eq!(queue.dequeue().unwrap(), "c");

        // Draining resets the tail, so the next enqueue becomes the head again.
        queue.enqueue("d");
        assert_eq!(queue.peek().unwrap(), &"d");
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_queue_clear() {
        let mut queue: Queue<i32> = (0..5).collect();
        assert_eq!(format!("{queue:?}"), "[0, 1, 2, 3, 4]");

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.iter().count(), 0);

        queue.extend([9, 8]);
        assert_eq!(queue.dequeue().unwrap(), 9);
    }
}
