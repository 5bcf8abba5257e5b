//! Singly linked LIFO stack.
//!
//! The stack owns a chain of boxed nodes with the top of the stack at the head
//! of the chain. Push, pop, and peek only touch the head, so all three are O(1).

use std::fmt;

use crate::{Error, Result};

struct StackNode<T> {
    data: T,
    next: Option<Box<StackNode<T>>>,
}

/// A last-in, first-out stack backed by a singly linked chain.
///
/// This is the frontier container of depth-first traversal: nodes are pushed as
/// they are discovered and the most recently discovered one is expanded next.
///
/// # Examples
///
/// ```rust
/// use rootgraph::collections::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.peek()?, &2);
/// assert_eq!(stack.pop()?, 2);
/// assert_eq!(stack.pop()?, 1);
/// assert!(stack.pop().is_err());
/// # Ok::<(), rootgraph::Error>(())
/// ```
pub struct Stack<T> {
    head: Option<Box<StackNode<T>>>,
    len: usize,
}

impl<T> Stack<T> {
    /// Creates a new empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Stack { head: None, len: 0 }
    }

    /// Returns the number of elements on the stack.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Pushes `data` onto the top of the stack.
    pub fn push(&mut self, data: T) {
        let next = self.head.take();
        self.head = Some(Box::new(StackNode { data, next }));
        self.len += 1;
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        let node = self.head.take().ok_or(Error::EmptyCollection)?;
        let StackNode { data, next } = *node;
        self.head = next;
        self.len -= 1;
        Ok(data)
    }

    /// Returns a reference to the top element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the stack is empty.
    pub fn peek(&self) -> Result<&T> {
        self.head
            .as_deref()
            .map(|node| &node.data)
            .ok_or(Error::EmptyCollection)
    }

    /// Returns a mutable reference to the top element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the stack is empty.
    pub fn peek_mut(&mut self) -> Result<&mut T> {
        self.head
            .as_deref_mut()
            .map(|node| &mut node.data)
            .ok_or(Error::EmptyCollection)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.len = 0;
    }

    /// Returns an iterator from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T> Drop for Stack<T> {
    // The default drop would recurse once per node.
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Builds a stack by pushing every item in order, so the last item ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        for item in iter {
            stack.push(item);
        }
        stack
    }
}

/// Borrowing iterator over a [`Stack`], top first.
pub struct Iter<'a, T> {
    next: Option<&'a StackNode<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
