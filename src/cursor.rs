//! A lazy, restartable position handle over a tree's sorted order.
//!
//! A [`Cursor`] remembers the path it took into the tree: the
//! referenced node sits on top of a stack whose lower entries are
//! exactly the ancestors still awaiting their in-order visit. Advancing
//! pops the top and descends the left spine of its right child, so a
//! full sweep touches every edge at most twice.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use crate::node::Node;

/// A read-only reference to one in-order position in a
/// [`Tree`](crate::Tree), or the distinguished "no position" end
/// cursor.
///
/// Cursors are produced by [`Tree::find`](crate::Tree::find),
/// [`Tree::min`](crate::Tree::min), [`Tree::max`](crate::Tree::max)
/// and [`Tree::min_greater_than`](crate::Tree::min_greater_than), and
/// advance through the stored values in ascending order. A cursor
/// borrows its tree, so the tree cannot be mutated while any cursor is
/// alive - there is no way to observe a stale position.
///
/// # Examples
///
/// ```
/// use bstree::Tree;
///
/// let tree: Tree<i32> = vec![6, 8, 4].into_iter().collect();
///
/// let mut cursor = tree.min();
/// assert_eq!(cursor.value(), Some(&4));
///
/// cursor.advance();
/// assert_eq!(cursor.value(), Some(&6));
///
/// cursor.advance();
/// cursor.advance();
/// assert!(cursor.is_end());
/// ```
pub struct Cursor<'a, T> {
    /// The referenced node on top, below it every ancestor whose value
    /// is still greater than everything visited so far.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Cursor<'a, T> {
    /// The "no position" cursor.
    pub(crate) fn end() -> Self {
        Cursor { stack: Vec::new() }
    }

    /// Positions the cursor on the smallest value reachable from
    /// `root`, which is the start of the in-order sequence.
    pub(crate) fn first(root: Option<&'a Node<T>>) -> Self {
        let mut cursor = Cursor::end();
        cursor.push_left_spine(root);
        cursor
    }

    /// Positions the cursor on the largest value reachable from
    /// `root`. The largest value has no pending ancestors, so the
    /// stack holds that node alone.
    pub(crate) fn last(root: Option<&'a Node<T>>) -> Self {
        match root {
            None => Cursor::end(),
            Some(mut node) => {
                while let Some(right) = node.right.as_deref() {
                    node = right;
                }
                Cursor { stack: vec![node] }
            }
        }
    }

    /// The value at this position, or `None` for the end cursor.
    pub fn value(&self) -> Option<&'a T> {
        self.stack.last().map(|node| &node.value)
    }

    /// Returns true iff this is the "no position" cursor: a failed
    /// lookup, a query on an empty tree, or a cursor advanced past the
    /// largest value.
    pub fn is_end(&self) -> bool {
        self.stack.is_empty()
    }

    /// Moves this cursor to its in-order successor. Advancing past the
    /// largest value yields the end cursor; advancing the end cursor
    /// leaves it in place.
    pub fn advance(&mut self) {
        if let Some(node) = self.stack.pop() {
            self.push_left_spine(node.right.as_deref());
        }
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T: Ord> Cursor<'a, T> {
    /// Positions the cursor on the node holding a value equal to
    /// `target`, or returns the end cursor if there is none. Ancestors
    /// passed on a left turn are recorded so the found position can
    /// keep advancing in order.
    pub(crate) fn find(root: Option<&'a Node<T>>, target: &T) -> Self {
        let mut cursor = Cursor::end();
        let mut node = root;
        while let Some(n) = node {
            match target.cmp(&n.value) {
                Ordering::Less => {
                    cursor.stack.push(n);
                    node = n.left.as_deref();
                }
                Ordering::Equal => {
                    cursor.stack.push(n);
                    return cursor;
                }
                Ordering::Greater => node = n.right.as_deref(),
            }
        }
        Cursor::end()
    }

    /// Positions the cursor on the smallest stored value strictly
    /// greater than `target`. Whenever the descent sees a qualifying
    /// value it records the node and keeps looking left for a smaller
    /// one; non-qualifying nodes send it right without a record. The
    /// last node recorded is the successor, making this `O(height)`.
    pub(crate) fn strictly_greater(root: Option<&'a Node<T>>, target: &T) -> Self {
        let mut cursor = Cursor::end();
        let mut node = root;
        while let Some(n) = node {
            if n.value > *target {
                cursor.stack.push(n);
                node = n.left.as_deref();
            } else {
                node = n.right.as_deref();
            }
        }
        cursor
    }
}

/// Manual implementation of `Clone` so cursors into trees of
/// non-`Clone` values can still be duplicated.
impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Cursor {
            stack: self.stack.clone(),
        }
    }
}

/// Two cursors are equal when they reference the same node of the same
/// tree, or are both the end cursor.
impl<'a, T> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.stack.last(), other.stack.last()) {
            (Some(a), Some(b)) => ptr::eq(*a, *b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, T: fmt::Debug> fmt::Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("value", &self.value()).finish()
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.value()?;
        self.advance();
        Some(value)
    }
}

impl<'a, T> FusedIterator for Cursor<'a, T> {}

#[cfg(test)]
mod tests {
    use crate::Tree;

    fn tree_of(values: &[i32]) -> Tree<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn empty_tree_cursors_are_end() {
        let tree: Tree<i32> = Tree::new();

        assert!(tree.min().is_end());
        assert!(tree.max().is_end());
        assert!(tree.find(&1).is_end());
        assert_eq!(tree.min().value(), None);
    }

    #[test]
    fn advance_walks_ascending_order() {
        let tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);

        let mut cursor = tree.min();
        let mut seen = Vec::new();
        while let Some(value) = cursor.value() {
            seen.push(*value);
            cursor.advance();
        }

        assert_eq!(seen, vec![1, 3, 4, 5, 7, 8, 9]);
        assert!(cursor.is_end());

        // Advancing the end cursor is a no-op.
        cursor.advance();
        assert!(cursor.is_end());
    }

    #[test]
    fn find_positions_keep_advancing() {
        let tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);

        let mut cursor = tree.find(&4);
        assert_eq!(cursor.value(), Some(&4));

        // 5 is an ancestor reached by a left turn, 7 is down-right.
        cursor.advance();
        assert_eq!(cursor.value(), Some(&5));
        cursor.advance();
        assert_eq!(cursor.value(), Some(&7));
    }

    #[test]
    fn max_advances_to_end() {
        let tree = tree_of(&[5, 3, 8]);

        let mut cursor = tree.max();
        assert_eq!(cursor.value(), Some(&8));
        cursor.advance();
        assert!(cursor.is_end());
    }

    #[test]
    fn equality_is_positional() {
        let tree = tree_of(&[5, 3, 8]);

        assert_eq!(tree.find(&3), tree.min());
        assert_eq!(tree.find(&8), tree.max());
        assert_ne!(tree.min(), tree.max());

        // Any two end cursors compare equal.
        assert_eq!(tree.find(&42), tree.min_greater_than(&8));

        let mut advanced = tree.min();
        advanced.advance();
        assert_eq!(advanced, tree.find(&5));
    }

    #[test]
    fn cursor_iterates_like_inorder() {
        let tree = tree_of(&[6, 8, 4]);

        let collected: Vec<i32> = tree.min().copied().collect();
        assert_eq!(collected, vec![4, 6, 8]);
    }
}
