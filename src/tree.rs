//! The tree container itself: insertion, lookup, order statistics,
//! traversal and rendering over a graph of owned [`Node`]s.

use std::fmt;

use crate::cursor::Cursor;
use crate::node::Node;

/// A Binary Search Tree storing one copy of each inserted value. This
/// can be used for inserting and finding values, asking for order
/// statistics (minimum, maximum, strict successor) and walking the
/// values in sorted order through a [`Cursor`].
///
/// The tree never rebalances and has no deletion, so every node is
/// created exactly once by [`insert`](Tree::insert) and released only
/// when the tree is dropped.
///
/// # Examples
///
/// ```
/// use bstree::Tree;
///
/// let mut tree = Tree::new();
///
/// // Nothing in here yet.
/// assert!(tree.is_empty());
/// assert!(tree.find(&6).is_end());
///
/// tree.insert(6);
/// tree.insert(8);
/// tree.insert(4);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.min().value(), Some(&4));
/// assert_eq!(tree.max().value(), Some(&8));
/// assert_eq!(tree.min_greater_than(&6).value(), Some(&8));
/// ```
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Tree { root: None, len: 0 }
    }

    /// Returns true iff the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of levels on the longest root-to-leaf path. An empty
    /// tree has height 0 and a single node has height 1. Computed
    /// bottom-up on demand, not stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(6);
    /// assert_eq!(tree.height(), 1);
    ///
    /// tree.insert(8);
    /// tree.insert(4);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, Node::height)
    }

    /// Inserts the given value into the tree. Inserting a value equal
    /// to one already stored leaves the tree unchanged, so the stored
    /// values are always distinct and [`len`](Tree::len) only counts
    /// insertions that took.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    ///
    /// // Duplicates are ignored.
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        match self.root.as_deref_mut() {
            Some(root) => {
                if root.insert(value) {
                    self.len += 1;
                }
            }
            None => {
                self.root = Some(Node::new(value));
                self.len = 1;
            }
        }
    }

    /// Potentially finds the position of the given value in this tree.
    /// If no node holds an equal value, the end cursor is returned.
    /// Cost is proportional to the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1).value(), Some(&1));
    /// assert!(tree.find(&42).is_end());
    /// ```
    pub fn find(&self, value: &T) -> Cursor<'_, T>
    where
        T: Ord,
    {
        Cursor::find(self.root.as_deref(), value)
    }

    /// The position of the smallest stored value, reached by following
    /// left children from the root. The end cursor if the tree is
    /// empty.
    pub fn min(&self) -> Cursor<'_, T> {
        Cursor::first(self.root.as_deref())
    }

    /// The position of the largest stored value, reached by following
    /// right children from the root. The end cursor if the tree is
    /// empty.
    pub fn max(&self) -> Cursor<'_, T> {
        Cursor::last(self.root.as_deref())
    }

    /// The position of the smallest stored value strictly greater than
    /// `value`, whether or not `value` itself is stored. The end cursor
    /// if no stored value qualifies. Cost is proportional to the height
    /// of the tree, never a full traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<i32> = vec![6, 8, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.min_greater_than(&6).value(), Some(&8));
    /// // The probe does not have to be stored.
    /// assert_eq!(tree.min_greater_than(&5).value(), Some(&6));
    /// assert!(tree.min_greater_than(&8).is_end());
    /// ```
    pub fn min_greater_than(&self, value: &T) -> Cursor<'_, T>
    where
        T: Ord,
    {
        Cursor::strictly_greater(self.root.as_deref(), value)
    }

    /// Verifies the ordering invariant over the whole tree: every value
    /// in a node's left subtree is less than the node's value and every
    /// value in its right subtree is greater. Returns `false` on the
    /// first violation found anywhere and never panics. Trees mutated
    /// only through [`insert`](Tree::insert) always pass.
    pub fn check_sorting_invariant(&self) -> bool
    where
        T: Ord,
    {
        self.root.as_deref().map_or(true, |root| root.check_in(None, None))
    }

    /// A cursor positioned on the smallest stored value, equivalent to
    /// [`min`](Tree::min). Repeatedly advancing it visits every value
    /// in ascending order, so `Cursor` also implements [`Iterator`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<i32> = vec![2, 1, 3].into_iter().collect();
    /// let values: Vec<i32> = tree.iter().copied().collect();
    ///
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Cursor<'_, T> {
        self.min()
    }

    /// Writes every value to `sink` in preorder: a node's value first,
    /// then its left subtree, then its right subtree. Each value is
    /// followed by a single space.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<i32> = vec![6, 8, 4].into_iter().collect();
    ///
    /// let mut out = String::new();
    /// tree.traverse_preorder(&mut out).unwrap();
    /// assert_eq!(out, "6 4 8 ");
    /// ```
    pub fn traverse_preorder<W: fmt::Write>(&self, sink: &mut W) -> fmt::Result
    where
        T: fmt::Display,
    {
        match &self.root {
            Some(root) => root.write_preorder(sink),
            None => Ok(()),
        }
    }

    /// Writes every value to `sink` in ascending order, the same
    /// sequence produced by repeatedly advancing [`min`](Tree::min).
    /// Each value is followed by a single space.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<i32> = vec![6, 8, 4].into_iter().collect();
    ///
    /// let mut out = String::new();
    /// tree.traverse_inorder(&mut out).unwrap();
    /// assert_eq!(out, "4 6 8 ");
    /// ```
    pub fn traverse_inorder<W: fmt::Write>(&self, sink: &mut W) -> fmt::Result
    where
        T: fmt::Display,
    {
        match &self.root {
            Some(root) => root.write_inorder(sink),
            None => Ok(()),
        }
    }
}

/// Renders the tree sideways for debugging: the right subtree above its
/// parent, one value per line, two spaces of indent per level. The
/// output is stable for a given shape and contents but is not a
/// parseable format.
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => root.render(f, 0),
            None => Ok(()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Tree {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<T: Ord> std::iter::FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Tree::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
