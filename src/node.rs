use std::cmp::Ordering;
use std::fmt;

/// A single tree vertex. Ownership flows strictly downward: a `Node`
/// owns its children and has no reference to its parent, so dropping
/// the root releases the whole tree with no cycle risk.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<Box<Node<T>>>,
    pub(crate) right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) fn height(&self) -> usize {
        let left = self.left.as_deref().map_or(0, Node::height);
        let right = self.right.as_deref().map_or(0, Node::height);
        left.max(right) + 1
    }
}

impl<T: Ord> Node<T> {
    /// Descends comparison-first and attaches `value` as a new leaf in
    /// the empty slot it lands in. Returns `false` without touching the
    /// tree when an equal value is already stored.
    pub(crate) fn insert(&mut self, value: T) -> bool {
        match value.cmp(&self.value) {
            Ordering::Less => match self.left.as_deref_mut() {
                Some(left) => left.insert(value),
                None => {
                    self.left = Some(Node::new(value));
                    true
                }
            },
            Ordering::Equal => false,
            Ordering::Greater => match self.right.as_deref_mut() {
                Some(right) => right.insert(value),
                None => {
                    self.right = Some(Node::new(value));
                    true
                }
            },
        }
    }

    /// Verifies the ordering invariant for this subtree by confirming
    /// every value falls strictly inside the open interval
    /// `(low, high)`, narrowing the interval for each child. Passing
    /// the interval down catches a deep node that satisfies its parent
    /// locally but violates an ancestor far above it.
    pub(crate) fn check_in(&self, low: Option<&T>, high: Option<&T>) -> bool {
        if low.map_or(false, |low| self.value <= *low) {
            return false;
        }
        if high.map_or(false, |high| self.value >= *high) {
            return false;
        }
        self.left
            .as_deref()
            .map_or(true, |left| left.check_in(low, Some(&self.value)))
            && self
                .right
                .as_deref()
                .map_or(true, |right| right.check_in(Some(&self.value), high))
    }
}

impl<T: fmt::Display> Node<T> {
    /// Writes this node's value, then the left subtree, then the right
    /// subtree. Each value is followed by a single space.
    pub(crate) fn write_preorder<W: fmt::Write>(&self, sink: &mut W) -> fmt::Result {
        write!(sink, "{} ", self.value)?;
        if let Some(left) = &self.left {
            left.write_preorder(sink)?;
        }
        if let Some(right) = &self.right {
            right.write_preorder(sink)?;
        }
        Ok(())
    }

    /// Writes the left subtree, then this node's value, then the right
    /// subtree, yielding values in ascending order.
    pub(crate) fn write_inorder<W: fmt::Write>(&self, sink: &mut W) -> fmt::Result {
        if let Some(left) = &self.left {
            left.write_inorder(sink)?;
        }
        write!(sink, "{} ", self.value)?;
        if let Some(right) = &self.right {
            right.write_inorder(sink)?;
        }
        Ok(())
    }

    /// Renders the subtree sideways, right subtree above its parent,
    /// indented two spaces per level. The output depends only on the
    /// shape and contents of the subtree.
    pub(crate) fn render(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        if let Some(right) = &self.right {
            right.render(f, depth + 1)?;
        }
        writeln!(f, "{:indent$}{}", "", self.value, indent = depth * 2)?;
        if let Some(left) = &self.left {
            left.render(f, depth + 1)?;
        }
        Ok(())
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Node {
            value: self.value.clone(),
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand-builds a node so tests can break the ordering invariant on
    /// purpose. `Tree` never produces trees like these.
    fn node<T>(value: T, left: Option<Box<Node<T>>>, right: Option<Box<Node<T>>>) -> Box<Node<T>> {
        Box::new(Node { value, left, right })
    }

    #[test]
    fn insert_ignores_duplicates() {
        let mut root = Node::new(6);
        assert!(root.insert(8));
        assert!(root.insert(4));
        assert!(!root.insert(8));
        assert!(!root.insert(6));

        assert_eq!(root.left.as_ref().unwrap().value, 4);
        assert_eq!(root.right.as_ref().unwrap().value, 8);
    }

    #[test]
    fn height_follows_longest_path() {
        let mut root = Node::new(10);
        assert_eq!(root.height(), 1);

        root.insert(5);
        root.insert(15);
        assert_eq!(root.height(), 2);

        root.insert(3);
        root.insert(4);
        assert_eq!(root.height(), 4);
    }

    #[test]
    fn check_in_accepts_valid_subtree() {
        let mut root = Node::new(6);
        for value in [8, 4, 5, 7, 9, 1] {
            root.insert(value);
        }
        assert!(root.check_in(None, None));
    }

    #[test]
    fn check_in_rejects_local_violation() {
        // 5 sits in the left child slot of 2.
        let root = node(2, Some(node(5, None, None)), None);
        assert!(!root.check_in(None, None));
    }

    #[test]
    fn check_in_rejects_deep_violation() {
        // 7 is a valid right child of 3 but lives in the left subtree
        // of 5, so only the propagated upper bound can catch it.
        let root = node(5, Some(node(3, None, Some(node(7, None, None)))), None);
        assert!(!root.check_in(None, None));
    }
}
