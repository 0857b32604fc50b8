//! Depth-first walks shared by the trees. Each walk keeps its own stack of
//! borrowed nodes instead of recursing, so a degenerate tree can't overflow
//! the call stack while it's being iterated.

use crate::Key;

/// A node with a key and up to two children.
pub(crate) trait BinaryNode {
    fn key(&self) -> Key;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;
}

/// Left subtree, then the node, then the right subtree.
pub(crate) struct InOrder<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N: BinaryNode> InOrder<'a, N> {
    pub(crate) fn new(root: Option<&'a N>) -> Self {
        let mut walk = Self { stack: Vec::new() };
        walk.push_left_spine(root);
        walk
    }

    fn push_left_spine(&mut self, mut node: Option<&'a N>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, N: BinaryNode> Iterator for InOrder<'a, N> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.key())
    }
}

/// The node, then its left subtree, then its right subtree.
pub(crate) struct PreOrder<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N: BinaryNode> PreOrder<'a, N> {
    pub(crate) fn new(root: Option<&'a N>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, N: BinaryNode> Iterator for PreOrder<'a, N> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.key())
    }
}

/// Both subtrees (left first), then the node.
pub(crate) struct PostOrder<'a, N> {
    /// The flag is set once a node's children have been pushed above it.
    stack: Vec<(&'a N, bool)>,
}

impl<'a, N: BinaryNode> PostOrder<'a, N> {
    pub(crate) fn new(root: Option<&'a N>) -> Self {
        Self {
            stack: root.map(|n| (n, false)).into_iter().collect(),
        }
    }
}

impl<'a, N: BinaryNode> Iterator for PostOrder<'a, N> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node.key());
            }

            self.stack.push((node, true));
            if let Some(right) = node.right() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left() {
                self.stack.push((left, false));
            }
        }
    }
}
