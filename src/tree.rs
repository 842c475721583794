//! An unbalanced BST over a single ordered item type. Nodes own their children through `Box`es and
//! carry no parent pointers: whenever a node has to be spliced out, the slot holding it is found
//! again by walking down from the root, guided by the ordering invariant.
//!
//! # Examples
//!
//! ```
//! use bstree::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&5));
//! assert_eq!(tree.retrieve(&5), Err(TreeError::EmptyTree));
//!
//! for item in [5, 3, 8, 1, 4] {
//!     tree.insert(item);
//! }
//! assert_eq!(tree.size(), 5);
//! assert_eq!(tree.retrieve(&4), Ok(&4));
//! assert_eq!(tree.retrieve(&7), Err(TreeError::KeyNotFound));
//!
//! // No balancing happens so the shape is entirely down to insertion order.
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.depth(&1), 2);
//! assert_eq!(tree.diameter(), 3);
//!
//! // Removing a node with two children promotes its in-order successor.
//! assert_eq!(tree.remove(&3), Some(3));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 4, 5, 8]);
//!
//! // Removing something that isn't there does nothing.
//! assert_eq!(tree.remove(&3), None);
//! assert_eq!(tree.size(), 4);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::mem;

use tracing::{debug, instrument, trace};

use crate::error::{TreeError, TreeResult};

/// An owning pointer to a subtree. `None` marks the empty subtree below a leaf.
type Link<E> = Option<Box<Node<E>>>;

/// The order in which [`Tree::walk`] visits items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields items in ascending order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Breadth-first, one level at a time, each level from left to right.
    LevelOrder,
}

/// An unbalanced Binary Search Tree. Items act as their own keys: inserting an item that compares
/// equal to one already stored replaces it in place.
///
/// The tree is never rebalanced, so its shape (and the cost of every operation) is decided
/// entirely by the order in which items were inserted. Inserting sorted input degrades it to a
/// linked list.
#[derive(Clone)]
pub struct Tree<E> {
    root: Link<E>,
    size: usize,
}

impl<E> Default for Tree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for Tree<E> {
    fn drop(&mut self) {
        // Unlink children before each node goes out of scope so a degenerate chain doesn't drop
        // itself recursively.
        let mut stack: Vec<Box<Node<E>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<E> fmt::Debug for Tree<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<E> Tree<E> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Whether the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The number of items in the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Drops every item, leaving an empty tree.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Whether an item comparing equal to `key` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &E) -> bool
    where
        E: Ord,
    {
        self.search(key).is_some()
    }

    /// Finds the stored item comparing equal to `key`.
    ///
    /// ## Errors
    ///
    /// [`TreeError::EmptyTree`] when the tree holds nothing, and [`TreeError::KeyNotFound`] when
    /// it holds something but not `key`.
    pub fn retrieve(&self, key: &E) -> TreeResult<&E>
    where
        E: Ord,
    {
        if self.is_empty() {
            debug!("retrieve on an empty tree");
            return Err(TreeError::EmptyTree);
        }

        self.search(key).map(|node| &node.item).ok_or_else(|| {
            debug!(size = self.size, "retrieve of an absent key");
            TreeError::KeyNotFound
        })
    }

    /// Inserts `item` into the tree. If an equal item is already stored it is overwritten and the
    /// size stays the same.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert("b");
    /// tree.insert("a");
    /// tree.insert("b");
    ///
    /// assert_eq!(tree.size(), 2);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, item: E)
    where
        E: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match item.cmp(&node.item) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => {
                    node.item = item;
                    trace!(size = self.size, "overwrote existing item");
                    return;
                }
            }
        }

        *slot = Some(Node::new_boxed(item));
        self.size += 1;
        trace!(size = self.size, "attached new node");
    }

    /// Removes the item comparing equal to `key` and returns it. Removing an item that isn't in
    /// the tree does nothing and returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    /// assert_eq!(tree.size(), 2);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn remove(&mut self, key: &E) -> Option<E>
    where
        E: Ord,
    {
        let Some(slot) = find_slot(&mut self.root, key) else {
            trace!(size = self.size, "absent key, nothing removed");
            return None;
        };

        let removed = unlink(slot)?;
        self.size -= 1;
        trace!(size = self.size, "removed node");
        Some(removed)
    }

    /// The number of edges between the root and the node holding `key`.
    ///
    /// When `key` isn't in the tree this is `-1 - d` instead, where `d` is the depth at which
    /// `key` would land if it were inserted now. Any negative result therefore means "absent".
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.depth(&5), 0);
    /// assert_eq!(tree.depth(&8), 1);
    ///
    /// // 4 would become the right child of 3, at depth 2.
    /// assert_eq!(tree.depth(&4), -3);
    /// ```
    pub fn depth(&self, key: &E) -> isize
    where
        E: Ord,
    {
        let mut steps = 0;
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.item) {
                Ordering::Less => node.left(),
                Ordering::Equal => return steps,
                Ordering::Greater => node.right(),
            };
            steps += 1;
        }

        -1 - steps
    }

    /// The number of edges on the longest path from the root down to a leaf. An empty tree has a
    /// height of -1 and a lone root a height of 0.
    pub fn height(&self) -> isize {
        self.root().map_or(-1, Node::height)
    }

    /// The number of edges on the longest path between any two nodes. The path doesn't have to
    /// pass through the root.
    pub fn diameter(&self) -> usize {
        self.root().map_or(0, |root| root.metrics().diameter)
    }

    /// Calls `visit` on every item in ascending order.
    pub fn traverse<F>(&self, mut visit: F)
    where
        F: FnMut(&E),
    {
        if let Some(root) = self.root() {
            root.traverse(&mut visit);
        }
    }

    /// Calls `visit` on every item breadth-first: the root, then its children from left to right,
    /// then their children, and so on.
    pub fn level_traverse<F>(&self, mut visit: F)
    where
        F: FnMut(&E),
    {
        let mut queue: VecDeque<&Node<E>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(&node.item);
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }

    /// Calls `visit` on every item depth-first, each node before its left and then its right
    /// subtree.
    pub fn preorder_traverse<F>(&self, mut visit: F)
    where
        F: FnMut(&E),
    {
        let mut stack: Vec<&Node<E>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            visit(&node.item);
            stack.extend(node.right());
            stack.extend(node.left());
        }
    }

    /// Calls `visit` on every item in the given [`Order`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Order, Tree};
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let mut seen = Vec::new();
    /// tree.walk(Order::LevelOrder, |item| seen.push(*item));
    /// assert_eq!(seen, [2, 1, 3]);
    /// ```
    pub fn walk<F>(&self, order: Order, visit: F)
    where
        F: FnMut(&E),
    {
        match order {
            Order::InOrder => self.traverse(visit),
            Order::PreOrder => self.preorder_traverse(visit),
            Order::LevelOrder => self.level_traverse(visit),
        }
    }

    /// An iterator over the items in ascending order.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::new(self.root(), self.size)
    }

    fn root(&self) -> Option<&Node<E>> {
        self.root.as_deref()
    }

    fn search(&self, key: &E) -> Option<&Node<E>>
    where
        E: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.item) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }

        None
    }
}

impl<E> FromIterator<E> for Tree<E>
where
    E: Ord,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<E> Extend<E> for Tree<E>
where
    E: Ord,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, E> IntoIterator for &'a Tree<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Walks down from `slot` to the link holding the node equal to `key`.
fn find_slot<'a, E>(mut slot: &'a mut Link<E>, key: &E) -> Option<&'a mut Link<E>>
where
    E: Ord,
{
    loop {
        match key.cmp(&slot.as_ref()?.item) {
            Ordering::Less => slot = &mut slot.as_mut()?.left,
            Ordering::Equal => return Some(slot),
            Ordering::Greater => slot = &mut slot.as_mut()?.right,
        }
    }
}

/// Walks down from `slot` to the link holding the smallest node of that subtree. That node never
/// has a left child.
fn leftmost_slot<E>(mut slot: &mut Link<E>) -> &mut Link<E> {
    while slot.as_ref().is_some_and(|node| node.left.is_some()) {
        if let Some(node) = slot {
            slot = &mut node.left;
        }
    }
    slot
}

/// Takes the node out of `slot` and returns its item, keeping the ordering invariant intact.
///
/// A node with two children keeps its place: its item is swapped for that of its in-order
/// successor, whose own node (which has at most one child) is unlinked instead. So the structural
/// unlink at the bottom only ever splices out a node with at most one child.
fn unlink<E>(slot: &mut Link<E>) -> Option<E> {
    let node = slot.as_mut()?;
    if node.left.is_some() && node.right.is_some() {
        let successor = unlink(leftmost_slot(&mut node.right))?;
        return Some(mem::replace(&mut node.item, successor));
    }

    let Node { item, left, right } = *slot.take()?;
    *slot = left.or(right);
    Some(item)
}

/// Height and diameter of a subtree, gathered in a single bottom-up pass.
struct Metrics {
    height: isize,
    diameter: usize,
}

#[derive(Clone)]
struct Node<E> {
    item: E,
    left: Link<E>,
    right: Link<E>,
}

impl<E> Node<E> {
    fn new_boxed(item: E) -> Box<Self> {
        Box::new(Self {
            item,
            left: None,
            right: None,
        })
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn height(&self) -> isize {
        let left_height = self.left().map_or(-1, Self::height);
        let right_height = self.right().map_or(-1, Self::height);
        1 + left_height.max(right_height)
    }

    fn metrics(&self) -> Metrics {
        let left = self.left().map_or(Metrics::EMPTY, Self::metrics);
        let right = self.right().map_or(Metrics::EMPTY, Self::metrics);

        // Each side contributes its height plus the edge down from this node. Both heights are at
        // least -1 so this never goes negative.
        let through_self = (1 + left.height + 1 + right.height) as usize;
        Metrics {
            height: 1 + left.height.max(right.height),
            diameter: through_self.max(left.diameter).max(right.diameter),
        }
    }

    fn traverse<F>(&self, visit: &mut F)
    where
        F: FnMut(&E),
    {
        if let Some(left) = self.left() {
            left.traverse(visit);
        }
        visit(&self.item);
        if let Some(right) = self.right() {
            right.traverse(visit);
        }
    }
}

impl Metrics {
    const EMPTY: Self = Self {
        height: -1,
        diameter: 0,
    };
}

/// An in-order iterator over the items of a [`Tree`], created by [`Tree::iter`].
pub struct Iter<'a, E> {
    /// Nodes whose left subtree has been pushed but which haven't been yielded yet.
    stack: Vec<&'a Node<E>>,
    remaining: usize,
}

impl<'a, E> Iter<'a, E> {
    fn new(root: Option<&'a Node<E>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<E>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}
