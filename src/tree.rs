//! An owned, unbalanced BST of unique values.
//!
//! Values go in through [`Tree::insert`] and are never rebalanced in place: the shape of the tree
//! depends only on the order the values arrived in. To restore a logarithmic height, move the
//! values out with [`Tree::drain_sorted`] and build a new tree from them with
//! [`Tree::from_sorted`] (or do both at once with [`Tree::rebalance`]).
//!
//! # Examples
//!
//! ```
//! use bintree::Tree;
//!
//! let mut tree = Tree::new();
//! for x in [5, 3, 8, 1, 4] {
//!     assert!(tree.insert(x));
//! }
//!
//! // Duplicates are turned away.
//! assert!(!tree.insert(3));
//!
//! assert_eq!(tree.retrieve(&4), Some(&4));
//! assert_eq!(tree.retrieve(&9), None);
//! assert_eq!(tree.depth(&8), 2);
//! assert_eq!(tree.to_string(), "1 3 4 5 8\n");
//!
//! // Moving the values out leaves the tree empty.
//! let values = tree.drain_sorted();
//! assert_eq!(values, vec![1, 3, 4, 5, 8]);
//! assert!(tree.is_empty());
//!
//! // And building from them yields a balanced tree.
//! let tree = Tree::from_sorted(values);
//! assert_eq!(tree.root(), &4);
//! assert_eq!(tree.height(), 3);
//! ```

use std::cmp::Ordering;
use std::vec;

use tracing::{debug, trace};

use crate::error::TreeError;

/// An owning link to a subtree. `None` marks the empty spot below a leaf.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree holding unique values. Every value in a node's left subtree is less than
/// the node's value and every value in its right subtree is greater.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    pub(crate) root: Link<T>,
}

/// A `Node` owns one value and, possibly, a left and a right child.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Trees are equal when they have the same shape and hold equal values at every position. Two
/// trees holding the same values but built in different orders are usually *not* equal.
impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        Node::subtrees_eq(self.root.as_deref(), other.root.as_deref())
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a balanced tree out of `values`, which must be in strictly ascending order. The
    /// values are moved into the tree.
    ///
    /// The middle value (the lower of the two middles for an even count) becomes the root and
    /// each half is built the same way, so the tree is `⌈log2(n + 1)⌉` levels tall.
    ///
    /// ## Panics
    ///
    /// In debug builds, when `values` is not strictly ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3, 4]);
    ///
    /// assert_eq!(tree.root(), &2);
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn from_sorted(values: Vec<T>) -> Self
    where
        T: Ord,
    {
        Self {
            root: Self::build_balanced(values),
        }
    }

    /// Replaces the contents of this tree with a balanced tree built from `values`. See
    /// [`Tree::from_sorted`].
    pub fn fill_from_sorted(&mut self, values: Vec<T>)
    where
        T: Ord,
    {
        self.clear();
        self.root = Self::build_balanced(values);
    }

    /// Moves every value out of the tree in ascending order. The tree is empty afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("pear");
    /// tree.insert("apple");
    ///
    /// assert_eq!(tree.drain_sorted(), vec!["apple", "pear"]);
    /// assert!(tree.is_empty());
    /// ```
    pub fn drain_sorted(&mut self) -> Vec<T> {
        let mut values = Vec::new();
        let mut stack = Vec::new();
        let mut current = self.root.take();

        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            let Some(node) = stack.pop() else {
                break;
            };
            let Node { value, right, .. } = *node;
            values.push(value);
            current = right;
        }

        debug!(len = values.len(), "drained tree");
        values
    }

    /// Rebuilds this tree so that it is balanced, keeping the same values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 1..=7 {
    ///     tree.insert(x);
    /// }
    /// assert_eq!(tree.height(), 7);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 3);
    /// assert_eq!(tree.root(), &4);
    /// ```
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        let values = self.drain_sorted();
        self.fill_from_sorted(values);
    }

    /// Drops every value in the tree, leaving it empty. Children are dropped before their parent
    /// and left subtrees before right ones.
    pub fn clear(&mut self) {
        let Some(root) = self.root.take() else {
            return;
        };

        // The flag records whether the node's children have already been pushed.
        let mut stack = vec![(root, false)];
        let mut dropped = 0usize;
        while let Some((mut node, visited)) = stack.pop() {
            if visited {
                drop(node);
                dropped += 1;
                continue;
            }
            let left = node.left.take();
            let right = node.right.take();
            stack.push((node, true));
            if let Some(right) = right {
                stack.push((right, false));
            }
            if let Some(left) = left {
                stack.push((left, false));
            }
        }

        debug!(dropped, "cleared tree");
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the values in the tree.
    pub fn len(&self) -> usize {
        Node::count(self.root.as_deref())
    }

    /// Gets the number of levels in the tree. An empty tree has a height of 0 and a lone root a
    /// height of 1.
    pub fn height(&self) -> usize {
        Node::height(self.root.as_deref())
    }

    /// Inserts `value` into the tree. Returns `false`, dropping `value`, if an equal value is
    /// already stored. Use [`Tree::try_insert`] to get the rejected value back.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(7));
    /// assert!(!tree.insert(7));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        self.try_insert(value).is_ok()
    }

    /// Inserts `value` into the tree. If an equal value is already stored the tree is left
    /// unchanged and `value` is returned inside [`TreeError::Duplicate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.try_insert(String::from("a")), Ok(()));
    /// assert_eq!(
    ///     tree.try_insert(String::from("a")),
    ///     Err(TreeError::Duplicate(String::from("a")))
    /// );
    /// ```
    pub fn try_insert(&mut self, value: T) -> Result<(), TreeError<T>>
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        let mut depth = 1usize;
        while let Some(node) = link {
            link = match node.value.cmp(&value) {
                Ordering::Less => &mut node.right,
                Ordering::Greater => &mut node.left,
                Ordering::Equal => {
                    trace!(depth, "rejected duplicate value");
                    return Err(TreeError::Duplicate(value));
                }
            };
            depth += 1;
        }

        *link = Some(Box::new(Node::new(value)));
        trace!(depth, "inserted value");
        Ok(())
    }

    /// Potentially finds the stored value equal to `target`. If no node holds an equal value,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.retrieve(&1), Some(&1));
    /// assert_eq!(tree.retrieve(&42), None);
    /// ```
    pub fn retrieve(&self, target: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match target.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => node.right.as_deref(),
            };
        }

        None
    }

    /// Like [`Tree::retrieve`] but hands out a mutable reference to the stored value.
    ///
    /// The caller must not change the value in a way that changes how it orders against the
    /// other values in the tree. The tree doesn't check this and later operations will misbehave
    /// if it happens.
    pub fn retrieve_mut(&mut self, target: &T) -> Option<&mut T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            current = match target.cmp(&node.value) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
                Ordering::Greater => node.right.as_deref_mut(),
            };
        }

        None
    }

    /// Finds the level of the node holding `target`, counting the root as level 1. Returns 0 if
    /// no node holds it.
    ///
    /// **Note** This does not use the ordering of the tree to decide where to look. It checks a
    /// node, then searches its whole left subtree, and only then its right subtree.
    pub fn depth(&self, target: &T) -> usize
    where
        T: PartialEq,
    {
        self.root
            .as_deref()
            .map_or(0, |root| root.depth_of(target))
    }

    /// Gets the value at the root of the tree.
    ///
    /// ## Panics
    ///
    /// When the tree is empty. See [`Tree::try_root`] for a non-panicking version.
    pub fn root(&self) -> &T {
        match self.try_root() {
            Ok(value) => value,
            Err(_) => panic!("called `Tree::root` on an empty tree"),
        }
    }

    /// Gets the value at the root of the tree or [`TreeError::Empty`] if there isn't one.
    pub fn try_root(&self) -> Result<&T, TreeError<T>> {
        self.root
            .as_deref()
            .map(|root| &root.value)
            .ok_or(TreeError::Empty)
    }

    fn build_balanced(values: Vec<T>) -> Link<T>
    where
        T: Ord,
    {
        if cfg!(debug_assertions) {
            assert!(
                values.windows(2).all(|pair| pair[0] < pair[1]),
                "values must be strictly ascending to build a tree"
            );
        }

        let len = values.len();
        let root = Node::build_balanced(len, &mut values.into_iter());
        debug!(len, "built balanced tree");
        root
    }
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` with the given `value`.
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Builds a subtree out of the next `len` values. The left half is built first so that the
    /// values are consumed in order and the subtree root is the lower middle value.
    fn build_balanced(len: usize, values: &mut vec::IntoIter<T>) -> Link<T> {
        if len == 0 {
            return None;
        }

        let left_len = (len - 1) / 2;
        let left = Self::build_balanced(left_len, values);
        let value = values.next()?;
        let right = Self::build_balanced(len - left_len - 1, values);

        Some(Box::new(Self { value, left, right }))
    }

    fn subtrees_eq(a: Option<&Self>, b: Option<&Self>) -> bool
    where
        T: PartialEq,
    {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                a.value == b.value
                    && Self::subtrees_eq(a.left.as_deref(), b.left.as_deref())
                    && Self::subtrees_eq(a.right.as_deref(), b.right.as_deref())
            }
            _ => false,
        }
    }

    /// Level of `target` relative to this node (this node being level 1), or 0 if it isn't in
    /// this subtree.
    fn depth_of(&self, target: &T) -> usize
    where
        T: PartialEq,
    {
        if self.value == *target {
            return 1;
        }

        let below = match self.left.as_deref().map_or(0, |left| left.depth_of(target)) {
            0 => self
                .right
                .as_deref()
                .map_or(0, |right| right.depth_of(target)),
            found => found,
        };

        match below {
            0 => 0,
            found => found + 1,
        }
    }

    fn count(node: Option<&Self>) -> usize {
        node.map_or(0, |n| {
            Self::count(n.left.as_deref()) + 1 + Self::count(n.right.as_deref())
        })
    }

    fn height(node: Option<&Self>) -> usize {
        node.map_or(0, |n| {
            Self::height(n.left.as_deref()).max(Self::height(n.right.as_deref())) + 1
        })
    }
}
