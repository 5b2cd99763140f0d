//! The unbalanced Binary Search Tree itself. Nodes own their children
//! directly through `Option<Box<Node>>` slots so the whole structure is a
//! strict ownership tree with no parent pointers.
//!
//! # Examples
//!
//! ```
//! use bst_explorer::BinaryTree;
//!
//! let mut tree = BinaryTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.height(), 0);
//! assert!(!tree.contains(5));
//!
//! assert!(tree.insert(5));
//! assert!(tree.insert(3));
//! assert!(tree.insert(8));
//!
//! // Duplicates are rejected and don't change the tree.
//! assert!(!tree.insert(3));
//!
//! assert_eq!(tree.node_count(), 3);
//! assert_eq!(tree.degree(), 2);
//! assert_eq!(tree.preorder(), vec![5, 3, 8]);
//! ```
//!
//! Queries recurse once per level so their stack usage grows with
//! [`BinaryTree::height`]. Insertion and drop walk the tree iteratively.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, trace};

/// A child slot. `None` marks the empty pointer at the bottom of a subtree.
pub(crate) type Link = Option<Box<Node>>;

/// A `Node` holds a single value and up to two children.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) value: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    fn new(value: i32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// How many of this node's child slots are occupied.
    fn child_count(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }
}

/// The three classical depth-first visiting orders.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Node, then left subtree, then right subtree.
    Preorder,
    /// Left subtree, then node, then right subtree.
    Inorder,
    /// Left subtree, then right subtree, then node.
    Postorder,
}

impl Traversal {
    /// Every traversal, in the order they are usually presented.
    pub const ALL: [Traversal; 3] = [Self::Preorder, Self::Inorder, Self::Postorder];
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Preorder => "Preorder (root-left-right)",
            Self::Inorder => "Inorder (left-root-right)",
            Self::Postorder => "Postorder (left-right-root)",
        };
        f.write_str(name)
    }
}

/// A Binary Search Tree of `i32` values. Values are unique and the tree is
/// never rebalanced, so its shape depends entirely on insertion order.
#[derive(Clone, Default)]
pub struct BinaryTree {
    pub(crate) root: Link,
}

impl BinaryTree {
    /// Generates a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` unless it is already present. Returns `true` if a new
    /// node was created and `false` if the value was a duplicate, in which
    /// case the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_explorer::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.node_count(), 1);
    /// ```
    pub fn insert(&mut self, value: i32) -> bool {
        let mut slot = &mut self.root;
        let mut depth = 1;
        while let Some(node) = slot {
            slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    debug!(value, "duplicate value rejected");
                    return false;
                }
                Ordering::Greater => &mut node.right,
            };
            depth += 1;
        }

        *slot = Some(Box::new(Node::new(value)));
        trace!(value, depth, "value inserted");
        true
    }

    /// Whether `value` is stored in the tree. This is a plain BST lookup with
    /// no instrumentation; see [`BinaryTree::search_bst`] for the counted one.
    pub fn contains(&self, value: i32) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// The number of nodes on the longest path from the root to a leaf.
    /// An empty tree has a height of 0 and a single node a height of 1.
    pub fn height(&self) -> usize {
        fn height(link: &Link) -> usize {
            match link {
                None => 0,
                Some(n) => 1 + height(&n.left).max(height(&n.right)),
            }
        }

        height(&self.root)
    }

    /// The largest number of children held by any single node: 0 for an
    /// empty or single-node tree, otherwise 1 or 2.
    pub fn degree(&self) -> usize {
        fn degree(link: &Link) -> usize {
            match link {
                None => 0,
                Some(n) => n
                    .child_count()
                    .max(degree(&n.left))
                    .max(degree(&n.right)),
            }
        }

        degree(&self.root)
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        fn count(link: &Link) -> usize {
            match link {
                None => 0,
                Some(n) => 1 + count(&n.left) + count(&n.right),
            }
        }

        count(&self.root)
    }

    /// Average number of nodes per level, computed as
    /// `node_count() / height()`. This is not the graph-theoretic order of
    /// the tree. Every level between the root and the deepest leaf holds at
    /// least one node, so this equals the mean of [`nodes_per_level`]'s
    /// counts. An empty tree has an order of 0.
    ///
    /// [`nodes_per_level`]: BinaryTree::nodes_per_level
    pub fn order(&self) -> f64 {
        match self.height() {
            0 => 0.0,
            height => self.node_count() as f64 / height as f64,
        }
    }

    /// Maps each level (the root is level 1) to how many nodes live on it.
    pub fn nodes_per_level(&self) -> BTreeMap<usize, usize> {
        fn visit(link: &Link, level: usize, levels: &mut BTreeMap<usize, usize>) {
            if let Some(n) = link {
                *levels.entry(level).or_insert(0) += 1;
                visit(&n.left, level + 1, levels);
                visit(&n.right, level + 1, levels);
            }
        }

        let mut levels = BTreeMap::new();
        visit(&self.root, 1, &mut levels);
        levels
    }

    /// Values in root-left-right order.
    pub fn preorder(&self) -> Vec<i32> {
        self.traverse(Traversal::Preorder)
    }

    /// Values in left-root-right order. For a BST this is ascending.
    pub fn inorder(&self) -> Vec<i32> {
        self.traverse(Traversal::Inorder)
    }

    /// Values in left-right-root order.
    pub fn postorder(&self) -> Vec<i32> {
        self.traverse(Traversal::Postorder)
    }

    /// Collects every value in the given order. The result is computed fresh
    /// on each call.
    pub fn traverse(&self, traversal: Traversal) -> Vec<i32> {
        fn visit(link: &Link, traversal: Traversal, out: &mut Vec<i32>) {
            let Some(n) = link else { return };
            if traversal == Traversal::Preorder {
                out.push(n.value);
            }
            visit(&n.left, traversal, out);
            if traversal == Traversal::Inorder {
                out.push(n.value);
            }
            visit(&n.right, traversal, out);
            if traversal == Traversal::Postorder {
                out.push(n.value);
            }
        }

        let mut out = Vec::new();
        visit(&self.root, traversal, &mut out);
        out
    }
}

impl Drop for BinaryTree {
    fn drop(&mut self) {
        // Unlink children before each node is dropped so a long chain
        // doesn't blow the stack with nested `Box` drops.
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Extend<i32> for BinaryTree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<i32> for BinaryTree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl fmt::Debug for BinaryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("inorder", &self.inorder())
            .finish()
    }
}
