//! Instrumented searches. Each strategy answers whether a value is in the
//! tree and records every node it compared along the way, which makes it
//! possible to rank the strategies by how much work they did.
//!
//! # Examples
//!
//! ```
//! use bst_explorer::{BinaryTree, Strategy};
//!
//! let tree: BinaryTree = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
//!
//! // Preorder explores all of 30's left subtree before reaching 40.
//! let result = tree.search_preorder(40);
//! assert_eq!(result.path, vec![50, 30, 20, 40]);
//!
//! // The optimized search only walks the root-to-target path.
//! let comparison = tree.compare_searches(40);
//! let (winner, best) = comparison.winner().unwrap();
//! assert_eq!(*winner, Strategy::Postorder);
//! assert_eq!(best.path, vec![20, 40]);
//! ```

use std::fmt;

use tracing::debug;

use crate::tree::{BinaryTree, Link};
use crate::util::Probe;

/// The outcome of a single search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Whether the target was found.
    pub found: bool,
    /// Values of the compared nodes, in comparison order.
    pub path: Vec<i32>,
    /// How many nodes were compared against the target.
    pub comparisons: usize,
}

/// A way of looking for a value in the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Compare the node, then search left, then right.
    Preorder,
    /// Search left, then compare the node, then search right.
    Inorder,
    /// Search left, then right, then compare the node.
    Postorder,
    /// Follow the ordering invariant down a single root-to-leaf path.
    Bst,
}

impl Strategy {
    /// Every strategy. Ties in a [`Comparison`] ranking keep this order.
    pub const ALL: [Strategy; 4] = [Self::Preorder, Self::Inorder, Self::Postorder, Self::Bst];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Preorder => "Preorder",
            Self::Inorder => "Inorder",
            Self::Postorder => "Postorder",
            Self::Bst => "Optimized BST",
        };
        f.write_str(name)
    }
}

impl BinaryTree {
    /// Searches for `target` using the given strategy.
    pub fn search(&self, strategy: Strategy, target: i32) -> SearchResult {
        let mut probe = Probe::default();
        let found = match strategy {
            Strategy::Preorder => preorder(&self.root, target, &mut probe),
            Strategy::Inorder => inorder(&self.root, target, &mut probe),
            Strategy::Postorder => postorder(&self.root, target, &mut probe),
            Strategy::Bst => bst(&self.root, target, &mut probe),
        };
        debug!(
            %strategy,
            target,
            found,
            comparisons = probe.comparisons,
            "search finished"
        );

        SearchResult {
            found,
            path: probe.path,
            comparisons: probe.comparisons,
        }
    }

    /// Searches in root-left-right order, stopping at the first match.
    pub fn search_preorder(&self, target: i32) -> SearchResult {
        self.search(Strategy::Preorder, target)
    }

    /// Searches in left-root-right order, stopping at the first match.
    pub fn search_inorder(&self, target: i32) -> SearchResult {
        self.search(Strategy::Inorder, target)
    }

    /// Searches in left-right-root order, stopping at the first match. A
    /// node is only compared after both of its subtrees came up empty.
    pub fn search_postorder(&self, target: i32) -> SearchResult {
        self.search(Strategy::Postorder, target)
    }

    /// Searches by descending left or right depending on how `target`
    /// compares to each node. Makes at most `height()` comparisons.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_explorer::BinaryTree;
    ///
    /// let tree: BinaryTree = [50, 30, 70, 60].into_iter().collect();
    /// let result = tree.search_bst(65);
    ///
    /// assert!(!result.found);
    /// assert_eq!(result.path, vec![50, 70, 60]);
    /// ```
    pub fn search_bst(&self, target: i32) -> SearchResult {
        self.search(Strategy::Bst, target)
    }

    /// Runs every [`Strategy`] for `target` and ranks them.
    pub fn compare_searches(&self, target: i32) -> Comparison {
        Comparison::from_results(
            Strategy::ALL
                .into_iter()
                .map(|strategy| (strategy, self.search(strategy, target))),
        )
    }
}

fn preorder(link: &Link, target: i32, probe: &mut Probe) -> bool {
    let Some(n) = link else { return false };
    probe.matches(n.value, target)
        || preorder(&n.left, target, probe)
        || preorder(&n.right, target, probe)
}

fn inorder(link: &Link, target: i32, probe: &mut Probe) -> bool {
    let Some(n) = link else { return false };
    inorder(&n.left, target, probe)
        || probe.matches(n.value, target)
        || inorder(&n.right, target, probe)
}

fn postorder(link: &Link, target: i32, probe: &mut Probe) -> bool {
    let Some(n) = link else { return false };
    postorder(&n.left, target, probe)
        || postorder(&n.right, target, probe)
        || probe.matches(n.value, target)
}

fn bst(link: &Link, target: i32, probe: &mut Probe) -> bool {
    let mut current = link.as_deref();
    while let Some(n) = current {
        if probe.matches(n.value, target) {
            return true;
        }
        current = if target < n.value {
            n.left.as_deref()
        } else {
            n.right.as_deref()
        };
    }
    false
}

/// Search results ranked by how many comparisons each strategy needed.
#[derive(Clone, Debug)]
pub struct Comparison {
    ranking: Vec<(Strategy, SearchResult)>,
}

impl Comparison {
    /// Ranks the given results, fewest comparisons first. The sort is
    /// stable so equal counts keep their input order.
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = (Strategy, SearchResult)>,
    {
        let mut ranking: Vec<_> = results.into_iter().collect();
        ranking.sort_by_key(|(_, result)| result.comparisons);
        Self { ranking }
    }

    /// Every result, fewest comparisons first.
    pub fn ranking(&self) -> &[(Strategy, SearchResult)] {
        &self.ranking
    }

    /// The strategy that needed the fewest comparisons.
    pub fn winner(&self) -> Option<&(Strategy, SearchResult)> {
        self.ranking.first()
    }

    /// The result recorded for `strategy`, if it was part of the comparison.
    pub fn result(&self, strategy: Strategy) -> Option<&SearchResult> {
        self.ranking
            .iter()
            .find(|(s, _)| *s == strategy)
            .map(|(_, result)| result)
    }

    /// The winner's comparison count divided by the optimized BST search's.
    ///
    /// `None` when the optimized search itself won, when it isn't part of
    /// the comparison, or when it made no comparisons at all. A traversal
    /// can legitimately beat the optimized search (e.g. an inorder search
    /// for the smallest value) so values below 1.0 are expected.
    pub fn ratio(&self) -> Option<f64> {
        let (winner, best) = self.winner()?;
        if *winner == Strategy::Bst {
            return None;
        }

        match self.result(Strategy::Bst)?.comparisons {
            0 => None,
            bst => Some(best.comparisons as f64 / bst as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BinaryTree {
        [50, 30, 70, 20, 40, 60, 80].into_iter().collect()
    }

    fn strategies(comparison: &Comparison) -> Vec<Strategy> {
        comparison.ranking().iter().map(|(s, _)| *s).collect()
    }

    #[test]
    fn test_search_present_value() {
        let tree = sample();

        let bst = tree.search_bst(40);
        assert!(bst.found);
        assert_eq!(bst.path, vec![50, 30, 40]);
        assert_eq!(bst.comparisons, 3);

        let pre = tree.search_preorder(40);
        assert!(pre.found);
        assert_eq!(pre.path, vec![50, 30, 20, 40]);
        assert_eq!(pre.comparisons, 4);

        let ino = tree.search_inorder(40);
        assert!(ino.found);
        assert_eq!(ino.path, vec![20, 30, 40]);

        let post = tree.search_postorder(40);
        assert!(post.found);
        assert_eq!(post.path, vec![20, 40]);
    }

    #[test]
    fn test_postorder_compares_root_last() {
        let tree = sample();
        let result = tree.search_postorder(50);

        assert!(result.found);
        assert_eq!(result.path, vec![20, 40, 30, 60, 80, 70, 50]);
        assert_eq!(result.comparisons, 7);
    }

    #[test]
    fn test_search_absent_value() {
        let tree = sample();

        for strategy in Strategy::ALL {
            assert!(!tree.search(strategy, 65).found);
        }

        // 65 would be inserted as 60's right child.
        let bst = tree.search_bst(65);
        assert_eq!(bst.path, vec![50, 70, 60]);

        // The traversal searches have to look at everything.
        assert_eq!(tree.search_preorder(65).path, tree.preorder());
        assert_eq!(tree.search_inorder(65).path, tree.inorder());
        assert_eq!(tree.search_postorder(65).path, tree.postorder());
    }

    #[test]
    fn test_search_empty_tree() {
        let tree = BinaryTree::new();

        for strategy in Strategy::ALL {
            assert_eq!(tree.search(strategy, 1), SearchResult::default());
        }

        let comparison = tree.compare_searches(1);
        assert_eq!(comparison.ratio(), None);
    }

    #[test]
    fn test_ranking_is_stable() {
        let comparison = sample().compare_searches(50);

        // Preorder and BST both hit the root first. Preorder stays ahead.
        assert_eq!(
            strategies(&comparison),
            vec![
                Strategy::Preorder,
                Strategy::Bst,
                Strategy::Inorder,
                Strategy::Postorder
            ]
        );
        assert_eq!(comparison.ratio(), Some(1.0));
    }

    #[test]
    fn test_traversal_can_beat_bst() {
        let comparison = sample().compare_searches(20);

        let (winner, result) = comparison.winner().unwrap();
        assert_eq!(*winner, Strategy::Inorder);
        assert_eq!(result.comparisons, 1);

        let ratio = comparison.ratio().unwrap();
        assert!((ratio - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_bst_wins_for_absent_value() {
        let comparison = sample().compare_searches(65);

        assert_eq!(comparison.winner().unwrap().0, Strategy::Bst);
        assert_eq!(comparison.ratio(), None);
        assert_eq!(
            strategies(&comparison)[1..],
            [Strategy::Preorder, Strategy::Inorder, Strategy::Postorder]
        );
    }

    #[test]
    fn test_result_lookup() {
        let comparison = sample().compare_searches(80);

        assert_eq!(comparison.result(Strategy::Bst).unwrap().path, vec![50, 70, 80]);
        assert_eq!(
            comparison.result(Strategy::Postorder).unwrap().path,
            vec![20, 40, 30, 60, 80]
        );

        let partial = Comparison::from_results([(Strategy::Inorder, SearchResult::default())]);
        assert!(partial.result(Strategy::Bst).is_none());
        assert_eq!(partial.ratio(), None);
    }
}
