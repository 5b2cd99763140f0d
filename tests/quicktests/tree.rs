use bst_explorer::{BinaryTree, Strategy};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and searches the tree agrees with the set at every step.
fn do_ops(ops: &[Op], tree: &mut BinaryTree, set: &mut BTreeSet<i32>) -> bool {
    for op in ops {
        let consistent = match *op {
            Op::Insert(x) => {
                let x = i32::from(x);
                tree.insert(x) == set.insert(x) && tree.node_count() == set.len()
            }
            Op::Search(x) => {
                let x = i32::from(x);
                let present = set.contains(&x);
                Strategy::ALL
                    .into_iter()
                    .all(|strategy| tree.search(strategy, x).found == present)
            }
            Op::Traverse => tree.inorder().into_iter().eq(set.iter().copied()),
        };
        if !consistent {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
    let mut tree = BinaryTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
}

#[quickcheck]
fn inorder_is_strictly_ascending(xs: Vec<i8>) -> bool {
    let tree: BinaryTree = xs.into_iter().map(i32::from).collect();

    tree.inorder().windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn node_count_is_distinct_values(xs: Vec<i8>) -> bool {
    let tree: BinaryTree = xs.iter().copied().map(i32::from).collect();
    let distinct: BTreeSet<_> = xs.into_iter().collect();

    tree.node_count() == distinct.len()
}

#[quickcheck]
fn reinserting_is_idempotent(xs: Vec<i8>, again: i8) -> bool {
    let mut tree: BinaryTree = xs.into_iter().map(i32::from).collect();
    tree.insert(i32::from(again));

    let count = tree.node_count();
    let inorder = tree.inorder();
    let height = tree.height();

    tree.insert(i32::from(again));

    tree.node_count() == count && tree.inorder() == inorder && tree.height() == height
}

#[quickcheck]
fn height_grows_by_at_most_one(xs: Vec<i8>) -> bool {
    let mut tree = BinaryTree::new();
    xs.into_iter().all(|x| {
        let before = tree.height();
        tree.insert(i32::from(x));
        let after = tree.height();
        after == before || after == before + 1
    })
}

#[quickcheck]
fn traversals_are_permutations(xs: Vec<i8>) -> bool {
    let tree: BinaryTree = xs.into_iter().map(i32::from).collect();
    let sorted = |mut v: Vec<i32>| {
        v.sort_unstable();
        v
    };

    sorted(tree.preorder()) == tree.inorder() && sorted(tree.postorder()) == tree.inorder()
}

#[quickcheck]
fn ranking_is_sorted(xs: Vec<i8>, target: i8) -> bool {
    let tree: BinaryTree = xs.into_iter().map(i32::from).collect();
    let comparison = tree.compare_searches(i32::from(target));

    comparison.ranking().len() == Strategy::ALL.len()
        && comparison
            .ranking()
            .windows(2)
            .all(|w| w[0].1.comparisons <= w[1].1.comparisons)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: BinaryTree = xs.iter().copied().map(i32::from).collect();

    xs.into_iter().all(|x| tree.contains(i32::from(x)))
}
