use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// a binary search tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op {
    /// Insert the value into the tree
    Insert(i8),
    /// Look the value up with every search strategy
    Search(i8),
    /// Compare traversals against the model
    Traverse,
}

impl Arbitrary for Op {
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(i8::arbitrary(g)),
            1 => Op::Search(i8::arbitrary(g)),
            2 => Op::Traverse,
            _ => unreachable!(),
        }
    }
}
