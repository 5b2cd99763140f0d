//! Sideways text rendering. The right subtree is drawn above its parent
//! and the left subtree below, each level indented by four more spaces, so
//! reading the output top to bottom lists values in descending order.
//!
//! ```
//! use bst_explorer::BinaryTree;
//!
//! let tree: BinaryTree = [2, 1, 3].into_iter().collect();
//!
//! assert_eq!(tree.render(), "    └── 3\n2\n    └── 1\n");
//! assert_eq!(BinaryTree::new().render(), "The tree is empty\n");
//! ```

use std::fmt;

use crate::tree::{BinaryTree, Link};

/// Printed instead of any nodes when the tree has no root.
pub const EMPTY_NOTICE: &str = "The tree is empty";

const INDENT: usize = 4;
const CONNECTOR: &str = "└── ";

impl BinaryTree {
    /// Renders the tree into a new `String`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Writes the rendering into `out`, one line per node.
    pub fn render_to<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        if self.is_empty() {
            return writeln!(out, "{EMPTY_NOTICE}");
        }
        render(&self.root, 0, out)
    }
}

fn render<W: fmt::Write>(link: &Link, depth: usize, out: &mut W) -> fmt::Result {
    let Some(n) = link else { return Ok(()) };

    render(&n.right, depth + 1, out)?;
    let connector = if depth > 0 { CONNECTOR } else { "" };
    writeln!(
        out,
        "{:indent$}{connector}{}",
        "",
        n.value,
        indent = depth * INDENT
    )?;
    render(&n.left, depth + 1, out)
}

impl fmt::Display for BinaryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_to(f)
    }
}
