//! Turns tree results into the text the shell prints.

use std::io::{self, Write};

use bst_explorer::{BinaryTree, Comparison, SearchResult, Strategy, Traversal};

const EMPTY_SEQUENCE: &str = "(empty tree)";
const EMPTY_PATH: &str = "(none)";

/// Joins visited values with arrows, e.g. `50 -> 30 -> 40`.
pub fn format_path(path: &[i32]) -> String {
    if path.is_empty() {
        return EMPTY_PATH.to_string();
    }
    path.iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub fn write_insert<W: Write>(out: &mut W, value: i32, inserted: bool) -> io::Result<()> {
    if inserted {
        writeln!(out, "Value {value} inserted.")
    } else {
        writeln!(out, "Value {value} already present.")
    }
}

pub fn write_properties<W: Write>(out: &mut W, tree: &BinaryTree) -> io::Result<()> {
    writeln!(out, "Height: {}", tree.height())?;
    writeln!(out, "Degree: {}", tree.degree())?;
    writeln!(out, "Order (average nodes per level): {:.2}", tree.order())?;
    writeln!(out, "Nodes: {}", tree.node_count())?;

    writeln!(out)?;
    writeln!(out, "Nodes per level:")?;
    for (level, count) in tree.nodes_per_level() {
        writeln!(out, "Level {level}: {count} nodes")?;
    }
    Ok(())
}

pub fn write_rendering<W: Write>(out: &mut W, tree: &BinaryTree) -> io::Result<()> {
    writeln!(out, "Tree:")?;
    write!(out, "{tree}")
}

pub fn write_traversals<W: Write>(out: &mut W, tree: &BinaryTree) -> io::Result<()> {
    for (i, traversal) in Traversal::ALL.into_iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{traversal}:")?;

        let values = tree.traverse(traversal);
        if values.is_empty() {
            writeln!(out, "{EMPTY_SEQUENCE}")?;
        } else {
            let line: Vec<_> = values.iter().map(i32::to_string).collect();
            writeln!(out, "{}", line.join(" "))?;
        }
    }
    Ok(())
}

fn write_result<W: Write>(
    out: &mut W,
    strategy: Strategy,
    target: i32,
    result: &SearchResult,
) -> io::Result<()> {
    writeln!(out, "{strategy}:")?;
    if result.found {
        writeln!(out, "  ✓ Value {target} found")?;
    } else {
        writeln!(out, "  ✗ Value {target} not found")?;
    }
    writeln!(out, "  Path: {}", format_path(&result.path))?;
    writeln!(out, "  Comparisons: {}", result.comparisons)?;
    writeln!(out)
}

pub fn write_search<W: Write>(
    out: &mut W,
    target: i32,
    comparison: &Comparison,
) -> io::Result<()> {
    writeln!(out, "Searching for {target} with every strategy...")?;
    writeln!(out)?;
    for strategy in Strategy::ALL {
        if let Some(result) = comparison.result(strategy) {
            write_result(out, strategy, target, result)?;
        }
    }

    writeln!(out, "Efficiency ranking (fewer comparisons is better):")?;
    for (i, (strategy, result)) in comparison.ranking().iter().enumerate() {
        writeln!(out, "{}. {strategy}: {} comparisons", i + 1, result.comparisons)?;
    }

    if let Some((winner, _)) = comparison.winner() {
        writeln!(out)?;
        writeln!(out, "Most efficient strategy: {winner}")?;
    }
    if let Some(ratio) = comparison.ratio() {
        writeln!(
            out,
            "Best traversal / optimized BST comparison ratio: {ratio:.2}"
        )?;
    }
    Ok(())
}
