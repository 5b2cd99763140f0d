/// Records what a search looked at. Every comparison against the target
/// appends the node's value to `path` and bumps `comparisons`, so the two
/// always agree.
#[derive(Debug, Default)]
pub(crate) struct Probe {
    pub(crate) path: Vec<i32>,
    pub(crate) comparisons: usize,
}

impl Probe {
    /// Compares `value` against `target`, recording the visit.
    pub(crate) fn matches(&mut self, value: i32, target: i32) -> bool {
        self.comparisons += 1;
        self.path.push(value);
        value == target
    }
}
