use super::{Text, allocate, try_with_capacity};
use crate::{GsaisError, InputElement, OutputElement};

const NONE: usize = usize::MAX;

/// Answers "minimum of all values pushed after tick `t`" for a stream of values.
///
/// Every push returns a tick, starting at 1. The stack keeps only the values that can still be a minimum, so
/// it is increasing from bottom to top. Every tick belongs to the set of the stack entry that answers queries
/// for it. A push merges the sets of all entries it pops into its own, which makes a query one find in a
/// union-find forest with path halving and union by size.
#[derive(Debug)]
pub(crate) struct MinStack {
    /// Roots of the sets of the stack entries, bottom to top.
    entries: Vec<usize>,
    parent: Vec<usize>,
    size: Vec<usize>,
    /// The value of the stack entry of a set, only meaningful for roots.
    value: Vec<usize>,
}

impl MinStack {
    /// A stack for up to `capacity` pushes between two calls of [`clear`](Self::clear).
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, GsaisError> {
        let mut stack = Self {
            entries: try_with_capacity(capacity)?,
            parent: try_with_capacity(capacity + 1)?,
            size: try_with_capacity(capacity + 1)?,
            value: try_with_capacity(capacity + 1)?,
        };
        stack.clear();

        Ok(stack)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();

        // tick 0 is never pushed
        self.parent.clear();
        self.parent.push(0);
        self.size.clear();
        self.size.push(0);
        self.value.clear();
        self.value.push(0);
    }

    pub(crate) fn push(&mut self, value: usize) -> usize {
        let tick = self.parent.len();
        self.parent.push(tick);
        self.size.push(1);
        self.value.push(value);

        let mut root = tick;
        while let Some(&top) = self.entries.last() {
            if self.value[top] < value {
                break;
            }

            self.entries.pop();
            root = self.union(root, top);
        }

        self.value[root] = value;
        self.entries.push(root);

        tick
    }

    /// Only valid if at least one value was pushed after `tick`.
    pub(crate) fn min_after(&mut self, tick: usize) -> usize {
        let root = self.find(tick + 1);
        self.value[root]
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            let grandparent = self.parent[self.parent[node]];
            self.parent[node] = grandparent;
            node = grandparent;
        }

        node
    }

    fn union(&mut self, a: usize, b: usize) -> usize {
        let (small, large) = if self.size[a] < self.size[b] {
            (a, b)
        } else {
            (b, a)
        };

        self.parent[small] = large;
        self.size[large] += self.size[small];

        large
    }
}

/// The LCP value of every LMS suffix with its predecessor among the LMS suffixes in the final order, indexed
/// like `lms_positions` (text order).
///
/// The LMS suffixes are visited in text order. Moving on by `d` positions keeps all but `d` symbols of the
/// previous common prefix, unless these symbols are a single run, because then the types inside the run
/// are not known and the shifted predecessor might not be an LMS suffix.
pub(crate) fn lms_common_prefixes<C: InputElement, O: OutputElement>(
    text: &Text<C>,
    lms_positions: &[usize],
    ranking: &[O],
) -> Result<Vec<usize>, GsaisError> {
    let lms_count = lms_positions.len();

    let mut previous = allocate(lms_count, NONE)?;
    for window in ranking.windows(2) {
        previous[window[1].as_index()] = window[0].as_index();
    }

    let mut common_prefixes = allocate(lms_count, 0)?;
    let mut carried: usize = 0;
    let mut previous_position = 0;

    for (q, &position) in lms_positions.iter().enumerate() {
        let mut known = carried.saturating_sub(position - previous_position);
        if known > 0 && text.is_run(position, known) {
            known = 0;
        }

        let common_prefix = match previous[q] {
            NONE => 0,
            predecessor => text.common_prefix_len(position, lms_positions[predecessor], known),
        };

        common_prefixes[q] = common_prefix;
        carried = common_prefix;
        previous_position = position;
    }

    Ok(common_prefixes)
}
