// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

pub mod err;

use crate::{greedy::err::GreedyError, selector::select_destination_stack};
use yard_reloc_model::layout::Layout;

/// Greedy move-count estimation over a layout snapshot.
///
/// The run clones the layout and repeatedly relocates the top of the first
/// unsorted stack (in index order) to the destination the selector picks,
/// counting moves until every stack is sorted. The caller's layout is never
/// mutated. A run ends in exactly one of three states: solved with a count,
/// no legal destination, or the iteration ceiling exceeded — the ceiling is
/// `container count x stack count x ceiling_factor` and guards against the
/// heuristic cycling between stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedyEstimator {
    ceiling_factor: usize,
}

impl Default for GreedyEstimator {
    fn default() -> Self {
        Self { ceiling_factor: 1 }
    }
}

impl std::fmt::Display for GreedyEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GreedyEstimator")
    }
}

impl GreedyEstimator {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scales the iteration ceiling. A factor of zero is treated as one.
    #[inline]
    pub fn ceiling_factor(mut self, factor: usize) -> Self {
        self.ceiling_factor = factor.max(1);
        self
    }

    /// The ceiling this estimator would apply to the given layout.
    #[inline]
    pub fn ceiling_for<T: Copy + Ord>(&self, layout: &Layout<T>) -> usize {
        layout.container_count() * layout.stack_count() * self.ceiling_factor
    }

    /// Runs the estimation to a terminal state and returns the move count.
    ///
    /// Deterministic: the same layout content always yields the same result.
    /// An already-sorted layout returns `0` without consulting the selector.
    pub fn estimate<T: Copy + Ord>(&self, layout: &Layout<T>) -> Result<usize, GreedyError> {
        let mut work = layout.clone();
        let stack_count = work.stack_count();
        let ceiling = self.ceiling_for(&work);
        let mut moves = 0usize;

        loop {
            let Some(source) = (0..stack_count).find(|&i| !work.is_sorted(i)) else {
                tracing::debug!(moves, "yard fully sorted");
                return Ok(moves);
            };
            if moves >= ceiling {
                return Err(GreedyError::CeilingExceeded { ceiling, moves });
            }
            let destination = select_destination_stack(&work, source)?;
            work.apply_move(source, destination)?;
            moves += 1;
            tracing::trace!(source, destination, moves, "applied relocation");
        }
    }
}

/// Estimates the number of relocations needed to fully sort `layout` with
/// the default ceiling.
#[inline]
pub fn greedy_solve<T: Copy + Ord>(layout: &Layout<T>) -> Result<usize, GreedyError> {
    GreedyEstimator::new().estimate(layout)
}
