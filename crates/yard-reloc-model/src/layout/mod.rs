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

use crate::{
    common::is_descending,
    yard::err::{BuildError, MoveError},
};

/// A value snapshot of a yard's stack contents used for planning.
///
/// A layout is copied, never aliased: deriving one from a yard and mutating
/// it can never corrupt the live grid. [`Layout::apply_move`] exists so the
/// planning side can advance its own working copy under the same legality
/// rules the yard enforces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layout<T> {
    height: usize,
    stacks: Vec<Vec<T>>,
}

impl<T: Copy + Ord> Layout<T> {
    /// A layout built directly from per-stack values, bottom-to-top,
    /// validated against the grid invariants.
    pub fn from_stacks(stacks: Vec<Vec<T>>, height: usize) -> Result<Self, BuildError> {
        if height == 0 {
            return Err(BuildError::ZeroHeight);
        }
        if stacks.is_empty() {
            return Err(BuildError::ZeroWidth);
        }
        if let Some((i, s)) = stacks.iter().enumerate().find(|(_, s)| s.len() > height) {
            return Err(BuildError::StackOverfull {
                stack: i,
                len: s.len(),
                height,
            });
        }
        Ok(Self { height, stacks })
    }

    /// Caller guarantees the invariants hold; used when snapshotting a yard.
    #[inline]
    pub(crate) fn from_parts_unchecked(stacks: Vec<Vec<T>>, height: usize) -> Self {
        Self { height, stacks }
    }

    #[inline]
    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Occupied slots of one stack, bottom-to-top.
    #[inline]
    pub fn stack(&self, index: usize) -> Option<&[T]> {
        self.stacks.get(index).map(Vec::as_slice)
    }

    #[inline]
    pub fn top(&self, index: usize) -> Option<T> {
        self.stacks.get(index).and_then(|s| s.last().copied())
    }

    /// Occupied height of one stack; `0` for out-of-range indices.
    #[inline]
    pub fn occupied_height(&self, index: usize) -> usize {
        self.stacks.get(index).map_or(0, Vec::len)
    }

    /// Remaining headroom of one stack; `0` for out-of-range indices, so an
    /// invalid index can never look like a legal destination.
    #[inline]
    pub fn free_space(&self, index: usize) -> usize {
        self.stacks
            .get(index)
            .map_or(0, |s| self.height - s.len())
    }

    #[inline]
    pub fn is_sorted(&self, index: usize) -> bool {
        self.stacks.get(index).is_some_and(|s| is_descending(s))
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.stacks.iter().all(|s| is_descending(s))
    }

    #[inline]
    pub fn container_count(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum()
    }

    /// Applies a relocation to this snapshot under the yard's legality rules.
    /// Only ever touches the owned copy.
    pub fn apply_move(&mut self, source: usize, destination: usize) -> Result<(), MoveError> {
        let width = self.stacks.len();
        if source >= width {
            return Err(MoveError::SourceOutOfBounds {
                index: source,
                width,
            });
        }
        if destination >= width {
            return Err(MoveError::DestinationOutOfBounds {
                index: destination,
                width,
            });
        }
        if source == destination {
            return Err(MoveError::SameStack { index: source });
        }
        if self.stacks[destination].len() >= self.height {
            return Err(MoveError::DestinationFull {
                index: destination,
                height: self.height,
            });
        }
        match self.stacks[source].pop() {
            Some(value) => {
                self.stacks[destination].push(value);
                Ok(())
            }
            None => Err(MoveError::EmptySource { index: source }),
        }
    }
}
