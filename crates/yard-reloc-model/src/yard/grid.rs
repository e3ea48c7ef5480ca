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
    layout::Layout,
    yard::{
        err::{BuildError, MoveError},
        stack::Stack,
    },
};
use num_traits::ToPrimitive;

/// The live, mutable yard: a fixed number of stacks with a fixed maximum
/// height. Exactly one logical owner issues moves at a time; planning code
/// works on [`Layout`] snapshots instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Yard<T> {
    height: usize,
    stacks: Vec<Stack<T>>,
}

impl<T: Copy + Ord> Yard<T> {
    /// An empty yard of `width` stacks with maximum height `height`.
    pub fn new(width: usize, height: usize) -> Result<Self, BuildError> {
        if width == 0 {
            return Err(BuildError::ZeroWidth);
        }
        if height == 0 {
            return Err(BuildError::ZeroHeight);
        }
        Ok(Self {
            height,
            stacks: (0..width).map(|_| Stack::new()).collect(),
        })
    }

    /// A yard populated from per-stack container values, bottom-to-top.
    /// The width is the number of stacks given.
    pub fn from_stacks<I>(height: usize, stacks: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = Vec<T>>,
    {
        if height == 0 {
            return Err(BuildError::ZeroHeight);
        }
        let mut packed = Vec::new();
        for (i, values) in stacks.into_iter().enumerate() {
            if values.len() > height {
                return Err(BuildError::StackOverfull {
                    stack: i,
                    len: values.len(),
                    height,
                });
            }
            packed.push(Stack::from_values(values));
        }
        if packed.is_empty() {
            return Err(BuildError::ZeroWidth);
        }
        Ok(Self {
            height,
            stacks: packed,
        })
    }

    /// Number of stacks.
    #[inline]
    pub fn width(&self) -> usize {
        self.stacks.len()
    }

    /// Maximum containers per stack.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn stack(&self, index: usize) -> Option<&Stack<T>> {
        self.stacks.get(index)
    }

    #[inline]
    pub fn stacks(&self) -> impl Iterator<Item = &Stack<T>> {
        self.stacks.iter()
    }

    /// Total containers across the yard. Invariant under legal moves.
    #[inline]
    pub fn container_count(&self) -> usize {
        self.stacks.iter().map(Stack::height).sum()
    }

    /// Attempts to relocate the top container of `source` onto `destination`,
    /// reporting exactly why a move is illegal. The grid is untouched on
    /// failure.
    pub fn try_move(&mut self, source: usize, destination: usize) -> Result<(), MoveError> {
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
        if self.stacks[destination].height() >= self.height {
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

    /// The boolean move surface: `false` means the move was illegal and the
    /// yard is unchanged. Penalty policy is the caller's business.
    #[inline]
    pub fn move_stack(&mut self, source: usize, destination: usize) -> bool {
        self.try_move(source, destination).is_ok()
    }

    /// Whether the given stack is sorted. Out-of-range indices are reported
    /// as unsorted.
    #[inline]
    pub fn is_sorted(&self, index: usize) -> bool {
        self.stacks.get(index).is_some_and(Stack::is_sorted)
    }

    /// Every stack sorted, independent of how many containers the yard holds.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.stacks.iter().all(Stack::is_sorted)
    }

    /// An independent snapshot for planning. Mutating the snapshot can never
    /// touch this yard.
    pub fn as_layout(&self) -> Layout<T> {
        Layout::from_parts_unchecked(
            self.stacks.iter().map(|s| s.values().to_vec()).collect(),
            self.height,
        )
    }

    /// Flattened numeric encoding of the grid followed by one sortedness
    /// flag per stack: for each stack `height` slots bottom-to-top with `0.0`
    /// for empties, then `1.0`/`0.0` flags. Deterministic and bit-for-bit
    /// reproducible for identical state; any further scaling is owned by the
    /// consumer.
    pub fn as_observation(&self) -> Vec<f64>
    where
        T: ToPrimitive,
    {
        let width = self.stacks.len();
        let mut obs = Vec::with_capacity(width * self.height + width);
        for stack in &self.stacks {
            for value in stack.values() {
                obs.push(value.to_f64().unwrap_or(0.0));
            }
            for _ in stack.height()..self.height {
                obs.push(0.0);
            }
        }
        for stack in &self.stacks {
            obs.push(if stack.is_sorted() { 1.0 } else { 0.0 });
        }
        obs
    }

    /// Debug dump of the grid to stdout. Never mutates.
    pub fn render(&self)
    where
        T: std::fmt::Display,
    {
        println!("{self}");
    }
}

impl<T: Copy + Ord + std::fmt::Display> std::fmt::Display for Yard<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cell = 1;
        for stack in &self.stacks {
            for value in stack.values() {
                cell = cell.max(value.to_string().len());
            }
        }
        for row in (0..self.height).rev() {
            for (i, stack) in self.stacks.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                match stack.values().get(row) {
                    Some(value) => write!(f, "{value:>cell$}")?,
                    None => write!(f, "{:>cell$}", ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yard(stacks: &[&[i64]], height: usize) -> Yard<i64> {
        Yard::from_stacks(height, stacks.iter().map(|s| s.to_vec())).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(Yard::<i64>::new(0, 5), Err(BuildError::ZeroWidth));
        assert_eq!(Yard::<i64>::new(3, 0), Err(BuildError::ZeroHeight));
    }

    #[test]
    fn test_from_stacks_rejects_overfull_stack() {
        let err = Yard::from_stacks(2, vec![vec![1i64], vec![1, 2, 3]]).unwrap_err();
        assert_eq!(
            err,
            BuildError::StackOverfull {
                stack: 1,
                len: 3,
                height: 2
            }
        );
    }

    #[test]
    fn test_legal_move_shifts_exactly_one_container() {
        let mut y = yard(&[&[3, 1], &[2]], 3);
        let before = y.container_count();
        assert!(y.move_stack(0, 1));
        assert_eq!(y.stack(0).unwrap().values(), &[3]);
        assert_eq!(y.stack(1).unwrap().values(), &[2, 1]);
        assert_eq!(y.container_count(), before);
    }

    #[test]
    fn test_illegal_moves_fail_and_leave_grid_unchanged() {
        let y0 = yard(&[&[], &[5, 4, 3], &[2]], 3);

        // Empty source.
        let mut y = y0.clone();
        assert!(!y.move_stack(0, 2));
        assert_eq!(y, y0);

        // Full destination.
        let mut y = y0.clone();
        assert!(!y.move_stack(2, 1));
        assert_eq!(y, y0);

        // Source == destination.
        let mut y = y0.clone();
        assert!(!y.move_stack(2, 2));
        assert_eq!(y, y0);

        // Out-of-bounds indices.
        let mut y = y0.clone();
        assert!(!y.move_stack(7, 0));
        assert!(!y.move_stack(1, 7));
        assert_eq!(y, y0);
    }

    #[test]
    fn test_try_move_reports_the_exact_reason() {
        let mut y = yard(&[&[], &[5, 4, 3], &[2]], 3);
        assert_eq!(
            y.try_move(0, 2),
            Err(MoveError::EmptySource { index: 0 })
        );
        assert_eq!(
            y.try_move(2, 1),
            Err(MoveError::DestinationFull {
                index: 1,
                height: 3
            })
        );
        assert_eq!(y.try_move(1, 1), Err(MoveError::SameStack { index: 1 }));
        assert_eq!(
            y.try_move(9, 0),
            Err(MoveError::SourceOutOfBounds { index: 9, width: 3 })
        );
        assert_eq!(
            y.try_move(1, 9),
            Err(MoveError::DestinationOutOfBounds { index: 9, width: 3 })
        );
    }

    #[test]
    fn test_container_count_invariant_over_move_sequence() {
        let mut y = yard(&[&[1, 2, 3], &[9], &[]], 4);
        let total = y.container_count();
        let moves = [(0, 1), (0, 2), (1, 2), (2, 0), (0, 1)];
        for (s, d) in moves {
            y.move_stack(s, d);
            assert_eq!(y.container_count(), total);
        }
    }

    #[test]
    fn test_is_done_matches_per_stack_inspection() {
        let sorted = yard(&[&[9, 5, 1], &[], &[4, 4]], 3);
        assert!(sorted.is_done());
        for i in 0..sorted.width() {
            assert!(sorted.is_sorted(i));
        }

        let unsorted = yard(&[&[9, 5, 1], &[1, 2], &[4, 4]], 3);
        assert!(!unsorted.is_done());
        assert!(!unsorted.is_sorted(1));
        assert!(unsorted.is_sorted(0));
        assert!(unsorted.is_sorted(2));
    }

    #[test]
    fn test_out_of_range_stack_is_reported_unsorted() {
        let y = yard(&[&[1]], 2);
        assert!(!y.is_sorted(5));
    }

    #[test]
    fn test_layout_snapshot_is_independent() {
        let mut y = yard(&[&[3, 1], &[2]], 3);
        let mut layout = y.as_layout();
        layout.apply_move(0, 1).unwrap();
        // The live yard did not see the snapshot's move.
        assert_eq!(y.stack(0).unwrap().values(), &[3, 1]);
        assert!(y.move_stack(1, 0));
        // And the snapshot did not see the yard's move.
        assert_eq!(layout.stack(1).unwrap(), &[2, 1]);
    }

    #[test]
    fn test_observation_layout_and_flags() {
        let y = yard(&[&[3, 1], &[2]], 3);
        assert_eq!(
            y.as_observation(),
            vec![3.0, 1.0, 0.0, 2.0, 0.0, 0.0, 1.0, 1.0]
        );
    }

    #[test]
    fn test_observation_is_bit_for_bit_reproducible() {
        let y = yard(&[&[3, 1, 2], &[], &[7, 7]], 4);
        let a = y.as_observation();
        let b = y.as_observation();
        assert_eq!(a.len(), y.width() * y.height() + y.width());
        assert!(a.iter().zip(&b).all(|(x, y)| x.to_bits() == y.to_bits()));
    }

    #[test]
    fn test_display_draws_top_row_first() {
        let y = yard(&[&[3, 1], &[2]], 3);
        let text = format!("{y}");
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows, vec![". .", "1 .", "3 2"]);
    }
}
