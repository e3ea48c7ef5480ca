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

use crate::selector::err::SelectionError;
use yard_reloc_model::layout::Layout;

/// Picks the destination stack for the top container of `action`.
///
/// Among all legal destinations (not the source, not at full height):
///
/// 1. Prefer the stack whose top value is the smallest one `>=` the moving
///    container, so the move lands on the tightest-fitting stack and
///    preserves sortedness where possible.
/// 2. If no such stack exists, fall back to the stack with the most free
///    capacity, spreading the risk of future blocking. Empty stacks compete
///    only under this rule.
///
/// Ties under either rule break toward the lowest stack index. This is a
/// single-step choice with no lookahead; once made it is never revisited.
pub fn select_destination_stack<T>(
    layout: &Layout<T>,
    action: usize,
) -> Result<usize, SelectionError>
where
    T: Copy + Ord,
{
    let stack_count = layout.stack_count();
    if action >= stack_count {
        return Err(SelectionError::SourceOutOfBounds {
            index: action,
            stack_count,
        });
    }
    let moving = layout
        .top(action)
        .ok_or(SelectionError::EmptySource { index: action })?;

    // Strict comparisons with an in-order scan give the lowest index on ties.
    let mut tightest: Option<(T, usize)> = None;
    let mut roomiest: Option<(usize, usize)> = None;
    for dest in 0..stack_count {
        if dest == action {
            continue;
        }
        let free = layout.free_space(dest);
        if free == 0 {
            continue;
        }
        if let Some(top) = layout.top(dest) {
            if top >= moving && tightest.is_none_or(|(best, _)| top < best) {
                tightest = Some((top, dest));
            }
        }
        if roomiest.is_none_or(|(best, _)| free > best) {
            roomiest = Some((free, dest));
        }
    }

    if let Some((_, dest)) = tightest {
        return Ok(dest);
    }
    roomiest
        .map(|(_, dest)| dest)
        .ok_or(SelectionError::NoFreeDestination { index: action })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(stacks: &[&[i64]], height: usize) -> Layout<i64> {
        Layout::from_stacks(stacks.iter().map(|s| s.to_vec()).collect(), height).unwrap()
    }

    #[test]
    fn test_smallest_qualifying_top_wins_lowest_index_on_tie() {
        // Source top 5; destination tops [7, 7, 9] at indices [1, 2, 3].
        let l = layout(&[&[1, 5], &[7], &[7], &[9]], 4);
        assert_eq!(select_destination_stack(&l, 0), Ok(1));
    }

    #[test]
    fn test_tighter_fit_beats_lower_index() {
        // Top 5; index 1 offers 9, index 2 offers the tighter 6.
        let l = layout(&[&[1, 5], &[9], &[6]], 4);
        assert_eq!(select_destination_stack(&l, 0), Ok(2));
    }

    #[test]
    fn test_equal_top_qualifies_for_the_tight_rule() {
        let l = layout(&[&[1, 5], &[5], &[8]], 4);
        assert_eq!(select_destination_stack(&l, 0), Ok(1));
    }

    #[test]
    fn test_full_stacks_are_never_destinations() {
        // Index 1 would be the tightest fit but is full.
        let l = layout(&[&[1, 5], &[6, 6], &[9]], 2);
        assert_eq!(select_destination_stack(&l, 0), Ok(2));
    }

    #[test]
    fn test_fallback_prefers_most_free_capacity() {
        // Every destination top is smaller than the moving 9.
        let l = layout(&[&[9], &[3, 2], &[4]], 4);
        assert_eq!(select_destination_stack(&l, 0), Ok(2));
    }

    #[test]
    fn test_fallback_ties_break_to_lowest_index() {
        let l = layout(&[&[9], &[3], &[4]], 4);
        assert_eq!(select_destination_stack(&l, 0), Ok(1));
    }

    #[test]
    fn test_all_destinations_empty_falls_back_to_lowest_index() {
        let l = layout(&[&[2, 7], &[], &[]], 3);
        assert_eq!(select_destination_stack(&l, 0), Ok(1));
    }

    #[test]
    fn test_empty_destination_loses_to_a_qualifying_top() {
        // An empty stack has more headroom, but rule 1 fires first.
        let l = layout(&[&[1, 5], &[], &[6]], 4);
        assert_eq!(select_destination_stack(&l, 0), Ok(2));
    }

    #[test]
    fn test_empty_source_is_an_error() {
        let l = layout(&[&[], &[1]], 2);
        assert_eq!(
            select_destination_stack(&l, 0),
            Err(SelectionError::EmptySource { index: 0 })
        );
    }

    #[test]
    fn test_out_of_bounds_source_is_an_error() {
        let l = layout(&[&[1], &[1]], 2);
        assert_eq!(
            select_destination_stack(&l, 5),
            Err(SelectionError::SourceOutOfBounds {
                index: 5,
                stack_count: 2
            })
        );
    }

    #[test]
    fn test_every_other_stack_full_is_an_error() {
        let l = layout(&[&[1, 2], &[5, 4], &[9, 9]], 2);
        assert_eq!(
            select_destination_stack(&l, 0),
            Err(SelectionError::NoFreeDestination { index: 0 })
        );
    }

    #[test]
    fn test_single_stack_yard_has_no_destination() {
        let l = layout(&[&[2, 3, 1]], 5);
        assert_eq!(
            select_destination_stack(&l, 0),
            Err(SelectionError::NoFreeDestination { index: 0 })
        );
    }
}
