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

use crate::selector::err::SelectionError;
use yard_reloc_model::yard::err::MoveError;

/// Terminal failure states of an estimation run, distinct from "solved".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GreedyError {
    /// The heuristic judged the yard unsolvable from this state: a stack
    /// needs relocation but no legal destination exists.
    NoLegalDestination(SelectionError),
    /// The heuristic did not converge within the bounded iteration budget.
    CeilingExceeded { ceiling: usize, moves: usize },
    /// A selected move was rejected by the layout. Selection guarantees
    /// legality, so surfacing this keeps the invariant observable instead of
    /// panicking.
    Move(MoveError),
}

impl From<SelectionError> for GreedyError {
    fn from(e: SelectionError) -> Self {
        GreedyError::NoLegalDestination(e)
    }
}

impl From<MoveError> for GreedyError {
    fn from(e: MoveError) -> Self {
        GreedyError::Move(e)
    }
}

impl std::fmt::Display for GreedyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GreedyError::NoLegalDestination(e) => write!(f, "no legal destination: {e}"),
            GreedyError::CeilingExceeded { ceiling, moves } => write!(
                f,
                "estimation ceiling of {} moves exceeded after {} moves",
                ceiling, moves
            ),
            GreedyError::Move(e) => write!(f, "move rejected: {e}"),
        }
    }
}

impl std::error::Error for GreedyError {}
