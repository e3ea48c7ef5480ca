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

use std::num::ParseIntError;

/// Construction-time violations of the grid invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildError {
    ZeroWidth,
    ZeroHeight,
    StackOverfull {
        stack: usize,
        len: usize,
        height: usize,
    },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::ZeroWidth => write!(f, "a yard must have at least one stack"),
            BuildError::ZeroHeight => write!(f, "a yard must have a maximum height of at least one"),
            BuildError::StackOverfull { stack, len, height } => write!(
                f,
                "stack {} holds {} containers but the yard height is {}",
                stack, len, height
            ),
        }
    }
}

impl std::error::Error for BuildError {}

/// Why a requested relocation is illegal. The grid is left untouched
/// whenever one of these is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveError {
    SourceOutOfBounds { index: usize, width: usize },
    DestinationOutOfBounds { index: usize, width: usize },
    SameStack { index: usize },
    EmptySource { index: usize },
    DestinationFull { index: usize, height: usize },
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::SourceOutOfBounds { index, width } => {
                write!(f, "source stack {} out of bounds (width {})", index, width)
            }
            MoveError::DestinationOutOfBounds { index, width } => write!(
                f,
                "destination stack {} out of bounds (width {})",
                index, width
            ),
            MoveError::SameStack { index } => {
                write!(f, "source and destination are both stack {}", index)
            }
            MoveError::EmptySource { index } => {
                write!(f, "source stack {} holds no container", index)
            }
            MoveError::DestinationFull { index, height } => {
                write!(f, "destination stack {} is at full height {}", index, height)
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Failures while parsing a fixture into a yard. Parsing never partially
/// constructs a yard: the first violation aborts the load.
#[derive(Debug)]
pub enum FixtureError {
    Io(std::io::Error),
    ParseInt(ParseIntError),
    UnexpectedEof,
    MalformedHeader,
    NonPositiveDimensions,
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    FloatingContainer {
        stack: usize,
        slot: usize,
    },
    AlreadySorted,
    Build(BuildError),
}

impl From<std::io::Error> for FixtureError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseIntError> for FixtureError {
    fn from(e: ParseIntError) -> Self {
        Self::ParseInt(e)
    }
}

impl From<BuildError> for FixtureError {
    fn from(e: BuildError) -> Self {
        Self::Build(e)
    }
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use FixtureError::*;
        match self {
            Io(e) => write!(f, "I/O error: {e}"),
            ParseInt(e) => write!(f, "parse-int error: {e}"),
            UnexpectedEof => write!(f, "unexpected end of input while parsing fixture"),
            MalformedHeader => write!(f, "fixture header must be exactly `width height`"),
            NonPositiveDimensions => write!(f, "fixture dimensions must be positive"),
            RowLengthMismatch {
                row,
                expected,
                found,
            } => write!(
                f,
                "stack row {} has {} slots, expected {}",
                row, found, expected
            ),
            FloatingContainer { stack, slot } => write!(
                f,
                "stack {} has a container at slot {} above an empty slot",
                stack, slot
            ),
            AlreadySorted => write!(f, "fixture is already fully sorted"),
            Build(e) => write!(f, "build error: {e}"),
        }
    }
}

impl std::error::Error for FixtureError {}

/// Inconsistent synthetic-generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorError {
    ZeroDimensions,
    ReservedExceedsWidth {
        full: usize,
        empty: usize,
        width: usize,
    },
    EmptyValueRange {
        min: i64,
        max: i64,
    },
    Build(BuildError),
}

impl From<BuildError> for GeneratorError {
    fn from(e: BuildError) -> Self {
        Self::Build(e)
    }
}

impl std::fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorError::ZeroDimensions => {
                write!(f, "generator width and height must be positive")
            }
            GeneratorError::ReservedExceedsWidth { full, empty, width } => write!(
                f,
                "{} full plus {} empty stacks exceed the yard width {}",
                full, empty, width
            ),
            GeneratorError::EmptyValueRange { min, max } => write!(
                f,
                "container value range {}..={} must contain a positive value",
                min, max
            ),
            GeneratorError::Build(e) => write!(f, "build error: {e}"),
        }
    }
}

impl std::error::Error for GeneratorError {}
