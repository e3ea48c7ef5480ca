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

use crate::yard::{err::FixtureError, grid::Yard};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// Parses plain-text yard fixtures.
///
/// Format: a header line `width height`, then `width` lines of `height`
/// integers each — one line per stack, slots bottom-to-top, non-positive
/// values marking empty slots. An occupied slot above an empty one violates
/// gravity packing and aborts the load; a yard is never partially built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureLoader {
    reject_sorted: bool,
}

impl Default for FixtureLoader {
    fn default() -> Self {
        Self {
            reject_sorted: false,
        }
    }
}

impl FixtureLoader {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat fixtures that are already fully sorted as malformed. Useful for
    /// drivers that need instances with at least one relocation left.
    #[inline]
    pub fn reject_sorted(mut self, yes: bool) -> Self {
        self.reject_sorted = yes;
        self
    }

    pub fn from_bufread<R: BufRead>(&self, mut br: R) -> Result<Yard<i64>, FixtureError> {
        let mut text = String::new();
        br.read_to_string(&mut text)?;

        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

        let header = lines.next().ok_or(FixtureError::UnexpectedEof)?;
        let mut dims = header.split_whitespace();
        let width: i64 = dims.next().ok_or(FixtureError::MalformedHeader)?.parse()?;
        let height: i64 = dims.next().ok_or(FixtureError::MalformedHeader)?.parse()?;
        if dims.next().is_some() {
            return Err(FixtureError::MalformedHeader);
        }
        if width <= 0 || height <= 0 {
            return Err(FixtureError::NonPositiveDimensions);
        }
        let (width, height) = (width as usize, height as usize);

        let mut stacks = Vec::with_capacity(width);
        for row in 0..width {
            let line = lines.next().ok_or(FixtureError::UnexpectedEof)?;
            let values = line
                .split_whitespace()
                .map(str::parse::<i64>)
                .collect::<Result<Vec<_>, _>>()?;
            if values.len() != height {
                return Err(FixtureError::RowLengthMismatch {
                    row,
                    expected: height,
                    found: values.len(),
                });
            }
            stacks.push(pack_stack(row, &values)?);
        }

        let yard = Yard::from_stacks(height, stacks)?;
        if self.reject_sorted && yard.is_done() {
            return Err(FixtureError::AlreadySorted);
        }
        Ok(yard)
    }

    #[inline]
    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<Yard<i64>, FixtureError> {
        let file = File::open(path).map_err(FixtureError::Io)?;
        self.from_bufread(BufReader::new(file))
    }

    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Yard<i64>, FixtureError> {
        self.from_bufread(BufReader::new(r))
    }

    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Yard<i64>, FixtureError> {
        self.from_reader(s.as_bytes())
    }
}

/// Strips the empty tail of one fixture row, rejecting floating containers.
fn pack_stack(stack: usize, values: &[i64]) -> Result<Vec<i64>, FixtureError> {
    let occupied = values.iter().take_while(|&&v| v > 0).count();
    if let Some(extra) = values[occupied..].iter().position(|&v| v > 0) {
        return Err(FixtureError::FloatingContainer {
            stack,
            slot: occupied + extra,
        });
    }
    Ok(values[..occupied].to_vec())
}
