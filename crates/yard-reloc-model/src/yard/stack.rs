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

use crate::common::is_descending;

/// One vertical column of the yard.
///
/// Only occupied slots are stored, bottom-to-top, so a stack is
/// gravity-packed by representation: an empty slot can never sit below an
/// occupied one. Capacity is owned by the enclosing [`crate::yard::Yard`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    slots: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T: Copy + Ord> Stack<T> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            slots: values.into_iter().collect(),
        }
    }

    /// Number of occupied slots.
    #[inline]
    pub fn height(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The topmost container, if any.
    #[inline]
    pub fn top(&self) -> Option<T> {
        self.slots.last().copied()
    }

    /// Occupied slots bottom-to-top.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.slots
    }

    /// Non-increasing bottom-to-top, i.e. the next-retrievable container is
    /// always on top.
    #[inline]
    pub fn is_sorted(&self) -> bool {
        is_descending(&self.slots)
    }

    #[inline]
    pub(crate) fn push(&mut self, value: T) {
        self.slots.push(value);
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<T> {
        self.slots.pop()
    }
}
