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

//! # Yard Reloc Model
//!
//! State model for a container storage yard: a fixed grid of bounded
//! vertical stacks holding priority-valued containers. This crate owns the
//! mutable [`yard::Yard`] with its move-legality rules and sortedness
//! predicate, the read-only [`layout::Layout`] snapshot used for planning,
//! a plain-text fixture loader, and a seeded synthetic generator.
//!
//! The planning side (destination selection, greedy move-count estimation)
//! lives in the `yard-reloc-solver` crate and only ever operates on
//! [`layout::Layout`] copies, never on a live yard.

pub mod common;
pub mod layout;
pub mod yard;

pub mod prelude {
    pub use crate::common::is_descending;
    pub use crate::layout::Layout;
    pub use crate::yard::{
        FixtureLoader, Yard, YardGenerator,
        err::{BuildError, FixtureError, GeneratorError, MoveError},
    };
}
