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

use crate::yard::{err::GeneratorError, grid::Yard};
use rand::{Rng, seq::SliceRandom};

/// Synthetic yard generation with an explicit random source.
///
/// A generated yard has `full_stacks` stacks filled to capacity with values
/// drawn uniformly from `min_value..=max_value`, `empty_stacks` empty
/// stacks, and the remainder partially filled: each slot up to
/// `height - partial_margin` draws from the widened range
/// `empty_bias..=max_value`, and the first non-positive draw ends the stack
/// early, biasing partial stacks toward shortness. Stack order is shuffled
/// last. Identical seeds produce identical yards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YardGenerator {
    width: usize,
    height: usize,
    full_stacks: usize,
    empty_stacks: usize,
    min_value: i64,
    max_value: i64,
    empty_bias: i64,
    partial_margin: usize,
}

impl Default for YardGenerator {
    fn default() -> Self {
        Self {
            width: 10,
            height: 5,
            full_stacks: 3,
            empty_stacks: 2,
            min_value: 1,
            max_value: 15,
            empty_bias: -4,
            partial_margin: 3,
        }
    }
}

impl YardGenerator {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    #[inline]
    pub fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    #[inline]
    pub fn full_stacks(mut self, n: usize) -> Self {
        self.full_stacks = n;
        self
    }

    #[inline]
    pub fn empty_stacks(mut self, n: usize) -> Self {
        self.empty_stacks = n;
        self
    }

    #[inline]
    pub fn value_range(mut self, min: i64, max: i64) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    #[inline]
    pub fn empty_bias(mut self, bias: i64) -> Self {
        self.empty_bias = bias;
        self
    }

    #[inline]
    pub fn partial_margin(mut self, margin: usize) -> Self {
        self.partial_margin = margin;
        self
    }

    fn validate(&self) -> Result<(), GeneratorError> {
        if self.width == 0 || self.height == 0 {
            return Err(GeneratorError::ZeroDimensions);
        }
        if self.full_stacks + self.empty_stacks > self.width {
            return Err(GeneratorError::ReservedExceedsWidth {
                full: self.full_stacks,
                empty: self.empty_stacks,
                width: self.width,
            });
        }
        if self.min_value < 1 || self.min_value > self.max_value || self.empty_bias > self.max_value
        {
            return Err(GeneratorError::EmptyValueRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Yard<i64>, GeneratorError> {
        self.validate()?;

        let mut stacks: Vec<Vec<i64>> = Vec::with_capacity(self.width);
        for _ in 0..self.full_stacks {
            stacks.push(
                (0..self.height)
                    .map(|_| rng.random_range(self.min_value..=self.max_value))
                    .collect(),
            );
        }
        for _ in 0..self.empty_stacks {
            stacks.push(Vec::new());
        }

        let partial_cap = self.height.saturating_sub(self.partial_margin);
        for _ in (self.full_stacks + self.empty_stacks)..self.width {
            let mut stack = Vec::with_capacity(partial_cap);
            for _ in 0..partial_cap {
                let v = rng.random_range(self.empty_bias..=self.max_value);
                if v <= 0 {
                    break;
                }
                stack.push(v);
            }
            stacks.push(stack);
        }

        stacks.shuffle(rng);
        Ok(Yard::from_stacks(self.height, stacks)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_equal_seeds_generate_equal_yards() {
        let gen = YardGenerator::new();
        let a = gen.generate(&mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        let b = gen.generate(&mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
        let c = gen.generate(&mut ChaCha8Rng::seed_from_u64(8)).unwrap();
        // Not a hard guarantee, but a collision here would be astonishing.
        assert_ne!(a, c);
    }

    #[test]
    fn test_default_shape_matches_configuration() {
        let gen = YardGenerator::new();
        let yard = gen.generate(&mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        assert_eq!(yard.width(), 10);
        assert_eq!(yard.height(), 5);

        let full = yard.stacks().filter(|s| s.height() == 5).count();
        let empty = yard.stacks().filter(|s| s.is_empty()).count();
        assert_eq!(full, 3);
        assert!(empty >= 2);
        // Partial stacks are capped at height - margin.
        for s in yard.stacks() {
            assert!(s.height() == 5 || s.height() <= 2);
        }
    }

    #[test]
    fn test_all_generated_values_are_positive_and_in_range() {
        let gen = YardGenerator::new().value_range(3, 9);
        for seed in 0..20 {
            let yard = gen.generate(&mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
            for s in yard.stacks() {
                for &v in s.values() {
                    assert!(v >= 1 && v <= 9);
                }
            }
        }
    }

    #[test]
    fn test_inconsistent_parameters_are_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            YardGenerator::new().width(0).generate(&mut rng),
            Err(GeneratorError::ZeroDimensions)
        );
        assert_eq!(
            YardGenerator::new()
                .width(4)
                .full_stacks(3)
                .empty_stacks(2)
                .generate(&mut rng),
            Err(GeneratorError::ReservedExceedsWidth {
                full: 3,
                empty: 2,
                width: 4
            })
        );
        assert_eq!(
            YardGenerator::new().value_range(5, 2).generate(&mut rng),
            Err(GeneratorError::EmptyValueRange { min: 5, max: 2 })
        );
        assert_eq!(
            YardGenerator::new().value_range(0, 9).generate(&mut rng),
            Err(GeneratorError::EmptyValueRange { min: 0, max: 9 })
        );
    }
}
