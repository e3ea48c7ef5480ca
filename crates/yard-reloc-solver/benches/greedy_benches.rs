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

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;
use yard_reloc_model::{layout::Layout, yard::YardGenerator};
use yard_reloc_solver::{greedy::greedy_solve, selector::select_destination_stack};

fn generated_layouts(count: usize, width: usize, height: usize) -> Vec<Layout<i64>> {
    let gen = YardGenerator::new()
        .width(width)
        .height(height)
        .full_stacks(width / 3)
        .empty_stacks(width / 5);
    (0..count)
        .map(|seed| {
            gen.generate(&mut ChaCha8Rng::seed_from_u64(seed as u64))
                .expect("generator parameters are consistent")
                .as_layout()
        })
        .collect()
}

fn bench_greedy_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_solve");

    for (width, height) in [(10usize, 5usize), (20, 8), (40, 10)] {
        let layouts = generated_layouts(16, width, height);
        group.bench_function(format!("{width}x{height}"), |b| {
            b.iter(|| {
                for layout in &layouts {
                    let _ = black_box(greedy_solve(black_box(layout)));
                }
            })
        });
    }

    group.finish();
}

fn bench_select_destination(c: &mut Criterion) {
    let layouts = generated_layouts(16, 20, 8);

    c.bench_function("select_destination_stack/20x8", |b| {
        b.iter(|| {
            for layout in &layouts {
                for action in 0..layout.stack_count() {
                    let _ = black_box(select_destination_stack(black_box(layout), action));
                }
            }
        })
    });
}

criterion_group!(benches, bench_greedy_solve, bench_select_destination);
criterion_main!(benches);
