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

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use yard_reloc_model::prelude::{FixtureLoader, Yard, YardGenerator};
use yard_reloc_solver::prelude::{GreedyError, greedy_solve};

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT | FmtSpan::CLOSE)
        .init();
}

#[derive(Serialize)]
struct RunRecord {
    source: String,
    seed: Option<u64>,
    width: usize,
    height: usize,
    containers: usize,
    start_ts: DateTime<Utc>,
    end_ts: DateTime<Utc>,
    runtime_ms: u128,
    estimate: Option<usize>,
    outcome: String,
}

/// Usage: `yard-reloc [fixture.txt]`, or `yard-reloc --seed N` for a
/// generated instance. No argument generates with the default seed.
fn parse_args() -> Result<(Option<String>, u64), String> {
    let mut path = None;
    let mut seed = 42u64;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let v = args.next().ok_or("--seed requires a value")?;
                seed = v.parse().map_err(|_| format!("invalid seed `{v}`"))?;
            }
            _ if path.is_none() => path = Some(arg),
            _ => return Err(format!("unexpected argument `{arg}`")),
        }
    }
    Ok((path, seed))
}

fn load_or_generate(path: &Option<String>, seed: u64) -> Result<Yard<i64>, String> {
    match path {
        Some(p) => FixtureLoader::new()
            .from_path(p)
            .map_err(|e| format!("failed to load fixture {p}: {e}")),
        None => YardGenerator::new()
            .generate(&mut ChaCha8Rng::seed_from_u64(seed))
            .map_err(|e| format!("failed to generate yard: {e}")),
    }
}

fn main() {
    enable_tracing();

    let (path, seed) = match parse_args() {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(2);
        }
    };

    let yard = match load_or_generate(&path, seed) {
        Ok(yard) => yard,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Estimating {} with {} stacks of height {} ({} containers)",
        path.as_deref().unwrap_or("generated yard"),
        yard.width(),
        yard.height(),
        yard.container_count()
    );
    yard.render();

    let start_ts = Utc::now();
    let started = Instant::now();
    let result = greedy_solve(&yard.as_layout());
    let runtime = started.elapsed();
    let end_ts = Utc::now();

    let (estimate, outcome) = match &result {
        Ok(count) => {
            tracing::info!("Estimated {} relocations ({:?})", count, runtime);
            (Some(*count), "solved".to_string())
        }
        Err(e @ GreedyError::NoLegalDestination(_)) => {
            tracing::warn!("Yard judged unsolvable: {e}");
            (None, "no_legal_destination".to_string())
        }
        Err(e @ GreedyError::CeilingExceeded { .. }) => {
            tracing::warn!("Estimation did not converge: {e}");
            (None, "ceiling_exceeded".to_string())
        }
        Err(e) => {
            tracing::error!("Estimation failed: {e}");
            (None, "error".to_string())
        }
    };

    let seed_used = if path.is_none() { Some(seed) } else { None };
    let record = RunRecord {
        source: path.unwrap_or_else(|| "generated".to_string()),
        seed: seed_used,
        width: yard.width(),
        height: yard.height(),
        containers: yard.container_count(),
        start_ts,
        end_ts,
        runtime_ms: runtime.as_millis(),
        estimate,
        outcome,
    };

    match serde_json::to_string(&record) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!("Failed to serialize run record: {e}"),
    }
}
