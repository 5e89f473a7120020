//! Bounded pool: a fixed number of threads over contiguous row bands.

use std::num::NonZeroUsize;
use std::thread;

use super::{panicked, run_unit, RowKernel, SpawnGate};
use crate::error::{Error, Result};
use crate::matrix::{Element, Matrix};

/// Pool size matching the hardware, or 1 when it cannot be determined.
pub fn default_workers() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Splits `rows` into at most `workers` contiguous bands and runs each band
/// on its own scoped thread.
///
/// Every band but the last holds `ceil(rows / workers)` rows. A worker stops
/// at the first failing row of its band.
///
/// `gate` is asked with the first row of each band before its thread starts.
pub(crate) fn run(
    a: &Matrix,
    b: &Matrix,
    rows: Vec<&mut [Element]>,
    kernel: RowKernel,
    workers: usize,
    gate: SpawnGate,
) -> Vec<Result<()>> {
    if rows.is_empty() {
        return Vec::new();
    }
    let workers = workers.clamp(1, rows.len());
    let band = (rows.len() + workers - 1) / workers;

    let mut bands: Vec<Vec<(usize, &mut [Element])>> = Vec::with_capacity(workers);
    for (i, row) in rows.into_iter().enumerate() {
        if i % band == 0 {
            bands.push(Vec::with_capacity(band));
        }
        if let Some(current) = bands.last_mut() {
            current.push((i, row));
        }
    }

    thread::scope(|s| {
        let mut handles = Vec::with_capacity(bands.len());
        let mut spawn_failure = None;
        for (w, rows) in bands.into_iter().enumerate() {
            let first = w * band;
            let spawned = gate(first).and_then(|()| {
                thread::Builder::new()
                    .name(format!("pmm-worker-{}", w))
                    .spawn_scoped(s, move || {
                        let mut outcomes = Vec::with_capacity(rows.len());
                        for (i, row) in rows {
                            let outcome = run_unit(kernel, a, b, i, row);
                            let failed = outcome.is_err();
                            outcomes.push(outcome);
                            if failed {
                                break;
                            }
                        }
                        outcomes
                    })
            });
            match spawned {
                Ok(handle) => handles.push((first, handle)),
                Err(e) => {
                    spawn_failure = Some(Error::Spawn {
                        row: first,
                        message: e.to_string(),
                    });
                    break;
                }
            }
        }

        // Unit panics are already caught by `run_unit`. A join error means the
        // worker failed between units, so it is charged to the band's first row.
        let mut outcomes = Vec::new();
        for (first, handle) in handles {
            match handle.join() {
                Ok(band_outcomes) => outcomes.extend(band_outcomes),
                Err(payload) => outcomes.push(Err(panicked(first, payload))),
            }
        }
        if let Some(err) = spawn_failure {
            outcomes.push(Err(err));
        }
        outcomes
    })
}
