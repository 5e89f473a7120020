//! One scoped thread per output row.

use std::thread;

use super::{panicked, run_unit, RowKernel, SpawnGate};
use crate::error::{Error, Result};
use crate::matrix::{Element, Matrix};

/// Spawns a thread for every row slice, then joins them all in row order.
///
/// Joining every handle is the completion barrier. If the OS refuses a
/// thread, no further rows are dispatched; the rows already running are
/// still joined before returning.
pub(crate) fn run(
    a: &Matrix,
    b: &Matrix,
    rows: Vec<&mut [Element]>,
    kernel: RowKernel,
    gate: SpawnGate,
) -> Vec<Result<()>> {
    let expected = rows.len();
    thread::scope(|s| {
        let mut handles = Vec::with_capacity(expected);
        let mut spawn_failure = None;
        for (i, row) in rows.into_iter().enumerate() {
            let spawned = gate(i).and_then(|()| {
                thread::Builder::new()
                    .name(format!("pmm-row-{}", i))
                    .spawn_scoped(s, move || run_unit(kernel, a, b, i, row))
            });
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    spawn_failure = Some(Error::Spawn {
                        row: i,
                        message: e.to_string(),
                    });
                    break;
                }
            }
        }

        let mut outcomes: Vec<Result<()>> = handles
            .into_iter()
            .enumerate()
            .map(|(i, handle)| {
                handle
                    .join()
                    .unwrap_or_else(|payload| Err(panicked(i, payload)))
            })
            .collect();
        if let Some(err) = spawn_failure {
            outcomes.push(Err(err));
        }
        outcomes
    })
}
