//! Row-partitioned parallel multiplication.
//!
//! Every policy hands each unit of work exclusive `&mut` slices of the result
//! rows it owns, taken from [`Matrix::rows_mut`]. Units share nothing mutable
//! beyond those slices, so no locks or atomics are involved. The caller
//! blocks until every dispatched unit has reported back; only then is the
//! result either returned whole or dropped in favour of an error.
//!
//! Available policies:
//! - [`Dispatch::RowThreads`]: one scoped OS thread per output row
//! - [`Dispatch::Tasks`]: one rayon task per output row
//! - [`Dispatch::Pool`]: a fixed number of threads, each owning a contiguous
//!   band of rows

pub mod pool;
mod row_threads;
mod tasks;

use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::matrix::{Element, Matrix};

/// How row units are scheduled onto threads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    #[default]
    RowThreads,
    Tasks,
    Pool { workers: usize },
}

/// Computes row `i` of `a * b` into `out`, which holds `b.cols()` cells.
pub(crate) type RowKernel = fn(&Matrix, &Matrix, usize, &mut [Element]) -> Result<()>;

/// Asked with the first row a thread will own before that thread is started.
/// An error is handled exactly like the OS refusing the thread.
pub(crate) type SpawnGate = fn(usize) -> io::Result<()>;

pub(crate) fn admit_all(_: usize) -> io::Result<()> {
    Ok(())
}

/// Multiplies with the default policy, one thread per output row.
pub fn multiply_parallel(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    multiply_with(a, b, Dispatch::default())
}

pub fn multiply_with(a: &Matrix, b: &Matrix, dispatch: Dispatch) -> Result<Matrix> {
    multiply_with_kernel(a, b, dispatch, compute_row)
}

pub(crate) fn multiply_with_kernel(
    a: &Matrix,
    b: &Matrix,
    dispatch: Dispatch,
    kernel: RowKernel,
) -> Result<Matrix> {
    let dim = Matrix::product_dim(a, b)?;
    let mut result = Matrix::new(dim);
    if dim.0 == 0 {
        return Ok(result);
    }

    info!(units = dim.0, ?dispatch, "dispatching row units");
    debug!(rows = dim.0, cols = dim.1, inner = a.cols(), "result shape");
    let rows = result.rows_mut();
    let outcomes = match dispatch {
        Dispatch::RowThreads => row_threads::run(a, b, rows, kernel, admit_all),
        Dispatch::Tasks => tasks::run(a, b, rows, kernel),
        Dispatch::Pool { workers } => pool::run(a, b, rows, kernel, workers, admit_all),
    };
    settle(outcomes, dim.0)?;
    debug!(units = dim.0, "all row units completed");

    Ok(result)
}

/// Row `i` of the product, accumulated in place into a zeroed `out`.
pub(crate) fn compute_row(a: &Matrix, b: &Matrix, i: usize, out: &mut [Element]) -> Result<()> {
    let a_row = a.row(i);
    for (j, cell) in out.iter_mut().enumerate() {
        for (k, &x) in a_row.iter().enumerate() {
            *cell = x
                .checked_mul(b.get(k, j))
                .and_then(|prod| cell.checked_add(prod))
                .ok_or(Error::Overflow { row: i, col: j })?;
        }
    }
    Ok(())
}

/// Runs one unit, turning a panic into [`Error::RowPanicked`].
fn run_unit(
    kernel: RowKernel,
    a: &Matrix,
    b: &Matrix,
    i: usize,
    out: &mut [Element],
) -> Result<()> {
    panic::catch_unwind(AssertUnwindSafe(|| kernel(a, b, i, out)))
        .unwrap_or_else(|payload| Err(panicked(i, payload)))
}

fn panicked(row: usize, payload: Box<dyn Any + Send>) -> Error {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };
    Error::RowPanicked { row, message }
}

/// Barrier bookkeeping: `outcomes` holds one entry per unit that reported,
/// in row order. The lowest failing row wins; otherwise every one of
/// `expected` units must have reported.
fn settle(outcomes: Vec<Result<()>>, expected: usize) -> Result<()> {
    let completed = outcomes.len();
    if let Some(err) = outcomes.into_iter().find_map(|r| r.err()) {
        warn!(%err, "row unit failed, discarding partial result");
        return Err(err);
    }
    if completed != expected {
        warn!(completed, expected, "barrier released early");
        return Err(Error::IncompleteBarrier {
            completed,
            expected,
        });
    }
    Ok(())
}
