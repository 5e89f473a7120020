//! One rayon task per output row.

use rayon::prelude::*;

use super::{run_unit, RowKernel};
use crate::error::Result;
use crate::matrix::{Element, Matrix};

/// Schedules every row as its own task on the global rayon pool.
///
/// Rayon multiplexes the tasks onto its worker threads; the indexed
/// `collect` returns once every task has finished, with outcomes in row
/// order.
pub(crate) fn run(
    a: &Matrix,
    b: &Matrix,
    rows: Vec<&mut [Element]>,
    kernel: RowKernel,
) -> Vec<Result<()>> {
    rows.into_par_iter()
        .enumerate()
        .map(|(i, row)| run_unit(kernel, a, b, i, row))
        .collect()
}
