//! Pseudo-random matrix generation.
//!
//! The randomness source is always passed in by the caller: tests hand in a
//! seeded [`StdRng`] for reproducible inputs, the binary uses
//! [`time_seeded_rng`] by default.

use std::ops::RangeInclusive;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::matrix::{Element, Matrix};

/// Range every generated cell is drawn from.
pub const DEFAULT_RANGE: RangeInclusive<Element> = 0..=9;

/// Fills a `rows` x `cols` matrix with values drawn uniformly from `0..=9`.
pub fn generate<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
    generate_in(rows, cols, DEFAULT_RANGE, rng)
}

/// Like [`generate`] with a caller-chosen inclusive range.
///
/// # Panics
///
/// Panics if the range is empty or `rows * cols` overflows `usize`.
pub fn generate_in<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    range: RangeInclusive<Element>,
    rng: &mut R,
) -> Matrix {
    let cell = Uniform::from(range);
    let mut mat = Matrix::new((rows, cols));
    for i in 0..rows {
        for j in 0..cols {
            mat.set(i, j, rng.sample(&cell));
        }
    }
    mat
}

/// Deterministic generator for reproducible runs.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded from the wall clock.
pub fn time_seeded_rng() -> StdRng {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    StdRng::seed_from_u64(nanos)
}
