//! One entry point over every execution strategy.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::parallel::{self, pool, Dispatch};
use crate::sequential;

/// Execution strategy selected by the caller.
///
/// Textual forms: `sequential`, `row-threads`, `tasks`, `pool` (hardware
/// sized) and `pool:N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Sequential,
    Parallel(Dispatch),
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Parallel(Dispatch::default())
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Sequential => write!(f, "sequential"),
            Strategy::Parallel(Dispatch::RowThreads) => write!(f, "row-threads"),
            Strategy::Parallel(Dispatch::Tasks) => write!(f, "tasks"),
            Strategy::Parallel(Dispatch::Pool { workers }) => write!(f, "pool:{}", workers),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let strategy = match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Strategy::Sequential,
            "row-threads" | "rows" | "parallel" => Strategy::Parallel(Dispatch::RowThreads),
            "tasks" | "rayon" => Strategy::Parallel(Dispatch::Tasks),
            "pool" => Strategy::Parallel(Dispatch::Pool {
                workers: pool::default_workers(),
            }),
            other => {
                let workers = other
                    .strip_prefix("pool:")
                    .ok_or_else(|| Error::InvalidArgument(format!("unknown strategy '{}'", s)))?;
                let workers: usize = workers.parse().map_err(|_| {
                    Error::InvalidArgument(format!("invalid pool size '{}'", workers))
                })?;
                if workers == 0 {
                    return Err(Error::InvalidArgument("pool size must be at least 1".into()));
                }
                Strategy::Parallel(Dispatch::Pool { workers })
            }
        };
        Ok(strategy)
    }
}

/// Multiplies matrices with a fixed [`Strategy`].
///
/// ```
/// use pmm::{Matrix, Multiplier, Strategy};
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
///
/// let c = Multiplier::new(Strategy::default()).multiply(&a, &b).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Multiplier {
    strategy: Strategy,
}

impl Multiplier {
    pub fn new(strategy: Strategy) -> Self {
        Multiplier { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        match self.strategy {
            Strategy::Sequential => sequential::multiply(a, b),
            Strategy::Parallel(dispatch) => parallel::multiply_with(a, b, dispatch),
        }
    }
}
