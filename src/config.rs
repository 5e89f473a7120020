//! Run configuration for the `pmm` binary.
//!
//! Positional arguments: `pmm [size] [strategy] [seed]`. A missing argument
//! falls back to `PMM_SIZE`, `PMM_STRATEGY` or `PMM_SEED`, then to the
//! defaults below.

use std::env;

use crate::error::{Error, Result};
use crate::strategy::Strategy;

pub const DEFAULT_SIZE: usize = 1000;

/// What the binary does with the generated matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Multiply once with the given strategy.
    Single(Strategy),
    /// Time sequential against the default parallel strategy and check that
    /// both agree.
    Compare,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub size: usize,
    pub mode: Mode,
    /// `None` seeds from the wall clock.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size: DEFAULT_SIZE,
            mode: Mode::Compare,
            seed: None,
        }
    }
}

impl Config {
    /// Reads the process arguments (skipping the program name) and
    /// environment.
    pub fn from_env() -> Result<Self> {
        Config::from_sources(env::args().skip(1), |key| env::var(key).ok())
    }

    pub fn from_sources<A, E>(args: A, lookup: E) -> Result<Self>
    where
        A: IntoIterator<Item = String>,
        E: Fn(&str) -> Option<String>,
    {
        let mut args = args.into_iter();
        let mut next = |key: &str| args.next().or_else(|| lookup(key));
        let mut config = Config::default();

        if let Some(size) = next("PMM_SIZE") {
            config.size = size
                .trim()
                .parse()
                .map_err(|_| Error::InvalidArgument(format!("invalid size '{}'", size)))?;
            if config.size.checked_mul(config.size).is_none() {
                return Err(Error::InvalidArgument(format!(
                    "size {} is too large for a square matrix",
                    config.size
                )));
            }
        }
        if let Some(mode) = next("PMM_STRATEGY") {
            config.mode = if mode.trim().eq_ignore_ascii_case("compare") {
                Mode::Compare
            } else {
                Mode::Single(mode.parse()?)
            };
        }
        if let Some(seed) = next("PMM_SEED") {
            config.seed = Some(
                seed.trim()
                    .parse()
                    .map_err(|_| Error::InvalidArgument(format!("invalid seed '{}'", seed)))?,
            );
        }
        if let Some(extra) = args.next() {
            return Err(Error::InvalidArgument(format!("unexpected argument '{}'", extra)));
        }
        Ok(config)
    }
}
