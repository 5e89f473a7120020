//! Integer matrix multiplication, sequential and row-parallel.
//!
//! The parallel multiplier hands every output row to its own unit of work.
//! Each unit receives an exclusive slice of the result buffer, so units
//! never write to the same cell and the result needs no locking. The call
//! returns once every unit has finished, with either the complete product
//! or an error; a partially filled result is never handed out.
//!
//! ```
//! use pmm::{generator, multiply, multiply_parallel};
//!
//! let mut rng = generator::seeded_rng(42);
//! let a = generator::generate(64, 32, &mut rng);
//! let b = generator::generate(32, 48, &mut rng);
//!
//! let c = multiply_parallel(&a, &b).unwrap();
//! assert_eq!(c.dim(), (64, 48));
//! assert_eq!(c, multiply(&a, &b).unwrap());
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod matrix;
pub mod parallel;
pub mod sequential;
pub mod strategy;

pub use error::{Error, Result};
pub use matrix::{Element, Matrix};
pub use parallel::{multiply_parallel, multiply_with, Dispatch};
pub use sequential::multiply;
pub use strategy::{Multiplier, Strategy};
