use std::fmt;

use crate::error::{Error, Result};

/// Cell type of every matrix in this crate.
pub type Element = i64;

/// Dense row-major matrix of fixed-width integers.
///
/// Storage is one flat buffer of `rows * cols` cells, so every row has the
/// same length and ragged data cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    data: Vec<Element>,
    dim: (usize, usize),
}

impl Matrix {
    /// Zero-filled matrix of `dim = (rows, cols)`.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`. Use [`Matrix::try_new`] to
    /// get an error instead.
    pub fn new(dim: (usize, usize)) -> Self {
        match Matrix::try_new(dim) {
            Ok(mat) => mat,
            Err(e) => panic!("{}", e),
        }
    }

    /// Zero-filled matrix, or [`Error::TooLarge`] when the cell count
    /// overflows `usize`.
    pub fn try_new(dim: (usize, usize)) -> Result<Self> {
        let cells = Matrix::cell_count(dim)?;
        Ok(Matrix {
            data: vec![0; cells],
            dim,
        })
    }

    /// `rows * cols`, checked.
    pub fn cell_count(dim: (usize, usize)) -> Result<usize> {
        dim.0.checked_mul(dim.1).ok_or(Error::TooLarge {
            rows: dim.0,
            cols: dim.1,
        })
    }

    /// Builds a matrix from nested rows.
    ///
    /// An empty outer vector yields a 0x0 matrix. Rows of unequal length are
    /// rejected with [`Error::RaggedRow`].
    pub fn from_rows(rows: Vec<Vec<Element>>) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::RaggedRow {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix {
            data,
            dim: (rows.len(), cols),
        })
    }

    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::new((n, n));
        for i in 0..n {
            mat.set(i, i, 1);
        }
        mat
    }

    pub fn dim(&self) -> (usize, usize) {
        self.dim
    }

    pub fn rows(&self) -> usize {
        self.dim.0
    }

    pub fn cols(&self) -> usize {
        self.dim.1
    }

    /// True when the matrix has no cells (zero rows or zero columns).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[Element] {
        &self.data
    }

    pub fn get(&self, i: usize, j: usize) -> Element {
        self.data[i * self.dim.1 + j]
    }

    pub fn set(&mut self, i: usize, j: usize, val: Element) {
        self.data[i * self.dim.1 + j] = val;
    }

    pub fn row(&self, idx: usize) -> &[Element] {
        let start = idx * self.dim.1;
        &self.data[start..start + self.dim.1]
    }

    /// Iterates over rows in order.
    pub fn row_iter(&self) -> impl Iterator<Item = &[Element]> + '_ {
        (0..self.dim.0).map(move |i| self.row(i))
    }

    /// Splits the buffer into one exclusive slice per row.
    ///
    /// The slices are pairwise disjoint, which is what lets row units write
    /// concurrently without locking. A matrix with zero columns yields
    /// `rows` empty slices.
    pub fn rows_mut(&mut self) -> Vec<&mut [Element]> {
        let (rows, cols) = self.dim;
        if cols == 0 {
            return (0..rows).map(|_| <&mut [Element]>::default()).collect();
        }
        self.data.chunks_mut(cols).collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<Element>> {
        self.row_iter().map(|row| row.to_vec()).collect()
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0)
    }

    /// Dimensions of `a * b`, or [`Error::DimensionMismatch`] when the inner
    /// dimensions differ.
    ///
    /// Two empty operands such as `(m, 0)` and `(0, p)` can describe a
    /// product too large to allocate; that is [`Error::TooLarge`].
    pub fn product_dim(a: &Matrix, b: &Matrix) -> Result<(usize, usize)> {
        if a.dim.1 != b.dim.0 {
            return Err(Error::DimensionMismatch { a: a.dim, b: b.dim });
        }
        let dim = (a.dim.0, b.dim.1);
        Matrix::cell_count(dim)?;
        Ok(dim)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_iter() {
            let cells: Vec<String> = row.iter().map(|x| x.to_string()).collect();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}
