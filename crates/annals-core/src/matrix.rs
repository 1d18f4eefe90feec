//! Dense square matrices over a declared cell type.
//!
//! [`Matrix`] stores an `n×n` grid in row-major order. The cell type is a
//! type parameter so the same container carries plain `0/1` adjacency flags,
//! signed weights, or richer per-cell payloads.
//!
//! Layout engines only need to know whether a cell marks a connection, which
//! is what the [`Cell`] trait answers.

use std::ops::Index;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Adjacency flags as produced by the adjacency builder (`0`, `1`, or a signed mark).
pub type AdjacencyMatrix = Matrix<i8>;

/// Errors raised when constructing or mutating a [`Matrix`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("row {row} has {len} cells, expected {expected} for a square matrix")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("cell ({row}, {column}) is outside a {dim}x{dim} matrix")]
    OutOfBounds {
        row: usize,
        column: usize,
        dim: usize,
    },
}

/// A cell value that may mark a connection between two nodes.
///
/// Numeric cells are connections when nonzero; boolean cells when `true`.
pub trait Cell {
    /// Returns true if this cell marks a connection
    fn is_edge(&self) -> bool;
}

impl Cell for bool {
    fn is_edge(&self) -> bool {
        *self
    }
}

macro_rules! impl_integer_cell {
    ($($ty:ty),*) => {
        $(
            impl Cell for $ty {
                fn is_edge(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

macro_rules! impl_float_cell {
    ($($ty:ty),*) => {
        $(
            impl Cell for $ty {
                fn is_edge(&self) -> bool {
                    *self != 0.0
                }
            }
        )*
    };
}

impl_integer_cell!(i8, i16, i32, i64, u8, u16, u32, u64, usize);
impl_float_cell!(f32, f64);

/// A dense `n×n` matrix stored in row-major order.
///
/// # Examples
///
/// ```
/// # use annals_core::matrix::Matrix;
/// let mut matrix: Matrix<i8> = Matrix::new(3);
/// matrix.set(0, 2, 1).unwrap();
///
/// assert_eq!(matrix.dim(), 3);
/// assert_eq!(matrix[(0, 2)], 1);
/// assert_eq!(matrix.to_rows(), vec![vec![0, 0, 1], vec![0, 0, 0], vec![0, 0, 0]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    dim: usize,
    cells: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Creates a `dim×dim` matrix with every cell set to `value`
    pub fn filled(dim: usize, value: T) -> Self {
        Self {
            dim,
            cells: vec![value; dim * dim],
        }
    }

    /// Copies the matrix out as a list of rows
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

impl<T: Clone + Default> Matrix<T> {
    /// Creates a `dim×dim` matrix with every cell set to `T::default()`
    pub fn new(dim: usize) -> Self {
        Self::filled(dim, T::default())
    }
}

impl<T> Matrix<T> {
    /// Builds a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RaggedRow`] when any row length differs from the
    /// number of rows, which covers both ragged and non-square input.
    ///
    /// # Examples
    ///
    /// ```
    /// # use annals_core::matrix::{Matrix, MatrixError};
    /// assert!(Matrix::from_rows(vec![vec![0, 1], vec![1, 0]]).is_ok());
    ///
    /// let ragged = Matrix::from_rows(vec![vec![0, 1], vec![1]]);
    /// assert_eq!(
    ///     ragged,
    ///     Err(MatrixError::RaggedRow { row: 1, len: 1, expected: 2 })
    /// );
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let dim = rows.len();
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != dim) {
            return Err(MatrixError::RaggedRow {
                row,
                len: cells.len(),
                expected: dim,
            });
        }

        Ok(Self {
            dim,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Returns the number of rows (and columns)
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns true for the `0×0` matrix
    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// Returns the cell at `(row, column)`, or `None` when out of range
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.offset(row, column).map(|offset| &self.cells[offset])
    }

    /// Overwrites the cell at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfBounds`] when either index is not below [`Self::dim`].
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<(), MatrixError> {
        let offset = self
            .offset(row, column)
            .ok_or(MatrixError::OutOfBounds {
                row,
                column,
                dim: self.dim,
            })?;
        self.cells[offset] = value;
        Ok(())
    }

    /// Returns one row as a slice
    pub fn row(&self, row: usize) -> Option<&[T]> {
        (row < self.dim).then(|| &self.cells[row * self.dim..(row + 1) * self.dim])
    }

    /// Iterates over the rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics; an empty matrix has no cells so any chunk size works
        self.cells.chunks(self.dim.max(1))
    }

    /// Applies `f` to every cell, keeping the shape
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Matrix<U> {
        Matrix {
            dim: self.dim,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    fn offset(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.dim && column < self.dim).then_some(row * self.dim + column)
    }
}

impl<T: Cell> Matrix<T> {
    /// Returns true if the cell at `(row, column)` marks a connection
    pub fn has_edge(&self, row: usize, column: usize) -> bool {
        self.get(row, column).is_some_and(Cell::is_edge)
    }

    /// Counts the cells marking a connection
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_edge()).count()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        match self.offset(row, column) {
            Some(offset) => &self.cells[offset],
            None => panic!(
                "cell ({row}, {column}) is outside a {dim}x{dim} matrix",
                dim = self.dim
            ),
        }
    }
}

impl<T: Serialize> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Matrix::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
