use std::fmt;
use std::ops::{Index, IndexMut};

use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::{PrimerCoreError, Result};
use crate::storage::{element_count, MatrixStorage};
use crate::traits::{Element, Matrix};

/// Represents a dense matrix stored in row-major order on the CPU.
///
/// Rows are located by offset into the owned [`MatrixStorage`] buffer
/// (row `i` starts at `i * cols`), so row views borrow the elements
/// instead of holding their own copies or pointers.
#[derive(Debug, Clone, PartialEq)]
pub struct RowMatrix<T: Element> {
    storage: MatrixStorage<T>,
}

impl<T: Element> RowMatrix<T> {
    /// Creates a new RowMatrix filled with zeros.
    ///
    /// # Panics
    /// If `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            storage: MatrixStorage::zeros(rows, cols),
        }
    }

    /// Creates a new RowMatrix from raw data, dimensions, assuming row-major order.
    pub fn from_data(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        Ok(Self {
            storage: MatrixStorage::from_vec(rows, cols, data)?,
        })
    }

    /// Creates a RowMatrix from a dense 2D representation.
    /// An empty input yields a 0x0 matrix.
    pub fn from_rows(dense: &[Vec<T>]) -> Result<Self> {
        let rows = dense.len();
        let cols = dense.first().map_or(0, |row| row.len());
        let mut data = Vec::with_capacity(element_count(rows, cols)?);
        for (r, row_vec) in dense.iter().enumerate() {
            if row_vec.len() != cols {
                return Err(PrimerCoreError::InvalidDimensions(format!(
                    "Row {} has {} elements, expected {}",
                    r,
                    row_vec.len(),
                    cols
                )));
            }
            data.extend_from_slice(row_vec);
        }
        Self::from_data(rows, cols, data)
    }

    /// Creates an `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::new(n, n);
        for i in 0..n {
            matrix[(i, i)] = T::one();
        }
        matrix
    }

    /// Returns row `i` as a slice into the underlying buffer.
    ///
    /// # Panics
    /// If `i >= rows`.
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.storage.rows(), "row {} out of range", i);
        let start = self.storage.offset(i, 0);
        &self.storage.as_slice()[start..start + self.storage.cols()]
    }

    /// Mutable counterpart of [`RowMatrix::row`].
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        assert!(i < self.storage.rows(), "row {} out of range", i);
        let start = self.storage.offset(i, 0);
        let cols = self.storage.cols();
        &mut self.storage.as_mut_slice()[start..start + cols]
    }

    /// Iterates over the rows, beginning with row 0.
    pub fn rows_iter(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        (0..self.storage.rows()).map(move |i| self.row(i))
    }

    /// Returns a slice view of the underlying row-major data.
    pub fn data(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Returns a mutable slice view of the underlying row-major data.
    pub fn data_mut(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// Raw bytes of the element buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.storage.as_slice())
    }

    /// Consumes the matrix and returns its row-major data without copying.
    pub fn into_data(self) -> Vec<T> {
        self.storage.into_vec()
    }
}

impl<T: Element> Matrix for RowMatrix<T> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        (self.storage.rows(), self.storage.cols())
    }

    fn get_elem(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }

    fn set_elem(&mut self, i: usize, j: usize, val: T) {
        self[(i, j)] = val;
    }

    fn mat_import(&mut self, arr: &[T]) -> Result<()> {
        let total_elements = self.storage.len();
        if arr.len() < total_elements {
            return Err(PrimerCoreError::InsufficientData {
                expected: total_elements,
                actual: arr.len(),
            });
        }
        log::trace!(
            "Importing {} elements into {}x{} matrix",
            total_elements,
            self.rows(),
            self.cols()
        );
        let cols = self.storage.cols();
        for (k, &val) in arr.iter().take(total_elements).enumerate() {
            let ri = k / cols;
            let ci = k % cols;
            self.row_mut(ri)[ci] = val;
        }
        Ok(())
    }
}

impl<T: Element> Index<(usize, usize)> for RowMatrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            j < self.storage.cols(),
            "column {} out of range for {} columns",
            j,
            self.storage.cols()
        );
        &self.row(i)[j]
    }
}

impl<T: Element> IndexMut<(usize, usize)> for RowMatrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(
            j < self.storage.cols(),
            "column {} out of range for {} columns",
            j,
            self.storage.cols()
        );
        &mut self.row_mut(i)[j]
    }
}

impl<T: Element> fmt::Display for RowMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            writeln!(f, "{:?}", row)?;
        }
        Ok(())
    }
}

// Serialized as { rows, cols, data } with data in row-major order.
impl<T: Element + Serialize> Serialize for RowMatrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RowMatrix", 3)?;
        state.serialize_field("rows", &self.rows())?;
        state.serialize_field("cols", &self.cols())?;
        state.serialize_field("data", self.data())?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename = "RowMatrix")]
struct RowMatrixRepr<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<'de, T: Element + Deserialize<'de>> Deserialize<'de> for RowMatrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let repr = RowMatrixRepr::<T>::deserialize(deserializer)?;
        RowMatrix::from_data(repr.rows, repr.cols, repr.data).map_err(de::Error::custom)
    }
}
