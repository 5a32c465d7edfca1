use crate::error::{PrimerCoreError, Result};
use crate::traits::Element;

/// Flat, row-major element buffer shared by every dense matrix representation.
///
/// `MatrixStorage` is the single owner of the element allocation: it is
/// allocated once at construction and released when the storage is dropped.
/// Views such as [`crate::RowMatrix::row`] only ever borrow from it.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixStorage<T: Element> {
    rows: usize,
    cols: usize,
    linear: Box<[T]>, // linear[row * cols + col]
}

/// Number of elements in a `rows x cols` matrix, rejecting sizes that overflow `usize`.
pub fn element_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols).ok_or_else(|| {
        PrimerCoreError::InvalidDimensions(format!(
            "Element count of {}x{} overflows usize",
            rows, cols
        ))
    })
}

impl<T: Element> MatrixStorage<T> {
    /// Allocates a zero-filled buffer of exactly `rows * cols` elements.
    ///
    /// # Panics
    /// If `rows * cols` overflows `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let len = match element_count(rows, cols) {
            Ok(len) => len,
            Err(err) => panic!("{}", err),
        };
        Self {
            rows,
            cols,
            linear: vec![T::zero(); len].into_boxed_slice(),
        }
    }

    /// Takes ownership of an existing row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != element_count(rows, cols)? {
            return Err(PrimerCoreError::InvalidDimensions(format!(
                "Data length ({}) does not match dimensions ({}x{})",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self {
            rows,
            cols,
            linear: data.into_boxed_slice(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of elements held, always `rows * cols`.
    pub fn len(&self) -> usize {
        self.linear.len()
    }

    pub fn is_empty(&self) -> bool {
        self.linear.is_empty()
    }

    /// Linear offset of `(row, col)` in the buffer.
    /// `offset(i, 0)` is where row `i` starts.
    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn as_slice(&self) -> &[T] {
        &self.linear
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.linear
    }

    /// Copies the first `len()` elements of `src` over the whole buffer.
    pub fn copy_from(&mut self, src: &[T]) -> Result<()> {
        let expected = self.linear.len();
        if src.len() < expected {
            return Err(PrimerCoreError::InsufficientData {
                expected,
                actual: src.len(),
            });
        }
        self.linear.copy_from_slice(&src[..expected]);
        Ok(())
    }

    pub fn into_vec(self) -> Vec<T> {
        self.linear.into_vec()
    }
}
