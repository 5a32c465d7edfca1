use bytemuck::Pod;
use num_traits::Num;
use std::fmt::Debug;

use crate::error::{PrimerCoreError, Result};

/// Numeric element type a matrix can hold (e.g. i32, f64).
pub trait Element: Copy + Debug + Default + Pod + Num {}

impl<T: Copy + Debug + Default + Pod + Num> Element for T {}

/// Generic trait representing a dense matrix.
///
/// Implementations own a contiguous buffer of `rows * cols` elements. The
/// dimensions never change after construction.
pub trait Matrix: Debug {
    /// The underlying numeric type of the matrix elements.
    type Value: Element;

    /// Returns the dimensions of the matrix as (rows, columns).
    fn dims(&self) -> (usize, usize);

    /// Returns the number of rows.
    fn rows(&self) -> usize {
        self.dims().0
    }

    /// Returns the number of columns.
    fn cols(&self) -> usize {
        self.dims().1
    }

    /// Checks if the matrix is square.
    fn is_square(&self) -> bool {
        let (rows, cols) = self.dims();
        rows == cols
    }

    /// Returns the `(i, j)`th element.
    ///
    /// # Panics
    /// If `i >= rows` or `j >= cols`.
    fn get_elem(&self, i: usize, j: usize) -> Self::Value;

    /// Sets the `(i, j)`th element to `val`.
    ///
    /// # Panics
    /// If `i >= rows` or `j >= cols`.
    fn set_elem(&mut self, i: usize, j: usize, val: Self::Value);

    /// Overwrites every element from `arr`, read in row-major order.
    ///
    /// Only the first `rows * cols` elements of `arr` are used. A shorter
    /// source is rejected and the matrix is left untouched.
    fn mat_import(&mut self, arr: &[Self::Value]) -> Result<()>;

    /// Bounds-checked variant of [`Matrix::get_elem`].
    fn try_get_elem(&self, i: usize, j: usize) -> Result<Self::Value> {
        check_index(self.dims(), i, j)?;
        Ok(self.get_elem(i, j))
    }

    /// Bounds-checked variant of [`Matrix::set_elem`].
    fn try_set_elem(&mut self, i: usize, j: usize, val: Self::Value) -> Result<()> {
        check_index(self.dims(), i, j)?;
        self.set_elem(i, j, val);
        Ok(())
    }
}

fn check_index(dims: (usize, usize), i: usize, j: usize) -> Result<()> {
    let (rows, cols) = dims;
    if i >= rows || j >= cols {
        return Err(PrimerCoreError::IndexOutOfRange {
            row: i,
            col: j,
            rows,
            cols,
        });
    }
    Ok(())
}
