use primer_core::{Element, Matrix, RowMatrix};

/// Stateless combinators over [`RowMatrix`].
///
/// Every operation takes its inputs by value, so the caller gives them up,
/// and returns a freshly allocated result. `None` means the input dimensions
/// were incompatible; nothing is computed in that case.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowMatrixOperations;

impl RowMatrixOperations {
    /// Computes `mat1 + mat2`.
    ///
    /// Returns `None` unless both matrices have the same dimensions.
    pub fn add_matrices<T: Element>(mat1: RowMatrix<T>, mat2: RowMatrix<T>) -> Option<RowMatrix<T>> {
        if mat1.dims() != mat2.dims() {
            log::debug!(
                "add_matrices: dimension mismatch ({}x{} vs {}x{})",
                mat1.rows(),
                mat1.cols(),
                mat2.rows(),
                mat2.cols()
            );
            return None;
        }

        let (rows, cols) = mat1.dims();
        log::debug!("add_matrices: allocating {}x{} result", rows, cols);
        let mut res = RowMatrix::new(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.set_elem(i, j, mat1.get_elem(i, j) + mat2.get_elem(i, j));
            }
        }
        Some(res)
    }

    /// Computes the matrix product `mat1 * mat2`.
    ///
    /// Returns `None` unless `mat1.cols() == mat2.rows()`. The result is
    /// `mat1.rows() x mat2.cols()`.
    pub fn multiply_matrices<T: Element>(
        mat1: RowMatrix<T>,
        mat2: RowMatrix<T>,
    ) -> Option<RowMatrix<T>> {
        let (m1r, m1c) = mat1.dims();
        let (m2r, m2c) = mat2.dims();
        if m1c != m2r {
            log::debug!(
                "multiply_matrices: inner dimension mismatch ({}x{} * {}x{})",
                m1r,
                m1c,
                m2r,
                m2c
            );
            return None;
        }

        log::debug!("multiply_matrices: allocating {}x{} result", m1r, m2c);
        let mut res = RowMatrix::new(m1r, m2c);
        for i in 0..m1r {
            for j in 0..m2c {
                let mut val = num_traits::zero::<T>();
                for k in 0..m1c {
                    val = val + mat1.get_elem(i, k) * mat2.get_elem(k, j);
                }
                res.set_elem(i, j, val);
            }
        }
        Some(res)
    }

    /// Simplified GEMM (general matrix multiply): computes `mat_a * mat_b + mat_c`.
    ///
    /// Returns `None` if `mat_a.cols() != mat_b.rows()` or if `mat_c` is not
    /// `mat_a.rows() x mat_b.cols()`.
    pub fn gemm_matrices<T: Element>(
        mat_a: RowMatrix<T>,
        mat_b: RowMatrix<T>,
        mat_c: RowMatrix<T>,
    ) -> Option<RowMatrix<T>> {
        // Check C up front so a bad C does not cost a full multiplication.
        if mat_a.cols() == mat_b.rows() && mat_c.dims() != (mat_a.rows(), mat_b.cols()) {
            log::debug!(
                "gemm_matrices: C is {}x{}, expected {}x{}",
                mat_c.rows(),
                mat_c.cols(),
                mat_a.rows(),
                mat_b.cols()
            );
            return None;
        }

        let product = Self::multiply_matrices(mat_a, mat_b)?;
        Self::add_matrices(product, mat_c)
    }
}

#[cfg(test)]
mod tests {
    use super::RowMatrixOperations;
    use primer_core::{Matrix, RowMatrix};

    fn square(rows: &[[i32; 2]; 2]) -> RowMatrix<i32> {
        RowMatrix::from_rows(&rows.iter().map(|r| r.to_vec()).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn test_add_matrices() {
        let a = square(&[[1, 2], [3, 4]]);
        let b = square(&[[5, 6], [7, 8]]);
        let sum = RowMatrixOperations::add_matrices(a, b).unwrap();
        assert_eq!(sum, square(&[[6, 8], [10, 12]]));
    }

    #[test]
    fn test_add_matrices_dimension_mismatch() {
        let a: RowMatrix<i32> = RowMatrix::new(2, 3);
        let b: RowMatrix<i32> = RowMatrix::new(3, 2);
        assert!(RowMatrixOperations::add_matrices(a, b).is_none());
    }

    #[test]
    fn test_multiply_matrices() {
        let a = square(&[[1, 2], [3, 4]]);
        let b = square(&[[5, 6], [7, 8]]);
        let product = RowMatrixOperations::multiply_matrices(a, b).unwrap();
        assert_eq!(product, square(&[[19, 22], [43, 50]]));
    }

    #[test]
    fn test_multiply_matrices_rectangular() {
        // [1 2 3]   [ 7  8]   [ 58  64]
        // [4 5 6] * [ 9 10] = [139 154]
        //           [11 12]
        let a = RowMatrix::from_data(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let b = RowMatrix::from_data(3, 2, vec![7, 8, 9, 10, 11, 12]).unwrap();
        let product = RowMatrixOperations::multiply_matrices(a, b).unwrap();
        assert_eq!(product.dims(), (2, 2));
        assert_eq!(product.data(), &[58, 64, 139, 154]);
    }

    #[test]
    fn test_multiply_matrices_inner_dimension_mismatch() {
        let a: RowMatrix<f64> = RowMatrix::new(2, 3);
        let b: RowMatrix<f64> = RowMatrix::new(2, 3);
        assert!(RowMatrixOperations::multiply_matrices(a, b).is_none());
    }

    #[test]
    fn test_multiply_matrices_empty_inner_dimension() {
        let a: RowMatrix<i32> = RowMatrix::new(2, 0);
        let b: RowMatrix<i32> = RowMatrix::new(0, 3);
        let product = RowMatrixOperations::multiply_matrices(a, b).unwrap();
        assert_eq!(product.dims(), (2, 3));
        assert!(product.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_gemm_matrices() {
        let a = square(&[[1, 2], [3, 4]]);
        let b = square(&[[5, 6], [7, 8]]);
        let c = square(&[[1, 1], [1, 1]]);
        let result = RowMatrixOperations::gemm_matrices(a, b, c).unwrap();
        assert_eq!(result, square(&[[20, 23], [44, 51]]));
    }

    #[test]
    fn test_gemm_matrices_bad_c() {
        let a = square(&[[1, 2], [3, 4]]);
        let b = square(&[[5, 6], [7, 8]]);
        let c: RowMatrix<i32> = RowMatrix::new(2, 3);
        assert!(RowMatrixOperations::gemm_matrices(a, b, c).is_none());
    }

    #[test]
    fn test_gemm_matrices_bad_inner_dimension() {
        let a: RowMatrix<i32> = RowMatrix::new(2, 3);
        let b: RowMatrix<i32> = RowMatrix::new(2, 2);
        let c: RowMatrix<i32> = RowMatrix::new(2, 2);
        assert!(RowMatrixOperations::gemm_matrices(a, b, c).is_none());
    }
}
