use primer_ops::{Matrix, PrimerCoreError, RowMatrix, RowMatrixOperations};

/// Builds an n x n matrix with a(i, j) = i + j.
fn create_hankel_matrix(n: usize) -> Result<RowMatrix<i64>, PrimerCoreError> {
    let flat: Vec<i64> = (0..n * n).map(|k| ((k / n) + (k % n)) as i64).collect();
    let mut matrix = RowMatrix::new(n, n);
    matrix.mat_import(&flat)?;
    Ok(matrix)
}

fn main() -> Result<(), PrimerCoreError> {
    // Initialize logging based on RUST_LOG environment variable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let n = 4;
    log::info!("Setting up {}x{} matrices A, B and C...", n, n);
    let a = create_hankel_matrix(n)?;
    let b = RowMatrix::identity(n);
    let mut c = RowMatrix::new(n, n);
    for i in 0..n {
        c.try_set_elem(i, n - 1 - i, 10)?;
    }
    log::info!("A =\n{}", a);
    log::info!("C =\n{}", c);

    match RowMatrixOperations::gemm_matrices(a, b, c) {
        Some(result) => log::info!("A * I + C =\n{}", result),
        None => log::warn!("GEMM rejected the input dimensions"),
    }

    // A mismatched pair yields no result.
    let lhs: RowMatrix<i64> = RowMatrix::new(2, 3);
    let rhs: RowMatrix<i64> = RowMatrix::new(3, 2);
    let (lr, lc, rr, rc) = (lhs.rows(), lhs.cols(), rhs.rows(), rhs.cols());
    if RowMatrixOperations::add_matrices(lhs, rhs).is_none() {
        log::info!("Adding {}x{} and {}x{} returns no result", lr, lc, rr, rc);
    }

    Ok(())
}
