use crate::errors::HillCryptoError;
use crate::ring::{Matrix, Ring, Vector};

use num_bigint::BigInt;
use num_traits::Zero;

/// Matrix of exact integers, used for cofactors and adjugates before reduction.
pub type BigMatrix = Vec<Vec<BigInt>>;

/// Returns `n` if `matrix` is n×n, otherwise a `DimensionMismatch`.
pub fn square_size(matrix: &Matrix) -> Result<usize, HillCryptoError> {
    let n = matrix.len();
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Row {} has length {} but a square matrix of size {} was expected",
                i,
                row.len(),
                n
            )));
        }
    }
    Ok(n)
}

/// A·x where A is an m×n matrix and x is a length–n vector.
/// Returns an m‐vector with every coordinate in `[0, modulus)`.
pub fn matrix_vector_mul(a: &Matrix, x: &[i64], ring: &Ring) -> Result<Vector, HillCryptoError> {
    let mut y = Vec::with_capacity(a.len());
    for (i, row) in a.iter().enumerate() {
        if row.len() != x.len() {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Row {} has length {} but the vector has length {}",
                i,
                row.len(),
                x.len()
            )));
        }
        let sum = row
            .iter()
            .zip(x)
            .fold(0i64, |acc, (&a_ij, &x_j)| ring.add(acc, ring.mul(a_ij, x_j)));
        y.push(sum);
    }
    Ok(y)
}

/// Computes the matrix product `C = AB` modulo the ring's modulus.
///
/// # Errors
///
/// Returns `HillCryptoError::DimensionMismatch` if the inner dimensions of the matrices do not match
/// or if rows within the matrices have inconsistent lengths.
pub fn matrix_mul(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, HillCryptoError> {
    let n = a.len();
    if n == 0 {
        return Ok(Matrix::new());
    }
    let m_common = b.len();
    let p = b.first().map_or(0, Vec::len);

    if let Some(k) = b.iter().position(|row| row.len() != p) {
        return Err(HillCryptoError::DimensionMismatch(format!(
            "Matrix B row {} has incorrect length (expected {})",
            k, p
        )));
    }

    let mut c = vec![vec![0; p]; n];
    for (i, a_row) in a.iter().enumerate() {
        if a_row.len() != m_common {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Matrix A row {} has length {} but B has {} rows",
                i,
                a_row.len(),
                m_common
            )));
        }
        for j in 0..p {
            c[i][j] = a_row
                .iter()
                .zip(b)
                .fold(0i64, |acc, (&a_ik, b_row)| ring.add(acc, ring.mul(a_ik, b_row[j])));
        }
    }
    Ok(c)
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    (0..n)
        .map(|i| (0..n).map(|j| i64::from(i == j)).collect())
        .collect()
}

/// Swaps rows and columns.
pub fn transpose<T: Clone>(matrix: &[Vec<T>]) -> Vec<Vec<T>> {
    let cols = matrix.first().map_or(0, Vec::len);
    (0..cols)
        .map(|c| matrix.iter().map(|row| row[c].clone()).collect())
        .collect()
}

/// The sub-matrix left after deleting `row` and `col`.
pub fn minor(matrix: &Matrix, row: usize, col: usize) -> Matrix {
    matrix
        .iter()
        .enumerate()
        .filter(|&(r, _)| r != row)
        .map(|(_, values)| {
            values
                .iter()
                .enumerate()
                .filter(|&(c, _)| c != col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

/// Exact determinant by Laplace expansion along the first row.
///
/// Every level materializes its own minors, so the cost is O(n!). This is
/// fine for cipher block sizes (a handful of rows) and nothing else; the
/// result is exact for any size because it accumulates in [`BigInt`].
/// The determinant of the empty matrix is 1.
///
/// # Panics
///
/// Panics if `matrix` is not square; check it with [`square_size`] first.
/// [`KeyMatrix`](crate::key::KeyMatrix) only ever holds square matrices.
pub fn determinant(matrix: &Matrix) -> BigInt {
    match matrix.len() {
        0 => BigInt::from(1),
        1 => BigInt::from(matrix[0][0]),
        _ => matrix[0]
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .fold(BigInt::zero(), |det, (col, &value)| {
                let term = BigInt::from(value) * determinant(&minor(matrix, 0, col));
                if col % 2 == 0 { det + term } else { det - term }
            }),
    }
}

/// Signed minors: entry (r, c) is `(-1)^(r+c) · det(minor(r, c))`.
///
/// For a 1×1 matrix the only minor is empty, so its cofactor is 1.
pub fn cofactor_matrix(matrix: &Matrix) -> BigMatrix {
    let n = matrix.len();
    (0..n)
        .map(|r| {
            (0..n)
                .map(|c| {
                    let det = determinant(&minor(matrix, r, c));
                    if (r + c) % 2 == 0 { det } else { -det }
                })
                .collect()
        })
        .collect()
}

/// Transpose of the cofactor matrix; `A · adj(A) = det(A) · I`.
pub fn adjugate(matrix: &Matrix) -> BigMatrix {
    transpose(&cofactor_matrix(matrix))
}

/// Modular inverse of a square matrix via `det⁻¹ · adj(A) mod M`.
///
/// # Errors
///
/// * `SingularMatrix` when the determinant is exactly zero.
/// * `NonInvertibleModulus` when the determinant shares a factor with the modulus.
/// * `DimensionMismatch` when the matrix is not square.
pub fn matrix_inverse(matrix: &Matrix, ring: &Ring) -> Result<Matrix, HillCryptoError> {
    square_size(matrix)?;
    if matrix.is_empty() {
        return Ok(Matrix::new());
    }

    let det = determinant(matrix);
    if det.is_zero() {
        return Err(HillCryptoError::SingularMatrix);
    }

    let det_inv = ring.inv(ring.reduce(&det)).map_err(|err| match err {
        HillCryptoError::NonInvertibleModulus { modulus, gcd, .. } => {
            HillCryptoError::NonInvertibleModulus {
                determinant: det.clone(),
                modulus,
                gcd,
            }
        }
        other => other,
    })?;

    Ok(adjugate(matrix)
        .iter()
        .map(|row| {
            row.iter()
                .map(|cofactor| ring.mul(ring.reduce(cofactor), det_inv))
                .collect()
        })
        .collect())
}
