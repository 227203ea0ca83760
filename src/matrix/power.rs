//! Matrix powers by binary exponentiation.

use super::{Matrix, MatrixError};
use crate::ring::{RawScalar, RingElement};

/// Computes `matrix ^ exponent * vector` without materializing the full
/// power.
///
/// Standard square-and-multiply over the exponent bits: the running power
/// is multiplied into the result vector on every set bit and squared in
/// between, so only O(log exponent) matrix products are performed. An
/// exponent of zero returns the vector unchanged.
///
/// The matrix must be square and match the vector length.
pub fn matrix_power<E: RingElement>(
    matrix: &Matrix<E>,
    exponent: u64,
    vector: &[E],
) -> Result<Vec<E>, MatrixError> {
    check_dimensions(matrix, vector.len())?;
    let mut result = vector.to_vec();
    let mut running = matrix.clone();
    let mut exponent = exponent;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = running.mul_vector(&result)?;
        }
        exponent >>= 1;
        if exponent > 0 {
            running = (running.clone() * &running)?;
        }
    }
    Ok(result)
}

/// Computes `matrix ^ exponent * vector` over plain scalars with an
/// explicit modulus.
///
/// Same driver as [matrix_power], with every completed entry reduced into
/// `[0, modulus)`. Inputs are expected to be reduced already. Products are
/// accumulated with wrapping arithmetic, so the element type bounds how
/// large a matrix stays exact; see [RawScalar].
pub fn matrix_power_mod<E: RawScalar>(
    matrix: &Matrix<E>,
    exponent: u64,
    vector: &[E],
    modulus: E,
) -> Result<Vec<E>, MatrixError> {
    check_dimensions(matrix, vector.len())?;
    let mut result = vector.to_vec();
    let mut running = matrix.clone();
    let mut exponent = exponent;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = running.mul_vector_mod(&result, modulus)?;
        }
        exponent >>= 1;
        if exponent > 0 {
            running = running.mul_mod(&running, modulus)?;
        }
    }
    Ok(result)
}

/// Builds a `size x size` matrix and a vector through the callback, then
/// runs [matrix_power] on them.
///
/// Matrix and vector start out as all zeros; the callback fills in whatever
/// entries it needs. This keeps storage details out of callers that only
/// want "build M, raise it, read off the vector".
pub fn matrix_power_with<E, F>(size: u16, exponent: u64, fill: F) -> Result<Vec<E>, MatrixError>
where
    E: RingElement,
    F: FnOnce(&mut Matrix<E>, &mut [E]),
{
    let mut matrix = Matrix::zero(size, size);
    let mut vector = vec![E::zero(); size.into()];
    fill(&mut matrix, &mut vector);
    matrix_power(&matrix, exponent, &vector)
}

/// Like [matrix_power_with], for callers that only fill the matrix.
///
/// The power is applied to the all-ones vector, so each output entry is the
/// corresponding row sum of the matrix power.
pub fn matrix_power_ones<E, F>(size: u16, exponent: u64, fill: F) -> Result<Vec<E>, MatrixError>
where
    E: RingElement,
    F: FnOnce(&mut Matrix<E>),
{
    let mut matrix = Matrix::zero(size, size);
    fill(&mut matrix);
    let vector = vec![E::one(); size.into()];
    matrix_power(&matrix, exponent, &vector)
}

fn check_dimensions<E>(matrix: &Matrix<E>, vector_len: usize) -> Result<(), MatrixError> {
    if matrix.nrows() != matrix.ncols() {
        return Err(MatrixError::Dimension {
            expected: matrix.nrows().into(),
            actual: matrix.ncols().into(),
        });
    }
    if usize::from(matrix.nrows()) != vector_len {
        return Err(MatrixError::Dimension { expected: matrix.nrows().into(), actual: vector_len });
    }
    Ok(())
}
