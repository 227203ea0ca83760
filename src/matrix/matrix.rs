//! Matrix.

use num_traits::{One, Zero};
use thiserror::Error;

/// A dense matrix over a ring element.
///
/// Storage is row-major and the dimensions are fixed at construction. The
/// element type is typically a [ModularNumber], but any [RingElement]
/// works, as do plain [RawScalar] integers through the `*_mod` operations
/// that take an explicit modulus.
///
/// [ModularNumber]: crate::modular::ModularNumber
/// [RingElement]: crate::ring::RingElement
/// [RawScalar]: crate::ring::RawScalar
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix<E> {
    /// Matrix.
    data: Vec<E>,

    /// Number of rows.
    nrows: u16,

    /// Number of columns.
    ncols: u16,
}

impl<E> Matrix<E> {
    /// New matrix.
    pub fn new(data: Vec<E>, nrows: u16, ncols: u16) -> Result<Matrix<E>, MatrixError> {
        let n = usize::try_from(u32::from(nrows).checked_mul(u32::from(ncols)).ok_or(MatrixError::Arithmetic)?)
            .map_err(|_| MatrixError::Arithmetic)?;
        if n != data.len() {
            return Err(MatrixError::Build(data.len(), n));
        }
        Ok(Matrix { data, nrows, ncols })
    }

    /// Returns the reference to data.
    pub fn data(&self) -> &Vec<E> {
        &self.data
    }

    /// Returns the data as a Vec consuming the matrix.
    pub fn to_vec(self) -> Vec<E> {
        self.data
    }

    /// Number of rows.
    pub fn nrows(&self) -> u16 {
        self.nrows
    }

    /// Number of columns.
    pub fn ncols(&self) -> u16 {
        self.ncols
    }

    /// Get the matrix entry `M[row,col]`.
    pub fn entry(&self, row: u16, col: u16) -> Result<&E, MatrixError> {
        let index = usize::try_from(
            u64::from(row)
                .checked_mul(u64::from(self.ncols))
                .ok_or(MatrixError::Arithmetic)?
                .checked_add(u64::from(col))
                .ok_or(MatrixError::Arithmetic)?,
        )
        .map_err(|_| MatrixError::Arithmetic)?;
        self.data.get(index).ok_or(MatrixError::IndexNotFound)
    }

    /// Get the matrix entry `M[row,col]`.
    pub fn entry_mut(&mut self, row: u16, col: u16) -> Result<&mut E, MatrixError> {
        let index = usize::try_from(
            u64::from(row)
                .checked_mul(u64::from(self.ncols))
                .ok_or(MatrixError::Arithmetic)?
                .checked_add(u64::from(col))
                .ok_or(MatrixError::Arithmetic)?,
        )
        .map_err(|_| MatrixError::Arithmetic)?;
        self.data.get_mut(index).ok_or(MatrixError::IndexNotFound)
    }
}

impl<E: Zero + Copy> Matrix<E> {
    /// Zero matrix.
    pub fn zero(nrows: u16, ncols: u16) -> Matrix<E> {
        let data = vec![E::zero(); usize::from(nrows) * usize::from(ncols)];
        Matrix { data, nrows, ncols }
    }
}

impl<E: Zero + One + Copy> Matrix<E> {
    /// Identity matrix.
    pub fn identity(n: u16) -> Result<Matrix<E>, MatrixError> {
        let mut m = Matrix::zero(n, n);
        for i in 0..n {
            *m.entry_mut(i, i)? = E::one();
        }
        Ok(m)
    }
}

/// Matrix Error.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum MatrixError {
    /// Index not found error.
    #[error("index not found")]
    IndexNotFound,

    /// Integer overflow or underflow.
    #[error("integer overflow/underflow")]
    Arithmetic,

    /// Error building matrix.
    #[error("error building matrix, given data has {0} entries which does not match nrows x ncols = {1}")]
    Build(usize, usize),

    /// Incompatible dimensions for the requested operation.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    Dimension {
        /// The dimension the operation requires.
        expected: usize,
        /// The dimension it was given.
        actual: usize,
    },
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{const_modulus, modular::ModularNumber};

    const_modulus!(P13 = 13);

    type Element = ModularNumber<P13>;

    fn make_vector(values: &[u64]) -> Vec<Element> {
        values.iter().map(|val| ModularNumber::new(*val)).collect()
    }

    fn make_matrix(n: usize, values: &[u64]) -> Matrix<Element> {
        Matrix::new(make_vector(values), n as u16, n as u16).unwrap()
    }

    #[test]
    fn identity() {
        let result = Matrix::<Element>::identity(3).unwrap();
        let expected = make_matrix(3, &[1, 0, 0, 0, 1, 0, 0, 0, 1]);
        assert_eq!(result, expected);
    }

    #[test]
    fn build_size_mismatch() {
        let result = Matrix::new(make_vector(&[1, 2, 3]), 2, 2);
        assert_eq!(result.err(), Some(MatrixError::Build(3, 4)));
    }

    #[test]
    fn entry_access() {
        let mut matrix = make_matrix(2, &[1, 2, 3, 4]);
        assert_eq!(*matrix.entry(1, 0).unwrap(), ModularNumber::new(3));
        *matrix.entry_mut(0, 1).unwrap() = ModularNumber::new(9);
        assert_eq!(*matrix.entry(0, 1).unwrap(), ModularNumber::new(9));
        assert_eq!(matrix.entry(2, 0).err(), Some(MatrixError::IndexNotFound));
    }
}
