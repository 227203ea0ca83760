//! Matrix Operations.

use crate::{
    matrix::{Matrix, MatrixError},
    ring::{RawScalar, RingElement},
};
use std::ops::Mul;

impl<E: RingElement> Mul<&Matrix<E>> for Matrix<E> {
    type Output = Result<Matrix<E>, MatrixError>;

    /// Naive matrix multiplication, A: MxK * B: KxN -> C: MxN, O(KMN).
    fn mul(self, other: &Matrix<E>) -> Result<Matrix<E>, MatrixError> {
        if self.ncols() != other.nrows() {
            return Err(MatrixError::Dimension {
                expected: self.ncols().into(),
                actual: other.nrows().into(),
            });
        }
        let mut out = Matrix::<E>::zero(self.nrows(), other.ncols());
        for row in 0..self.nrows() {
            for col in 0..other.ncols() {
                let oi = out.entry_mut(row, col)?;
                for i in 0..self.ncols() {
                    let li = self.entry(row, i)?;
                    let ri = other.entry(i, col)?;
                    *oi = *oi + &(*ri * li);
                }
            }
        }
        Ok(out)
    }
}

impl<E: RingElement> Matrix<E> {
    /// Matrix-vector product, `M * v`, O(rows x cols).
    pub fn mul_vector(&self, vector: &[E]) -> Result<Vec<E>, MatrixError> {
        if usize::from(self.ncols()) != vector.len() {
            return Err(MatrixError::Dimension { expected: self.ncols().into(), actual: vector.len() });
        }
        let mut out = Vec::with_capacity(self.nrows().into());
        for row in 0..self.nrows() {
            let mut acc = E::zero();
            for (col, value) in (0..self.ncols()).zip(vector.iter()) {
                let entry = self.entry(row, col)?;
                acc = acc + &(*entry * value);
            }
            out.push(acc);
        }
        Ok(out)
    }
}

impl<E: RawScalar> Matrix<E> {
    /// Matrix product over plain scalars, each entry reduced into
    /// `[0, modulus)` once its accumulation is complete.
    ///
    /// Accumulation wraps in the element type; see [RawScalar] for what
    /// that means for narrow elements.
    pub fn mul_mod(&self, other: &Matrix<E>, modulus: E) -> Result<Matrix<E>, MatrixError> {
        if self.ncols() != other.nrows() {
            return Err(MatrixError::Dimension {
                expected: self.ncols().into(),
                actual: other.nrows().into(),
            });
        }
        let mut out = Matrix::<E>::zero(self.nrows(), other.ncols());
        for row in 0..self.nrows() {
            for col in 0..other.ncols() {
                let mut acc = E::zero();
                for i in 0..self.ncols() {
                    let li = self.entry(row, i)?;
                    let ri = other.entry(i, col)?;
                    acc = acc.wrapping_add(li.wrapping_mul(*ri));
                }
                *out.entry_mut(row, col)? = acc.rem_mod(modulus);
            }
        }
        Ok(out)
    }

    /// Matrix-vector product over plain scalars with reduced entries.
    pub fn mul_vector_mod(&self, vector: &[E], modulus: E) -> Result<Vec<E>, MatrixError> {
        if usize::from(self.ncols()) != vector.len() {
            return Err(MatrixError::Dimension { expected: self.ncols().into(), actual: vector.len() });
        }
        let mut out = Vec::with_capacity(self.nrows().into());
        for row in 0..self.nrows() {
            let mut acc = E::zero();
            for (col, value) in (0..self.ncols()).zip(vector.iter()) {
                let entry = self.entry(row, col)?;
                acc = acc.wrapping_add(entry.wrapping_mul(*value));
            }
            out.push(acc.rem_mod(modulus));
        }
        Ok(out)
    }
}
