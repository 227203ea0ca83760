//! Factorial-table binomial coefficients.

use crate::modular::{inv_mod, is_prime, MulReduce, NativeWide};
use std::marker::PhantomData;
use thiserror::Error;

/// Binomial coefficients `C(n, m) mod p` for a prime `p`, answered from
/// precomputed factorial tables.
///
/// Construction costs O(p) time and memory, so this engine is meant for
/// moduli up to a few million; queries are O(1). Arguments must stay below
/// the modulus — [LucasBinomial] lifts that restriction at O(log_p n) cost
/// per query.
///
/// ```
/// use modmath_lib::comb::BinomialTable;
///
/// # fn main() -> anyhow::Result<()> {
/// let table: BinomialTable = BinomialTable::new(13)?;
/// assert_eq!(table.binomial(10, 3), 3);
/// assert_eq!(table.binomial(10, 11), 0);
/// # Ok(())
/// # }
/// ```
///
/// [LucasBinomial]: crate::comb::LucasBinomial
#[derive(Clone, Debug)]
pub struct BinomialTable<W: MulReduce = NativeWide> {
    modulus: u64,
    factorials: Vec<u64>,
    inverse_factorials: Vec<u64>,
    _strategy: PhantomData<W>,
}

impl<W: MulReduce> BinomialTable<W> {
    /// Builds the factorial tables for a prime modulus.
    ///
    /// The modulus is validated up front: combinatorial queries against a
    /// composite or oversized modulus are a configuration error, not a
    /// query-time one.
    pub fn new(modulus: u64) -> Result<Self, BinomialError> {
        if modulus > i64::MAX as u64 {
            return Err(BinomialError::ModulusTooLarge(modulus));
        }
        if !is_prime::<W>(modulus) {
            return Err(BinomialError::NotPrime(modulus));
        }
        Ok(Self::with_limit(modulus, modulus))
    }

    // Builds tables covering `[0, min(modulus, limit))`. The modulus must
    // already be validated as prime.
    #[allow(clippy::indexing_slicing)]
    pub(crate) fn with_limit(modulus: u64, limit: u64) -> Self {
        let len = modulus.min(limit) as usize;
        let mut factorials = vec![1u64; len];
        for i in 1..len {
            factorials[i] = W::mul_mod(factorials[i - 1], i as u64, modulus);
        }
        let mut inverse_factorials = vec![1u64; len];
        inverse_factorials[len - 1] = inv_mod::<W>(factorials[len - 1], modulus);
        for i in (1..len).rev() {
            inverse_factorials[i - 1] = W::mul_mod(inverse_factorials[i], i as u64, modulus);
        }
        Self { modulus, factorials, inverse_factorials, _strategy: PhantomData }
    }

    /// The modulus the tables were built for.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub(crate) fn table_len(&self) -> usize {
        self.factorials.len()
    }

    /// Computes `C(n, m) mod p`.
    ///
    /// Out-of-domain arguments (`m < 0` or `m > n`) are a zero coefficient,
    /// not an error. `n` must be below the modulus; larger arguments are a
    /// contract violation and fail fast.
    #[allow(clippy::indexing_slicing)]
    pub fn binomial(&self, n: i64, m: i64) -> u64 {
        if m < 0 || m > n {
            return 0;
        }
        let (n, m) = (n as usize, m as usize);
        assert!(
            n < self.factorials.len(),
            "argument {n} is outside the table for modulus {}; use LucasBinomial for n >= modulus",
            self.modulus
        );
        let product = W::mul_mod(self.factorials[n], self.inverse_factorials[m], self.modulus);
        W::mul_mod(product, self.inverse_factorials[n - m], self.modulus)
    }
}

/// An invalid modulus for a combinatorial engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BinomialError {
    /// The modulus is not a prime number.
    #[error("modulus {0} is not prime")]
    NotPrime(u64),

    /// The modulus does not fit the signed query domain.
    #[error("modulus {0} does not fit a signed 64 bit argument")]
    ModulusTooLarge(u64),
}
