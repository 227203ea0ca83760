//! Binomial coefficients for unrestricted arguments, via Lucas' theorem.

use super::{BinomialError, BinomialTable};
use crate::modular::{inv_mod, is_prime, MulReduce, NativeWide};

// Digits at or above this bound skip the precomputed table and use the
// multiplicative fallback.
const DIGIT_TABLE_LIMIT: u64 = 1 << 20;

/// Binomial coefficients `C(n, m) mod p` for a prime `p`, with no upper
/// bound on `n` and `m` below the query domain itself.
///
/// Lucas' theorem reduces the coefficient to a product over base-`p`
/// digits: `C(n, m) = prod C(n_i, m_i) mod p`, zero as soon as any digit
/// of `m` exceeds the matching digit of `n`. Digits are answered from an
/// embedded factorial table when they fit it and from the exact
/// multiplicative formula otherwise, so huge prime moduli work without an
/// O(p) table. Queries cost O(log_p n) digit coefficients.
///
/// ```
/// use modmath_lib::comb::LucasBinomial;
///
/// # fn main() -> anyhow::Result<()> {
/// let moder: LucasBinomial = LucasBinomial::new(13)?;
/// assert_eq!(moder.binomial(10, 3), 3);
/// // C(14, 5) = 2002 = 13 * 154, so the coefficient vanishes mod 13.
/// assert_eq!(moder.binomial(14, 5), 0);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct LucasBinomial<W: MulReduce = NativeWide> {
    modulus: u64,
    digit_table: BinomialTable<W>,
}

impl<W: MulReduce> LucasBinomial<W> {
    /// Builds an engine for a prime modulus.
    pub fn new(modulus: u64) -> Result<Self, BinomialError> {
        if modulus > i64::MAX as u64 {
            return Err(BinomialError::ModulusTooLarge(modulus));
        }
        if !is_prime::<W>(modulus) {
            return Err(BinomialError::NotPrime(modulus));
        }
        Ok(Self { modulus, digit_table: BinomialTable::with_limit(modulus, DIGIT_TABLE_LIMIT) })
    }

    /// The modulus queries are answered under.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Computes `C(n, m) mod p`.
    ///
    /// Out-of-domain arguments (`m < 0` or `m > n`) are a zero coefficient,
    /// not an error.
    pub fn binomial(&self, n: i64, m: i64) -> u64 {
        if m < 0 || m > n {
            return 0;
        }
        let modulus = self.modulus as i64;
        let mut n = n;
        let mut m = m;
        let mut result = 1;
        while n > 0 {
            let (digit_n, digit_m) = (n % modulus, m % modulus);
            if digit_m > digit_n {
                return 0;
            }
            result = W::mul_mod(result, self.digit_binomial(digit_n as u64, digit_m as u64), self.modulus);
            n /= modulus;
            m /= modulus;
        }
        result
    }

    fn digit_binomial(&self, n: u64, m: u64) -> u64 {
        if n < self.digit_table.table_len() as u64 {
            return self.digit_table.binomial(n as i64, m as i64);
        }
        binomial_direct::<W>(n, m, self.modulus)
    }
}

// Exact C(n, m) mod a prime, by the prefix-product formula:
// prod (n - m + i) / i for i in 1..=m, with a single Fermat inverse at the
// end. Requires n < modulus; costs O(min(m, n - m)) multiplications.
fn binomial_direct<W: MulReduce>(n: u64, m: u64, modulus: u64) -> u64 {
    let m = m.min(n - m);
    let mut numerator = 1;
    let mut denominator = 1;
    for i in 1..=m {
        numerator = W::mul_mod(numerator, n - m + i, modulus);
        denominator = W::mul_mod(denominator, i, modulus);
    }
    W::mul_mod(numerator, inv_mod::<W>(denominator, modulus), modulus)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rstest::rstest;

    fn make_engine(modulus: u64) -> LucasBinomial {
        LucasBinomial::new(modulus).unwrap()
    }

    #[test]
    fn agrees_with_table_engine() {
        let modulus = 10007;
        let table: BinomialTable = BinomialTable::new(modulus).unwrap();
        let lucas = make_engine(modulus);
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..10000 {
            let n = rng.gen_range(0..modulus as i64);
            let m = rng.gen_range(0..modulus as i64);
            assert_eq!(lucas.binomial(n, m), table.binomial(n, m), "C({n}, {m}) mod {modulus}");
        }
    }

    #[rstest]
    #[case(3, 5)]
    #[case(3, -1)]
    #[case(-2, -3)]
    #[case(i64::MAX - 1, i64::MAX)]
    fn out_of_domain_is_zero(#[case] n: i64, #[case] m: i64) {
        assert_eq!(make_engine(13).binomial(n, m), 0);
    }

    #[rstest]
    #[case(10, 3, 3)]
    // C(14, 5) = 2002 = 13 * 154.
    #[case(14, 5, 0)]
    #[case(14, 13, 1)]
    #[case(0, 0, 1)]
    fn binomials_mod_13(#[case] n: i64, #[case] m: i64, #[case] expected: u64) {
        assert_eq!(make_engine(13).binomial(n, m), expected);
    }

    #[test]
    fn multi_digit_identities() {
        let engine = make_engine(10007);
        let n = 10_000_000_000;
        assert_eq!(engine.binomial(n, 0), 1);
        assert_eq!(engine.binomial(n, n), 1);
        assert_eq!(engine.binomial(n, 1), (n % 10007) as u64);
    }

    #[test]
    fn direct_formula_agrees_with_table() {
        let modulus = 10007;
        let table: BinomialTable = BinomialTable::new(modulus).unwrap();
        let mut rng = StdRng::seed_from_u64(19);
        for _ in 0..500 {
            let n = rng.gen_range(0..modulus);
            let m = rng.gen_range(0..=n);
            assert_eq!(
                binomial_direct::<crate::modular::NativeWide>(n, m, modulus),
                table.binomial(n as i64, m as i64),
                "C({n}, {m}) mod {modulus}"
            );
        }
    }

    #[test]
    fn digits_beyond_embedded_table() {
        // Prime just above the embedded table bound: digits in
        // [2^20, 1048583) take the multiplicative fallback.
        let modulus = 1048583;
        let engine = make_engine(modulus);
        let full_table: BinomialTable = BinomialTable::new(modulus).unwrap();
        assert!(engine.digit_table.table_len() < modulus as usize);
        let n = modulus as i64 - 1;
        // C(p - 1, k) is (-1)^k mod p.
        assert_eq!(engine.binomial(n, 524291), modulus - 1);
        assert_eq!(engine.binomial(n, 2), full_table.binomial(n, 2));
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..10 {
            let n = rng.gen_range((1 << 20)..modulus as i64);
            let m = rng.gen_range(0..=n);
            assert_eq!(engine.binomial(n, m), full_table.binomial(n, m), "C({n}, {m}) mod {modulus}");
        }
    }

    #[test]
    fn construction_is_deterministic() {
        let first = make_engine(10007);
        let second = make_engine(10007);
        let mut rng = StdRng::seed_from_u64(29);
        for _ in 0..100 {
            let n = rng.gen_range(0..1 << 40);
            let m = rng.gen_range(0..1 << 40);
            assert_eq!(first.binomial(n, m), second.binomial(n, m));
        }
    }

    #[rstest]
    #[case::composite(10006)]
    #[case::carmichael(561)]
    fn composite_modulus_rejected(#[case] modulus: u64) {
        let result = LucasBinomial::<crate::modular::NativeWide>::new(modulus);
        assert_eq!(result.err(), Some(BinomialError::NotPrime(modulus)));
    }

    #[test]
    fn oversized_modulus_rejected() {
        let modulus = 18446744072637906947;
        let result = LucasBinomial::<crate::modular::NativeWide>::new(modulus);
        assert_eq!(result.err(), Some(BinomialError::ModulusTooLarge(modulus)));
    }

    // A single Lucas digit of ~3.3e10 runs the multiplicative fallback end
    // to end; minutes of multiplies even on an optimized build.
    #[test]
    #[ignore = "large fixture, runs for minutes"]
    fn huge_prime_fixture() {
        let engine = make_engine(99999999907);
        assert_eq!(engine.binomial(66666666604, 33333333302), 99999410307);
    }
}
