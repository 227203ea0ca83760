//! Multiply-reduce strategies and scalar modular operations.
//!
//! Multiplying two modulus-range integers needs a product twice as wide as
//! the operands before it can be reduced. [MulReduce] abstracts how that
//! double-width step is performed so the rest of the crate can be generic
//! over it; all strategies return identical results for identical inputs.

use crypto_bigint::{Encoding, U64};
use std::fmt::Debug;

/// A strategy for computing `a * b mod modulus` without overflow.
///
/// Operands must already be reduced into `[0, modulus)`. Every
/// implementation is a pure function of `(a, b, modulus)` and all
/// implementations agree on every input, so callers may pick whichever
/// fits their platform without affecting results.
pub trait MulReduce:
    Clone + Copy + Debug + Default + PartialEq + Eq + PartialOrd + Ord + Send + Sync + 'static
{
    /// Computes `a * b mod modulus` exactly.
    fn mul_mod(a: u64, b: u64, modulus: u64) -> u64;
}

/// Multiply-reduce through the native double-width integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct NativeWide;

impl MulReduce for NativeWide {
    fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
        let product = u128::from(a) * u128::from(b);
        (product % u128::from(modulus)) as u64
    }
}

/// Multiply-reduce emulated with half-width arithmetic.
///
/// Builds the 128-bit product from four 32x32 partial products with carry
/// propagation and reduces it by binary long division, never touching a
/// 128-bit integer. Slower than [NativeWide], but usable on targets or in
/// contexts where no double-width type exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SplitWide;

impl MulReduce for SplitWide {
    fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
        let (hi, lo) = wide_product(a, b);
        rem_wide(hi, lo, modulus)
    }
}

/// Multiply-reduce through `crypto-bigint`'s wide multiply and remainder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct BigintWide;

impl MulReduce for BigintWide {
    fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
        let product = U64::from_u64(a).mul_wide(&U64::from_u64(b));
        let remainder = U64::const_rem_wide(product, &U64::from_u64(modulus)).0;
        u64::from_le_bytes(remainder.to_le_bytes())
    }
}

/// Exact 128-bit product of two u64 values as a `(hi, lo)` pair, computed
/// from 32-bit halves.
fn wide_product(a: u64, b: u64) -> (u64, u64) {
    let (a_hi, a_lo) = (a >> 32, a & 0xffff_ffff);
    let (b_hi, b_lo) = (b >> 32, b & 0xffff_ffff);
    let ll = a_lo * b_lo;
    let lh = a_lo * b_hi;
    let hl = a_hi * b_lo;
    let hh = a_hi * b_hi;
    // The middle terms can carry past 64 bits when summed.
    let (mid, carry_one) = lh.overflowing_add(hl);
    let (mid, carry_two) = mid.overflowing_add(ll >> 32);
    let carry = u64::from(carry_one) + u64::from(carry_two);
    let lo = (mid << 32) | (ll & 0xffff_ffff);
    let hi = hh + (mid >> 32) + (carry << 32);
    (hi, lo)
}

/// Reduces a 128-bit `(hi, lo)` quantity modulo `modulus` by shift-subtract
/// long division.
///
/// The running remainder stays below `modulus`, so doubling it can exceed
/// 64 bits only when `modulus > 2^63`; the overflow flag covers that case
/// and a single subtraction always brings the value back into range.
fn rem_wide(hi: u64, lo: u64, modulus: u64) -> u64 {
    let mut remainder = 0u64;
    for index in (0..128).rev() {
        let bit = if index >= 64 { (hi >> (index - 64)) & 1 } else { (lo >> index) & 1 };
        let overflow = remainder >> 63;
        let doubled = (remainder << 1) | bit;
        remainder =
            if overflow == 1 || doubled >= modulus { doubled.wrapping_sub(modulus) } else { doubled };
    }
    remainder
}

/// Computes `a + b mod modulus` for reduced operands, correct for any
/// modulus up to `u64::MAX`.
pub fn add_mod(a: u64, b: u64, modulus: u64) -> u64 {
    let (sum, overflow) = a.overflowing_add(b);
    if overflow || sum >= modulus { sum.wrapping_sub(modulus) } else { sum }
}

/// Computes `a - b mod modulus` for reduced operands.
pub fn sub_mod(a: u64, b: u64, modulus: u64) -> u64 {
    if a >= b { a - b } else { a.wrapping_sub(b).wrapping_add(modulus) }
}

/// Computes `base ^ exponent mod modulus` by square-and-multiply.
pub fn pow_mod<W: MulReduce>(base: u64, exponent: u64, modulus: u64) -> u64 {
    let mut base = base % modulus;
    let mut exponent = exponent;
    let mut result = 1 % modulus;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = W::mul_mod(result, base, modulus);
        }
        base = W::mul_mod(base, base, modulus);
        exponent >>= 1;
    }
    result
}

/// Computes the multiplicative inverse of `value` modulo a prime, via
/// Fermat's little theorem. `value` must not be divisible by the modulus.
pub fn inv_mod<W: MulReduce>(value: u64, modulus: u64) -> u64 {
    pow_mod::<W>(value, modulus - 2, modulus)
}

const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Deterministic Miller-Rabin primality test for u64 values.
///
/// The witness set above is sufficient for every value below 2^64.
pub fn is_prime<W: MulReduce>(candidate: u64) -> bool {
    if candidate < 2 {
        return false;
    }
    for &witness in &WITNESSES {
        if candidate % witness == 0 {
            return candidate == witness;
        }
    }
    let odd_part = (candidate - 1) >> (candidate - 1).trailing_zeros();
    let squarings = (candidate - 1).trailing_zeros();
    'witness: for &witness in &WITNESSES {
        let mut probe = pow_mod::<W>(witness, odd_part, candidate);
        if probe == 1 || probe == candidate - 1 {
            continue;
        }
        for _ in 1..squarings {
            probe = W::mul_mod(probe, probe, candidate);
            if probe == candidate - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
